//! Expression AST nodes for miniC
//! 
//! An expression is a term, a function call, or expressions combined with
//! operators. Expressions may also stand alone as statements.

use super::ops::{BinaryOp, RelOp, UnaryOp};
use crate::printer::{display_via_render, Printer, Render};
use minic_common::AstResult;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expression {
    /// Variable term (eg. the "a" in "b = 10 + a * 2.1;")
    Variable { name: String },

    IntLiteral(i64),

    FloatLiteral(f64),

    BoolLiteral(bool),

    /// Relational expression (eg. "10 > 2")
    Relational {
        op: RelOp,
        lhs: Box<Expression>,
        rhs: Box<Expression>,
    },

    /// Binary expression (eg. "10 + 2")
    Binary {
        op: BinaryOp,
        lhs: Box<Expression>,
        rhs: Box<Expression>,
    },

    /// Unary expression (eg. "-10")
    Unary {
        op: UnaryOp,
        operand: Box<Expression>,
    },

    /// Function call; `None` argument means a zero-argument call
    Call {
        name: String,
        argument: Option<Box<Expression>>,
    },
}

impl Expression {
    pub fn var(name: impl Into<String>) -> Self {
        Expression::Variable { name: name.into() }
    }

    pub fn int(value: i64) -> Self {
        Expression::IntLiteral(value)
    }

    pub fn float(value: f64) -> Self {
        Expression::FloatLiteral(value)
    }

    pub fn bool(value: bool) -> Self {
        Expression::BoolLiteral(value)
    }

    pub fn relational(lhs: Expression, op: RelOp, rhs: Expression) -> Self {
        Expression::Relational {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    pub fn binary(lhs: Expression, op: BinaryOp, rhs: Expression) -> Self {
        Expression::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    pub fn unary(op: UnaryOp, operand: Expression) -> Self {
        Expression::Unary {
            op,
            operand: Box::new(operand),
        }
    }

    pub fn call(name: impl Into<String>, argument: Option<Expression>) -> Self {
        Expression::Call {
            name: name.into(),
            argument: argument.map(Box::new),
        }
    }

    /// Check if this expression is a literal term
    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            Expression::IntLiteral(_) | Expression::FloatLiteral(_) | Expression::BoolLiteral(_)
        )
    }
}

impl Render for Expression {
    fn render(&self, printer: &mut Printer<'_>, level: usize) -> AstResult<()> {
        match self {
            Expression::Variable { name } => printer.line(level, format_args!("Var. {}", name)),
            Expression::IntLiteral(value) => {
                printer.line(level, format_args!("IntLiteral. {}", value))
            }
            Expression::FloatLiteral(value) => {
                printer.line(level, format_args!("FloatLiteral. {}", float_repr(*value)))
            }
            Expression::BoolLiteral(value) => {
                printer.line(level, format_args!("BoolLiteral. {}", value))
            }
            Expression::Relational { op, lhs, rhs } => {
                render_operands(printer, level, "RExpr", op, lhs, rhs)
            }
            Expression::Binary { op, lhs, rhs } => {
                render_operands(printer, level, "BExpr", op, lhs, rhs)
            }
            Expression::Unary { op, operand } => {
                printer.line(level, format_args!("UExpr. {}, expression =", op))?;
                operand.render(printer, level + 1)
            }
            Expression::Call { name, argument } => match argument {
                Some(argument) => {
                    printer.line(level, format_args!("Call. {}, parameter =", name))?;
                    argument.render(printer, level + 1)
                }
                None => printer.line(level, format_args!("Call. {}", name)),
            },
        }
    }
}

/// Shortest round-trip spelling of a float. Plain values keep a fractional
/// part ("2.0"); exponents carry a sign and at least two digits ("1e+16",
/// "2.5e-07").
fn float_repr(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    // Debug switches to exponent form outside 1e-4 <= |x| < 1e16
    let repr = format!("{:?}", value);
    match repr.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => repr,
    }
}

fn render_operands(
    printer: &mut Printer<'_>,
    level: usize,
    label: &str,
    op: &dyn std::fmt::Display,
    lhs: &Expression,
    rhs: &Expression,
) -> AstResult<()> {
    printer.line(level, format_args!("{}. {}", label, op))?;
    printer.line(level, format_args!("({}) LHS =", label))?;
    lhs.render(printer, level + 1)?;
    printer.line(level, format_args!("({}) RHS =", label))?;
    rhs.render(printer, level + 1)
}

display_via_render!(Expression);
