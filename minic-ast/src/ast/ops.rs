//! Operator definitions for miniC
//! 
//! This module defines relational, binary, and unary operators used in
//! expressions. `Display` yields the canonical member name (`LEQ`, `ADD`, ...),
//! which is what the tree printer emits; `symbol()` gives the source spelling.

use minic_common::{AstError, AstResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Relational operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RelOp {
    Lt, Gt, Leq, Geq, Eq, Neq,
}

impl RelOp {
    pub const ALL: [RelOp; 6] = [RelOp::Lt, RelOp::Gt, RelOp::Leq, RelOp::Geq, RelOp::Eq, RelOp::Neq];

    pub fn name(&self) -> &'static str {
        match self {
            RelOp::Lt => "LT",
            RelOp::Gt => "GT",
            RelOp::Leq => "LEQ",
            RelOp::Geq => "GEQ",
            RelOp::Eq => "EQ",
            RelOp::Neq => "NEQ",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            RelOp::Lt => "<",
            RelOp::Gt => ">",
            RelOp::Leq => "<=",
            RelOp::Geq => ">=",
            RelOp::Eq => "==",
            RelOp::Neq => "!=",
        }
    }
}

/// Binary arithmetic operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BinaryOp {
    Add, Sub, Div, Mul,
}

impl BinaryOp {
    pub const ALL: [BinaryOp; 4] = [BinaryOp::Add, BinaryOp::Sub, BinaryOp::Div, BinaryOp::Mul];

    pub fn name(&self) -> &'static str {
        match self {
            BinaryOp::Add => "ADD",
            BinaryOp::Sub => "SUB",
            BinaryOp::Div => "DIV",
            BinaryOp::Mul => "MUL",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Div => "/",
            BinaryOp::Mul => "*",
        }
    }
}

/// Unary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UnaryOp {
    Pos, Neg,
}

impl UnaryOp {
    pub const ALL: [UnaryOp; 2] = [UnaryOp::Pos, UnaryOp::Neg];

    pub fn name(&self) -> &'static str {
        match self {
            UnaryOp::Pos => "POS",
            UnaryOp::Neg => "NEG",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            UnaryOp::Pos => "+",
            UnaryOp::Neg => "-",
        }
    }
}

macro_rules! canonical_name_impls {
    ($ty:ident, $kind:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.name())
            }
        }

        impl FromStr for $ty {
            type Err = AstError;

            fn from_str(s: &str) -> AstResult<Self> {
                $ty::ALL
                    .into_iter()
                    .find(|op| op.name() == s)
                    .ok_or_else(|| AstError::unknown_tag($kind, s))
            }
        }
    };
}

canonical_name_impls!(RelOp, "relational operator");
canonical_name_impls!(BinaryOp, "binary operator");
canonical_name_impls!(UnaryOp, "unary operator");
