//! Statement AST nodes for miniC
//! 
//! This module defines statement nodes, function definitions, and the
//! compilation unit at the root of every tree.

use super::declarations::{Declaration, FuncDecl, VarDecl};
use super::expressions::Expression;
use crate::printer::{display_via_render, Printer, Render};
use log::debug;
use minic_common::{AstResult, DataType};
use serde::{Deserialize, Serialize};

/// A statement is (informally) anything that could sit on its own in a block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Statement {
    /// Assignment (eg. "a = 1;")
    Assignment(Assignment),

    /// Nested block
    Block(Block),

    /// Return statement; `None` for a bare "return;"
    Return(Option<Expression>),

    /// While loop (eg. "while (1 == 1) { 1; }")
    While {
        condition: Expression,
        body: Block,
    },

    If(IfStatement),

    /// Variable or function declaration
    Declaration(Declaration),

    /// Expression statement (eg. "exit(1);")
    Expression(Expression),

    /// Empty statement (just semicolon)
    Empty,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub target: String,
    pub value: Expression,
}

/// A block (eg. "{ int a; a = 10 + b; exit(1); }")
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub statements: Vec<Statement>,
}

/// If statement. The else body is always present: a missing one becomes an
/// empty block when the node is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IfStatement {
    pub condition: Expression,
    pub then_body: Block,
    #[serde(default)]
    pub else_body: Block,
}

/// Function definition (eg. "int the_identity_fn(int n) { return n; }")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionDefinition {
    pub return_type: DataType,
    pub name: String,
    pub param_type: DataType,
    pub param_name: String, // Empty when the parameter is unnamed
    pub body: Block,
}

/// Top-level compilation unit
///
/// Source order is declarations, then global assignments, then function
/// definitions. Nothing here checks that; the three lists are independent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompilationUnit {
    pub declarations: Vec<Declaration>,
    pub assignments: Vec<Assignment>,
    pub functions: Vec<FunctionDefinition>,
}

impl Statement {
    pub fn ret(value: Option<Expression>) -> Self {
        Statement::Return(value)
    }

    pub fn while_loop(condition: Expression, body: Block) -> Self {
        Statement::While { condition, body }
    }

    pub fn if_else(condition: Expression, then_body: Block, else_body: Option<Block>) -> Self {
        Statement::If(IfStatement::new(condition, then_body, else_body))
    }
}

impl Assignment {
    pub fn new(target: impl Into<String>, value: Expression) -> Self {
        Self {
            target: target.into(),
            value,
        }
    }
}

impl Block {
    pub fn new(statements: Vec<Statement>) -> Self {
        Self { statements }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }
}

impl IfStatement {
    pub fn new(condition: Expression, then_body: Block, else_body: Option<Block>) -> Self {
        Self {
            condition,
            then_body,
            else_body: else_body.unwrap_or_default(),
        }
    }
}

impl FunctionDefinition {
    pub fn new(
        return_type: DataType,
        name: impl Into<String>,
        param_type: DataType,
        param_name: impl Into<String>,
        body: Block,
    ) -> Self {
        Self {
            return_type,
            name: name.into(),
            param_type,
            param_name: param_name.into(),
            body,
        }
    }
}

impl CompilationUnit {
    pub fn new(
        declarations: Vec<Declaration>,
        assignments: Vec<Assignment>,
        functions: Vec<FunctionDefinition>,
    ) -> Self {
        Self {
            declarations,
            assignments,
            functions,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty() && self.assignments.is_empty() && self.functions.is_empty()
    }
}

impl From<Assignment> for Statement {
    fn from(assignment: Assignment) -> Self {
        Statement::Assignment(assignment)
    }
}

impl From<Block> for Statement {
    fn from(block: Block) -> Self {
        Statement::Block(block)
    }
}

impl From<IfStatement> for Statement {
    fn from(stmt: IfStatement) -> Self {
        Statement::If(stmt)
    }
}

impl From<Declaration> for Statement {
    fn from(decl: Declaration) -> Self {
        Statement::Declaration(decl)
    }
}

impl From<VarDecl> for Statement {
    fn from(decl: VarDecl) -> Self {
        Statement::Declaration(Declaration::Variable(decl))
    }
}

impl From<FuncDecl> for Statement {
    fn from(decl: FuncDecl) -> Self {
        Statement::Declaration(Declaration::Function(decl))
    }
}

impl From<Expression> for Statement {
    fn from(expr: Expression) -> Self {
        Statement::Expression(expr)
    }
}

impl Render for Assignment {
    fn render(&self, printer: &mut Printer<'_>, level: usize) -> AstResult<()> {
        printer.line(level, format_args!("Asgn. {} =", self.target))?;
        self.value.render(printer, level + 1)
    }
}

impl Render for Block {
    fn render(&self, printer: &mut Printer<'_>, level: usize) -> AstResult<()> {
        printer.line(level, "Block.")?;
        for stmt in &self.statements {
            stmt.render(printer, level + 1)?;
        }
        Ok(())
    }
}

impl Render for IfStatement {
    fn render(&self, printer: &mut Printer<'_>, level: usize) -> AstResult<()> {
        printer.line(level, "If.")?;
        printer.line(level, "(If) condition =")?;
        self.condition.render(printer, level + 1)?;
        printer.line(level, "(If) if_body =")?;
        self.then_body.render(printer, level + 1)?;
        printer.line(level, "(If) else_body =")?;
        self.else_body.render(printer, level + 1)
    }
}

impl Render for Statement {
    fn render(&self, printer: &mut Printer<'_>, level: usize) -> AstResult<()> {
        match self {
            Statement::Assignment(assignment) => assignment.render(printer, level),
            Statement::Block(block) => block.render(printer, level),
            Statement::Return(Some(value)) => {
                printer.line(level, "Ret. expression =")?;
                value.render(printer, level + 1)
            }
            Statement::Return(None) => printer.line(level, "Ret."),
            Statement::While { condition, body } => {
                printer.line(level, "While.")?;
                printer.line(level, "(While) condition =")?;
                condition.render(printer, level + 1)?;
                printer.line(level, "(While) body =")?;
                body.render(printer, level + 1)
            }
            Statement::If(stmt) => stmt.render(printer, level),
            Statement::Declaration(decl) => decl.render(printer, level),
            Statement::Expression(expr) => expr.render(printer, level),
            Statement::Empty => printer.line(level, "EmptyStmt."),
        }
    }
}

impl Render for FunctionDefinition {
    fn render(&self, printer: &mut Printer<'_>, level: usize) -> AstResult<()> {
        printer.line(
            level,
            format_args!(
                "FuncDef. {} {}({} {})",
                self.return_type, self.name, self.param_type, self.param_name
            ),
        )?;
        self.body.render(printer, level + 1)
    }
}

impl Render for CompilationUnit {
    fn render(&self, printer: &mut Printer<'_>, level: usize) -> AstResult<()> {
        debug!(
            "Rendering compilation unit: {} declarations, {} assignments, {} functions",
            self.declarations.len(),
            self.assignments.len(),
            self.functions.len()
        );

        printer.line(level, "Root.")?;

        // Assignments come first in the output even though they follow the
        // declarations in source.
        if !self.assignments.is_empty() {
            printer.line(level, "Assignments:")?;
            for assignment in &self.assignments {
                assignment.render(printer, level + 1)?;
            }
        }
        if !self.declarations.is_empty() {
            printer.line(level, "Declarations:")?;
            for decl in &self.declarations {
                decl.render(printer, level + 1)?;
            }
        }
        if !self.functions.is_empty() {
            printer.line(level, "Functions:")?;
            for func in &self.functions {
                func.render(printer, level + 1)?;
            }
        }
        Ok(())
    }
}

display_via_render!(Statement, Assignment, Block, IfStatement, FunctionDefinition, CompilationUnit);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{BinaryOp, RelOp};
    use crate::printer::RenderExt;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_block() {
        assert_eq!(Block::empty().render_lines(0).unwrap(), ["Block."]);
    }

    #[test]
    fn test_return() {
        assert_eq!(Statement::ret(None).render_lines(0).unwrap(), ["Ret."]);
        assert_eq!(
            Statement::ret(Some(Expression::int(5))).render_lines(0).unwrap(),
            ["Ret. expression =", "|   IntLiteral. 5"]
        );
    }

    #[test]
    fn test_assignment() {
        let asgn = Assignment::new(
            "b",
            Expression::binary(Expression::int(10), BinaryOp::Sub, Expression::var("a")),
        );
        assert_eq!(
            asgn.to_string(),
            "Asgn. b =\n\
             |   BExpr. SUB\n\
             |   (BExpr) LHS =\n\
             |   |   IntLiteral. 10\n\
             |   (BExpr) RHS =\n\
             |   |   Var. a\n"
        );
    }

    #[test]
    fn test_block_renders_statements_in_order() {
        let block = Block::new(vec![
            VarDecl::new(false, DataType::Int, "a").into(),
            Assignment::new("a", Expression::int(10)).into(),
            Expression::call("exit", Some(Expression::int(1))).into(),
            Statement::Empty,
            Statement::ret(Some(Expression::var("a"))),
        ]);
        assert_eq!(
            block.render_lines(0).unwrap(),
            [
                "Block.",
                "|   VarDecl. INT_T a",
                "|   Asgn. a =",
                "|   |   IntLiteral. 10",
                "|   Call. exit, parameter =",
                "|   |   IntLiteral. 1",
                "|   EmptyStmt.",
                "|   Ret. expression =",
                "|   |   Var. a",
            ]
        );
    }

    #[test]
    fn test_while() {
        let stmt = Statement::while_loop(
            Expression::relational(Expression::int(1), RelOp::Eq, Expression::int(1)),
            Block::new(vec![Expression::int(1).into()]),
        );
        assert_eq!(
            stmt.render_lines(0).unwrap(),
            [
                "While.",
                "(While) condition =",
                "|   RExpr. EQ",
                "|   (RExpr) LHS =",
                "|   |   IntLiteral. 1",
                "|   (RExpr) RHS =",
                "|   |   IntLiteral. 1",
                "(While) body =",
                "|   Block.",
                "|   |   IntLiteral. 1",
            ]
        );
    }

    #[test]
    fn test_if_without_else_gets_empty_block() {
        let stmt = IfStatement::new(
            Expression::bool(true),
            Block::new(vec![Statement::ret(None)]),
            None,
        );
        assert_eq!(stmt.else_body, Block::empty());
        assert_eq!(
            stmt.render_lines(0).unwrap(),
            [
                "If.",
                "(If) condition =",
                "|   BoolLiteral. true",
                "(If) if_body =",
                "|   Block.",
                "|   |   Ret.",
                "(If) else_body =",
                "|   Block.",
            ]
        );
    }

    #[test]
    fn test_if_with_else() {
        let stmt = Statement::if_else(
            Expression::var("ok"),
            Block::empty(),
            Some(Block::new(vec![Statement::Empty])),
        );
        let lines = stmt.render_lines(0).unwrap();
        assert_eq!(
            lines[lines.len() - 3..].to_vec(),
            ["(If) else_body =", "|   Block.", "|   |   EmptyStmt."]
        );
    }

    #[test]
    fn test_function_definition() {
        let func = FunctionDefinition::new(
            DataType::Int,
            "the_identity_fn",
            DataType::Int,
            "n",
            Block::new(vec![Statement::ret(Some(Expression::var("n")))]),
        );
        assert_eq!(
            func.render_lines(0).unwrap(),
            [
                "FuncDef. INT_T the_identity_fn(INT_T n)",
                "|   Block.",
                "|   |   Ret. expression =",
                "|   |   |   Var. n",
            ]
        );
    }

    #[test]
    fn test_function_definition_unnamed_parameter() {
        let func = FunctionDefinition::new(DataType::Void, "tick", DataType::Void, "", Block::empty());
        assert_eq!(func.render_lines(0).unwrap(), ["FuncDef. VOID_T tick(VOID_T )", "|   Block."]);
    }

    #[test]
    fn test_empty_compilation_unit() {
        let unit = CompilationUnit::default();
        assert!(unit.is_empty());
        assert_eq!(unit.render_lines(0).unwrap(), ["Root."]);
    }
}
