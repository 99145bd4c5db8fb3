//! miniC AST
//! 
//! This crate provides the tree shared between the miniC parser and the phases
//! that consume it:
//! - AST: expression, statement, declaration, and compilation-unit nodes
//! - Printer: the indented textual form of a tree, used for inspection and tests

pub mod ast;
pub mod printer;

pub use ast::{
    Assignment, BinaryOp, Block, CompilationUnit, Declaration, Expression, FuncDecl,
    FunctionDefinition, IfStatement, RelOp, Statement, UnaryOp, VarDecl,
};
pub use printer::{FmtSink, IoSink, LineSink, Printer, Render, RenderExt};
pub use minic_common::{AstError, AstResult, DataType, RenderConfig, INDENT_STR};
