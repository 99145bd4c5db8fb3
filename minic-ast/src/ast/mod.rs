//! Abstract Syntax Tree definitions for miniC
//! 
//! This module defines the AST nodes that represent miniC language constructs.
//! Trees are built by an external parser and consumed by later phases; once
//! built they are only read. Each node renders itself through
//! [`crate::printer::Render`].

pub mod ops;
pub mod expressions;
pub mod declarations;
pub mod statements;

// Re-export commonly used types at module level
pub use ops::{BinaryOp, RelOp, UnaryOp};
pub use expressions::Expression;
pub use declarations::{Declaration, FuncDecl, VarDecl};
pub use statements::{
    Assignment, Block, CompilationUnit, FunctionDefinition, IfStatement, Statement,
};
