//! miniC AST - Common Types and Utilities
//! 
//! This crate contains the data-type tag, error definitions, and rendering
//! configuration shared by the miniC AST and its consumers.

pub mod error;
pub mod types;
pub mod config;

pub use error::{AstError, AstResult};
pub use types::DataType;
pub use config::{RenderConfig, INDENT_STR};
