//! Error handling for the miniC AST
//! 
//! Tree construction cannot fail: required children are non-optional fields
//! and every node type implements rendering. What remains are failures at the
//! edges: parsing tag names, writing to an output sink, and configured limits.

use thiserror::Error;

/// Errors raised while naming tags or rendering trees
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AstError {
    #[error("Unknown {kind} name: {name}")]
    UnknownTagName {
        kind: &'static str,
        name: String,
    },

    #[error("Nesting depth {depth} exceeds the configured limit of {limit}")]
    DepthLimitExceeded {
        depth: usize,
        limit: usize,
    },

    #[error("IO error: {message}")]
    IoError { message: String },

    #[error("Formatting error while rendering tree")]
    FormatError,
}

pub type AstResult<T> = Result<T, AstError>;

impl AstError {
    /// Create an unknown tag name error
    pub fn unknown_tag(kind: &'static str, name: &str) -> Self {
        AstError::UnknownTagName {
            kind,
            name: name.to_string(),
        }
    }
}

/// Convert from std::io::Error
impl From<std::io::Error> for AstError {
    fn from(err: std::io::Error) -> Self {
        AstError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<std::fmt::Error> for AstError {
    fn from(_: std::fmt::Error) -> Self {
        AstError::FormatError
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_tag_message() {
        let err = AstError::unknown_tag("data type", "CHAR_T");
        assert_eq!(err.to_string(), "Unknown data type name: CHAR_T");
    }

    #[test]
    fn test_depth_limit_message() {
        let err = AstError::DepthLimitExceeded { depth: 9, limit: 8 };
        assert_eq!(
            err.to_string(),
            "Nesting depth 9 exceeds the configured limit of 8"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: AstError = io.into();
        assert_eq!(
            err,
            AstError::IoError {
                message: "pipe closed".to_string()
            }
        );
    }
}
