//! The types in miniC
//! 
//! miniC has exactly four primitive types. Their canonical names (`INT_T`,
//! ...) are what the tree printer emits, so `Display` must never decorate them.

use crate::error::{AstError, AstResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataType {
    #[serde(rename = "VOID_T")]
    Void,
    #[serde(rename = "INT_T")]
    Int,
    #[serde(rename = "FLOAT_T")]
    Float,
    #[serde(rename = "BOOL_T")]
    Bool,
}

impl DataType {
    /// All members in declaration order
    pub const ALL: [DataType; 4] = [DataType::Void, DataType::Int, DataType::Float, DataType::Bool];

    /// Canonical name, as used in rendered trees
    pub fn name(&self) -> &'static str {
        match self {
            DataType::Void => "VOID_T",
            DataType::Int => "INT_T",
            DataType::Float => "FLOAT_T",
            DataType::Bool => "BOOL_T",
        }
    }

    /// Keyword spelling in miniC source
    pub fn keyword(&self) -> &'static str {
        match self {
            DataType::Void => "void",
            DataType::Int => "int",
            DataType::Float => "float",
            DataType::Bool => "bool",
        }
    }

    pub fn is_void(&self) -> bool {
        matches!(self, DataType::Void)
    }

    /// Check if this type is int or float
    pub fn is_numeric(&self) -> bool {
        matches!(self, DataType::Int | DataType::Float)
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for DataType {
    type Err = AstError;

    fn from_str(s: &str) -> AstResult<Self> {
        DataType::ALL
            .into_iter()
            .find(|ty| ty.name() == s)
            .ok_or_else(|| AstError::unknown_tag("data type", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_type_display() {
        assert_eq!(format!("{}", DataType::Void), "VOID_T");
        assert_eq!(format!("{}", DataType::Int), "INT_T");
        assert_eq!(format!("{}", DataType::Float), "FLOAT_T");
        assert_eq!(format!("{}", DataType::Bool), "BOOL_T");
    }

    #[test]
    fn test_data_type_from_name() {
        for ty in DataType::ALL {
            assert_eq!(ty.name().parse::<DataType>().unwrap(), ty);
        }
        assert!("int".parse::<DataType>().is_err());
        assert!("DataType.INT_T".parse::<DataType>().is_err());
    }

    #[test]
    fn test_data_type_serializes_as_canonical_name() {
        let json = serde_json::to_string(&DataType::Float).unwrap();
        assert_eq!(json, "\"FLOAT_T\"");
    }

    #[test]
    fn test_data_type_predicates() {
        assert!(DataType::Void.is_void());
        assert!(DataType::Int.is_numeric());
        assert!(DataType::Float.is_numeric());
        assert!(!DataType::Bool.is_numeric());
        assert_eq!(DataType::Bool.keyword(), "bool");
    }
}
