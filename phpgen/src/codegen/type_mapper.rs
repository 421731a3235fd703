//! MySQL to PHP type mapping

use std::fmt;

/// PHP type used in `@property` annotations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhpType {
    Int,
    Float,
    String,
}

impl PhpType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PhpType::Int => "int",
            PhpType::Float => "float",
            PhpType::String => "string",
        }
    }
}

impl fmt::Display for PhpType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a raw `DATA_TYPE` value. Unknown types fall back to string.
pub fn classify(raw_type: &str) -> PhpType {
    match raw_type {
        "tinyint" | "smallint" | "int" | "bigint" => PhpType::Int,
        "decimal" | "float" => PhpType::Float,
        _ => PhpType::String,
    }
}
