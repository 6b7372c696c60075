use std::fmt;

use super::FuncMapError;

/// Argument or result of a template function call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Str(String),
    Int(i64),
}

impl Value {
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Str(_) => "string",
            Value::Int(_) => "int",
        }
    }

    /// Borrow the string payload of argument `index` of `func`.
    pub fn as_str(&self, func: &str, index: usize) -> Result<&str, FuncMapError> {
        match self {
            Value::Str(s) => Ok(s.as_str()),
            Value::Int(_) => Err(FuncMapError::ArgType {
                func: func.to_string(),
                index,
                expected: "string",
            }),
        }
    }

    /// Integer payload of argument `index` of `func`.
    pub fn as_int(&self, func: &str, index: usize) -> Result<i64, FuncMapError> {
        match self {
            Value::Int(n) => Ok(*n),
            Value::Str(_) => Err(FuncMapError::ArgType {
                func: func.to_string(),
                index,
                expected: "int",
            }),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => f.write_str(s),
            Value::Int(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}
