use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlsqlError {
    #[error("Unknown parameter type: {0}")]
    UnknownParameterType(String),
}

/// Direction of a procedure or function parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterDirection {
    In,
    Out,
    InOut,
}

impl ParameterDirection {
    /// Keyword padded to six columns so declarations line up.
    pub fn padded(&self) -> &'static str {
        match self {
            ParameterDirection::In => "IN    ",
            ParameterDirection::Out => "   OUT",
            ParameterDirection::InOut => "IN OUT",
        }
    }
}

impl FromStr for ParameterDirection {
    type Err = PlsqlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "IN" => Ok(ParameterDirection::In),
            "OUT" => Ok(ParameterDirection::Out),
            "IN OUT" => Ok(ParameterDirection::InOut),
            _ => Err(PlsqlError::UnknownParameterType(s.to_string())),
        }
    }
}
