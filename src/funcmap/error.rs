use thiserror::Error;

#[derive(Debug, Error)]
pub enum FuncMapError {
    #[error("namespace already registered: {0}")]
    DuplicateNamespace(String),

    #[error("unknown namespace: {0}")]
    UnknownNamespace(String),

    #[error("unknown function: {namespace}.{func}")]
    UnknownFunction { namespace: String, func: String },

    #[error("{func}: expected {expected} arguments, got {got}")]
    Arity {
        func: String,
        expected: usize,
        got: usize,
    },

    #[error("{func}: argument {index} must be {expected}")]
    ArgType {
        func: String,
        index: usize,
        expected: &'static str,
    },

    /// The function itself rejected its input.
    #[error(transparent)]
    Func(Box<dyn std::error::Error + Send + Sync>),
}

impl FuncMapError {
    pub fn func(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Func(Box::new(err))
    }
}
