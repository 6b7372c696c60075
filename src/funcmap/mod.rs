//! Catalog of template function namespaces.
//!
//! A namespace is registered once under its name together with the docs a
//! renderer shows for it. Template engines resolve the name back to the
//! namespace object and dispatch calls through [`Namespace::call`].

pub mod error;
pub mod registry;
pub mod value;

use serde::Deserialize;

pub use error::FuncMapError;
pub use registry::{FuncMap, global};
pub use value::Value;

/// A group of functions callable by name from template source.
pub trait Namespace: Send + Sync {
    fn call(&self, func: &str, args: &[Value]) -> Result<Value, FuncMapError>;
}

/// Anything a namespace can be registered into.
pub trait FuncRegistry {
    fn add_func(&mut self, func: Func) -> Result<(), FuncMapError>;
}

/// Produces the namespace object. Stored as-is so lookups stay lazy.
pub type NamespaceAccessor = fn() -> &'static dyn Namespace;

/// Documentation for one function inside a namespace.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NestedFuncDoc {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub example: Option<String>,
}

impl NestedFuncDoc {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        example: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            example,
        }
    }
}

/// Registration record for a namespace.
#[derive(Debug, Clone)]
pub struct Func {
    pub accessor: NamespaceAccessor,
    pub name: String,
    pub short: String,
    pub long: String,
    pub funcs: Vec<NestedFuncDoc>,
}

impl Func {
    pub fn new(
        accessor: NamespaceAccessor,
        name: impl Into<String>,
        short: impl Into<String>,
        long: impl Into<String>,
        funcs: Vec<NestedFuncDoc>,
    ) -> Self {
        Self {
            accessor,
            name: name.into(),
            short: short.into(),
            long: long.into(),
            funcs,
        }
    }

    pub fn namespace(&self) -> &'static dyn Namespace {
        (self.accessor)()
    }

    pub fn nested(&self, name: &str) -> Option<&NestedFuncDoc> {
        self.funcs.iter().find(|doc| doc.name == name)
    }
}

/// Fails with [`FuncMapError::Arity`] unless exactly `expected` args were passed.
pub fn expect_args<'a>(
    func: &str,
    args: &'a [Value],
    expected: usize,
) -> Result<&'a [Value], FuncMapError> {
    if args.len() != expected {
        return Err(FuncMapError::Arity {
            func: func.to_string(),
            expected,
            got: args.len(),
        });
    }
    Ok(args)
}
