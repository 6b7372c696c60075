use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

use super::{Func, FuncMapError, FuncRegistry, Namespace, Value};

static GLOBAL: OnceLock<Mutex<FuncMap>> = OnceLock::new();

/// The process-wide registry template engines resolve namespaces from.
pub fn global() -> MutexGuard<'static, FuncMap> {
    GLOBAL
        .get_or_init(|| Mutex::new(FuncMap::new()))
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}

#[derive(Debug, Default)]
pub struct FuncMap {
    funcs: HashMap<String, Func>,
}

impl FuncMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.funcs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.funcs.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Func> {
        self.funcs.get(name)
    }

    /// Resolve `name` to its namespace object, running the accessor.
    pub fn namespace(&self, name: &str) -> Option<&'static dyn Namespace> {
        self.get(name).map(Func::namespace)
    }

    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.funcs.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// `namespace.func args...` as a template would write it.
    pub fn call(&self, namespace: &str, func: &str, args: &[Value]) -> Result<Value, FuncMapError> {
        let ns = self
            .namespace(namespace)
            .ok_or_else(|| FuncMapError::UnknownNamespace(namespace.to_string()))?;

        tracing::debug!(namespace, func, args = args.len(), "template call");
        ns.call(func, args)
    }
}

impl FuncRegistry for FuncMap {
    fn add_func(&mut self, func: Func) -> Result<(), FuncMapError> {
        if self.funcs.contains_key(&func.name) {
            tracing::warn!(namespace = %func.name, "duplicate namespace registration rejected");
            return Err(FuncMapError::DuplicateNamespace(func.name));
        }

        tracing::debug!(namespace = %func.name, funcs = func.funcs.len(), "namespace registered");
        self.funcs.insert(func.name.clone(), func);
        Ok(())
    }
}
