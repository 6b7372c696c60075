//! The `plsql` template namespace.
//!
//! Three pure helpers used by templates that generate PL/SQL packages:
//!
//! - `ParameterType dir` - `IN`, `OUT` or `IN OUT` padded to six columns
//! - `Comment text indent` - every line of `text` as an indented `-- ` comment
//! - `Separator` - a 68 character dash line between generated blocks
//!
//! Hosts call [`init`] once at startup to make the namespace visible in
//! [`funcmap::global`](crate::funcmap::global).

pub mod direction;
pub mod manifest;

use std::sync::{Once, OnceLock};

use anyhow::{Context, Result};

use crate::funcmap::{FuncMapError, FuncRegistry, Namespace, Value, expect_args, global};

pub use direction::{ParameterDirection, PlsqlError};
pub use manifest::NamespaceManifest;

pub const NAMESPACE: &str = "plsql";
pub const COMMENT_MARKER: &str = "-- ";
pub const SEPARATOR: &str = "--------------------------------------------------------------------";

/// Template names of the functions [`PlsqlFuncMap`] dispatches, in doc order.
pub const FUNCS: &[&str] = &["ParameterType", "Comment", "Separator"];

static PLSQL_NS: OnceLock<PlsqlFuncMap> = OnceLock::new();
static REGISTER: Once = Once::new();

/// The single `plsql` namespace object of this process.
pub fn plsql_ns() -> &'static PlsqlFuncMap {
    PLSQL_NS.get_or_init(|| {
        tracing::debug!("plsql namespace created");
        PlsqlFuncMap
    })
}

fn plsql_namespace() -> &'static dyn Namespace {
    plsql_ns()
}

/// Add the `plsql` namespace and its docs to `registry`.
pub fn register(registry: &mut impl FuncRegistry) -> Result<()> {
    let manifest = NamespaceManifest::load()?;
    manifest.check_funcs(FUNCS)?;

    registry
        .add_func(manifest.into_func(plsql_namespace))
        .with_context(|| format!("registering namespace {NAMESPACE}"))
}

/// Register into the global registry. Only the first call does anything.
///
/// # Panics
///
/// If registration fails, e.g. another package already claimed `plsql`.
/// Templates cannot run without their namespaces, so this is a startup error.
pub fn init() {
    REGISTER.call_once(|| {
        let registered = register(&mut *global());
        if let Err(err) = registered {
            panic!("plsql: {err:#}");
        }
        tracing::info!(namespace = NAMESPACE, "template namespace registered");
    });
}

#[derive(Debug, Default)]
pub struct PlsqlFuncMap;

impl PlsqlFuncMap {
    /// Normalize a parameter direction to its padded keyword.
    ///
    /// Any value other than `IN`, `OUT` or `IN OUT` (in any case) fails with
    /// [`PlsqlError::UnknownParameterType`]; callers are expected to abort the
    /// render rather than recover.
    pub fn parameter_type(&self, direction: &str) -> Result<&'static str, PlsqlError> {
        direction
            .parse::<ParameterDirection>()
            .map(|dir| dir.padded())
    }

    /// Prefix every line of `text` with `indent` spaces and `-- `.
    ///
    /// Lines are split on `\n` or `\r\n`. A negative `indent` counts as zero.
    /// The result never ends with a newline, and empty input gives an empty
    /// string.
    pub fn comment(&self, text: &str, indent: i64) -> String {
        let pad = " ".repeat(usize::try_from(indent).unwrap_or(0));
        let mut out = String::with_capacity(text.len() + pad.len() * 4);

        for line in text.lines() {
            out.push_str(&pad);
            out.push_str(COMMENT_MARKER);
            out.push_str(line);
            out.push('\n');
        }

        let end = out.trim_end_matches('\n').len();
        out.truncate(end);
        out
    }

    pub fn separator(&self) -> &'static str {
        SEPARATOR
    }
}

impl Namespace for PlsqlFuncMap {
    fn call(&self, func: &str, args: &[Value]) -> Result<Value, FuncMapError> {
        match func {
            "ParameterType" => {
                let args = expect_args(func, args, 1)?;
                let padded = self
                    .parameter_type(args[0].as_str(func, 0)?)
                    .map_err(FuncMapError::func)?;
                Ok(Value::from(padded))
            }
            "Comment" => {
                let args = expect_args(func, args, 2)?;
                let text = args[0].as_str(func, 0)?;
                let indent = args[1].as_int(func, 1)?;
                Ok(Value::from(self.comment(text, indent)))
            }
            "Separator" => {
                expect_args(func, args, 0)?;
                Ok(Value::from(self.separator()))
            }
            _ => Err(FuncMapError::UnknownFunction {
                namespace: NAMESPACE.to_string(),
                func: func.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::funcmap::{Func, FuncMap};

    #[derive(Default)]
    struct RecordingRegistry {
        added: Vec<Func>,
    }

    impl FuncRegistry for RecordingRegistry {
        fn add_func(&mut self, func: Func) -> Result<(), FuncMapError> {
            self.added.push(func);
            Ok(())
        }
    }

    #[test]
    fn test_parameter_type() {
        let ns = plsql_ns();
        assert_eq!(ns.parameter_type("in").unwrap(), "IN    ");
        assert_eq!(ns.parameter_type("Out").unwrap(), "   OUT");
        assert_eq!(ns.parameter_type("in OUT").unwrap(), "IN OUT");

        let err = ns.parameter_type("INOUT").unwrap_err();
        assert_eq!(err.to_string(), "Unknown parameter type: INOUT");
        assert!(ns.parameter_type("").is_err());
        assert!(ns.parameter_type("input").is_err());
    }

    #[test]
    fn test_comment() {
        let ns = plsql_ns();
        assert_eq!(ns.comment("", 0), "");
        assert_eq!(ns.comment("", 8), "");
        assert_eq!(ns.comment("hello", 0), "-- hello");
        assert_eq!(ns.comment("a\nb", 2), "  -- a\n  -- b");
        assert_eq!(ns.comment("a\nb\n", 2), ns.comment("a\nb", 2));
    }

    #[test]
    fn test_comment_line_endings() {
        let ns = plsql_ns();
        assert_eq!(ns.comment("a\r\nb\r\n", 1), " -- a\n -- b");
        assert_eq!(ns.comment("a\n\nb", 0), "-- a\n-- \n-- b");
        assert_eq!(ns.comment("a\n\n", 0), "-- a\n-- ");
        assert_eq!(ns.comment("\n", 0), "-- ");
    }

    #[test]
    fn test_comment_keeps_text_verbatim() {
        let ns = plsql_ns();
        assert_eq!(ns.comment("  x := 1;  ", 0), "--   x := 1;  ");
        assert_eq!(ns.comment("-- already", 0), "-- -- already");
    }

    #[test]
    fn test_comment_negative_indent_is_zero() {
        let ns = plsql_ns();
        assert_eq!(ns.comment("x", -3), ns.comment("x", 0));
    }

    #[test]
    fn test_separator() {
        let sep = plsql_ns().separator();
        assert_eq!(sep.len(), 68);
        assert!(sep.chars().all(|c| c == '-'));
        assert_eq!(sep, plsql_ns().separator());
    }

    #[test]
    fn test_call_by_name() {
        let ns = plsql_ns();
        assert_eq!(
            ns.call("ParameterType", &[Value::from("in")]).unwrap(),
            Value::from("IN    ")
        );
        assert_eq!(
            ns.call("Comment", &[Value::from("a\nb"), Value::from(2_i64)]).unwrap(),
            Value::from("  -- a\n  -- b")
        );
        assert_eq!(ns.call("Separator", &[]).unwrap(), Value::from(SEPARATOR));
    }

    #[test]
    fn test_call_errors() {
        let ns = plsql_ns();

        let err = ns.call("ParameterType", &[Value::from("sideways")]).unwrap_err();
        assert!(matches!(err, FuncMapError::Func(_)));
        assert_eq!(err.to_string(), "Unknown parameter type: sideways");

        assert!(matches!(
            ns.call("Comment", &[Value::from("a")]),
            Err(FuncMapError::Arity { expected: 2, got: 1, .. })
        ));
        assert!(matches!(
            ns.call("Comment", &[Value::from("a"), Value::from("2")]),
            Err(FuncMapError::ArgType { index: 1, .. })
        ));
        assert!(matches!(
            ns.call("Separator", &[Value::from(1_i64)]),
            Err(FuncMapError::Arity { expected: 0, got: 1, .. })
        ));
        assert!(matches!(
            ns.call("separator", &[]),
            Err(FuncMapError::UnknownFunction { .. })
        ));
    }

    #[test]
    fn test_register_passes_accessor_and_docs() {
        let mut registry = RecordingRegistry::default();
        register(&mut registry).unwrap();

        assert_eq!(registry.added.len(), 1);
        let func = &registry.added[0];
        assert_eq!(func.name, NAMESPACE);

        let names: Vec<&str> = func.funcs.iter().map(|doc| doc.name.as_str()).collect();
        assert_eq!(names, FUNCS);
        assert!(func.funcs.iter().all(|doc| doc.example.is_some()));

        assert!(std::ptr::addr_eq(func.namespace(), plsql_ns()));
    }

    #[test]
    fn test_register_twice_fails() {
        let mut map = FuncMap::new();
        register(&mut map).unwrap();

        let err = register(&mut map).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<FuncMapError>(),
            Some(FuncMapError::DuplicateNamespace(_))
        ));
        assert_eq!(map.len(), 1);
    }
}
