//! PL/SQL formatting helpers for code-generating templates.
//!
//! [`plsql::init`] registers the `plsql` namespace into the process-wide
//! [`funcmap`] registry, where a template engine looks it up by name:
//!
//! ```
//! use chew_plsql::funcmap::{self, Value};
//!
//! chew_plsql::plsql::init();
//! let out = funcmap::global()
//!     .call("plsql", "ParameterType", &[Value::from("out")])
//!     .unwrap();
//! assert_eq!(out, Value::from("   OUT"));
//! ```

pub mod funcmap;
pub mod plsql;
