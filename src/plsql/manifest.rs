use anyhow::{Context, Result, bail};
use serde::Deserialize;

use crate::funcmap::{Func, NamespaceAccessor, NestedFuncDoc};

const DEFAULT_MANIFEST: &str = include_str!("../../funcs/plsql.toml");

/// Documentation record for a namespace, as written in `funcs/*.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct NamespaceManifest {
    pub name: String,
    pub short: String,
    pub long: String,
    #[serde(default)]
    pub funcs: Vec<NestedFuncDoc>,
}

impl NamespaceManifest {
    /// The manifest compiled into the crate.
    pub fn load() -> Result<Self> {
        Self::parse(DEFAULT_MANIFEST).context("invalid built-in plsql manifest")
    }

    pub fn parse(raw: &str) -> Result<Self> {
        let mut manifest: NamespaceManifest = toml::from_str(raw)?;
        manifest.long = manifest.long.trim().to_string();
        Ok(manifest)
    }

    /// Every documented function must be one `exported` lists, in that order.
    pub fn check_funcs(&self, exported: &[&str]) -> Result<()> {
        let documented: Vec<&str> = self.funcs.iter().map(|doc| doc.name.as_str()).collect();
        if documented != exported {
            bail!(
                "namespace {} documents [{}], expected [{}]",
                self.name,
                documented.join(", "),
                exported.join(", ")
            );
        }

        if let Some(doc) = self.funcs.iter().find(|doc| doc.example.is_none()) {
            bail!("namespace {}: {} has no example", self.name, doc.name);
        }

        Ok(())
    }

    pub fn into_func(self, accessor: NamespaceAccessor) -> Func {
        Func::new(accessor, self.name, self.short, self.long, self.funcs)
    }
}
