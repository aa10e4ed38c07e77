//! Bundler configuration model.
//!
//! Every section is optional: plugins initialize the sections they touch
//! through the `*_mut` accessors, so a configuration seeded by the caller
//! never has to be complete.

mod dev_server;
mod module;
mod output;
mod plugin;
mod resolve;
mod types;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::{Path, PathBuf};

pub use dev_server::DevServer;
pub use module::{LoaderSpec, ModuleOptions, Rule, UseEntry};
pub use output::Output;
pub use plugin::PluginDescriptor;
pub use resolve::Resolve;
pub use types::{Entry, EntryImport, Mode, NodeOptions, NodeStub, Optimization, SplitChunks, StubKind, Target};

use crate::error::ConfigError;

/// Main bundler configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<Mode>,

    /// Entry point(s)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry: Option<Entry>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<Output>,

    /// Target environment; `None` means the bundler default (`web`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<Target>,

    /// Source map style (e.g. "inline-source-map")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub devtool: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module: Option<ModuleOptions>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolve: Option<Resolve>,

    /// Bundler plugins, instantiated in order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plugins: Option<Vec<PluginDescriptor>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optimization: Option<Optimization>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dev_server: Option<DevServer>,

    /// Node.js core module stubs for non-node targets
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node: Option<NodeOptions>,

    /// Any other bundler setting (externals, context, performance, ...), forwarded untouched
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl Configuration {
    /// Create from serde_json::Value (e.g. a configuration stored as JSON)
    ///
    /// # Example
    ///
    /// ```
    /// use packset_config::{Configuration, Entry};
    /// use serde_json::json;
    ///
    /// let value = json!({
    ///     "entry": "./src/index.ts",
    ///     "mode": "production"
    /// });
    ///
    /// let config = Configuration::from_value(value).unwrap();
    /// assert_eq!(config.entry, Some(Entry::from("./src/index.ts")));
    /// ```
    pub fn from_value(value: Value) -> Result<Self, ConfigError> {
        serde_json::from_value(value).map_err(|e| ConfigError::InvalidValue {
            field: "configuration".to_string(),
            message: e.to_string(),
        })
    }

    /// Convert to serde_json::Value, the shape the bundler consumes
    pub fn to_value(&self) -> Result<Value, ConfigError> {
        serde_json::to_value(self).map_err(|e| ConfigError::InvalidValue {
            field: "configuration".to_string(),
            message: e.to_string(),
        })
    }

    pub fn module_mut(&mut self) -> &mut ModuleOptions {
        self.module.get_or_insert_with(ModuleOptions::default)
    }

    pub fn resolve_mut(&mut self) -> &mut Resolve {
        self.resolve.get_or_insert_with(Resolve::default)
    }

    pub fn plugins_mut(&mut self) -> &mut Vec<PluginDescriptor> {
        self.plugins.get_or_insert_with(Vec::new)
    }

    pub fn dev_server_mut(&mut self) -> &mut DevServer {
        self.dev_server.get_or_insert_with(DevServer::default)
    }

    /// Append a module rule, creating `module` if absent
    pub fn push_rule(&mut self, rule: Rule) {
        self.module_mut().rules.push(rule);
    }

    /// Append a bundler plugin, creating `plugins` if absent
    pub fn push_plugin(&mut self, plugin: PluginDescriptor) {
        self.plugins_mut().push(plugin);
    }
}

/// Resolve `path` against `base` and normalize `.`/`..` components.
///
/// Absolute paths are returned normalized but otherwise unchanged.
pub fn resolve_path(base: &Path, path: impl AsRef<Path>) -> PathBuf {
    use path_clean::PathClean;

    base.join(path).clean()
}
