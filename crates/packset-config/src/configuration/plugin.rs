use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A bundler plugin to instantiate: the package that provides it and its options.
///
/// The instance itself lives in the bundler's ecosystem; packset only records
/// which plugin to construct and with what arguments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginDescriptor {
    /// Package name (e.g. "html-webpack-plugin")
    pub plugin: String,

    /// Constructor options
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub options: Value,
}

impl PluginDescriptor {
    pub fn new(plugin: impl Into<String>) -> Self {
        Self {
            plugin: plugin.into(),
            options: Value::Null,
        }
    }

    pub fn with_options(mut self, options: Value) -> Self {
        self.options = options;
        self
    }
}
