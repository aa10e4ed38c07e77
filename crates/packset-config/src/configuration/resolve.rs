use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::configuration::plugin::PluginDescriptor;

/// Module resolution options
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Resolve {
    /// Extensions tried, in order, when an import omits one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Vec<String>>,

    /// Resolver plugins (e.g. tsconfig path mapping)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plugins: Option<Vec<PluginDescriptor>>,

    /// Import aliases (e.g. "@components" -> "src/components")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<IndexMap<String, String>>,

    /// Any other resolve setting (modules, mainFields, ...)
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl Resolve {
    pub fn extensions_mut(&mut self) -> &mut Vec<String> {
        self.extensions.get_or_insert_with(Vec::new)
    }

    pub fn plugins_mut(&mut self) -> &mut Vec<PluginDescriptor> {
        self.plugins.get_or_insert_with(Vec::new)
    }

    /// Append an extension unless the exact string is already listed.
    ///
    /// Returns `true` when the extension was added.
    pub fn add_extension(&mut self, extension: &str) -> bool {
        let extensions = self.extensions_mut();
        if extensions.iter().any(|existing| existing == extension) {
            return false;
        }
        extensions.push(extension.to_string());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_extension_skips_exact_duplicates() {
        let mut resolve = Resolve::default();
        assert!(resolve.add_extension(".ts"));
        assert!(!resolve.add_extension(".ts"));
        assert!(resolve.add_extension(".TS"));
        assert_eq!(
            resolve.extensions,
            Some(vec![".ts".to_string(), ".TS".to_string()])
        );
    }
}
