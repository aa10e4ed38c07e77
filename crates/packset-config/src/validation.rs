//! Finalization checks applied by `Builder::to_config`.

use tracing::debug;

use crate::configuration::{Configuration, NodeOptions, NodeStub};
use crate::error::{ConfigError, Result};

/// Node.js core modules stubbed out for non-node targets
pub const NODE_STUB_MODULES: [&str; 3] = ["fs", "net", "tls"];

/// Validate required fields, then apply target-dependent defaults.
///
/// Both required-field checks run before anything is mutated: `entry` first,
/// then `output` (which must carry a `path`). When the target is anything but
/// `node` and no `node` object was provided, the core modules in
/// [`NODE_STUB_MODULES`] are stubbed with the empty module.
///
/// # Example
///
/// ```
/// use packset_config::{validation::finalize, Configuration, ConfigError};
///
/// let result = finalize(Configuration::default());
/// assert!(matches!(result, Err(ConfigError::MissingEntry)));
/// ```
pub fn finalize(mut config: Configuration) -> Result<Configuration> {
    if config.entry.is_none() {
        return Err(ConfigError::MissingEntry);
    }

    let has_output_path = config
        .output
        .as_ref()
        .is_some_and(|output| output.path.is_some());
    if !has_output_path {
        return Err(ConfigError::MissingOutput);
    }

    let is_node = config.target.is_some_and(|target| target.is_node());
    if !is_node && config.node.is_none() {
        debug!("stubbing node core modules for browser target");
        config.node = Some(default_node_stubs());
    }

    Ok(config)
}

fn default_node_stubs() -> NodeOptions {
    NODE_STUB_MODULES
        .iter()
        .map(|name| (name.to_string(), NodeStub::EMPTY))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configuration::{Output, Target};

    fn with_required_fields() -> Configuration {
        Configuration {
            entry: Some("./src/index.ts".into()),
            output: Some(Output::new("/project/dist")),
            ..Configuration::default()
        }
    }

    #[test]
    fn missing_entry_is_checked_first() {
        let result = finalize(Configuration::default());
        assert!(matches!(result, Err(ConfigError::MissingEntry)));
    }

    #[test]
    fn missing_output_is_reported() {
        let config = Configuration {
            entry: Some("./src/index.ts".into()),
            ..Configuration::default()
        };
        assert!(matches!(finalize(config), Err(ConfigError::MissingOutput)));
    }

    #[test]
    fn output_without_path_counts_as_missing() {
        let config = Configuration {
            entry: Some("./src/index.ts".into()),
            output: Some(Output::default().with_filename("index.js")),
            ..Configuration::default()
        };
        assert!(matches!(finalize(config), Err(ConfigError::MissingOutput)));
    }

    #[test]
    fn web_target_gets_empty_stubs() {
        let mut config = with_required_fields();
        config.target = Some(Target::Web);

        let node = finalize(config).unwrap().node.unwrap();
        let names: Vec<&str> = node.keys().map(String::as_str).collect();
        assert_eq!(names, NODE_STUB_MODULES);
        assert!(node.values().all(|stub| *stub == NodeStub::EMPTY));
    }

    #[test]
    fn unset_target_is_treated_as_browser() {
        let config = finalize(with_required_fields()).unwrap();
        assert_eq!(config.node.map(|node| node.len()), Some(3));
    }

    #[test]
    fn explicit_node_override_is_kept() {
        let mut config = with_required_fields();
        let mut node = NodeOptions::new();
        node.insert("fs".to_string(), NodeStub::Enabled(false));
        config.node = Some(node.clone());

        assert_eq!(finalize(config).unwrap().node, Some(node));
    }

    #[test]
    fn only_plain_node_target_skips_stubs() {
        for target in ["async-node", "node-webkit", "electron-main", "electron-preload"] {
            let mut config = Configuration::from_value(serde_json::json!({ "target": target }))
                .unwrap();
            config.entry = Some("./src/index.ts".into());
            config.output = Some(Output::new("/project/dist"));

            let node = finalize(config).unwrap().node;
            assert_eq!(node.map(|node| node.len()), Some(3), "{target}");
        }
    }

    #[test]
    fn node_target_never_gets_stubs() {
        let mut config = with_required_fields();
        config.target = Some(Target::Node);
        assert!(finalize(config).unwrap().node.is_none());
    }
}
