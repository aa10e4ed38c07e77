use std::path::Path;

use packset_config::{Plugin, PluginDescriptor, UpdateHandler, update_handler};

pub const CLEAN_PLUGIN: &str = "clean-webpack-plugin";

/// Empties the output directory before each build
#[derive(Debug, Clone, Copy, Default)]
pub struct CleanPlugin;

impl Plugin for CleanPlugin {
    type Options = ();

    fn name(&self) -> &'static str {
        "clean"
    }

    fn init(&self, _options: Option<()>, _project_directory: &Path) -> UpdateHandler {
        update_handler(|mut config| {
            config.push_plugin(PluginDescriptor::new(CLEAN_PLUGIN));
            Ok(config)
        })
    }
}
