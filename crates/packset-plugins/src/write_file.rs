use std::path::Path;

use packset_config::{Plugin, PluginDescriptor, UpdateHandler, update_handler};

pub const WRITE_FILE_PLUGIN: &str = "write-file-webpack-plugin";

/// Makes the dev server write bundles to disk instead of serving them from memory
#[derive(Debug, Clone, Copy, Default)]
pub struct WriteFilePlugin;

impl Plugin for WriteFilePlugin {
    type Options = ();

    fn name(&self) -> &'static str {
        "write-file"
    }

    fn init(&self, _options: Option<()>, _project_directory: &Path) -> UpdateHandler {
        update_handler(|mut config| {
            config.push_plugin(PluginDescriptor::new(WRITE_FILE_PLUGIN));
            Ok(config)
        })
    }
}
