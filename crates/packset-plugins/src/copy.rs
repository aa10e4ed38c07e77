use std::path::Path;

use packset_config::{Configuration, Plugin, PluginDescriptor, UpdateHandler, update_handler};
use serde::{Deserialize, Serialize};
use serde_json::json;

pub const COPY_PLUGIN: &str = "copy-webpack-plugin";

pub const STATIC_CONTENT_DIRECTORY: &str = "./src/static";
pub const STATIC_CONTENT_DIRECTORY_OUTPUT: &str = "./static";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopyPluginOptions {
    /// Source directory, relative to the project
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,

    /// Destination, relative to the output directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
}

/// Copies static content into the output directory
#[derive(Debug, Clone, Copy, Default)]
pub struct CopyPlugin;

impl Plugin for CopyPlugin {
    type Options = CopyPluginOptions;

    fn name(&self) -> &'static str {
        "copy"
    }

    fn init(&self, options: Option<Self::Options>, _project_directory: &Path) -> UpdateHandler {
        let options = options.unwrap_or_default();
        update_handler(move |config| Ok(apply(config, options)))
    }
}

fn apply(mut config: Configuration, options: CopyPluginOptions) -> Configuration {
    let from = options
        .from
        .unwrap_or_else(|| STATIC_CONTENT_DIRECTORY.to_string());
    let to = options
        .to
        .unwrap_or_else(|| STATIC_CONTENT_DIRECTORY_OUTPUT.to_string());

    config.push_plugin(
        PluginDescriptor::new(COPY_PLUGIN).with_options(json!([{ "from": from, "to": to }])),
    );
    config
}
