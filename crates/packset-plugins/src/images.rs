use std::path::Path;

use packset_config::{Configuration, Plugin, Rule, UpdateHandler, update_handler};
use serde::{Deserialize, Serialize};
use serde_json::json;

pub const DEFAULT_IMAGES_OUTPUT_LOCATION: &str = "assets/images";
pub const DEFAULT_IMAGES_PUBLIC_PATH: &str = "/";

/// Images below this size (bytes) are inlined as data URLs
const URL_LOADER_LIMIT: u32 = 10_000;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImagesPluginOptions {
    /// Where emitted images go, relative to the output directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_location: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_path: Option<String>,
}

/// Loads png, jpg, gif and svg files through `url-loader`
#[derive(Debug, Clone, Copy, Default)]
pub struct ImagesPlugin;

impl Plugin for ImagesPlugin {
    type Options = ImagesPluginOptions;

    fn name(&self) -> &'static str {
        "images"
    }

    fn init(&self, options: Option<Self::Options>, _project_directory: &Path) -> UpdateHandler {
        let options = options.unwrap_or_default();
        update_handler(move |config| Ok(apply(config, options)))
    }
}

fn apply(mut config: Configuration, options: ImagesPluginOptions) -> Configuration {
    let output_location = options
        .output_location
        .unwrap_or_else(|| DEFAULT_IMAGES_OUTPUT_LOCATION.to_string());
    let public_path = options
        .public_path
        .unwrap_or_else(|| DEFAULT_IMAGES_PUBLIC_PATH.to_string());

    config.push_rule(Rule::new(r"\.(png|jpg|gif|svg)$").with_loader(
        "url-loader",
        json!({
            "name": format!("./{output_location}/[name].[ext]"),
            "publicPath": public_path,
            "limit": URL_LOADER_LIMIT
        }),
    ));
    config
}
