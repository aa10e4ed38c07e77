use std::path::Path;

use packset_config::{Configuration, Plugin, PluginDescriptor, UpdateHandler, update_handler};
use serde::{Deserialize, Serialize};
use serde_json::json;

pub const HTML_PLUGIN: &str = "html-webpack-plugin";
pub const HTML_TEMPLATE: &str = "html-webpack-template";

const DEFAULT_BASE_HREF: &str = "/";
const DEFAULT_APP_MOUNT_ID: &str = "root";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HtmlPluginOptions {
    /// Document title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_href: Option<String>,

    /// Ids of the elements the application mounts into
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_mount_ids: Option<Vec<String>>,
}

/// Emits an `index.html` hosting the bundle
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlPlugin;

impl Plugin for HtmlPlugin {
    type Options = HtmlPluginOptions;

    fn name(&self) -> &'static str {
        "html"
    }

    fn init(&self, options: Option<Self::Options>, _project_directory: &Path) -> UpdateHandler {
        let options = options.unwrap_or_default();
        update_handler(move |config| Ok(apply(config, options)))
    }
}

fn apply(mut config: Configuration, options: HtmlPluginOptions) -> Configuration {
    let app_mount_ids = options
        .app_mount_ids
        .unwrap_or_else(|| vec![DEFAULT_APP_MOUNT_ID.to_string()]);

    let mut plugin_options = json!({
        "inject": false,
        "template": HTML_TEMPLATE,
        "baseHref": options.base_href.as_deref().unwrap_or(DEFAULT_BASE_HREF),
        "appMountIds": app_mount_ids,
        "meta": [
            { "name": "viewport", "content": "width=device-width, initial-scale=1" }
        ]
    });
    if let Some(title) = options.title {
        plugin_options["title"] = title.into();
    }

    config.push_plugin(PluginDescriptor::new(HTML_PLUGIN).with_options(plugin_options));
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use packset_config::Builder;

    #[test]
    fn pushes_html_plugin_with_defaults() {
        let builder = Builder::new("/project").use_plugin(HtmlPlugin, None);
        let plugins = builder.configuration().unwrap().plugins.clone().unwrap();

        assert_eq!(plugins.len(), 1);
        assert_eq!(plugins[0].plugin, HTML_PLUGIN);
        assert_eq!(
            plugins[0].options,
            json!({
                "inject": false,
                "template": "html-webpack-template",
                "baseHref": "/",
                "appMountIds": ["root"],
                "meta": [
                    { "name": "viewport", "content": "width=device-width, initial-scale=1" }
                ]
            })
        );
    }

    #[test]
    fn options_override_title_and_mount_points() {
        let options = HtmlPluginOptions {
            title: Some("Dashboard".to_string()),
            base_href: Some("/app/".to_string()),
            app_mount_ids: Some(vec!["app".to_string(), "modal-root".to_string()]),
        };
        let builder = Builder::new("/project").use_plugin(HtmlPlugin, Some(options));
        let plugin = &builder.configuration().unwrap().plugins.as_ref().unwrap()[0];

        assert_eq!(plugin.options["title"], "Dashboard");
        assert_eq!(plugin.options["baseHref"], "/app/");
        assert_eq!(plugin.options["appMountIds"], json!(["app", "modal-root"]));
    }
}
