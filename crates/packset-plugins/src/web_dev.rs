use std::path::Path;

use packset_config::{DevServer, Plugin, UpdateHandler, resolve_path, update_handler};
use serde::{Deserialize, Serialize};

pub const HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_OUTPUT_LOCATION: &str = "./dist";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebDevPluginOptions {
    /// Replaces the default dev-server settings wholesale
    #[serde(default)]
    pub dev_server: Option<DevServer>,
}

/// Configures the development server
#[derive(Debug, Clone, Copy, Default)]
pub struct WebDevPlugin;

impl WebDevPlugin {
    /// Dev-server settings used when no options are given
    pub fn default_dev_server(project_directory: &Path) -> DevServer {
        DevServer {
            content_base: Some(resolve_path(project_directory, DEFAULT_OUTPUT_LOCATION)),
            compress: Some(true),
            host: Some(HOST.to_string()),
            quiet: Some(false),
            port: Some(DEFAULT_PORT),
            history_api_fallback: Some(true),
            ..DevServer::default()
        }
    }
}

impl Plugin for WebDevPlugin {
    type Options = WebDevPluginOptions;

    fn name(&self) -> &'static str {
        "web-dev"
    }

    fn init(&self, options: Option<Self::Options>, project_directory: &Path) -> UpdateHandler {
        let dev_server = match options {
            Some(options) => options.dev_server,
            None => Some(Self::default_dev_server(project_directory)),
        };

        update_handler(move |mut config| {
            config.dev_server = dev_server;
            Ok(config)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use packset_config::Builder;
    use std::path::PathBuf;

    #[test]
    fn sets_default_dev_server() {
        let builder = Builder::new("/project").use_plugin(WebDevPlugin, None);
        let dev_server = builder.configuration().unwrap().dev_server.clone().unwrap();

        assert_eq!(dev_server.content_base, Some(PathBuf::from("/project/dist")));
        assert_eq!(dev_server.compress, Some(true));
        assert_eq!(dev_server.host.as_deref(), Some("0.0.0.0"));
        assert_eq!(dev_server.quiet, Some(false));
        assert_eq!(dev_server.port, Some(3000));
        assert_eq!(dev_server.history_api_fallback, Some(true));
    }

    #[test]
    fn options_replace_dev_server_wholesale() {
        let options = WebDevPluginOptions {
            dev_server: Some(DevServer {
                port: Some(8080),
                ..DevServer::default()
            }),
        };
        let builder = Builder::new("/project")
            .use_plugin(WebDevPlugin, None)
            .use_plugin(WebDevPlugin, Some(options));

        let dev_server = builder.configuration().unwrap().dev_server.clone().unwrap();
        assert_eq!(dev_server.port, Some(8080));
        assert_eq!(dev_server.host, None);
        assert_eq!(dev_server.content_base, None);
    }

    #[test]
    fn options_without_dev_server_clear_it() {
        let builder = Builder::new("/project")
            .use_plugin(WebDevPlugin, None)
            .use_plugin(WebDevPlugin, Some(WebDevPluginOptions::default()));

        assert!(builder.configuration().unwrap().dev_server.is_none());
    }
}
