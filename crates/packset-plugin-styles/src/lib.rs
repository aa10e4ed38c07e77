//! Stylesheet support for packset builds
//!
//! [`StylesPlugin`] creates a default `postcss.config.js` when the project
//! has none, then adds three module rules:
//!
//! ```text
//! .scss                          → sass-loader → postcss-loader → style-loader
//! .css                           → css-loader → style-loader
//! .woff .woff2 .eot .ttf .otf    → url-loader (inlined below 10 kB)
//! ```
//!
//! and registers `.css` and `.scss` as resolvable extensions.

use std::path::Path;

use packset_config::{
    ConfigTemplate, Configuration, Plugin, Rule, UpdateHandler, scaffold, update_handler,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

pub const CSS_EXTENSION: &str = ".css";
pub const SCSS_EXTENSION: &str = ".scss";

pub const POSTCSS_CONFIG: ConfigTemplate =
    ConfigTemplate::new("postcss.config.js", include_str!("../assets/postcss.config.js"));

pub const DEFAULT_FONTS_OUTPUT_LOCATION: &str = "./assets/fonts";
pub const DEFAULT_FONTS_PUBLIC_PATH: &str = "./";

/// Fonts below this size (bytes) are inlined as data URLs
const URL_LOADER_LIMIT: u32 = 10_000;

/// Options for [`StylesPlugin`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StylesPluginOptions {
    /// Where emitted font files go, relative to the output directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fonts_output_location: Option<String>,

    /// Public URL prefix for emitted font files
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fonts_public_path: Option<String>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StylesPlugin;

impl Plugin for StylesPlugin {
    type Options = StylesPluginOptions;

    fn name(&self) -> &'static str {
        "styles"
    }

    fn init(&self, options: Option<Self::Options>, project_directory: &Path) -> UpdateHandler {
        scaffold(project_directory, &POSTCSS_CONFIG);

        let options = options.unwrap_or_default();
        update_handler(move |config| Ok(apply(config, options)))
    }
}

fn apply(mut config: Configuration, options: StylesPluginOptions) -> Configuration {
    let fonts_output_location = options
        .fonts_output_location
        .unwrap_or_else(|| DEFAULT_FONTS_OUTPUT_LOCATION.to_string());
    let fonts_public_path = options
        .fonts_public_path
        .unwrap_or_else(|| DEFAULT_FONTS_PUBLIC_PATH.to_string());

    config.push_rule(
        Rule::new(r"\.scss$")
            .with_use("style-loader")
            .with_use("postcss-loader")
            .with_use("sass-loader"),
    );
    config.push_rule(
        Rule::new(r"\.css$")
            .with_use("style-loader")
            .with_use("css-loader"),
    );
    config.push_rule(Rule::new(r"\.(woff|woff2|eot|ttf|otf)$").with_loader(
        "url-loader",
        json!({
            "name": format!("{fonts_output_location}/[name].[ext]"),
            "publicPath": fonts_public_path,
            "limit": URL_LOADER_LIMIT
        }),
    ));

    let resolve = config.resolve_mut();
    resolve.add_extension(CSS_EXTENSION);
    resolve.add_extension(SCSS_EXTENSION);

    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use packset_config::Builder;
    use std::fs;
    use std::sync::{Arc, Mutex};
    use tempfile::TempDir;

    #[test]
    fn adds_rules_and_extensions() {
        let dir = TempDir::new().unwrap();
        let builder = Builder::new(dir.path()).use_plugin(StylesPlugin, None);
        let config = builder.configuration().unwrap();

        let module = config.module.as_ref().unwrap();
        assert_eq!(module.rules.len(), 3);
        assert_eq!(
            module.rule_for("theme.scss").unwrap().unwrap().loaders(),
            vec!["style-loader", "postcss-loader", "sass-loader"]
        );
        assert_eq!(
            module.rule_for("reset.css").unwrap().unwrap().loaders(),
            vec!["style-loader", "css-loader"]
        );

        let extensions = config.resolve.as_ref().unwrap().extensions.as_ref().unwrap();
        assert_eq!(extensions, &vec![".css".to_string(), ".scss".to_string()]);
    }

    #[test]
    fn font_rule_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let builder = Builder::new(dir.path()).use_plugin(StylesPlugin, None);
        let config = builder.configuration().unwrap();

        let rule = config
            .module
            .as_ref()
            .unwrap()
            .rule_for("icons.woff2")
            .unwrap()
            .unwrap();
        assert_eq!(rule.loader.as_deref(), Some("url-loader"));
        assert_eq!(
            rule.options,
            Some(json!({
                "name": "./assets/fonts/[name].[ext]",
                "publicPath": "./",
                "limit": 10000
            }))
        );
    }

    #[test]
    fn font_rule_uses_options() {
        let dir = TempDir::new().unwrap();
        let options = StylesPluginOptions {
            fonts_output_location: Some("static/fonts".to_string()),
            fonts_public_path: Some("/".to_string()),
        };
        let builder = Builder::new(dir.path()).use_plugin(StylesPlugin, Some(options));

        let rule = &builder.configuration().unwrap().module.as_ref().unwrap().rules[2];
        let rule_options = rule.options.as_ref().unwrap();
        assert_eq!(rule_options["name"], "static/fonts/[name].[ext]");
        assert_eq!(rule_options["publicPath"], "/");
    }

    #[test]
    fn applying_twice_duplicates_rules_but_not_extensions() {
        let dir = TempDir::new().unwrap();
        let builder = Builder::new(dir.path())
            .use_plugin(StylesPlugin, None)
            .use_plugin(StylesPlugin, None);
        let config = builder.configuration().unwrap();

        assert_eq!(config.module.as_ref().unwrap().rules.len(), 6);
        assert_eq!(
            config.resolve.as_ref().unwrap().extensions.as_ref().unwrap().len(),
            2
        );
    }

    #[test]
    fn unwritable_project_still_gets_rules() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();

        let logs = Arc::new(Mutex::new(Vec::new()));
        let writer = Arc::clone(&logs);
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || SharedBuffer(Arc::clone(&writer)))
            .finish();

        let builder = tracing::subscriber::with_default(subscriber, || {
            Builder::new(blocker.join("app")).use_plugin(StylesPlugin, None)
        });

        let output = String::from_utf8(logs.lock().unwrap().clone()).unwrap();
        assert!(output.contains("Failed while initiating \"postcss.config.js\"."));

        let config = builder.configuration().unwrap();
        assert_eq!(config.module.as_ref().unwrap().rules.len(), 3);
        assert_eq!(
            config.resolve.as_ref().unwrap().extensions.as_ref().unwrap(),
            &vec![".css".to_string(), ".scss".to_string()]
        );
    }

    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn scaffolds_postcss_config_once() {
        let dir = TempDir::new().unwrap();
        let location = dir.path().join("postcss.config.js");

        let _ = Builder::new(dir.path()).use_plugin(StylesPlugin, None);
        assert_eq!(fs::read_to_string(&location).unwrap(), POSTCSS_CONFIG.contents);

        fs::write(&location, "module.exports = {};\n").unwrap();
        let _ = Builder::new(dir.path()).use_plugin(StylesPlugin, None);
        assert_eq!(
            fs::read_to_string(&location).unwrap(),
            "module.exports = {};\n"
        );
    }
}
