//! TypeScript support for packset builds
//!
//! [`TypeScriptPlugin`] makes sure the project has a `tsconfig.json` and a
//! `tslint.json` (creating defaults when missing), then adds:
//!
//! - a `\.tsx?$` rule transpiling through `babel-loader` and `ts-loader`
//!   (transpile-only, type errors come from the checker plugin)
//! - `fork-ts-checker-webpack-plugin` for out-of-process type checking
//! - `tsconfig-paths-webpack-plugin` when the tsconfig declares a `baseUrl`
//! - `.ts`, `.tsx`/`.jsx` (when JSX is enabled) and `.js` resolve extensions
//!
//! ```rust,no_run
//! use packset_config::Builder;
//! use packset_plugin_typescript::TypeScriptPlugin;
//!
//! let builder = Builder::new("./my-app").use_plugin(TypeScriptPlugin, None);
//! ```

use std::path::Path;

use packset_config::{
    ConfigError, ConfigTemplate, Configuration, LoaderSpec, Plugin, PluginDescriptor, Result,
    Rule, UpdateHandler, scaffold, update_handler,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use tracing::debug;

mod options;
pub mod tsconfig;

pub use options::{ForkTsCheckerOptions, OneOrMany, TsLint, TsconfigPathsOptions};
pub use tsconfig::{CompilerOptions, TsConfig, load_tsconfig};

use options::merge_over;

pub const TS_EXTENSION: &str = ".ts";
pub const TSX_EXTENSION: &str = ".tsx";
pub const JS_EXTENSION: &str = ".js";
pub const JSX_EXTENSION: &str = ".jsx";

pub const TS_CONFIG: ConfigTemplate =
    ConfigTemplate::new("tsconfig.json", include_str!("../assets/tsconfig.json"));
pub const TSLINT_CONFIG: ConfigTemplate =
    ConfigTemplate::new("tslint.json", include_str!("../assets/tslint.json"));

pub const FORK_TS_CHECKER_PLUGIN: &str = "fork-ts-checker-webpack-plugin";
pub const TSCONFIG_PATHS_PLUGIN: &str = "tsconfig-paths-webpack-plugin";

const TS_RULE_TEST: &str = r"\.tsx?$";
const TS_RULE_EXCLUDE: &str = "node_modules";

/// Options for [`TypeScriptPlugin`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeScriptPluginOptions {
    /// Written over the type-checker defaults
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fork_ts_checker_options: Option<ForkTsCheckerOptions>,

    /// Written over the path-mapping defaults; requires `compilerOptions.baseUrl`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tsconfig_paths_plugin_options: Option<TsconfigPathsOptions>,
}

/// Adds TypeScript compilation, type checking and path mapping
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeScriptPlugin;

impl Plugin for TypeScriptPlugin {
    type Options = TypeScriptPluginOptions;

    fn name(&self) -> &'static str {
        "typescript"
    }

    fn init(&self, options: Option<Self::Options>, project_directory: &Path) -> UpdateHandler {
        scaffold(project_directory, &TS_CONFIG);
        scaffold(project_directory, &TSLINT_CONFIG);

        let tsconfig_location = TS_CONFIG.location(project_directory);
        let tsconfig = load_tsconfig(&tsconfig_location);
        let options = options.unwrap_or_default();

        update_handler(move |config| {
            let tsconfig = tsconfig?;
            apply(config, tsconfig.as_ref(), &tsconfig_location, options)
        })
    }
}

fn apply(
    mut config: Configuration,
    tsconfig: Option<&TsConfig>,
    tsconfig_location: &Path,
    options: TypeScriptPluginOptions,
) -> Result<Configuration> {
    let base_url = tsconfig.and_then(TsConfig::base_url);
    if base_url.is_none() && options.tsconfig_paths_plugin_options.is_some() {
        return Err(ConfigError::MissingProperty {
            option: "tsconfigPathsPluginOptions",
            property: "baseUrl",
            file: TS_CONFIG.name.to_string(),
        });
    }

    config.push_plugin(
        PluginDescriptor::new(FORK_TS_CHECKER_PLUGIN).with_options(merge_over(
            checker_defaults(),
            &options.fork_ts_checker_options.unwrap_or_default(),
        )),
    );

    config.push_rule(
        Rule::new(TS_RULE_TEST)
            .with_use(LoaderSpec::new(
                "babel-loader",
                json!({ "babelrc": true, "plugins": ["syntax-dynamic-import"] }),
            ))
            .with_use(LoaderSpec::new(
                "ts-loader",
                json!({ "happyPackMode": true, "transpileOnly": true }),
            ))
            .with_exclude(TS_RULE_EXCLUDE),
    );

    let resolve = config.resolve_mut();
    resolve.plugins_mut();

    if let Some(base_url) = base_url {
        debug!(base_url, "adding tsconfig path mapping");
        let mut defaults = Map::new();
        defaults.insert(
            "configFile".to_string(),
            Value::String(tsconfig_location.to_string_lossy().into_owned()),
        );
        resolve.plugins_mut().push(
            PluginDescriptor::new(TSCONFIG_PATHS_PLUGIN).with_options(merge_over(
                defaults,
                &options.tsconfig_paths_plugin_options.unwrap_or_default(),
            )),
        );
    }

    resolve.add_extension(TS_EXTENSION);
    if tsconfig.is_some_and(TsConfig::has_jsx) {
        resolve.add_extension(TSX_EXTENSION);
        resolve.add_extension(JSX_EXTENSION);
    }
    resolve.add_extension(JS_EXTENSION);

    Ok(config)
}

fn checker_defaults() -> Map<String, Value> {
    let mut defaults = Map::new();
    defaults.insert("checkSyntacticErrors".to_string(), Value::Bool(true));
    defaults.insert("tslint".to_string(), Value::Bool(true));
    defaults
}
