//! Options forwarded to the type-checker and path-mapping bundler plugins.
//!
//! Every field is optional: only the fields that are set are written over
//! the plugin defaults.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// `fork-ts-checker-webpack-plugin` options
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForkTsCheckerOptions {
    /// Path to the `typescript` package
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub typescript: Option<String>,

    /// Path to tsconfig.json
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tsconfig: Option<String>,

    /// Overrides for the tsconfig compiler options
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compiler_options: Option<Map<String, Value>>,

    /// `true` uses ./tslint.json, a string points at another file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tslint: Option<TsLint>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tslint_auto_fix: Option<bool>,

    /// Directories or files to watch
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub watch: Option<OneOrMany>,

    /// Report diagnostics asynchronously, without blocking the build
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r#async: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ignore_diagnostics: Option<Vec<u32>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ignore_lints: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ignore_lint_warnings: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_files: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<bool>,

    /// "default" or "codeframe"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formatter: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formatter_options: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub silent: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_syntactic_errors: Option<bool>,

    /// Memory limit of the checker process in MB
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory_limit: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workers: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vue: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_typescript_incremental_api: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub measure_compilation_time: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TsLint {
    Enabled(bool),
    Path(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

/// `tsconfig-paths-webpack-plugin` options
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TsconfigPathsOptions {
    /// tsconfig to read path mappings from (defaults to the project tsconfig)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config_file: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Vec<String>>,

    /// Overrides `compilerOptions.baseUrl`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub silent: Option<bool>,

    /// "INFO", "WARN" or "ERROR"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_info_to_std_out: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_fields: Option<Vec<String>>,
}

/// Write every set field of `overrides` over `defaults`, key by key
pub(crate) fn merge_over<T: Serialize>(mut defaults: Map<String, Value>, overrides: &T) -> Value {
    if let Ok(Value::Object(overrides)) = serde_json::to_value(overrides) {
        defaults.extend(overrides);
    }
    Value::Object(defaults)
}
