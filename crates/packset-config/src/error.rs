//! Error types for configuration building, finalization and loading.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    // Finalization errors
    #[error("configuration `entry` is not set")]
    #[diagnostic(
        code(packset::config::missing_entry),
        help("Set `entry` (e.g. \"./src/index.ts\") before calling `to_config()`")
    )]
    MissingEntry,

    #[error("configuration `output` is not set")]
    #[diagnostic(
        code(packset::config::missing_output),
        help("Set `output.path` to the directory bundles are written to")
    )]
    MissingOutput,

    // Plugin errors
    #[error("cannot add `{option}` because `{property}` does not exist in {file}")]
    #[diagnostic(
        code(packset::plugin::missing_property),
        help("Set `{property}` in {file} or drop `{option}`")
    )]
    MissingProperty {
        option: &'static str,
        property: &'static str,
        file: String,
    },

    #[error("plugin `{plugin}` failed: {message}")]
    #[diagnostic(code(packset::plugin::failed))]
    Plugin { plugin: String, message: String },

    // Parsing/loading errors
    #[error("invalid config value for `{field}`: {message}")]
    #[diagnostic(code(packset::config::invalid_value))]
    InvalidValue { field: String, message: String },

    #[error("failed to parse {}: {message}", path.display())]
    #[diagnostic(code(packset::config::parse))]
    Parse { path: PathBuf, message: String },

    #[error("invalid rule pattern `{pattern}`")]
    #[diagnostic(code(packset::config::invalid_pattern))]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    // I/O errors
    #[error("I/O error at {}: {source}", path.display())]
    #[diagnostic(code(packset::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ConfigError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Self::Parse {
            path: path.into(),
            message: message.to_string(),
        }
    }

    pub fn plugin(plugin: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Plugin {
            plugin: plugin.into(),
            message: message.into(),
        }
    }
}
