//! Project-level options for the default preset.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::configuration::Target;

pub const DEFAULT_DEV_SERVER_PORT: u16 = 3000;
pub const DEFAULT_ENTRY_FILE: &str = "./src/index.ts";
pub const DEFAULT_OUTPUT_DIRECTORY: &str = "dist";
pub const DEFAULT_STATIC_CONTENT_DIRECTORY: &str = "./src/static";

/// Options describing a front-end project
///
/// Loaded from `packset.toml`, `packset.json`, the `packset` field of
/// `package.json` and `PACKSET_*` environment variables, see
/// [`ProjectOptions::load`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectOptions {
    /// Project root; never read from config files
    #[serde(skip)]
    pub project_directory: PathBuf,

    #[serde(default = "default_dev_server_port")]
    pub dev_server_port: u16,

    /// Generate an `index.html` hosting the bundle
    #[serde(default = "default_true")]
    pub emit_html: bool,

    /// Entry module, relative to the project directory
    #[serde(default = "default_entry_file")]
    pub entry_file: String,

    /// Output directory, relative to the project directory
    #[serde(default = "default_output_directory")]
    pub output_directory: String,

    /// Static files copied next to the bundle
    #[serde(default = "default_static_content_directory")]
    pub static_content_directory: String,

    #[serde(default)]
    pub target: Target,
}

impl ProjectOptions {
    pub fn new(project_directory: impl Into<PathBuf>) -> Self {
        Self {
            project_directory: project_directory.into(),
            dev_server_port: DEFAULT_DEV_SERVER_PORT,
            emit_html: true,
            entry_file: DEFAULT_ENTRY_FILE.to_string(),
            output_directory: DEFAULT_OUTPUT_DIRECTORY.to_string(),
            static_content_directory: DEFAULT_STATIC_CONTENT_DIRECTORY.to_string(),
            target: Target::Web,
        }
    }

    pub fn project_directory(&self) -> &Path {
        &self.project_directory
    }

    pub fn with_target(mut self, target: Target) -> Self {
        self.target = target;
        self
    }

    pub fn with_dev_server_port(mut self, port: u16) -> Self {
        self.dev_server_port = port;
        self
    }

    pub fn with_emit_html(mut self, emit_html: bool) -> Self {
        self.emit_html = emit_html;
        self
    }

    pub fn with_entry_file(mut self, entry_file: impl Into<String>) -> Self {
        self.entry_file = entry_file.into();
        self
    }

    pub fn with_output_directory(mut self, output_directory: impl Into<String>) -> Self {
        self.output_directory = output_directory.into();
        self
    }
}

fn default_dev_server_port() -> u16 {
    DEFAULT_DEV_SERVER_PORT
}

fn default_true() -> bool {
    true
}

fn default_entry_file() -> String {
    DEFAULT_ENTRY_FILE.to_string()
}

fn default_output_directory() -> String {
    DEFAULT_OUTPUT_DIRECTORY.to_string()
}

fn default_static_content_directory() -> String {
    DEFAULT_STATIC_CONTENT_DIRECTORY.to_string()
}
