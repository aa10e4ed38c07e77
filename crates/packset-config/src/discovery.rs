//! File-based discovery of project options.
//!
//! Sources are layered with Figment, later ones winning:
//! defaults < `packset.toml` < `packset.json` < `package.json` (`packset` field)
//! < `PACKSET_*` environment variables.

use std::fs;
use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format as _, Json, Serialized, Toml},
};
use serde_json::Value;

use crate::error::{ConfigError, Result};
use crate::options::ProjectOptions;

pub const TOML_CONFIG_NAME: &str = "packset.toml";
pub const JSON_CONFIG_NAME: &str = "packset.json";
pub const PACKAGE_JSON_NAME: &str = "package.json";
pub const PACKAGE_JSON_FIELD: &str = "packset";
pub const ENV_PREFIX: &str = "PACKSET_";

/// Config sources found in a project directory
///
/// # Example
///
/// ```no_run
/// use packset_config::ConfigDiscovery;
///
/// let discovery = ConfigDiscovery::new(".");
/// let options = discovery.load().unwrap();
/// println!("dev server on port {}", options.dev_server_port);
/// ```
pub struct ConfigDiscovery {
    root: PathBuf,
}

impl ConfigDiscovery {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Config files present in the root, in merge order
    pub fn find(&self) -> Vec<PathBuf> {
        let mut found = Vec::new();

        for name in [TOML_CONFIG_NAME, JSON_CONFIG_NAME] {
            let path = self.root.join(name);
            if path.is_file() {
                found.push(path);
            }
        }

        let pkg_path = self.root.join(PACKAGE_JSON_NAME);
        if matches!(read_package_field(&pkg_path), Ok(Some(_))) {
            found.push(pkg_path);
        }

        found
    }

    /// Load options from every discovered source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for an unreadable `package.json` and
    /// `ConfigError::InvalidValue` when the merged values don't fit
    /// [`ProjectOptions`].
    pub fn load(&self) -> Result<ProjectOptions> {
        let mut figment =
            Figment::new().merge(Serialized::defaults(ProjectOptions::new(&self.root)));

        let toml_path = self.root.join(TOML_CONFIG_NAME);
        if toml_path.is_file() {
            figment = figment.merge(Toml::file(toml_path));
        }

        let json_path = self.root.join(JSON_CONFIG_NAME);
        if json_path.is_file() {
            figment = figment.merge(Json::file(json_path));
        }

        if let Some(field) = read_package_field(&self.root.join(PACKAGE_JSON_NAME))? {
            figment = figment.merge(Json::string(&field.to_string()));
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX));

        let mut options: ProjectOptions =
            figment.extract().map_err(|e| ConfigError::InvalidValue {
                field: "project options".to_string(),
                message: e.to_string(),
            })?;
        options.project_directory = self.root.clone();

        tracing::debug!(root = %self.root.display(), "loaded project options");
        Ok(options)
    }
}

impl ProjectOptions {
    /// Discover and load options for `project_directory`
    pub fn load(project_directory: impl AsRef<Path>) -> Result<Self> {
        ConfigDiscovery::new(project_directory).load()
    }
}

/// Read the `packset` field of a package.json, if both exist
fn read_package_field(path: &Path) -> Result<Option<Value>> {
    if !path.is_file() {
        return Ok(None);
    }

    let content = fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
    let mut parsed: Value = serde_json::from_str(&content)
        .map_err(|e| ConfigError::parse(path, format!("Invalid JSON: {}", e)))?;

    match parsed.get_mut(PACKAGE_JSON_FIELD).map(Value::take) {
        Some(Value::Null) | None => Ok(None),
        Some(field) => Ok(Some(field)),
    }
}
