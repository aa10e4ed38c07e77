//! Companion config file scaffolding.
//!
//! Plugins that rely on a tool-specific config file (`tsconfig.json`,
//! `postcss.config.js`, ...) create a default one in the project directory
//! when it is missing. Existing files are never touched.

use std::fs::{self, File, OpenOptions};
use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::{error, info};

use crate::error::{ConfigError, Result};

/// A bundled default config file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigTemplate {
    /// File name inside the project directory
    pub name: &'static str,
    /// Default contents
    pub contents: &'static str,
}

impl ConfigTemplate {
    pub const fn new(name: &'static str, contents: &'static str) -> Self {
        Self { name, contents }
    }

    /// Location of this file inside `project_directory`
    pub fn location(&self, project_directory: &Path) -> PathBuf {
        project_directory.join(self.name)
    }
}

/// Result of a scaffolding check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScaffoldOutcome {
    /// The file was missing and has been created
    Created(PathBuf),
    /// The file already existed and was left alone
    Existing(PathBuf),
}

impl ScaffoldOutcome {
    pub fn path(&self) -> &Path {
        match self {
            ScaffoldOutcome::Created(path) | ScaffoldOutcome::Existing(path) => path,
        }
    }

    pub fn was_created(&self) -> bool {
        matches!(self, ScaffoldOutcome::Created(_))
    }
}

/// Create `template` in `project_directory` unless a file with that name exists.
///
/// The file is opened with `create_new`, so a file (or symlink) appearing at
/// the location is never written through.
///
/// # Errors
///
/// Returns `ConfigError::Io` when the directory or file cannot be written.
pub fn ensure_config_file(
    project_directory: &Path,
    template: &ConfigTemplate,
) -> Result<ScaffoldOutcome> {
    let location = template.location(project_directory);

    let opened = match create_new(&location) {
        Err(e) if e.kind() == ErrorKind::NotFound => {
            if let Some(parent) = location.parent() {
                fs::create_dir_all(parent).map_err(|e| ConfigError::io(parent, e))?;
            }
            create_new(&location)
        }
        other => other,
    };

    let mut file = match opened {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            return Ok(ScaffoldOutcome::Existing(location));
        }
        Err(e) => return Err(ConfigError::io(&location, e)),
    };

    info!(
        "File \"{}\" not found at {}. Creating...",
        template.name,
        location.display()
    );
    file.write_all(template.contents.as_bytes())
        .map_err(|e| ConfigError::io(&location, e))?;

    info!("Created.");
    Ok(ScaffoldOutcome::Created(location))
}

fn create_new(location: &Path) -> io::Result<File> {
    OpenOptions::new().write(true).create_new(true).open(location)
}

/// Like [`ensure_config_file`], but failures are logged instead of returned.
///
/// Plugin factories call this so a read-only project never aborts a build.
pub fn scaffold(project_directory: &Path, template: &ConfigTemplate) -> Option<ScaffoldOutcome> {
    match ensure_config_file(project_directory, template) {
        Ok(outcome) => Some(outcome),
        Err(err) => {
            error!("Failed while initiating \"{}\". {}", template.name, err);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const TEMPLATE: ConfigTemplate = ConfigTemplate::new("tool.json", "{ \"strict\": true }\n");

    #[test]
    fn creates_missing_file() {
        let dir = TempDir::new().unwrap();
        let outcome = ensure_config_file(dir.path(), &TEMPLATE).unwrap();

        assert!(outcome.was_created());
        assert_eq!(outcome.path(), dir.path().join("tool.json"));
        assert_eq!(
            fs::read_to_string(dir.path().join("tool.json")).unwrap(),
            TEMPLATE.contents
        );
    }

    #[test]
    fn never_overwrites_existing_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("tool.json"), "custom").unwrap();

        let outcome = ensure_config_file(dir.path(), &TEMPLATE).unwrap();
        assert_eq!(outcome, ScaffoldOutcome::Existing(dir.path().join("tool.json")));
        assert_eq!(
            fs::read_to_string(dir.path().join("tool.json")).unwrap(),
            "custom"
        );
    }

    #[test]
    fn creates_missing_project_directory() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("packages").join("web");

        let outcome = ensure_config_file(&nested, &TEMPLATE).unwrap();
        assert!(outcome.was_created());
        assert!(nested.join("tool.json").is_file());
    }

    #[cfg(unix)]
    #[test]
    fn dangling_symlink_is_not_written_through() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("elsewhere.json");
        std::os::unix::fs::symlink(&target, dir.path().join("tool.json")).unwrap();

        let outcome = ensure_config_file(dir.path(), &TEMPLATE).unwrap();
        assert!(!outcome.was_created());
        assert!(!target.exists());
    }

    #[test]
    fn scaffold_swallows_errors() {
        let dir = TempDir::new().unwrap();
        // A file where the project directory should be makes creation fail
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();

        assert!(scaffold(&blocker.join("app"), &TEMPLATE).is_none());
        assert!(ensure_config_file(&blocker.join("app"), &TEMPLATE).is_err());
    }
}
