//! Fluent configuration builder.
//!
//! The builder folds update handlers over a single [`Configuration`], in call
//! order. The first failing handler stops the fold: its error is kept and
//! returned by [`Builder::to_config`], and later updates are skipped.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::configuration::Configuration;
use crate::error::{ConfigError, Result};
use crate::plugin::Plugin;
use crate::validation::finalize;

/// Builds a bundler [`Configuration`] from updates and plugins
///
/// # Example
///
/// ```
/// use packset_config::{Builder, Mode, Output};
///
/// let config = Builder::new("/projects/app")
///     .update(|mut config| {
///         config.mode = Some(Mode::Development);
///         config.entry = Some("./src/index.ts".into());
///         config.output = Some(Output::new("/projects/app/dist").with_filename("index.js"));
///         config
///     })
///     .to_config()
///     .unwrap();
///
/// // Browser targets get Node.js core module stubs
/// assert!(config.node.is_some());
/// ```
#[derive(Debug)]
pub struct Builder {
    project_directory: PathBuf,
    state: Result<Configuration>,
}

impl Builder {
    /// Start from an empty configuration
    pub fn new(project_directory: impl Into<PathBuf>) -> Self {
        Self::with_configuration(project_directory, Configuration::default())
    }

    /// Start from an existing configuration
    pub fn with_configuration(
        project_directory: impl Into<PathBuf>,
        configuration: Configuration,
    ) -> Self {
        Self {
            project_directory: project_directory.into(),
            state: Ok(configuration),
        }
    }

    pub fn project_directory(&self) -> &Path {
        &self.project_directory
    }

    /// Apply a plugin with optional options.
    ///
    /// The plugin factory runs against the builder's project directory, then
    /// its update handler is applied. Nothing runs once an earlier update failed.
    pub fn use_plugin<P: Plugin>(self, plugin: P, options: Option<P::Options>) -> Self {
        if self.state.is_err() {
            return self;
        }

        debug!(plugin = plugin.name(), "applying plugin");
        let handler = plugin.init(options, &self.project_directory);
        self.try_update(handler)
    }

    /// Apply an infallible update
    pub fn update<F>(self, update: F) -> Self
    where
        F: FnOnce(Configuration) -> Configuration,
    {
        self.try_update(|config| Ok(update(config)))
    }

    /// Apply an update that may fail
    pub fn try_update<F>(mut self, update: F) -> Self
    where
        F: FnOnce(Configuration) -> Result<Configuration>,
    {
        self.state = self.state.and_then(update);
        self
    }

    /// The configuration built so far, without validation
    pub fn configuration(&self) -> std::result::Result<&Configuration, &ConfigError> {
        self.state.as_ref()
    }

    /// Validate and return the final configuration.
    ///
    /// # Errors
    ///
    /// Returns the first update error, or `ConfigError::MissingEntry` /
    /// `ConfigError::MissingOutput` when required fields are unset.
    pub fn to_config(self) -> Result<Configuration> {
        finalize(self.state?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configuration::{Mode, Output, PluginDescriptor};

    fn complete(mut config: Configuration) -> Configuration {
        config.entry = Some("./src/index.ts".into());
        config.output = Some(Output::new("/project/dist"));
        config
    }

    #[test]
    fn updates_apply_in_order() {
        let builder = Builder::new("/project")
            .update(|mut config| {
                config.mode = Some(Mode::Development);
                config
            })
            .update(|mut config| {
                config.mode = Some(Mode::Production);
                config
            });

        assert_eq!(
            builder.configuration().unwrap().mode,
            Some(Mode::Production)
        );
    }

    #[test]
    fn with_configuration_seeds_the_fold() {
        let seed = complete(Configuration::default());
        let config = Builder::with_configuration("/project", seed.clone())
            .to_config()
            .unwrap();
        assert_eq!(config.entry, seed.entry);
        assert_eq!(config.output, seed.output);
    }

    #[test]
    fn first_error_skips_later_updates() {
        let builder = Builder::new("/project")
            .try_update(|_| Err(ConfigError::plugin("broken", "boom")))
            .update(|mut config| {
                config.push_plugin(PluginDescriptor::new("never-added"));
                config
            });

        assert!(builder.configuration().is_err());
        let err = builder.to_config().unwrap_err();
        assert!(matches!(err, ConfigError::Plugin { ref plugin, .. } if plugin == "broken"));
    }

    #[test]
    fn project_directory_is_kept() {
        let builder = Builder::new("/project");
        assert_eq!(builder.project_directory(), Path::new("/project"));
    }
}
