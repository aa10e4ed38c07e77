//! Plugin contract.
//!
//! A plugin is a factory: given its optional options and the project
//! directory it returns an [`UpdateHandler`] that transforms the
//! configuration. Factories may touch the filesystem once (scaffolding
//! companion config files) before handing back the handler; handlers only
//! mutate the configuration.

use std::marker::PhantomData;
use std::path::Path;

use crate::configuration::Configuration;
use crate::error::Result;

/// A configuration transform produced by a plugin or passed to `Builder::try_update`
pub type UpdateHandler = Box<dyn FnOnce(Configuration) -> Result<Configuration>>;

/// Box a closure as an [`UpdateHandler`]
pub fn update_handler<F>(update: F) -> UpdateHandler
where
    F: FnOnce(Configuration) -> Result<Configuration> + 'static,
{
    Box::new(update)
}

/// Trait implemented by every packset plugin
pub trait Plugin {
    /// Per-plugin options; `None` selects the plugin defaults
    type Options;

    /// Name used in logs and errors
    fn name(&self) -> &'static str;

    /// Prepare the plugin for `project_directory` and return its transform
    fn init(&self, options: Option<Self::Options>, project_directory: &Path) -> UpdateHandler;
}

/// A plugin backed by a closure, see [`plugin_fn`]
pub struct FnPlugin<F, O> {
    name: &'static str,
    init: F,
    _options: PhantomData<fn(O)>,
}

/// Adapt a factory closure into a [`Plugin`]
///
/// # Example
///
/// ```
/// use packset_config::{plugin_fn, update_handler, Builder, Mode};
///
/// let production = plugin_fn("production", |minimize: Option<bool>, _dir| {
///     update_handler(move |mut config| {
///         config.mode = Some(Mode::Production);
///         config.optimization.get_or_insert_with(Default::default).minimize = minimize;
///         Ok(config)
///     })
/// });
///
/// let builder = Builder::new(".").use_plugin(&production, Some(true));
/// assert_eq!(builder.configuration().unwrap().mode, Some(Mode::Production));
/// ```
pub fn plugin_fn<O, F>(name: &'static str, init: F) -> FnPlugin<F, O>
where
    F: Fn(Option<O>, &Path) -> UpdateHandler,
{
    FnPlugin {
        name,
        init,
        _options: PhantomData,
    }
}

impl<O, F> Plugin for FnPlugin<F, O>
where
    F: Fn(Option<O>, &Path) -> UpdateHandler,
{
    type Options = O;

    fn name(&self) -> &'static str {
        self.name
    }

    fn init(&self, options: Option<O>, project_directory: &Path) -> UpdateHandler {
        (self.init)(options, project_directory)
    }
}

impl<P: Plugin + ?Sized> Plugin for &P {
    type Options = P::Options;

    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn init(&self, options: Option<Self::Options>, project_directory: &Path) -> UpdateHandler {
        (**self).init(options, project_directory)
    }
}
