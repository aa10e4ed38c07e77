//! # packset-config
//!
//! Bundler configuration model, the fluent [`Builder`] and the [`Plugin`]
//! contract every packset plugin implements.
//!
//! ```
//! use packset_config::{Builder, Output};
//!
//! let config = Builder::new("/projects/app")
//!     .update(|mut config| {
//!         config.entry = Some("./src/index.ts".into());
//!         config.output = Some(Output::new("/projects/app/dist"));
//!         config
//!     })
//!     .to_config()
//!     .unwrap();
//!
//! println!("{}", serde_json::to_string_pretty(&config).unwrap());
//! ```

pub mod builder;
pub mod configuration;
pub mod discovery;
pub mod error;
pub mod options;
pub mod plugin;
pub mod scaffold;
pub mod validation;

#[cfg(feature = "logging")]
pub mod logging;

// Re-export main types
pub use builder::Builder;
pub use configuration::*;
pub use discovery::ConfigDiscovery;
pub use error::*;
pub use options::ProjectOptions;
pub use plugin::{FnPlugin, Plugin, UpdateHandler, plugin_fn, update_handler};
pub use scaffold::{ConfigTemplate, ScaffoldOutcome, ensure_config_file, scaffold};
pub use validation::finalize;
