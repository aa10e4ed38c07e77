#![cfg_attr(docsrs, feature(doc_cfg))]

//! # packset
//!
//! Builds bundler configurations for TypeScript web projects out of small,
//! composable plugins.
//!
//! ## Quick Start
//!
//! ### Use the default preset
//!
//! ```no_run
//! use packset::{ProjectOptions, preset};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let options = ProjectOptions::load("./my-app")?;
//! let config = preset(&options).to_config()?;
//! println!("{}", serde_json::to_string_pretty(&config.to_value()?)?);
//! # Ok(()) }
//! ```
//!
//! ### Pick plugins yourself
//!
//! ```no_run
//! use packset::plugins::{CleanPlugin, ImagesPlugin};
//! use packset::{Builder, Output, TypeScriptPlugin};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Builder::new("./my-app")
//!     .update(|mut config| {
//!         config.entry = Some("./src/main.ts".into());
//!         config.output = Some(Output::new("./my-app/build"));
//!         config
//!     })
//!     .use_plugin(CleanPlugin, None)
//!     .use_plugin(TypeScriptPlugin, None)
//!     .use_plugin(ImagesPlugin, None)
//!     .to_config()?;
//! # Ok(()) }
//! ```

pub mod preset;

pub use packset_config::*;
pub use packset_plugin_styles::{StylesPlugin, StylesPluginOptions};
pub use packset_plugin_typescript::{TypeScriptPlugin, TypeScriptPluginOptions};
pub use preset::preset;

/// Single-purpose plugins
pub mod plugins {
    pub use packset_plugins::*;
}

/// TypeScript plugin option and tsconfig types
pub mod typescript {
    pub use packset_plugin_typescript::*;
}

/// Stylesheet plugin types
pub mod styles {
    pub use packset_plugin_styles::*;
}
