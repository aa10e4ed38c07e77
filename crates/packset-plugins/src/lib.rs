//! Small packset plugins that each add a single piece of configuration.
//!
//! | plugin | adds |
//! |---|---|
//! | [`ImagesPlugin`] | `url-loader` rule for png/jpg/gif/svg |
//! | [`HtmlPlugin`] | `html-webpack-plugin` |
//! | [`CopyPlugin`] | `copy-webpack-plugin` for static content |
//! | [`CleanPlugin`] | `clean-webpack-plugin` |
//! | [`WriteFilePlugin`] | `write-file-webpack-plugin` |
//! | [`WebDevPlugin`] | `devServer` settings |

mod clean;
mod copy;
mod html;
mod images;
mod web_dev;
mod write_file;

pub use clean::{CLEAN_PLUGIN, CleanPlugin};
pub use copy::{COPY_PLUGIN, CopyPlugin, CopyPluginOptions};
pub use html::{HTML_PLUGIN, HtmlPlugin, HtmlPluginOptions};
pub use images::{ImagesPlugin, ImagesPluginOptions};
pub use web_dev::{WebDevPlugin, WebDevPluginOptions};
pub use write_file::{WRITE_FILE_PLUGIN, WriteFilePlugin};
