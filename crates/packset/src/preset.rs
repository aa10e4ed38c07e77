//! The default development preset.

use packset_config::{
    Builder, DevServer, Mode, Optimization, Output, ProjectOptions, SplitChunks, resolve_path,
};
use packset_plugin_styles::StylesPlugin;
use packset_plugin_typescript::TypeScriptPlugin;
use packset_plugins::{
    CleanPlugin, CopyPlugin, CopyPluginOptions, HtmlPlugin, ImagesPlugin, WebDevPlugin,
    WebDevPluginOptions, WriteFilePlugin,
};
use tracing::debug;

pub const BUNDLE_FILENAME: &str = "[name].bundle.js";
pub const DEVTOOL: &str = "inline-source-map";
pub const SPLIT_CHUNKS: &str = "all";
pub const JSON_EXTENSION: &str = ".json";

/// Development configuration for a TypeScript web project.
///
/// Seeds mode, entry, output, target, source maps and chunk splitting from
/// `options`, then applies, in order: clean, write-file, TypeScript, styles,
/// images, HTML (when `emit_html` is set), static copy and the dev server.
/// `.json` is resolved after every source extension.
///
/// The returned builder can be extended before calling
/// [`Builder::to_config`].
pub fn preset(options: &ProjectOptions) -> Builder {
    let project_directory = options.project_directory();
    debug!(project = %project_directory.display(), "building default preset");

    let output_path = resolve_path(project_directory, &options.output_directory);
    let entry = options.entry_file.clone();
    let target = options.target;

    let builder = Builder::new(project_directory)
        .update(move |mut config| {
            config.mode = Some(Mode::Development);
            config.entry = Some(entry.into());
            config.output = Some(
                Output::new(output_path)
                    .with_filename(BUNDLE_FILENAME)
                    .with_chunk_filename(BUNDLE_FILENAME),
            );
            config.target = Some(target);
            config.devtool = Some(DEVTOOL.to_string());
            config.optimization = Some(Optimization {
                split_chunks: Some(SplitChunks {
                    chunks: Some(SPLIT_CHUNKS.to_string()),
                }),
                ..Optimization::default()
            });
            config
        })
        .use_plugin(CleanPlugin, None)
        .use_plugin(WriteFilePlugin, None)
        .use_plugin(TypeScriptPlugin, None)
        .use_plugin(StylesPlugin, None)
        .use_plugin(ImagesPlugin, None);

    let builder = if options.emit_html {
        builder.use_plugin(HtmlPlugin, None)
    } else {
        builder
    };

    let dev_server = DevServer {
        port: Some(options.dev_server_port),
        ..WebDevPlugin::default_dev_server(project_directory)
    };

    builder
        .update(|mut config| {
            config.resolve_mut().add_extension(JSON_EXTENSION);
            config
        })
        .use_plugin(
            CopyPlugin,
            Some(CopyPluginOptions {
                from: Some(options.static_content_directory.clone()),
                to: None,
            }),
        )
        .use_plugin(
            WebDevPlugin,
            Some(WebDevPluginOptions {
                dev_server: Some(dev_server),
            }),
        )
}
