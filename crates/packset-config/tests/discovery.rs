//! Tests for project option discovery and layering

use figment::Jail;
use packset_config::{ConfigDiscovery, ConfigError, ProjectOptions, Target};

#[test]
fn defaults_without_any_source() {
    Jail::expect_with(|jail| {
        let options = ProjectOptions::load(jail.directory()).unwrap();

        assert_eq!(options, ProjectOptions::new(jail.directory()));
        assert_eq!(options.dev_server_port, 3000);
        assert!(options.emit_html);
        assert_eq!(options.entry_file, "./src/index.ts");
        assert_eq!(options.output_directory, "dist");
        assert_eq!(options.static_content_directory, "./src/static");
        assert_eq!(options.target, Target::Web);
        Ok(())
    });
}

#[test]
fn reads_packset_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "packset.toml",
            r#"
dev_server_port = 4000
emit_html = false
target = "electron-renderer"
"#,
        )?;

        let options = ProjectOptions::load(jail.directory()).unwrap();
        assert_eq!(options.dev_server_port, 4000);
        assert!(!options.emit_html);
        assert_eq!(options.target, Target::ElectronRenderer);
        assert_eq!(options.entry_file, "./src/index.ts");
        Ok(())
    });
}

#[test]
fn package_json_field_wins_over_files() {
    Jail::expect_with(|jail| {
        jail.create_file("packset.toml", "entry_file = \"./src/toml.ts\"\n")?;
        jail.create_file("packset.json", r#"{ "entry_file": "./src/json.ts" }"#)?;
        jail.create_file(
            "package.json",
            r#"{ "name": "app", "packset": { "entry_file": "./src/pkg.ts" } }"#,
        )?;

        let options = ProjectOptions::load(jail.directory()).unwrap();
        assert_eq!(options.entry_file, "./src/pkg.ts");
        Ok(())
    });
}

#[test]
fn json_file_wins_over_toml() {
    Jail::expect_with(|jail| {
        jail.create_file("packset.toml", "output_directory = \"build\"\n")?;
        jail.create_file("packset.json", r#"{ "output_directory": "public" }"#)?;

        let options = ProjectOptions::load(jail.directory()).unwrap();
        assert_eq!(options.output_directory, "public");
        Ok(())
    });
}

#[test]
fn environment_wins_over_everything() {
    Jail::expect_with(|jail| {
        jail.create_file("packset.toml", "dev_server_port = 4000\n")?;
        jail.set_env("PACKSET_DEV_SERVER_PORT", "8080");
        jail.set_env("PACKSET_TARGET", "node");

        let options = ProjectOptions::load(jail.directory()).unwrap();
        assert_eq!(options.dev_server_port, 8080);
        assert_eq!(options.target, Target::Node);
        Ok(())
    });
}

#[test]
fn project_directory_comes_from_the_caller() {
    Jail::expect_with(|jail| {
        jail.create_file("packset.json", r#"{ "project_directory": "/elsewhere" }"#)?;

        let options = ConfigDiscovery::new(jail.directory()).load().unwrap();
        assert_eq!(options.project_directory(), jail.directory());
        Ok(())
    });
}

#[test]
fn bad_value_is_invalid_value_error() {
    Jail::expect_with(|jail| {
        jail.create_file("packset.toml", "dev_server_port = \"not a port\"\n")?;

        let result = ProjectOptions::load(jail.directory());
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
        Ok(())
    });
}
