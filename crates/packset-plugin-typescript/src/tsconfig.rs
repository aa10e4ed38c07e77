//! tsconfig.json loading
//!
//! Parses the project's tsconfig the way the TypeScript tooling does: JSON
//! with comments and trailing commas, following relative `extends` chains.
//! Only the compiler options the plugin acts on are typed; the rest is kept
//! as raw JSON.

use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use packset_config::{ConfigError, Result};
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;

/// Longest `extends` chain followed before giving up
const MAX_EXTENDS_DEPTH: usize = 16;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TsConfig {
    #[serde(default)]
    pub extends: Option<String>,

    #[serde(default)]
    pub compiler_options: Option<CompilerOptions>,

    #[serde(flatten)]
    pub other: IndexMap<String, Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompilerOptions {
    /// Base directory for non-relative module names
    #[serde(default)]
    pub base_url: Option<String>,

    /// Path mapping, relative to `base_url`
    #[serde(default)]
    pub paths: Option<IndexMap<String, Vec<String>>>,

    /// JSX emit mode ("react", "preserve", ...)
    #[serde(default)]
    pub jsx: Option<Value>,

    #[serde(flatten)]
    pub other: IndexMap<String, Value>,
}

impl TsConfig {
    /// `compilerOptions.baseUrl`, when present and not blank
    pub fn base_url(&self) -> Option<&str> {
        self.compiler_options
            .as_ref()
            .and_then(|options| options.base_url.as_deref())
            .filter(|base_url| !base_url.trim().is_empty())
    }

    /// Whether `compilerOptions.jsx` is set
    pub fn has_jsx(&self) -> bool {
        self.compiler_options
            .as_ref()
            .and_then(|options| options.jsx.as_ref())
            .is_some_and(|jsx| !jsx.is_null())
    }
}

/// Load the tsconfig at `path`.
///
/// Returns `Ok(None)` when the file does not exist.
///
/// # Errors
///
/// Returns `ConfigError::Parse` for malformed files (including anything in
/// the `extends` chain) and `ConfigError::Io` for unreadable ones.
pub fn load_tsconfig(path: &Path) -> Result<Option<TsConfig>> {
    if !path.is_file() {
        return Ok(None);
    }

    let raw = load_raw(path, 0)?;
    let config = serde_json::from_value(raw).map_err(|e| ConfigError::parse(path, e))?;
    Ok(Some(config))
}

fn load_raw(path: &Path, depth: usize) -> Result<Value> {
    if depth > MAX_EXTENDS_DEPTH {
        return Err(ConfigError::parse(
            path,
            format!("`extends` chain is deeper than {MAX_EXTENDS_DEPTH} files"),
        ));
    }

    let content = fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
    let mut config: Value = json5::from_str(&content).map_err(|e| ConfigError::parse(path, e))?;
    if !config.is_object() {
        return Err(ConfigError::parse(path, "expected a JSON object"));
    }

    let Some(extends) = config.get("extends").and_then(Value::as_str) else {
        return Ok(config);
    };

    let Some(base_path) = resolve_extends(path, extends) else {
        debug!(extends, "skipping non-relative tsconfig extends");
        return Ok(config);
    };

    let mut base = load_raw(&base_path, depth + 1)?;
    rebase_base_url(&mut base, &base_path);
    merge_tsconfig(&mut base, &mut config);
    Ok(base)
}

/// Path of a relative `extends` target; package references are not followed
fn resolve_extends(from: &Path, extends: &str) -> Option<PathBuf> {
    let target = Path::new(extends);
    if !(extends.starts_with('.') || target.is_absolute()) {
        return None;
    }

    let mut resolved = from.parent().unwrap_or(Path::new("")).join(target);
    if resolved.extension().is_none_or(|ext| ext != "json") {
        let mut name = resolved.into_os_string();
        name.push(".json");
        resolved = PathBuf::from(name);
    }
    Some(resolved)
}

/// A `baseUrl` in an extended config is relative to that config's directory
fn rebase_base_url(base: &mut Value, base_path: &Path) {
    let Some(base_url) = base
        .get_mut("compilerOptions")
        .and_then(|options| options.get_mut("baseUrl"))
    else {
        return;
    };

    if let Some(url) = base_url.as_str() {
        let dir = base_path.parent().unwrap_or(Path::new(""));
        *base_url = Value::String(dir.join(url).to_string_lossy().into_owned());
    }
}

/// Overlay `child` onto `base`: compiler options merge per key, everything else is replaced
fn merge_tsconfig(base: &mut Value, child: &mut Value) {
    let (Some(base_map), Some(child_map)) = (base.as_object_mut(), child.as_object_mut()) else {
        return;
    };

    let child_options = child_map.remove("compilerOptions");
    for (key, value) in std::mem::take(child_map) {
        base_map.insert(key, value);
    }

    if let Some(Value::Object(child_options)) = child_options {
        let options = base_map
            .entry("compilerOptions")
            .or_insert_with(|| Value::Object(Map::new()));
        match options {
            Value::Object(options) => options.extend(child_options),
            other => *other = Value::Object(child_options),
        }
    }
}
