use indexmap::IndexMap;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ConfigError, Result};

/// Module handling options
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModuleOptions {
    /// Rules matched against every module request, in order
    #[serde(default)]
    pub rules: Vec<Rule>,
}

impl ModuleOptions {
    /// Find the first rule whose pattern matches `path` and whose exclusion doesn't.
    pub fn rule_for(&self, path: &str) -> Result<Option<&Rule>> {
        for rule in &self.rules {
            if rule.matches(path)? {
                return Ok(Some(rule));
            }
        }
        Ok(None)
    }
}

/// A module rule: which files it applies to and which loaders process them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    /// Regular expression source matched against the resource path
    pub test: String,

    /// Loader chain, applied last to first by the bundler
    #[serde(rename = "use", default, skip_serializing_if = "Vec::is_empty")]
    pub use_entries: Vec<UseEntry>,

    /// Single loader shorthand (alternative to `use`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loader: Option<String>,

    /// Options for the `loader` shorthand
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Value>,

    /// Regular expression source for paths this rule must skip
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude: Option<String>,

    /// Any other rule condition or setting (include, oneOf, ...)
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl Rule {
    pub fn new(test: impl Into<String>) -> Self {
        Self {
            test: test.into(),
            use_entries: Vec::new(),
            loader: None,
            options: None,
            exclude: None,
            extra: IndexMap::new(),
        }
    }

    /// Append a loader to the `use` chain
    pub fn with_use(mut self, entry: impl Into<UseEntry>) -> Self {
        self.use_entries.push(entry.into());
        self
    }

    /// Use a single loader with options
    pub fn with_loader(mut self, loader: impl Into<String>, options: Value) -> Self {
        self.loader = Some(loader.into());
        self.options = Some(options);
        self
    }

    pub fn with_exclude(mut self, exclude: impl Into<String>) -> Self {
        self.exclude = Some(exclude.into());
        self
    }

    /// Names of every loader this rule applies, in declaration order
    pub fn loaders(&self) -> Vec<&str> {
        let mut loaders: Vec<&str> = self.use_entries.iter().map(UseEntry::loader).collect();
        if let Some(loader) = &self.loader {
            loaders.push(loader);
        }
        loaders
    }

    /// Check whether `path` is handled by this rule.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidPattern` when `test` or `exclude` is not a valid regex.
    pub fn matches(&self, path: &str) -> Result<bool> {
        if !compile(&self.test)?.is_match(path) {
            return Ok(false);
        }

        match &self.exclude {
            Some(exclude) => Ok(!compile(exclude)?.is_match(path)),
            None => Ok(true),
        }
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| ConfigError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}

/// One loader in a rule's `use` chain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UseEntry {
    /// Bare loader name
    Name(String),
    /// Loader with options
    Loader(LoaderSpec),
}

impl UseEntry {
    pub fn loader(&self) -> &str {
        match self {
            UseEntry::Name(name) => name,
            UseEntry::Loader(spec) => &spec.loader,
        }
    }
}

impl From<&str> for UseEntry {
    fn from(value: &str) -> Self {
        UseEntry::Name(value.to_string())
    }
}

impl From<LoaderSpec> for UseEntry {
    fn from(value: LoaderSpec) -> Self {
        UseEntry::Loader(value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoaderSpec {
    pub loader: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Value>,
}

impl LoaderSpec {
    pub fn new(loader: impl Into<String>, options: Value) -> Self {
        Self {
            loader: loader.into(),
            options: Some(options),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rule_matches_respects_exclude() {
        let rule = Rule::new(r"\.tsx?$").with_exclude("node_modules");
        assert!(rule.matches("src/index.ts").unwrap());
        assert!(rule.matches("src/app.tsx").unwrap());
        assert!(!rule.matches("node_modules/lib/index.ts").unwrap());
        assert!(!rule.matches("src/index.js").unwrap());
    }

    #[test]
    fn invalid_pattern_is_reported() {
        let rule = Rule::new(r"\.(ts");
        assert!(matches!(
            rule.matches("a.ts"),
            Err(ConfigError::InvalidPattern { .. })
        ));
    }

    #[test]
    fn rule_for_returns_first_match() {
        let module = ModuleOptions {
            rules: vec![
                Rule::new(r"\.css$").with_use("style-loader").with_use("css-loader"),
                Rule::new(r"\.(png|jpg|gif|svg)$").with_loader("url-loader", json!({})),
            ],
        };

        let rule = module.rule_for("logo.svg").unwrap().unwrap();
        assert_eq!(rule.loaders(), vec!["url-loader"]);
        assert!(module.rule_for("index.html").unwrap().is_none());
    }

    #[test]
    fn use_entries_serialize_as_strings_or_objects() {
        let rule = Rule::new(r"\.tsx?$")
            .with_use(LoaderSpec::new("ts-loader", json!({ "transpileOnly": true })))
            .with_use("babel-loader");

        let value = serde_json::to_value(&rule).unwrap();
        assert_eq!(
            value,
            json!({
                "test": "\\.tsx?$",
                "use": [
                    { "loader": "ts-loader", "options": { "transpileOnly": true } },
                    "babel-loader"
                ]
            })
        );
    }
}
