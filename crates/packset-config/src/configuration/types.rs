use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Build mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Development,
    Production,
    None,
}

/// Compilation target environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Target {
    /// Browser environment (default)
    #[default]
    Web,
    /// Web Workers
    Webworker,
    /// Node.js
    Node,
    /// Node.js with chunks loaded asynchronously
    AsyncNode,
    /// Electron main process
    ElectronMain,
    /// Electron renderer process
    ElectronRenderer,
    /// Electron preload script
    ElectronPreload,
    /// NW.js
    NodeWebkit,
}

impl Target {
    /// Whether this target is the plain `node` target.
    ///
    /// Only this exact value disables browser polyfill stubs.
    pub fn is_node(self) -> bool {
        matches!(self, Target::Node)
    }
}

/// Entry point(s) of the bundle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Entry {
    /// A single entry module
    Single(String),
    /// Several modules bundled into one chunk
    Multiple(Vec<String>),
    /// Named chunks
    Named(IndexMap<String, EntryImport>),
}

/// Module(s) behind one named entry chunk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntryImport {
    Single(String),
    Multiple(Vec<String>),
}

impl From<&str> for EntryImport {
    fn from(value: &str) -> Self {
        EntryImport::Single(value.to_string())
    }
}

impl From<&str> for Entry {
    fn from(value: &str) -> Self {
        Entry::Single(value.to_string())
    }
}

impl From<String> for Entry {
    fn from(value: String) -> Self {
        Entry::Single(value)
    }
}

impl From<Vec<String>> for Entry {
    fn from(value: Vec<String>) -> Self {
        Entry::Multiple(value)
    }
}

/// Replacement used for a Node.js core module in non-node builds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeStub {
    /// `true` bundles a polyfill, `false` provides nothing
    Enabled(bool),
    Kind(StubKind),
}

impl NodeStub {
    /// The empty-module sentinel (`"empty"`)
    pub const EMPTY: NodeStub = NodeStub::Kind(StubKind::Empty);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StubKind {
    /// Provide an empty object
    Empty,
    /// Provide a mock that implements some of the API
    Mock,
}

/// Node.js core module stubs, keyed by module name
pub type NodeOptions = IndexMap<String, NodeStub>;

/// Chunk optimization settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Optimization {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub split_chunks: Option<SplitChunks>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimize: Option<bool>,

    /// Any other optimization setting (runtimeChunk, minimizer, ...)
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SplitChunks {
    /// Which chunks are considered for splitting (`all`, `async` or `initial`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chunks: Option<String>,
}
