//! Development server configuration types.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DevServer {
    /// Directory served as static content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_base: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compress: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quiet: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,

    /// Serve `index.html` for unknown routes (SPA routing)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history_api_fallback: Option<bool>,

    /// Any other dev-server setting, forwarded untouched (proxy, headers, https, ...)
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}
