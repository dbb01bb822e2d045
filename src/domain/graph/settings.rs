//! Typed views over untyped node configuration

use serde::{Deserialize, Serialize};

use super::node::NodeConfig;

/// Settings of an LLM Engine node
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LlmEngineSettings {
    /// System prompt, when one was entered
    pub prompt: Option<String>,
    /// Whether to feed knowledge base context into the prompt
    pub use_context: bool,
}

impl LlmEngineSettings {
    /// Read from a node configuration. Wrong-typed values count as unset.
    pub fn from_config(config: &NodeConfig) -> Self {
        let prompt = config
            .get("prompt")
            .and_then(|v| v.as_str())
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string);

        let use_context = config
            .get("useContext")
            .and_then(|v| v.as_bool())
            .unwrap_or(false);

        Self {
            prompt,
            use_context,
        }
    }
}

/// Rendering format chosen on an Output node
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Markdown,
    Json,
}

impl OutputFormat {
    /// Read the `format` field, falling back to plain text
    pub fn from_config(config: &NodeConfig) -> Self {
        config
            .get("format")
            .cloned()
            .and_then(|v| serde_json::from_value(v).ok())
            .unwrap_or_default()
    }
}
