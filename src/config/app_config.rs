use std::time::Duration;

use serde::Deserialize;

use crate::domain::ChunkingConfig;

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub executor: ExecutorConfig,
    pub builder: BuilderConfig,
    pub knowledge: KnowledgeConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Where the builder sends workflows to be run
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExecutorConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

/// Canvas-side settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BuilderConfig {
    pub workflow_name: String,
    pub status_clear_ms: u64,
}

/// Document chunking and retrieval settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct KnowledgeConfig {
    pub chunk_size: usize,
    pub chunk_overlap: usize,
    pub top_k: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            timeout_secs: 60,
        }
    }
}

impl ExecutorConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            workflow_name: crate::domain::workflow::DEFAULT_WORKFLOW_NAME.to_string(),
            status_clear_ms: 3000,
        }
    }
}

impl BuilderConfig {
    pub fn status_clear(&self) -> Duration {
        Duration::from_millis(self.status_clear_ms)
    }
}

impl Default for KnowledgeConfig {
    fn default() -> Self {
        let chunking = ChunkingConfig::default();
        Self {
            chunk_size: chunking.chunk_size,
            chunk_overlap: chunking.chunk_overlap,
            top_k: 5,
        }
    }
}

impl KnowledgeConfig {
    pub fn chunking(&self) -> ChunkingConfig {
        ChunkingConfig::new(self.chunk_size, self.chunk_overlap)
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
