//! Application configuration

mod app_config;

pub use app_config::{
    AppConfig, BuilderConfig, ExecutorConfig, KnowledgeConfig, LogFormat, LoggingConfig,
    ServerConfig,
};
