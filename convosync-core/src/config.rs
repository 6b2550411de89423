use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::Result;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ConvoSyncConfig {
    #[serde(default)]
    pub merge: MergeConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct MergeConfig {
    /// Fixed target session id. Unset means "use the newer log's id".
    pub session_id: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl ConvoSyncConfig {
    /// Load from an optional TOML file, then `CONVOSYNC__*` env vars on top.
    pub fn load(path: Option<&str>) -> Result<Self> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::with_name(path));
        }
        let s = builder
            .add_source(Environment::with_prefix("CONVOSYNC").separator("__"))
            .build()?;
        Ok(s.try_deserialize()?)
    }
}
