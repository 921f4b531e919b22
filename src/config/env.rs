use std::time::Duration;

use chrono_tz::Tz;
use thiserror::Error;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub moderation: ModerationConfig,
    pub directories: DirectoryConfig,
    pub logging: LoggingConfig,
    pub io: BatchIoConfig,
}

#[derive(Debug, Clone)]
pub struct ModerationConfig {
    pub analysis_delay: Duration,
    pub max_content_length: usize,
    pub timezone: Tz,
}

impl Default for ModerationConfig {
    fn default() -> Self {
        Self {
            analysis_delay: Duration::from_millis(1_000),
            max_content_length: 20_000,
            timezone: chrono_tz::Asia::Jakarta,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DirectoryConfig {
    pub logs_dir: String,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Clone, Default)]
pub struct BatchIoConfig {
    pub input_path: Option<String>,
    pub output_path: Option<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for environment variable {key}")]
    Invalid { key: &'static str, value: String },
}
