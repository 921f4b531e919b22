use std::{env, str::FromStr, time::Duration};

use chrono_tz::Tz;

use super::env::{
    AppConfig, BatchIoConfig, ConfigError, DirectoryConfig, LoggingConfig, ModerationConfig,
};

pub fn load_config() -> Result<AppConfig, ConfigError> {
    AppConfig::from_env()
}

impl AppConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let defaults = ModerationConfig::default();
        let timezone = match get("MODERATION_TIMEZONE") {
            Some(raw) => raw.trim().parse::<Tz>().map_err(|_| ConfigError::Invalid {
                key: "MODERATION_TIMEZONE",
                value: raw.clone(),
            })?,
            None => defaults.timezone,
        };

        let moderation = ModerationConfig {
            analysis_delay: Duration::from_millis(
                parse_or("MODERATION_ANALYSIS_DELAY_MS", get("MODERATION_ANALYSIS_DELAY_MS"))?
                    .unwrap_or(defaults.analysis_delay.as_millis() as u64),
            ),
            max_content_length: parse_or(
                "MODERATION_MAX_CONTENT_LENGTH",
                get("MODERATION_MAX_CONTENT_LENGTH"),
            )?
            .unwrap_or(defaults.max_content_length),
            timezone,
        };

        let directories = DirectoryConfig {
            logs_dir: get("LOGS_DIR").unwrap_or_else(|| "logs".to_string()),
        };

        let logging = LoggingConfig {
            level: get("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
        };

        let io = BatchIoConfig {
            input_path: get("MODERATION_INPUT"),
            output_path: get("MODERATION_OUTPUT"),
        };

        Ok(Self {
            moderation,
            directories,
            logging,
            io,
        })
    }
}

fn parse_or<T: FromStr>(key: &'static str, raw: Option<String>) -> Result<Option<T>, ConfigError> {
    match raw {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::Invalid { key, value }),
    }
}
