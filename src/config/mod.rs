pub mod env;
mod loader;

pub use env::{AppConfig, BatchIoConfig, ConfigError, DirectoryConfig, ModerationConfig};
pub use loader::load_config;
