pub mod loader;
pub mod types;

pub use loader::ConfigError;
pub use types::{Config, DataConfig, DisplayConfig, LoggingConfig, UiConfig};
