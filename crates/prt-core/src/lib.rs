pub mod app_config;
pub mod config;
pub mod events;
pub mod regions;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use events::EventRecord;
pub use regions::{domain_for, Region, FALLBACK_DOMAIN, REGIONS};

use thiserror::Error;

/// Errors produced while loading application configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
