pub mod app_config;
pub mod cafe;
pub mod config;
pub mod geo;

pub use app_config::AppConfig;
pub use cafe::{Cafe, Coordinate};
pub use config::{load_app_config, load_app_config_from_env};
pub use geo::distance_km;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
