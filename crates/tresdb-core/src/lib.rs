pub mod app_config;
pub mod config;
pub mod listing;
pub mod provinces;
pub mod records;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use listing::{filter_records, group_by_location, matches_query, LocationGroup};
pub use provinces::{
    list_provinces, load_provinces, resolve_province, ProvinceDescriptor, ProvinceRegistry,
};
pub use records::{NormalizationResult, ProviderRecord};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("unknown province: {id}")]
    NotFound { id: String },

    #[error("failed to read provinces file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse provinces file: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("invalid province registry: {0}")]
    Validation(String),
}
