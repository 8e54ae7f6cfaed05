use configuration::error::ConfigError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyticsError {
    #[error("Invalid analytics configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
}
