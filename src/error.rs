use thiserror::Error;

use crate::config::ConfigError;

pub type Result<T> = std::result::Result<T, UpdateError>;

/// Every way an update run can fail. All of them end the process.
#[derive(Debug, Error)]
pub enum UpdateError {
    #[error("Domain, sub domain and IP are required.")]
    MissingArgument,

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Zone not found for domain {domain}")]
    ZoneNotFound { domain: String },

    #[error("A record not found for sub domain {sub_domain}")]
    RecordNotFound { sub_domain: String },

    /// Transport, authentication or validation failure reported by the provider.
    #[error(transparent)]
    Provider(#[from] anyhow::Error),
}
