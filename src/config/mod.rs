pub mod models;

pub use models::{ConfigError, Credentials, Settings};
