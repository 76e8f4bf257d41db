use std::fmt;

use thiserror::Error;

use crate::api::cloudflare::API_BASE_URL;

pub const API_TOKEN_VAR: &str = "CLOUDFLARE_API_TOKEN";
pub const EMAIL_VAR: &str = "CLOUDFLARE_EMAIL";
pub const API_KEY_VAR: &str = "CLOUDFLARE_API_KEY";
pub const API_BASE_URL_VAR: &str = "CLOUDFLARE_API_BASE_URL";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error(
        "Cloudflare credentials are not set: provide CLOUDFLARE_API_TOKEN, or CLOUDFLARE_EMAIL and CLOUDFLARE_API_KEY"
    )]
    MissingCredentials,
}

#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    /// Scoped API token, sent as a bearer token.
    Token(String),
    /// Account email plus global API key.
    GlobalKey { email: String, key: String },
}

// Secrets never reach logs.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credentials::Token(_) => f.debug_tuple("Token").field(&"<REDACTED>").finish(),
            Credentials::GlobalKey { email, .. } => f
                .debug_struct("GlobalKey")
                .field("email", email)
                .field("key", &"<REDACTED>")
                .finish(),
        }
    }
}

impl Credentials {
    pub fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self {
            Credentials::Token(token) => request.bearer_auth(token),
            Credentials::GlobalKey { email, key } => request
                .header("X-Auth-Email", email)
                .header("X-Auth-Key", key),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub credentials: Credentials,
    pub api_base_url: String,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds settings from any variable lookup. Empty values count as unset.
    /// `CLOUDFLARE_API_TOKEN` wins; otherwise `CLOUDFLARE_API_KEY` is a global
    /// key when paired with `CLOUDFLARE_EMAIL` and a scoped token on its own.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let credentials = match (var(API_TOKEN_VAR), var(EMAIL_VAR), var(API_KEY_VAR)) {
            (Some(token), _, _) => Credentials::Token(token),
            (None, Some(email), Some(key)) => Credentials::GlobalKey { email, key },
            (None, None, Some(token)) => Credentials::Token(token),
            _ => return Err(ConfigError::MissingCredentials),
        };

        let api_base_url = var(API_BASE_URL_VAR)
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| API_BASE_URL.to_string());

        Ok(Self {
            credentials,
            api_base_url,
        })
    }
}
