mod api;
mod error;

use secrecy::Secret;
use serde::Deserialize;

pub use api::{Query, API_HOST};
pub use error::{ApiError, Verb};

/// Credentials section of the configuration.
#[derive(Clone, Debug, Deserialize)]
pub struct Params {
    pub api_key: Secret<String>,
    pub token: Secret<String>,
    pub base_url: Option<String>,
}

/// Async client for the Trello REST API.
///
/// Every request carries `key` and `token` as query parameters. The
/// underlying connection pool lives as long as the client and is released
/// by [`Client::close`] or by dropping it.
#[derive(Debug)]
pub struct Client {
    api_key: Secret<String>,
    token: Secret<String>,
    base_url: String,
    client: reqwest::Client,
}

impl Client {
    pub fn new(api_key: impl Into<String>, token: impl Into<String>) -> Self {
        Self::with_base_url(api_key, token, API_HOST)
    }

    pub fn with_base_url(
        api_key: impl Into<String>,
        token: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self::from_secrets(
            Secret::new(api_key.into()),
            Secret::new(token.into()),
            base_url.into(),
        )
    }

    fn from_secrets(api_key: Secret<String>, token: Secret<String>, base_url: String) -> Self {
        Self {
            api_key,
            token,
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn close(self) {
        drop(self.client);
    }
}

impl From<Params> for Client {
    fn from(item: Params) -> Self {
        let base_url = item.base_url.unwrap_or_else(|| API_HOST.to_string());
        Self::from_secrets(item.api_key, item.token, base_url)
    }
}
