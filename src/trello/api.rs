use reqwest::Response;
use secrecy::ExposeSecret;
use serde_json::Value;
use tracing::error;

use super::error::{ApiError, Verb};
use super::Client;

pub static API_HOST: &str = "https://api.trello.com/1";

/// Caller supplied query parameters for `get` and `delete`.
pub type Query = serde_json::Map<String, Value>;

type Result<T> = std::result::Result<T, ApiError>;

impl Client {
    pub async fn get(&self, endpoint: &str, params: Option<&Query>) -> Result<Value> {
        self.request(Verb::Get, endpoint, params, None).await
    }

    pub async fn post(&self, endpoint: &str, data: Option<&Value>) -> Result<Value> {
        self.request(Verb::Post, endpoint, None, data).await
    }

    pub async fn put(&self, endpoint: &str, data: Option<&Value>) -> Result<Value> {
        self.request(Verb::Put, endpoint, None, data).await
    }

    pub async fn delete(&self, endpoint: &str, params: Option<&Query>) -> Result<Value> {
        self.request(Verb::Delete, endpoint, params, None).await
    }

    async fn request(
        &self,
        verb: Verb,
        endpoint: &str,
        params: Option<&Query>,
        data: Option<&Value>,
    ) -> Result<Value> {
        let mut request = self
            .client
            .request(verb.method(), self.url(endpoint))
            .query(&self.query(params));
        if let Some(body) = data {
            request = request.json(body);
        }

        match request.send().await {
            Ok(response) => self.response_body(verb, endpoint, response).await,
            Err(_) => Err(transport_error(verb, endpoint)),
        }
    }

    fn url(&self, endpoint: &str) -> String {
        if endpoint.starts_with('/') {
            format!("{}{}", self.base_url, endpoint)
        } else {
            format!("{}/{}", self.base_url, endpoint)
        }
    }

    /// Auth pair first, then caller params. A caller `key` or `token`
    /// replaces the auth value.
    fn query(&self, params: Option<&Query>) -> Vec<(String, String)> {
        let mut pairs = vec![
            ("key".to_string(), self.api_key.expose_secret().clone()),
            ("token".to_string(), self.token.expose_secret().clone()),
        ];

        for (name, value) in params.into_iter().flatten() {
            pairs.retain(|(k, _)| k != name);
            match value {
                Value::Array(items) => {
                    for item in items {
                        pairs.push((name.clone(), query_value(item)));
                    }
                }
                v => pairs.push((name.clone(), query_value(v))),
            }
        }

        pairs
    }

    async fn response_body(&self, verb: Verb, endpoint: &str, response: Response) -> Result<Value> {
        let status = response.status();
        if !status.is_success() {
            error!("HTTP {} error for endpoint {}", status.as_u16(), endpoint);
            return Err(ApiError::Status {
                verb,
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|_| transport_error(verb, endpoint))?;
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }

        serde_json::from_slice(&body).map_err(|_| {
            error!("Invalid JSON response for endpoint {}", endpoint);
            ApiError::Decode {
                verb,
                endpoint: endpoint.to_string(),
            }
        })
    }
}

fn transport_error(verb: Verb, endpoint: &str) -> ApiError {
    error!("Request error for endpoint {}: Connection failed", endpoint);
    ApiError::Transport {
        verb,
        endpoint: endpoint.to_string(),
    }
}

fn query_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        v => v.to_string(),
    }
}
