//! reqwest-backed implementation of the `HttpTransport` seam.

use async_trait::async_trait;
use docquery_config::AppConfig;
use docquery_core::{ApiRequest, ApiResponse, HttpTransport, Method, RequestBody, TransportError};
use serde_json::Value;
use std::time::Duration;

/// Talks to the real backend over HTTP.
pub struct ReqwestTransport {
    base_url: String,
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Create a transport against the given base URL.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TransportError(e.to_string()))?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, TransportError> {
        Self::new(&config.api_base, Duration::from_secs(config.timeout_secs))
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let url = format!("{}{}", self.base_url, request.path);

        let mut builder = match request.method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
            Method::Delete => self.client.delete(&url),
        };

        if let Some(token) = &request.bearer {
            builder = builder.bearer_auth(token);
        }

        builder = match request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.json(&value),
            RequestBody::Multipart(file) => {
                let part = reqwest::multipart::Part::bytes(file.bytes)
                    .file_name(file.filename)
                    .mime_str(&file.mime_type)
                    .map_err(|e| TransportError(e.to_string()))?;
                builder.multipart(reqwest::multipart::Form::new().part("file", part))
            }
        };

        tracing::debug!(method = ?request.method, path = %request.path, "Issuing request");

        let response = builder
            .send()
            .await
            .map_err(|e| TransportError(e.to_string()))?;

        let status = response.status().as_u16();

        // Bodies are JSON when present; anything else reads as Null and the
        // status mapping decides what that means.
        let body = response.json::<Value>().await.unwrap_or(Value::Null);

        Ok(ApiResponse::new(status, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_stripped() {
        let transport =
            ReqwestTransport::new("http://localhost:8000/", Duration::from_secs(5)).unwrap();
        assert_eq!(transport.base_url, "http://localhost:8000");
    }

    #[test]
    fn from_config_uses_configured_base() {
        let config = AppConfig::default();
        let transport = ReqwestTransport::from_config(&config).unwrap();
        assert_eq!(transport.base_url, config.api_base);
    }
}
