use super::error::RequestError;
use async_trait::async_trait;
use reqwest::{Client, Method};
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

/// Response envelope: the API wraps every payload in a `data` field
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse {
    pub data: Value,
}

/// Seam to the REST API
#[async_trait]
pub trait ApiClient: Send + Sync {
    /// Perform exactly one call against the API
    async fn call(
        &self,
        path: &str,
        method: Method,
        body: Option<Value>,
    ) -> Result<ApiResponse, RequestError>;
}

pub struct RestClient {
    http: Client,
    endpoint: String,
}

impl RestClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_timeout(endpoint, Duration::from_secs(30))
    }

    pub fn with_timeout(endpoint: impl Into<String>, timeout: Duration) -> Self {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            http,
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl ApiClient for RestClient {
    async fn call(
        &self,
        path: &str,
        method: Method,
        body: Option<Value>,
    ) -> Result<ApiResponse, RequestError> {
        let mut request = self
            .http
            .request(method, format!("{}/{}", self.endpoint, path));

        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(RequestError::Server {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json().await?)
    }
}
