use super::types::*;
use super::{Toolchain, ToolchainError};
use crate::store::Syntax;
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tokio::sync::OnceCell;

/// HTTP client for the hosted compiler bundle
///
/// The server loads the compiler bundle on its first warm-up request;
/// `loaded` guards that handshake so it runs exactly once per client,
/// single-flight under concurrent first use.
pub struct HttpToolchain {
    http: Client,
    endpoint: String,
    loaded: OnceCell<()>,
}

impl HttpToolchain {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_timeout(endpoint, Duration::from_secs(120))
    }

    pub fn with_timeout(endpoint: impl Into<String>, timeout: Duration) -> Self {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            http,
            endpoint: endpoint.into(),
            loaded: OnceCell::new(),
        }
    }

    /// One-time bundle warm-up
    ///
    /// Concurrent first callers share a single in-flight handshake. A
    /// failed warm-up leaves the cell empty, so the next caller retries.
    async fn ensure_loaded(&self) -> Result<(), ToolchainError> {
        self.loaded
            .get_or_try_init(|| async {
                tracing::debug!(endpoint = %self.endpoint, "loading compiler bundle");

                let response = self
                    .http
                    .get(format!("{}/health", self.endpoint))
                    .send()
                    .await?;

                let status = response.status();
                if !status.is_success() {
                    let body = response
                        .text()
                        .await
                        .unwrap_or_else(|_| "Unknown error".to_string());
                    return Err(ToolchainError::Server {
                        status: status.as_u16(),
                        body,
                    });
                }

                Ok(())
            })
            .await
            .map(|_| ())
    }

    async fn post_json<Req, Res>(&self, path: &str, request: &Req) -> Result<Res, ToolchainError>
    where
        Req: Serialize + Sync,
        Res: DeserializeOwned,
    {
        let response = self
            .http
            .post(format!("{}{}", self.endpoint, path))
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ToolchainError::Server {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json().await?)
    }
}

fn entry_point(syntax: Syntax) -> &'static str {
    match syntax {
        Syntax::Reason | Syntax::ReasonInterface => "reason",
        Syntax::Ocaml => "ocaml",
    }
}

#[async_trait]
impl Toolchain for HttpToolchain {
    async fn list_dependencies(
        &self,
        code: &str,
        syntax: Syntax,
    ) -> Result<Vec<String>, ToolchainError> {
        self.ensure_loaded().await?;

        let request = ListDependenciesRequest {
            code: code.to_string(),
            syntax: entry_point(syntax).to_string(),
        };
        let response: ListDependenciesResponse =
            self.post_json("/list-dependencies", &request).await?;
        Ok(response.dependencies)
    }

    async fn translate_ocaml(&self, code: &str) -> Result<String, ToolchainError> {
        self.ensure_loaded().await?;

        let request = TranslateRequest {
            code: code.to_string(),
        };
        let response: TranslateResponse = self.post_json("/translate", &request).await?;
        Ok(response.code)
    }

    async fn compile(&self, source: &str) -> Result<RawCompileResult, ToolchainError> {
        self.ensure_loaded().await?;

        let request = CompileRequest {
            source: source.to_string(),
        };
        self.post_json("/compile", &request).await
    }
}
