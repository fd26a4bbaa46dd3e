//! HTTP client for the control plane.

pub mod accounts;
pub mod metrics;
pub mod notifications;
pub mod throughput;
pub mod triggers;

#[cfg(test)]
pub(crate) mod mock;

use dataexplorer_core::arm::ResourcePath;
use reqwest::Method;
use serde::Deserialize;
use tracing::debug;
use url::Url;

use crate::config::Config;
use crate::error::{ClientError, Result};

/// HTTP client for the database-account control plane.
#[derive(Debug, Clone)]
pub struct ArmClient {
    client: reqwest::Client,
    base_url: Url,
    api_version: String,
}

impl ArmClient {
    /// Create a new client with the given base URL and `api-version`.
    pub fn new(base_url: &str, api_version: impl Into<String>) -> Result<Self> {
        Self::with_http_client(reqwest::Client::new(), base_url, api_version)
    }

    /// Create a client around an already configured `reqwest::Client`.
    pub fn with_http_client(
        client: reqwest::Client,
        base_url: &str,
        api_version: impl Into<String>,
    ) -> Result<Self> {
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidInput(format!(
                "{} cannot be used as a base URL",
                base_url
            )));
        }
        Ok(Self {
            client,
            base_url,
            api_version: api_version.into(),
        })
    }

    /// Create from a loaded [`Config`], applying its request timeout.
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()?;
        Self::with_http_client(client, &config.arm_url, config.api_version.clone())
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    /// Build the URL for a resource path, with the `api-version` query.
    fn url(&self, path: &ResourcePath) -> Result<Url> {
        self.url_with_query(path, &[])
    }

    /// Like [`ArmClient::url`], with extra query pairs after `api-version`.
    fn url_with_query(&self, path: &ResourcePath, query: &[(&str, &str)]) -> Result<Url> {
        let mut url = self.unversioned_url(path.segments())?;
        url.query_pairs_mut()
            .append_pair("api-version", &self.api_version)
            .extend_pairs(query);
        Ok(url)
    }

    /// Appends percent-encoded segments to the base URL.
    fn unversioned_url<I>(&self, segments: I) -> Result<Url>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                ClientError::InvalidInput(format!("{} cannot be used as a base URL", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, path: &ResourcePath) -> Result<reqwest::RequestBuilder> {
        self.request_with_query(method, path, &[])
    }

    fn request_with_query(
        &self,
        method: Method,
        path: &ResourcePath,
        query: &[(&str, &str)],
    ) -> Result<reqwest::RequestBuilder> {
        let url = self.url_with_query(path, query)?;
        debug!(%method, %path, "Sending control-plane request");
        Ok(self.client.request(method, url))
    }

    /// Handle responses carrying a JSON body.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        path: &ResourcePath,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            response.json().await.map_err(ClientError::from)
        } else {
            Err(error_from_response(path, response).await)
        }
    }

    /// Handle responses where no body is expected.
    async fn handle_empty_response(
        &self,
        path: &ResourcePath,
        response: reqwest::Response,
    ) -> Result<()> {
        if response.status().is_success() {
            Ok(())
        } else {
            Err(error_from_response(path, response).await)
        }
    }
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    code: Option<String>,
    message: String,
}

async fn error_from_response(path: &ResourcePath, response: reqwest::Response) -> ClientError {
    let status = response.status().as_u16();
    if status == 404 {
        return ClientError::NotFound {
            resource: path.to_string(),
        };
    }
    let text = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    ClientError::ServerError {
        status,
        message: error_message(&text),
    }
}

/// Extracts `code: message` from a control-plane error envelope, or returns
/// the raw body.
fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(ErrorEnvelope {
            error: ErrorBody {
                code: Some(code),
                message,
            },
        }) => format!("{}: {}", code, message),
        Ok(envelope) => envelope.error.message,
        Err(_) if body.trim().is_empty() => "Unknown error".to_string(),
        Err(_) => body.to_string(),
    }
}
