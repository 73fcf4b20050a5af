use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use shared::protocol::GenerateRequest;
use thiserror::Error;
use tracing::{debug, warn};
use url::Url;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum RequestError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: BoxError,
    },
    #[error("response from {url} (status {status}) is not valid JSON: {source}")]
    Decode {
        url: String,
        status: u16,
        #[source]
        source: serde_json::Error,
    },
}

#[async_trait]
pub trait GenerateTransport: Send + Sync {
    /// Sends one generate request and returns the decoded JSON body.
    async fn send_generate(&self, request: &GenerateRequest) -> Result<Value, RequestError>;
}

/// Posts generate requests to a single fixed endpoint.
///
/// No timeout is configured on the underlying client, so a request lasts as
/// long as the transport keeps it open.
#[derive(Debug, Clone)]
pub struct HttpGenerateClient {
    http: Client,
    endpoint: Url,
}

impl HttpGenerateClient {
    pub fn new(endpoint: Url) -> Self {
        Self {
            http: Client::new(),
            endpoint,
        }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl GenerateTransport for HttpGenerateClient {
    async fn send_generate(&self, request: &GenerateRequest) -> Result<Value, RequestError> {
        let url = self.endpoint.to_string();
        debug!(url = %url, "sending generate request");

        let res = self
            .http
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await
            .map_err(|err| RequestError::Transport {
                url: url.clone(),
                source: err.into(),
            })?;

        let status = res.status();
        if !status.is_success() {
            // The body still decides the outcome; only a non-JSON body fails.
            warn!(url = %url, status = status.as_u16(), "generate endpoint returned non-success status");
        }

        let body = res.bytes().await.map_err(|err| RequestError::Transport {
            url: url.clone(),
            source: err.into(),
        })?;

        serde_json::from_slice(&body).map_err(|source| RequestError::Decode {
            url,
            status: status.as_u16(),
            source,
        })
    }
}
