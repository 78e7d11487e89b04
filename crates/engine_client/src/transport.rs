//! Command surface of the external engine, behind a trait so tests can script it.

use async_trait::async_trait;
use serde_json::Value;
use url::Url;

use crate::error::TransportError;

/// One named call with named JSON arguments, one raw JSON reply.
///
/// Implementations own the wire; they do not interpret the reply beyond
/// proving it is JSON. Every invocation is independent: no queuing, no
/// de-duplication, no retries, no timeout at this layer.
#[async_trait]
pub trait EngineTransport: Send + Sync {
    async fn invoke(&self, command: &str, args: Value) -> Result<Value, TransportError>;
}

/// HTTP rendition of the command surface: `POST {base}/commands/{name}` with
/// the argument object as the JSON body.
pub struct HttpEngineTransport {
    http: reqwest::Client,
    base_url: Url,
}

impl HttpEngineTransport {
    pub fn new(base_url: &str) -> Result<Self, TransportError> {
        let base_url = Url::parse(base_url)
            .map_err(|err| TransportError::Connection(format!("invalid engine url: {err}")))?;
        Ok(Self {
            http: reqwest::Client::new(),
            base_url,
        })
    }

    fn command_url(&self, command: &str) -> Result<Url, TransportError> {
        self.base_url
            .join(&format!("commands/{command}"))
            .map_err(|err| TransportError::Connection(format!("invalid command url: {err}")))
    }
}

#[async_trait]
impl EngineTransport for HttpEngineTransport {
    async fn invoke(&self, command: &str, args: Value) -> Result<Value, TransportError> {
        let url = self.command_url(command)?;
        let response = self.http.post(url).json(&args).send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(TransportError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(TransportError::MalformedReply)
    }
}
