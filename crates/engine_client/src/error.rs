use thiserror::Error;

/// Failure of the call channel itself.
///
/// Deliberately disjoint from an engine reply carrying `status: "error"`:
/// that reply is a delivered payload and comes back as `Ok`. Callers that
/// conflate the two lose the ability to tell "the call failed" from "the call
/// succeeded and reported a failed transform".
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("engine unreachable: {0}")]
    Connection(String),
    #[error("engine rejected dispatch ({status}): {message}")]
    Rejected { status: u16, message: String },
    #[error("malformed engine reply: {0}")]
    MalformedReply(#[from] serde_json::Error),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        TransportError::Connection(err.to_string())
    }
}
