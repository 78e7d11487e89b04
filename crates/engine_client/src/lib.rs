//! Client half of the spreadsheet converter: a typed gateway to the external
//! transform engine plus the observable store its consumers watch.

use std::sync::Arc;

use shared::protocol::{TransformRequest, TransformResult, TRANSFORM_COMMAND};
use tracing::{error, info};

pub mod error;
pub mod result_store;
pub mod transport;

pub use error::TransportError;
pub use result_store::{ResultStore, SubscriptionHandle};
pub use transport::{EngineTransport, HttpEngineTransport};

/// Typed gateway to the external transform engine.
///
/// Holds no state between calls; every invocation dispatches exactly one
/// engine command and resolves to exactly one result, field-for-field as the
/// engine sent it. A reply with `status: "error"` is a successful call
/// reporting a failed transform and comes back as `Ok`; only a failure of the
/// call channel itself is an `Err`.
pub struct TransformClient {
    transport: Arc<dyn EngineTransport>,
}

impl TransformClient {
    pub fn new(transport: Arc<dyn EngineTransport>) -> Self {
        Self { transport }
    }

    /// Transform the spreadsheet at `src_path` into `dest_path`.
    ///
    /// Both paths are passed through untouched; existence and format checks
    /// belong to the engine. Concurrent calls are dispatched independently
    /// and cannot be cancelled; no timeout is imposed here.
    pub async fn transform(
        &self,
        src_path: &str,
        dest_path: &str,
    ) -> Result<TransformResult, TransportError> {
        let request = TransformRequest {
            src_path: src_path.to_owned(),
            dest_path: dest_path.to_owned(),
        };
        let args = serde_json::to_value(&request)?;

        info!(src_path, dest_path, "dispatching transform");
        let reply = match self.transport.invoke(TRANSFORM_COMMAND, args).await {
            Ok(reply) => reply,
            Err(err) => {
                error!(%err, "transform dispatch failed");
                return Err(err);
            }
        };

        let result: TransformResult = serde_json::from_value(reply)?;
        if result.is_success() {
            info!(num_rows = result.num_rows, "transform finished");
        } else {
            info!(errors = result.error.len(), "transform reported failure");
        }
        Ok(result)
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
