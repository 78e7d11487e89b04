use serde::{Deserialize, Serialize};

/// Name of the engine command that performs a spreadsheet transform.
pub const TRANSFORM_COMMAND: &str = "transform_xlsx_file";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TransformStatus {
    #[default]
    Success,
    Error,
}

/// Outcome of one transform run, exactly as the engine reports it.
///
/// `status` and the contents of `error` are not cross-validated here; whether
/// `error` is non-empty exactly when `status` is `Error` is the engine's
/// business. `warning` entries never imply failure and can accompany success.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TransformResult {
    pub status: TransformStatus,
    pub num_rows: u32,
    pub error: Vec<String>,
    pub warning: Vec<String>,
}

impl TransformResult {
    pub fn success(num_rows: u32, warning: Vec<String>) -> Self {
        Self {
            status: TransformStatus::Success,
            num_rows,
            error: Vec::new(),
            warning,
        }
    }

    pub fn failure(error: Vec<String>) -> Self {
        Self {
            status: TransformStatus::Error,
            num_rows: 0,
            error,
            warning: Vec::new(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == TransformStatus::Success
    }
}

/// Named arguments for one transform invocation. Built per call and discarded
/// once the reply arrives; paths are passed through untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformRequest {
    pub src_path: String,
    pub dest_path: String,
}

#[cfg(test)]
#[path = "tests/protocol_tests.rs"]
mod tests;
