use super::*;

use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{json, Value};
use shared::protocol::TransformStatus;

struct ScriptedTransport {
    reply: Value,
    fail_with: Option<String>,
    invocations: Mutex<Vec<(String, Value)>>,
}

impl ScriptedTransport {
    fn replying(reply: Value) -> Self {
        Self {
            reply,
            fail_with: None,
            invocations: Mutex::new(Vec::new()),
        }
    }

    fn failing(message: impl Into<String>) -> Self {
        Self {
            reply: Value::Null,
            fail_with: Some(message.into()),
            invocations: Mutex::new(Vec::new()),
        }
    }

    fn invocations(&self) -> Vec<(String, Value)> {
        self.invocations.lock().expect("lock").clone()
    }
}

#[async_trait]
impl EngineTransport for ScriptedTransport {
    async fn invoke(&self, command: &str, args: Value) -> Result<Value, TransportError> {
        self.invocations
            .lock()
            .expect("lock")
            .push((command.to_owned(), args));
        if let Some(message) = &self.fail_with {
            return Err(TransportError::Connection(message.clone()));
        }
        Ok(self.reply.clone())
    }
}

#[tokio::test]
async fn dispatches_one_command_with_exactly_two_named_args() {
    let transport = Arc::new(ScriptedTransport::replying(json!({
        "status": "success",
        "num_rows": 0,
        "error": [],
        "warning": []
    })));
    let client = TransformClient::new(transport.clone());

    client
        .transform("a.xlsx", "b.xlsx")
        .await
        .expect("transform");

    let invocations = transport.invocations();
    assert_eq!(invocations.len(), 1);

    let (command, args) = &invocations[0];
    assert_eq!(command, TRANSFORM_COMMAND);

    let args = args.as_object().expect("named args");
    assert_eq!(args.len(), 2);
    assert_eq!(args["srcPath"], "a.xlsx");
    assert_eq!(args["destPath"], "b.xlsx");
}

#[tokio::test]
async fn reply_round_trips_field_for_field() {
    let transport = Arc::new(ScriptedTransport::replying(json!({
        "status": "success",
        "num_rows": 120,
        "error": [],
        "warning": ["sheet 2 empty"]
    })));
    let client = TransformClient::new(transport);

    let result = client
        .transform("a.xlsx", "b.xlsx")
        .await
        .expect("transform");

    assert_eq!(result, TransformResult::success(120, vec!["sheet 2 empty".into()]));
}

#[tokio::test]
async fn semantic_failure_resolves_ok() {
    let transport = Arc::new(ScriptedTransport::replying(json!({
        "status": "error",
        "num_rows": 0,
        "error": ["unsupported format"],
        "warning": []
    })));
    let client = TransformClient::new(transport);

    let result = client
        .transform("a.xlsx", "b.xlsx")
        .await
        .expect("a delivered error reply is a successful call");

    assert_eq!(result.status, TransformStatus::Error);
    assert_eq!(result.error, vec!["unsupported format".to_string()]);
}

#[tokio::test]
async fn malformed_reply_is_a_transport_error() {
    let transport = Arc::new(ScriptedTransport::replying(json!({
        "rows": "many"
    })));
    let client = TransformClient::new(transport);

    let err = client
        .transform("a.xlsx", "b.xlsx")
        .await
        .expect_err("unshaped reply");

    assert!(matches!(err, TransportError::MalformedReply(_)));
}

#[tokio::test]
async fn channel_failure_surfaces_connection_variant() {
    let transport = Arc::new(ScriptedTransport::failing("connection refused"));
    let client = TransformClient::new(transport);

    let err = client
        .transform("a.xlsx", "b.xlsx")
        .await
        .expect_err("channel down");

    assert!(matches!(err, TransportError::Connection(_)));
}

#[tokio::test]
async fn transport_failure_leaves_the_store_untouched() {
    let store = ResultStore::new();
    store.write(TransformResult::success(7, Vec::new()));

    let client = TransformClient::new(Arc::new(ScriptedTransport::failing("engine down")));
    let outcome = client.transform("a.xlsx", "b.xlsx").await;

    // The caller owns the decision to write; on Err there is nothing to write.
    assert!(outcome.is_err());
    assert_eq!(store.read(), TransformResult::success(7, Vec::new()));
}

#[tokio::test]
async fn each_invocation_is_independent() {
    let transport = Arc::new(ScriptedTransport::replying(json!({
        "status": "success",
        "num_rows": 1,
        "error": [],
        "warning": []
    })));
    let client = TransformClient::new(transport.clone());

    client.transform("a.xlsx", "b.xlsx").await.expect("first");
    client.transform("a.xlsx", "b.xlsx").await.expect("second");

    assert_eq!(transport.invocations().len(), 2);
}
