//! Handler trait - リクエストを処理する関数の定義
//!
//! # 二層構造
//! - **表層（Typed）**: `Handler<R>` - 型付きリクエストを受け取る
//! - **内部（Dyn）**: `DynFunction` - raw bytes を受け取る object-safe な境界
//!
//! `TypedAdapter<R, H>` が両者をつなぎます。1 回の invoke は
//! Decoding → Invoking → Classified(Success | Failure) を 1 度だけ通り、
//! リトライもループもしません。

use std::marker::PhantomData;

use async_trait::async_trait;
use serde::Serialize;
use tracing::Instrument;

use super::classify::Classifier;
use super::request::Request;
use crate::domain::TodoError;
use crate::envelope::{ErrorCode, LambdaError, WrapErr};

/// Handler は型付きリクエストを処理してレスポンスを返す
///
/// ```ignore
/// struct Echo;
///
/// #[async_trait]
/// impl Handler<EchoRequest> for Echo {
///     type Response = String;
///
///     async fn handle(&self, request: EchoRequest) -> Result<String, TodoError> {
///         Ok(request.text)
///     }
/// }
/// ```
#[async_trait]
pub trait Handler<R: Request>: Send + Sync {
    type Response: Serialize + Send;

    async fn handle(&self, request: R) -> Result<Self::Response, TodoError>;

    /// How this function's failures map onto error codes.
    fn classifier(&self) -> Classifier {
        Classifier::default()
    }
}

/// DynFunction は raw event を受け取る object-safe な関数
///
/// Every exit is either the JSON success value or a [`LambdaError`].
#[async_trait]
pub trait DynFunction: Send + Sync {
    async fn invoke(&self, raw: &[u8]) -> Result<serde_json::Value, LambdaError>;

    fn name(&self) -> &str;
}

pub struct TypedAdapter<R: Request, H: Handler<R>> {
    handler: H,
    classifier: Classifier,
    _marker: PhantomData<R>,
}

impl<R: Request, H: Handler<R>> TypedAdapter<R, H> {
    pub fn new(handler: H) -> Self {
        let classifier = handler.classifier();
        Self {
            handler,
            classifier,
            _marker: PhantomData,
        }
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    async fn run(&self, raw: &[u8]) -> Result<serde_json::Value, LambdaError> {
        let request: R = serde_json::from_slice(raw).with_code(ErrorCode::BadInput)?;

        let outcome = self.handler.handle(request).await;
        let response = self.classifier.classify(outcome)?;

        serde_json::to_value(response).with_code(ErrorCode::ApplicationError)
    }
}

#[async_trait]
impl<R: Request, H: Handler<R>> DynFunction for TypedAdapter<R, H> {
    async fn invoke(&self, raw: &[u8]) -> Result<serde_json::Value, LambdaError> {
        let span = tracing::info_span!("invoke", function = R::FUNCTION);
        let result = self.run(raw).instrument(span.clone()).await;

        span.in_scope(|| match &result {
            Ok(_) => tracing::debug!("invocation succeeded"),
            Err(err) => tracing::warn!(
                code = %err.code(),
                private_message = %err.private_message(),
                "invocation failed"
            ),
        });
        result
    }

    fn name(&self) -> &str {
        R::FUNCTION
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug, Deserialize)]
    struct Echo {
        text: String,
    }

    impl Request for Echo {
        const FUNCTION: &'static str = "echo";
    }

    /// Counts calls and fails on demand.
    struct EchoHandler {
        calls: AtomicUsize,
    }

    impl EchoHandler {
        fn new() -> Self {
            Self {
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl Handler<Echo> for EchoHandler {
        type Response = serde_json::Value;

        async fn handle(&self, request: Echo) -> Result<serde_json::Value, TodoError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match request.text.as_str() {
                "" => Err(TodoError::validation("empty text")),
                "missing" => Err(TodoError::unknown_task("missing")),
                "boom" => Err(TodoError::store("boom")),
                text => Ok(json!({ "echo": text })),
            }
        }

        fn classifier(&self) -> Classifier {
            Classifier::new().with_not_found(ErrorCode::custom("ECHO_NOT_FOUND"), "Echo not found")
        }
    }

    fn adapter() -> TypedAdapter<Echo, EchoHandler> {
        TypedAdapter::new(EchoHandler::new())
    }

    #[tokio::test]
    async fn success_returns_the_value() {
        let f = adapter();
        let out = f.invoke(br#"{"text": "hi"}"#).await.unwrap();
        assert_eq!(out, json!({ "echo": "hi" }));
        assert_eq!(f.name(), "echo");
    }

    #[tokio::test]
    async fn undecodable_input_is_bad_input_and_handler_does_not_run() {
        let f = adapter();
        for raw in [&b"not json"[..], b"[1, 2]", b"\"text\"", b"{}", br#"{"text": 5}"#, b""] {
            let err = f.invoke(raw).await.unwrap_err();
            assert_eq!(err.code(), &ErrorCode::BadInput);
            assert_eq!(err.public_message(), "Bad input");
            assert!(err.cause().downcast_ref::<serde_json::Error>().is_some());
        }
        assert_eq!(f.handler().calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn each_failure_kind_maps_to_one_code() {
        let f = adapter();

        let err = f.invoke(br#"{"text": ""}"#).await.unwrap_err();
        assert_eq!(err.code(), &ErrorCode::InvalidInput);

        let err = f.invoke(br#"{"text": "missing"}"#).await.unwrap_err();
        assert_eq!(err.code().as_str(), "ECHO_NOT_FOUND");
        assert_eq!(err.public_message(), "Echo not found");

        let err = f.invoke(br#"{"text": "boom"}"#).await.unwrap_err();
        assert_eq!(err.code(), &ErrorCode::ApplicationError);

        assert_eq!(f.handler().calls.load(Ordering::SeqCst), 3);
    }
}
