//! InvocationResponse - runtime が呼び出し元に返す形

use serde::{Deserialize, Serialize};

use crate::envelope::{EnvelopeBody, LambdaError, RuntimeErrorPayload};

/// Result of one invocation as the runtime would emit it.
///
/// Success is the function's JSON value as is. Failure is the runtime's
/// error payload whose `errorMessage` holds the envelope JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InvocationResponse {
    Failure(RuntimeErrorPayload),
    Success(serde_json::Value),
}

impl InvocationResponse {
    pub fn from_result(
        result: Result<serde_json::Value, LambdaError>,
    ) -> Result<Self, serde_json::Error> {
        match result {
            Ok(value) => Ok(Self::Success(value)),
            Err(err) => Ok(Self::Failure(RuntimeErrorPayload::from_error(&err)?)),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Envelope of a failed invocation, parsed back out of `errorMessage`.
    pub fn envelope(&self) -> Option<Result<EnvelopeBody, serde_json::Error>> {
        match self {
            Self::Failure(payload) => Some(payload.envelope()),
            Self::Success(_) => None,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::envelope::{ErrorCode, with_code};
    use serde_json::json;

    #[test]
    fn success_is_the_bare_value() {
        let resp = InvocationResponse::from_result(Ok(json!({ "note": "foo" }))).unwrap();
        assert!(resp.is_success());
        assert!(resp.envelope().is_none());
        assert_eq!(resp.to_json().unwrap(), r#"{"note":"foo"}"#);
    }

    #[test]
    fn failure_double_encodes_the_envelope() {
        let err = with_code(Some("bad json"), ErrorCode::BadInput).unwrap();
        let resp = InvocationResponse::from_result(Err(err)).unwrap();
        assert!(!resp.is_success());

        let outer: serde_json::Value = serde_json::from_str(&resp.to_json().unwrap()).unwrap();
        let inner: serde_json::Value =
            serde_json::from_str(outer["errorMessage"].as_str().unwrap()).unwrap();
        assert_eq!(
            inner,
            json!({
                "code": "BAD_INPUT",
                "public_message": "Bad input",
                "private_message": "bad json"
            })
        );

        let body = resp.envelope().unwrap().unwrap();
        assert_eq!(body.code, ErrorCode::BadInput);
    }
}
