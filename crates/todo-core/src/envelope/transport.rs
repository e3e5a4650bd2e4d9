//! Runtime failure payload.
//!
//! The serverless runtime does not keep a function's error value. It keeps
//! the error's string form and reports
//!
//! ```text
//! {"errorMessage": "<error.to_string()>", "errorType": "<type name>"}
//! ```
//!
//! Since [`LambdaError`]'s string form is already JSON, the envelope ends up
//! as a JSON string inside a JSON object. This is the one place that
//! encoding happens. Consumers such as a gateway response mapping parse
//! `errorMessage` a second time to get `code` / `public_message` /
//! `private_message` back; [`RuntimeErrorPayload::envelope`] is that second
//! parse.

use serde::{Deserialize, Serialize};

use super::code::ErrorCode;
use super::error::LambdaError;

pub const ERROR_TYPE: &str = "LambdaError";

/// What the runtime emits for a failed invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeErrorPayload {
    pub error_message: String,
    pub error_type: String,
}

impl RuntimeErrorPayload {
    pub fn from_error(err: &LambdaError) -> Result<Self, serde_json::Error> {
        Ok(Self {
            error_message: err.to_json()?,
            error_type: ERROR_TYPE.to_string(),
        })
    }

    /// Decode the envelope carried in `errorMessage`.
    pub fn envelope(&self) -> Result<EnvelopeBody, serde_json::Error> {
        serde_json::from_str(&self.error_message)
    }
}

/// Structured view of an envelope after it crossed the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvelopeBody {
    pub code: ErrorCode,
    pub public_message: String,
    pub private_message: String,
}
