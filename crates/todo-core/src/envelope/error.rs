//! LambdaError - 関数境界で返すエラー型
//!
//! A `LambdaError` is created once, at the point a failure leaves a function,
//! and is never mutated afterwards. Its string form is its canonical JSON:
//!
//! ```text
//! {"code":"INVALID_INPUT","public_message":"Invalid input","private_message":"validation failed: missing note value"}
//! ```
//!
//! `private_message` is the cause's `Display` text and is not redacted here.
//!
//! # Absent cause
//! Every constructor takes `Option<E>`. `None` means "no failure happened" and
//! yields `None`: wrapping nothing never produces an envelope.

use std::error::Error as StdError;
use std::fmt;

use serde::ser::{Serialize, SerializeStruct, Serializer};

use super::code::ErrorCode;

pub(crate) type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Boundary error carrying a code, a caller-safe message and the original cause.
#[derive(Debug)]
pub struct LambdaError {
    code: ErrorCode,
    public_message: String,
    cause: BoxError,
}

impl LambdaError {
    pub(crate) fn new(cause: BoxError, code: ErrorCode, public_message: String) -> Self {
        Self {
            code,
            public_message,
            cause,
        }
    }

    /// Public message taken from the code registry.
    pub(crate) fn coded(cause: BoxError, code: ErrorCode) -> Self {
        let public_message = code.default_message().to_string();
        Self::new(cause, code, public_message)
    }

    pub fn code(&self) -> &ErrorCode {
        &self.code
    }

    pub fn public_message(&self) -> &str {
        &self.public_message
    }

    /// Diagnostic text for operators: the cause's string form.
    pub fn private_message(&self) -> String {
        self.cause.to_string()
    }

    pub fn cause(&self) -> &(dyn StdError + Send + Sync + 'static) {
        &*self.cause
    }

    /// Canonical JSON form.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl Serialize for LambdaError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("LambdaError", 3)?;
        s.serialize_field("code", &self.code)?;
        s.serialize_field("public_message", &self.public_message)?;
        s.serialize_field("private_message", &self.private_message())?;
        s.end()
    }
}

/// The string form is the canonical JSON, so a transport that only keeps an
/// error's message still carries the structured envelope.
impl fmt::Display for LambdaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_json() {
            Ok(json) => f.write_str(&json),
            Err(e) => {
                tracing::error!(code = %self.code, error = %e, "cannot marshal LambdaError");
                Err(fmt::Error)
            }
        }
    }
}

impl StdError for LambdaError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&*self.cause)
    }
}

/// Wrap `cause` with an explicit code and public message.
pub fn wrap<E>(
    cause: Option<E>,
    code: ErrorCode,
    public_message: impl Into<String>,
) -> Option<LambdaError>
where
    E: Into<BoxError>,
{
    cause.map(|e| LambdaError::new(e.into(), code, public_message.into()))
}

/// Wrap `cause` with a public message rendered from `args`.
///
/// The message is only rendered when there is a cause. See [`wrapf!`](crate::wrapf).
pub fn wrap_fmt<E>(
    cause: Option<E>,
    code: ErrorCode,
    args: fmt::Arguments<'_>,
) -> Option<LambdaError>
where
    E: Into<BoxError>,
{
    cause.map(|e| LambdaError::new(e.into(), code, args.to_string()))
}

/// Wrap `cause` using the registry's default message for `code`.
///
/// Codes without a registered message get an empty public message.
pub fn with_code<E>(cause: Option<E>, code: ErrorCode) -> Option<LambdaError>
where
    E: Into<BoxError>,
{
    cause.map(|e| LambdaError::coded(e.into(), code))
}

/// `wrap_fmt` with `format!`-style arguments.
///
/// ```ignore
/// let err = wrapf!(Some(cause), ErrorCode::custom("UH_OH"), "something went wrong: {}", "🙈");
/// ```
#[macro_export]
macro_rules! wrapf {
    ($cause:expr, $code:expr, $($arg:tt)+) => {
        $crate::envelope::wrap_fmt($cause, $code, ::std::format_args!($($arg)+))
    };
}

/// Converts the error side of a `Result` into a [`LambdaError`].
pub trait WrapErr<T> {
    fn wrap_err(self, code: ErrorCode, public_message: impl Into<String>)
    -> Result<T, LambdaError>;

    fn with_code(self, code: ErrorCode) -> Result<T, LambdaError>;
}

impl<T, E> WrapErr<T> for Result<T, E>
where
    E: Into<BoxError>,
{
    fn wrap_err(
        self,
        code: ErrorCode,
        public_message: impl Into<String>,
    ) -> Result<T, LambdaError> {
        self.map_err(|e| LambdaError::new(e.into(), code, public_message.into()))
    }

    fn with_code(self, code: ErrorCode) -> Result<T, LambdaError> {
        self.map_err(|e| LambdaError::coded(e.into(), code))
    }
}
