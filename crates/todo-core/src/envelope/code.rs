//! ErrorCode - wire に載るエラー分類と既定メッセージ
//!
//! The code is the only thing an upstream gateway routes on, so the set is
//! small and closed. Functions may register their own codes (e.g.
//! `TASK_NOT_FOUND`) through [`ErrorCode::custom`]; those never get a default
//! public message and always carry an explicit one.

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Classification of a failure as seen by the caller of a function.
///
/// Serializes as SCREAMING_SNAKE_CASE strings: `APPLICATION_ERROR`,
/// `ACCESS_DENIED`, `BAD_INPUT`, `INVALID_INPUT`, or the custom name as is.
///
/// Identity is the wire string: `ErrorCode::custom("BAD_INPUT")` is equal to,
/// hashes like, and maps to the same status as `ErrorCode::BadInput`.
#[derive(Debug, Clone)]
pub enum ErrorCode {
    /// Catch-all for internal errors. Gateway mapping: 500.
    ApplicationError,

    /// Authorization error. Gateway mapping: 403.
    AccessDenied,

    /// The raw input could not be decoded. Gateway mapping: 400.
    BadInput,

    /// The input decoded but a value is unacceptable. Gateway mapping: 422.
    InvalidInput,

    /// Operation-specific code supplied by a function.
    Custom(Cow<'static, str>),
}

impl ErrorCode {
    /// Operation-specific code. Usable in `const` position.
    pub const fn custom(code: &'static str) -> Self {
        Self::Custom(Cow::Borrowed(code))
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::ApplicationError => "APPLICATION_ERROR",
            Self::AccessDenied => "ACCESS_DENIED",
            Self::BadInput => "BAD_INPUT",
            Self::InvalidInput => "INVALID_INPUT",
            Self::Custom(code) => code.as_ref(),
        }
    }

    /// Intended API Gateway status for the built-in codes.
    ///
    /// Documentation for the gateway collaborator only; nothing in this crate
    /// enforces it. Custom codes return `None` because their mapping lives
    /// with whoever registered them.
    pub fn http_status(&self) -> Option<u16> {
        match self.as_str() {
            "APPLICATION_ERROR" => Some(500),
            "ACCESS_DENIED" => Some(403),
            "BAD_INPUT" => Some(400),
            "INVALID_INPUT" => Some(422),
            _ => None,
        }
    }

    /// Default public message from the registry, `""` when none is registered.
    pub fn default_message(&self) -> &'static str {
        default_message(self.as_str())
    }
}

impl PartialEq for ErrorCode {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for ErrorCode {}

impl Hash for ErrorCode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for ErrorCode {
    fn from(code: &str) -> Self {
        match code {
            "APPLICATION_ERROR" => Self::ApplicationError,
            "ACCESS_DENIED" => Self::AccessDenied,
            "BAD_INPUT" => Self::BadInput,
            "INVALID_INPUT" => Self::InvalidInput,
            other => Self::Custom(Cow::Owned(other.to_string())),
        }
    }
}

impl FromStr for ErrorCode {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl Serialize for ErrorCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ErrorCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Ok(Self::from(code.as_str()))
    }
}

/// Code registry: code -> default public message.
///
/// Built once on first use and never mutated afterwards.
static DEFAULT_MESSAGES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("APPLICATION_ERROR", "Application error"),
        ("ACCESS_DENIED", "Access denied"),
        ("BAD_INPUT", "Bad input"),
        ("INVALID_INPUT", "Invalid input"),
    ])
});

/// Look up the default public message for a code string.
pub fn default_message(code: &str) -> &'static str {
    DEFAULT_MESSAGES.get(code).copied().unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashSet;

    #[rstest]
    #[case(ErrorCode::ApplicationError, "APPLICATION_ERROR", "Application error", Some(500))]
    #[case(ErrorCode::AccessDenied, "ACCESS_DENIED", "Access denied", Some(403))]
    #[case(ErrorCode::BadInput, "BAD_INPUT", "Bad input", Some(400))]
    #[case(ErrorCode::InvalidInput, "INVALID_INPUT", "Invalid input", Some(422))]
    fn builtin_codes(
        #[case] code: ErrorCode,
        #[case] wire: &str,
        #[case] message: &str,
        #[case] status: Option<u16>,
    ) {
        assert_eq!(code.as_str(), wire);
        assert_eq!(code.default_message(), message);
        assert_eq!(code.http_status(), status);
        assert_eq!(ErrorCode::from(wire), code);
    }

    #[test]
    fn custom_code_has_no_default_message() {
        let code = ErrorCode::custom("TASK_NOT_FOUND");
        assert_eq!(code.as_str(), "TASK_NOT_FOUND");
        assert_eq!(code.default_message(), "");
        assert_eq!(code.http_status(), None);
    }

    #[test]
    fn unknown_code_lookup_is_empty() {
        assert_eq!(default_message("UH_OH"), "");
        assert_eq!(default_message(""), "");
    }

    #[test]
    fn parsing_builtin_name_never_yields_custom() {
        let parsed: ErrorCode = "BAD_INPUT".parse().unwrap();
        assert_eq!(parsed, ErrorCode::BadInput);
        assert!(!matches!(parsed, ErrorCode::Custom(_)));
    }

    #[rstest]
    #[case(ErrorCode::custom("APPLICATION_ERROR"), ErrorCode::ApplicationError)]
    #[case(ErrorCode::custom("ACCESS_DENIED"), ErrorCode::AccessDenied)]
    #[case(ErrorCode::custom("BAD_INPUT"), ErrorCode::BadInput)]
    #[case(ErrorCode::Custom(Cow::Owned("INVALID_INPUT".to_string())), ErrorCode::InvalidInput)]
    fn custom_spelling_of_builtin_is_the_builtin(
        #[case] custom: ErrorCode,
        #[case] builtin: ErrorCode,
    ) {
        assert_eq!(custom, builtin);
        assert_eq!(custom.http_status(), builtin.http_status());
        assert_eq!(custom.default_message(), builtin.default_message());

        let set: HashSet<ErrorCode> = [custom, builtin].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn custom_bad_input_reports_400() {
        assert_eq!(ErrorCode::custom("BAD_INPUT"), ErrorCode::BadInput);
        assert_eq!(ErrorCode::custom("BAD_INPUT").http_status(), Some(400));
        assert_ne!(ErrorCode::custom("TASK_NOT_FOUND"), ErrorCode::BadInput);
    }

    #[test]
    fn serializes_as_wire_string() {
        let s = serde_json::to_string(&ErrorCode::InvalidInput).unwrap();
        assert_eq!(s, "\"INVALID_INPUT\"");

        let s = serde_json::to_string(&ErrorCode::custom("TASK_NOT_FOUND")).unwrap();
        assert_eq!(s, "\"TASK_NOT_FOUND\"");

        let back: ErrorCode = serde_json::from_str("\"ACCESS_DENIED\"").unwrap();
        assert_eq!(back, ErrorCode::AccessDenied);
    }
}
