//! Envelope - 関数の失敗を wire 形式に正規化する
//!
//! - **code**: `ErrorCode` と既定メッセージのレジストリ
//! - **error**: `LambdaError` と wrap / with_code / wrapf
//! - **transport**: runtime が返す失敗 payload（JSON の中の JSON）

pub mod code;
pub mod error;
pub mod transport;

pub use self::code::{ErrorCode, default_message};
pub use self::error::{LambdaError, WrapErr, with_code, wrap, wrap_fmt};
pub use self::transport::{EnvelopeBody, RuntimeErrorPayload};
