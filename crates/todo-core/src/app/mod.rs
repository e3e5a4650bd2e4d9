//! App - アプリケーション層
//!
//! - **AppBuilder**: 関数の登録と起動時検証
//! - **App**: 関数名で invoke し、runtime が返す形に整える

pub mod builder;
pub mod response;

pub use self::builder::{App, AppBuilder, AppError, BuildError};
pub use self::response::InvocationResponse;
