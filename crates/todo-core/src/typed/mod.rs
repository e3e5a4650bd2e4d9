//! Typed - 型付き関数 API
//!
//! - **request**: `Request` trait（デコード先の型と関数名）
//! - **handler**: `Handler<R>` と object-safe な `DynFunction`
//! - **classify**: ドメインの失敗 → `LambdaError`
//! - **registry**: 関数名 → `DynFunction`

pub mod classify;
pub mod handler;
pub mod registry;
pub mod request;

pub use self::classify::{Classifier, NotFoundMapping};
pub use self::handler::{DynFunction, Handler, TypedAdapter};
pub use self::registry::{FunctionRegistry, RegistryError};
pub use self::request::Request;
