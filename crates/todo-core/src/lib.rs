//! todo-core
//!
//! Boundary layer for task functions invoked by a serverless runtime: decode
//! a raw JSON event, call the task store, and turn the outcome into either
//! the success value or an error envelope the gateway can route on.
//!
//! # モジュール構成
//! - **envelope**: `ErrorCode`, 既定メッセージ, `LambdaError`, runtime payload
//! - **domain**: Task と `TodoError`（Validation / UnknownTask / Store）
//! - **ports**: `TaskAdder` / `TaskGetter`, Clock, IdGenerator
//! - **impls**: MockStore, InMemoryTaskStore
//! - **typed**: `Request`, `Handler<R>`, Classifier, FunctionRegistry
//! - **functions**: add-task, get-task
//! - **app**: AppBuilder, App, InvocationResponse
//! - **config** / **logging**: 環境変数と tracing の初期化

pub mod app;
pub mod config;
pub mod domain;
pub mod envelope;
pub mod functions;
pub mod impls;
pub mod logging;
pub mod ports;
pub mod typed;

pub use self::app::{App, AppBuilder, InvocationResponse};
pub use self::envelope::{ErrorCode, LambdaError};
