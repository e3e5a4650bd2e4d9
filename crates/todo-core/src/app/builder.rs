//! AppBuilder - 関数のワイヤリング
//!
//! # Fail-fast 設計
//! - expect_functions() で期待される関数名を登録
//! - build() 時に「期待集合 ⊆ 登録済み集合」をチェック
//! - 不足があれば BuildError を返す

use std::sync::Arc;

use crate::functions::{AddTask, AddTaskHandler, GetTask, GetTaskHandler};
use crate::ports::TaskStore;
use crate::typed::{FunctionRegistry, Handler, RegistryError, Request};

use super::response::InvocationResponse;

/// ```ignore
/// let app = AppBuilder::new()
///     .register::<AddTask, _>(AddTaskHandler::new(store))?
///     .expect_functions(&["add-task"])
///     .build()?;
/// ```
pub struct AppBuilder {
    registry: FunctionRegistry,
    expected: Option<Vec<String>>,
}

/// BuildError はアプリケーション構築時のエラー
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("missing functions: {0:?}. These functions were expected but not registered.")]
    MissingFunctions(Vec<String>),

    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// AppError は呼び出し時の配線エラー（分類済みの失敗ではない）
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("unknown function '{0}'")]
    UnknownFunction(String),

    #[error("cannot encode invocation response: {0}")]
    Encode(#[from] serde_json::Error),
}

impl AppBuilder {
    pub fn new() -> Self {
        Self {
            registry: FunctionRegistry::new(),
            expected: None,
        }
    }

    pub fn register<R: Request, H: Handler<R> + 'static>(
        mut self,
        handler: H,
    ) -> Result<Self, RegistryError> {
        self.registry.register::<R, H>(handler)?;
        Ok(self)
    }

    pub fn expect_functions(mut self, names: &[&str]) -> Self {
        self.expected = Some(names.iter().map(|name| name.to_string()).collect());
        self
    }

    pub fn build(self) -> Result<App, BuildError> {
        if let Some(expected) = &self.expected {
            let registered = self.registry.names();
            let missing: Vec<String> = expected
                .iter()
                .filter(|name| !registered.contains(name))
                .cloned()
                .collect();
            if !missing.is_empty() {
                return Err(BuildError::MissingFunctions(missing));
            }
        }
        Ok(App {
            registry: self.registry,
        })
    }
}

impl Default for AppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// App は登録済みの関数を名前で呼び出す
pub struct App {
    registry: FunctionRegistry,
}

impl App {
    /// `add-task` and `get-task` sharing one store.
    pub fn with_store<S: TaskStore + 'static>(store: S) -> Result<Self, BuildError> {
        let store = Arc::new(store);
        AppBuilder::new()
            .register::<AddTask, _>(AddTaskHandler::new(store.clone()))?
            .register::<GetTask, _>(GetTaskHandler::new(store))?
            .expect_functions(&[AddTask::FUNCTION, GetTask::FUNCTION])
            .build()
    }

    pub fn registry(&self) -> &FunctionRegistry {
        &self.registry
    }

    /// Run one invocation of `function` with the raw event bytes.
    pub async fn invoke(&self, function: &str, raw: &[u8]) -> Result<InvocationResponse, AppError> {
        let f = self
            .registry
            .get(function)
            .ok_or_else(|| AppError::UnknownFunction(function.to_string()))?;

        let result = f.invoke(raw).await;
        Ok(InvocationResponse::from_result(result)?)
    }
}
