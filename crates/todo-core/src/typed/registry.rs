//! FunctionRegistry - 関数の登録と管理
//!
//! `register::<R, H>(handler)` で TypedAdapter に包み、
//! `HashMap<String, Arc<dyn DynFunction>>` に関数名で格納します。
//! 起動時に組み立て、以降は読み取り専用です。

use std::collections::HashMap;
use std::sync::Arc;

use super::handler::{DynFunction, Handler, TypedAdapter};
use super::request::Request;

#[derive(Default)]
pub struct FunctionRegistry {
    functions: HashMap<String, Arc<dyn DynFunction>>,
}

/// RegistryError は FunctionRegistry の操作エラー
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("function '{0}' is already registered")]
    AlreadyRegistered(String),
}

impl FunctionRegistry {
    pub fn new() -> Self {
        Self {
            functions: HashMap::new(),
        }
    }

    pub fn register<R: Request, H: Handler<R> + 'static>(
        &mut self,
        handler: H,
    ) -> Result<(), RegistryError> {
        let name = R::FUNCTION.to_string();
        if self.functions.contains_key(&name) {
            return Err(RegistryError::AlreadyRegistered(name));
        }
        self.functions
            .insert(name, Arc::new(TypedAdapter::<R, H>::new(handler)));
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn DynFunction>> {
        self.functions.get(name).cloned()
    }

    /// Registered function names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.functions.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}
