//! Impls - ports の実装（開発用・テスト用）
//!
//! # 含まれる実装
//! - **MockStore**: 何も保存しない。既知の ID を 1 件だけ解決する
//! - **InMemoryTaskStore**: プロセス内の HashMap に保持する
//!
//! 永続ストアは別クレートで `TaskAdder` / `TaskGetter` を実装して差し込みます。

pub mod inmem_store;
pub mod mock_store;

pub use self::inmem_store::InMemoryTaskStore;
pub use self::mock_store::{KNOWN_TASK_ID, MockStore};
