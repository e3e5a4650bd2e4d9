//! Ports - 抽象化レイヤー
//!
//! 関数が依存する外部協調者のインターフェース。実装は `impls` に置きます。

pub mod clock;
pub mod id_generator;
pub mod task_store;

pub use self::clock::{Clock, FixedClock, SystemClock};
pub use self::id_generator::{IdGenerator, UlidGenerator};
pub use self::task_store::{MISSING_NOTE, TaskAdder, TaskGetter, TaskStore, validate_note};
