//! Request trait - 型付きリクエストと関数名の対応付け
//!
//! # Trait Bounds
//! - `DeserializeOwned`: raw event (bytes) からの復元のため
//! - `Send + Sync + 'static`: Arc<dyn DynFunction> の中に型として残るため

use serde::de::DeserializeOwned;

/// A decoded invocation event, bound to the function that handles it.
///
/// ```ignore
/// #[derive(Deserialize)]
/// struct AddTask {
///     #[serde(default)]
///     note: String,
/// }
///
/// impl Request for AddTask {
///     const FUNCTION: &'static str = "add-task";
/// }
/// ```
pub trait Request: DeserializeOwned + Send + Sync + 'static {
    /// Name the function is registered and invoked under.
    const FUNCTION: &'static str;
}
