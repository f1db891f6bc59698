//! Panic containment helpers.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

const UNKNOWN_PANIC: &str = "test panicked";

/// Extracts a human-readable message from a panic payload.
/// 从 panic 负载中提取可读的消息。
pub fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        UNKNOWN_PANIC.to_string()
    }
}

/// Runs `f`, converting a panic into `Err(message)`.
/// 运行 `f`，将 panic 转换为 `Err(message)`。
pub fn contain<T>(f: impl FnOnce() -> T) -> Result<T, String> {
    panic::catch_unwind(AssertUnwindSafe(f)).map_err(|payload| panic_message(payload.as_ref()))
}
