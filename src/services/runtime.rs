//! Tokio Runtime Bridge
//!
//! GPUI uses a smol-like executor, but reqwest requires tokio. This module
//! provides a bridge to run tokio futures from GPUI context.
//!
//! ## Pattern
//!
//! ```text
//! GPUI async task
//!       │
//!       ▼
//! run_in_tokio(async { ... })
//!       │
//!       ▼
//! tokio::Runtime::spawn()
//!       │
//!       ▼
//! Result returned to GPUI
//! ```

use std::future::Future;
use std::sync::OnceLock;
use tokio::runtime::Runtime;

/// Global tokio runtime instance
static TOKIO_RUNTIME: OnceLock<Runtime> = OnceLock::new();

/// Get or initialize the global tokio runtime
fn get_runtime() -> &'static Runtime {
    TOKIO_RUNTIME.get_or_init(|| Runtime::new().expect("Failed to create tokio runtime"))
}

/// Execute a future in the tokio runtime and wait for the result
///
/// This is used for one-shot RPC calls (e.g., fetching the greeting from
/// the API server).
///
/// # Example
///
/// ```ignore
/// let greeting = run_in_tokio(async move {
///     client.fetch_greeting().await
/// }).await;
/// ```
pub async fn run_in_tokio<F, T>(future: F) -> T
where
    F: Future<Output = T> + Send + 'static,
    T: Send + 'static,
{
    let handle = get_runtime().spawn(future);
    match handle.await {
        Ok(result) => result,
        Err(e) => std::panic::resume_unwind(e.into_panic()),
    }
}

/// Block on a future synchronously (use sparingly, mainly for initialization)
///
/// **Warning**: This blocks the current thread.
pub fn block_on<F, T>(future: F) -> T
where
    F: Future<Output = T>,
{
    get_runtime().block_on(future)
}
