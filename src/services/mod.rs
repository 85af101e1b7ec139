//! Service Layer
//!
//! Abstraction over the external API server. The API client runs on a
//! dedicated tokio runtime bridged into GPUI's executor:
//!
//! ```text
//! GPUI async task → run_in_tokio(fetch_greeting) → tokio runtime
//!                                                       │
//!          GreetingState.settle ◀── Result ─────────────┘
//! ```

mod api;
mod runtime;

pub use api::*;
pub use runtime::*;
