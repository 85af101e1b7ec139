//! State Management Layer
//!
//! Centralized application state using GPUI's Entity system.
//! Follows a unidirectional data flow pattern:
//!
//! ```text
//! View mount → spawn Service Call → settle → State Update → notify → UI Refresh
//! ```

mod greeting;

pub use greeting::*;
