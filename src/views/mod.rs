//! View Components
//!
//! UI components for the Greet GUI application.

mod greeting;

pub use greeting::*;
