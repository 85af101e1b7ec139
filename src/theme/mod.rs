//! Theme
//!
//! Static color palette for the application.

pub mod colors;
