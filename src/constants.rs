//! UI Constants
//!
//! Centralized constants for layout and the display message lifecycle.

/// Default window dimensions
pub const DEFAULT_WINDOW_WIDTH: f32 = 480.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 320.0;

/// Window title
pub const WINDOW_TITLE: &str = "Greet GUI";

/// Text shown while the greeting request is in flight
pub const LOADING_PLACEHOLDER: &str = "Loading...";

/// Text shown when the request or the JSON parse fails
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch from API";

/// Prefix rendered before the display message
pub const GREETING_PREFIX: &str = "Wow'zas!";

/// Request path on the API server
pub const API_PATH: &str = "/api";

/// Default API base URL (local API server)
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";
