//! Greet GUI Client - Main Entry Point
//!
//! Native client that fetches a greeting from an HTTP API and renders it.

use greet_gui::app::application::run_app;

fn main() {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting Greet GUI Client...");

    // Run the GPUI application
    run_app();
}
