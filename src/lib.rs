//! Greet GUI Client Library
//!
//! This crate provides the application logic for the Greet GUI client,
//! a native window that fetches a greeting string from an HTTP API
//! endpoint and renders it.

pub mod app;
pub mod config;
pub mod constants;
pub mod error;
pub mod services;
pub mod states;
pub mod theme;
pub mod views;
