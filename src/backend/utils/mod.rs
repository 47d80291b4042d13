//! Utility modules for the backend.
//!
//! Configuration, paths, formatting, and stylesheet loading.

/// Application configuration.
pub mod config;
/// CSS loading and caching utilities.
pub mod css_loader;
/// Size and date formatting.
pub mod format;
/// Path utilities for the application directories.
pub mod paths;
