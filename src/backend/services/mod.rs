//! Core services.

pub mod download_sink;
pub mod file_service;

pub use file_service::FileService;
