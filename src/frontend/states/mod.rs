//! Widget state.

pub mod upload_state;

pub use upload_state::UploadState;
