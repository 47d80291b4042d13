//! UI components of the upload widget.

pub mod file_list;
pub mod file_upload;
pub mod icons;

pub use file_list::FileList;
pub use file_upload::FileUpload;
