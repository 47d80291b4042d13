//! State of the upload widget.

use crate::backend::models::{FileData, SelectedFile};
use crate::utils::Result;

/// Local state of the upload widget.
///
/// `uploaded_files` is append-only and kept in upload order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UploadState {
    selected_file: Option<SelectedFile>,
    is_uploading: bool,
    uploaded_files: Vec<FileData>,
}

impl UploadState {
    pub fn selected_file(&self) -> Option<&SelectedFile> {
        self.selected_file.as_ref()
    }

    pub fn is_uploading(&self) -> bool {
        self.is_uploading
    }

    pub fn uploaded_files(&self) -> &[FileData] {
        &self.uploaded_files
    }

    /// Whether the upload button is enabled.
    pub fn can_upload(&self) -> bool {
        self.selected_file.is_some() && !self.is_uploading
    }

    pub fn select(&mut self, file: SelectedFile) {
        self.selected_file = Some(file);
    }

    pub fn clear_selection(&mut self) {
        self.selected_file = None;
    }

    /// Marks an upload as started and returns the file to send.
    ///
    /// Returns `None` without touching the state when nothing is selected or an
    /// upload is already running.
    pub fn begin_upload(&mut self) -> Option<SelectedFile> {
        if !self.can_upload() {
            return None;
        }
        self.is_uploading = true;
        self.selected_file.clone()
    }

    /// Applies the outcome of the upload started by [`Self::begin_upload`].
    ///
    /// A failure leaves the selection and the list as they were.
    pub fn finish_upload(&mut self, result: Result<FileData>) {
        match result {
            Ok(file) => {
                log::info!("Uploaded {} as {}", file.name, file.id);
                self.uploaded_files.push(file);
                self.selected_file = None;
            }
            Err(e) => log::error!("Upload failed: {e}"),
        }
        self.is_uploading = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simple_error;

    fn picked(name: &str) -> SelectedFile {
        SelectedFile::from_path(format!("/tmp/{name}"), Some(5))
    }

    #[test]
    fn test_default_state_is_idle() {
        let state = UploadState::default();
        assert!(state.selected_file().is_none());
        assert!(!state.is_uploading());
        assert!(state.uploaded_files().is_empty());
        assert!(!state.can_upload());
    }

    #[test]
    fn test_select_and_clear() {
        let mut state = UploadState::default();
        state.select(picked("a.txt"));
        assert_eq!(state.selected_file().map(|f| f.name.as_str()), Some("a.txt"));
        assert!(state.can_upload());

        state.clear_selection();
        assert!(state.selected_file().is_none());
        assert!(!state.can_upload());
    }

    #[test]
    fn test_selecting_twice_does_not_touch_list() {
        let mut state = UploadState::default();
        state.select(picked("a.txt"));
        state.finish_upload(Ok(FileData::new("1", "a.txt")));

        state.select(picked("b.txt"));
        state.select(picked("b.txt"));

        assert_eq!(state.uploaded_files(), &[FileData::new("1", "a.txt")]);
        assert_eq!(state.selected_file(), Some(&picked("b.txt")));
    }

    #[test]
    fn test_begin_upload_without_selection_is_noop() {
        let mut state = UploadState::default();
        assert!(state.begin_upload().is_none());
        assert!(!state.is_uploading());
    }

    #[test]
    fn test_begin_upload_twice_only_starts_once() {
        let mut state = UploadState::default();
        state.select(picked("a.txt"));

        let first = state.begin_upload();
        let second = state.begin_upload();

        assert_eq!(first, Some(picked("a.txt")));
        assert!(second.is_none());
        assert!(state.is_uploading());
        assert!(!state.can_upload());
    }

    #[test]
    fn test_successful_upload_appends_and_clears_selection() {
        let mut state = UploadState::default();
        state.select(picked("first.txt"));
        state.begin_upload();
        state.finish_upload(Ok(FileData::new("0", "first.txt")));

        state.select(picked("a.txt"));
        state.begin_upload();
        state.finish_upload(Ok(FileData::new("1", "a.txt")));

        assert_eq!(
            state.uploaded_files(),
            &[FileData::new("0", "first.txt"), FileData::new("1", "a.txt")]
        );
        assert!(state.selected_file().is_none());
        assert!(!state.is_uploading());
    }

    #[test]
    fn test_failed_upload_keeps_selection_and_list() {
        let mut state = UploadState::default();
        state.select(picked("a.txt"));
        state.begin_upload();
        state.finish_upload(Err(simple_error!("Upload failed")));

        assert!(state.uploaded_files().is_empty());
        assert_eq!(state.selected_file(), Some(&picked("a.txt")));
        assert!(!state.is_uploading());
        assert!(state.can_upload());
    }
}
