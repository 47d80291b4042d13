//! Upload widget: drop zone, selected file preview, upload button and the
//! list of files uploaded in this session.

use std::path::PathBuf;
use std::sync::Arc;

use dioxus::html::{FileEngine, HasFileData};
use dioxus::prelude::*;

use crate::backend::models::SelectedFile;
use crate::backend::services::FileService;
use crate::backend::utils::format::format_size;
use crate::frontend::components::FileList;
use crate::frontend::components::icons::{CloseIcon, DocumentIcon, Spinner, UploadIcon};
use crate::frontend::states::UploadState;

/// First file of a picker or drop event. Extra files are ignored.
async fn first_file(files: Option<Arc<dyn FileEngine>>) -> Option<SelectedFile> {
    let engine = files?;
    let path = engine.files().into_iter().next()?;
    let size = engine.file_size(&path).await;
    Some(SelectedFile::from_path(PathBuf::from(path), size))
}

#[component]
pub fn FileUpload() -> Element {
    let service = use_context::<FileService>();
    let mut state = use_signal(UploadState::default);
    let mut drag_over = use_signal(|| false);

    let handle_file_select = move |evt: FormEvent| async move {
        if let Some(file) = first_file(evt.files()).await {
            state.write().select(file);
        }
    };

    let handle_drop = move |evt: DragEvent| {
        evt.prevent_default();
        drag_over.set(false);
        let files = evt.files();
        spawn(async move {
            if let Some(file) = first_file(files).await {
                state.write().select(file);
            }
        });
    };

    let handle_upload = move |_: MouseEvent| {
        let Some(file) = state.write().begin_upload() else {
            return;
        };
        let service = service.clone();
        spawn(async move {
            let result = service.upload_file(&file).await;
            state.write().finish_upload(result);
        });
    };

    let current = state();
    let selected = current
        .selected_file()
        .map(|file| (file.name.clone(), file.size.map(format_size)));
    let uploaded_files = current.uploaded_files().to_vec();

    rsx! {
        div { class: "card",
            h2 { class: "card-title", "Upload Files" }

            label {
                r#for: "fileInput",
                class: if drag_over() { "drop-zone drag-over" } else { "drop-zone" },
                ondragover: move |evt: DragEvent| {
                    evt.prevent_default();
                    drag_over.set(true);
                },
                ondragleave: move |_| drag_over.set(false),
                ondrop: handle_drop,
                input {
                    r#type: "file",
                    id: "fileInput",
                    class: "hidden",
                    onchange: handle_file_select,
                }
                UploadIcon {}
                div { class: "drop-zone-text",
                    span { class: "drop-zone-link", "Click to upload" }
                    " or drag and drop"
                }
                p { class: "drop-zone-hint", "Any file up to 10MB" }
            }

            if let Some((name, size)) = selected {
                div { class: "selected-file",
                    span { class: "file-label",
                        DocumentIcon {}
                        "{name}"
                        if let Some(size) = size {
                            span { class: "file-size", "({size})" }
                        }
                    }
                    button {
                        class: "clear-button",
                        title: "Clear selection",
                        onclick: move |_| state.write().clear_selection(),
                        CloseIcon {}
                    }
                }
            }

            button {
                class: "upload-button",
                disabled: !current.can_upload(),
                onclick: handle_upload,
                if current.is_uploading() {
                    Spinner {}
                    "Uploading..."
                } else {
                    "Upload File"
                }
            }
        }

        if !uploaded_files.is_empty() {
            FileList { files: uploaded_files }
        }
    }
}
