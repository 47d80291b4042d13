//! Uploaded files list.

use dioxus::prelude::*;

use crate::backend::models::FileData;
use crate::backend::services::FileService;
use crate::backend::utils::format::format_date;
use crate::frontend::components::icons::DocumentIcon;

#[component]
pub fn FileList(files: Vec<FileData>) -> Element {
    rsx! {
        div { class: "card",
            h3 { class: "section-title", "Uploaded Files:" }
            ul { class: "file-rows",
                for file in files {
                    FileItem { key: "{file.id}", file: file.clone() }
                }
            }
        }
    }
}

/// One row with the file name and a download button.
#[component]
pub fn FileItem(file: FileData) -> Element {
    let service = use_context::<FileService>();
    let uploaded_on = file.created_at.as_ref().map(format_date);

    let handle_download = {
        let id = file.id.clone();
        let name = file.name.clone();
        move |_: MouseEvent| {
            let service = service.clone();
            let id = id.clone();
            let name = name.clone();
            spawn(async move {
                if let Err(e) = service.download_file(&id, &name).await {
                    log::error!("Download failed: {e}");
                }
            });
        }
    };

    rsx! {
        li {
            span { class: "file-label",
                DocumentIcon {}
                "{file.name}"
            }
            div { class: "file-label",
                if let Some(date) = uploaded_on {
                    span { class: "file-date", "{date}" }
                }
                button { class: "download-button", onclick: handle_download, "Download" }
            }
        }
    }
}
