//! Application shell.

use crate::backend::utils::css_loader::CssLoader;
use crate::frontend::components::FileUpload;

use dioxus::prelude::*;

/// Page wrapper: injects the stylesheet and hosts the upload widget.
#[component]
pub fn App() -> Element {
    rsx! {
        style { dangerous_inner_html: CssLoader::get_combined_main() }
        main { class: "app-shell", FileUpload {} }
    }
}
