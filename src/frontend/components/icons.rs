//! Inline SVG icons.

use dioxus::prelude::*;

#[component]
pub fn UploadIcon() -> Element {
    rsx! {
        svg {
            class: "drop-zone-icon",
            fill: "none",
            stroke: "currentColor",
            view_box: "0 0 48 48",
            path {
                d: "M28 8H12a4 4 0 00-4 4v20m32-12v8m0 0v8a4 4 0 01-4 4H12a4 4 0 01-4-4v-4m32-4l-3.172-3.172a4 4 0 00-5.656 0L28 28M8 32l9.172-9.172a4 4 0 015.656 0L28 28m0 0l4 4m4-24h8m-4-4v8m-12 4h.02",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
            }
        }
    }
}

#[component]
pub fn DocumentIcon() -> Element {
    rsx! {
        svg {
            class: "icon",
            fill: "none",
            stroke: "currentColor",
            view_box: "0 0 24 24",
            path {
                d: "M9 12h6m-6 4h6m2 5H7a2 2 0 01-2-2V5a2 2 0 012-2h5.586a1 1 0 01.707.293l5.414 5.414a1 1 0 01.293.707V19a2 2 0 01-2 2z",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
            }
        }
    }
}

#[component]
pub fn CloseIcon() -> Element {
    rsx! {
        svg {
            class: "icon",
            fill: "none",
            stroke: "currentColor",
            view_box: "0 0 24 24",
            path {
                d: "M6 18L18 6M6 6l12 12",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
            }
        }
    }
}

#[component]
pub fn Spinner() -> Element {
    rsx! {
        svg {
            class: "spinner",
            fill: "none",
            view_box: "0 0 24 24",
            circle {
                cx: "12",
                cy: "12",
                r: "10",
                stroke: "currentColor",
                stroke_width: "4",
                opacity: "0.25",
            }
            path {
                fill: "currentColor",
                opacity: "0.75",
                d: "M4 12a8 8 0 018-8V0C5.373 0 0 5.373 0 12h4zm2 5.291A7.962 7.962 0 014 12H0c0 3.042 1.135 5.824 3 7.938l3-2.647z",
            }
        }
    }
}
