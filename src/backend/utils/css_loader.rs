use std::collections::HashMap;
use std::sync::OnceLock;

static CSS_CACHE: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();

pub struct CssLoader;

impl CssLoader {
    fn cache() -> &'static HashMap<&'static str, &'static str> {
        CSS_CACHE.get_or_init(|| {
            let styles: [(&'static str, &'static str); 2] = [
                (
                    "main",
                    include_str!(concat!(
                        env!("CARGO_MANIFEST_DIR"),
                        "/assets/styles/main.css"
                    )),
                ),
                (
                    "upload",
                    include_str!(concat!(
                        env!("CARGO_MANIFEST_DIR"),
                        "/assets/styles/upload.css"
                    )),
                ),
            ];
            styles.into_iter().collect()
        })
    }

    #[inline(always)]
    pub fn get(style_name: &str) -> Option<&'static str> {
        Self::cache().get(style_name).copied()
    }

    /// Combines multiple styles into a single string
    pub fn combine(styles: &[&str]) -> String {
        styles
            .iter()
            .map(|&name| Self::get(name).unwrap_or(""))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Everything the app shell injects.
    pub fn get_combined_main() -> String {
        Self::combine(&["main", "upload"])
    }
}
