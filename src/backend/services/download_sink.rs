//! Destinations for downloaded file bytes.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::utils::Result;

/// Name used when the server-supplied filename has no usable component.
const FALLBACK_NAME: &str = "download";
/// Highest `(n)` suffix tried before giving up on a free name.
const MAX_NUMBERED_COPIES: u32 = 9999;

/// Persists downloaded bytes under a filename.
pub trait DownloadSink: Send + Sync {
    /// Saves `bytes` as `name` and returns where they ended up.
    fn save(&self, name: &str, bytes: &[u8]) -> Result<PathBuf>;
}

/// Writes downloads into a single directory, creating it on demand.
///
/// Existing files are never replaced: a taken `notes.txt` becomes
/// `notes (1).txt`, then `notes (2).txt`, and so on.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Target path for `name`. Only the final path component is kept.
    pub fn target_path(&self, name: &str) -> PathBuf {
        let file_name = Path::new(name)
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| FALLBACK_NAME.to_string());
        self.dir.join(file_name)
    }
}

/// `dir/stem (n).ext` for `path` = `dir/stem.ext`.
fn numbered_path(path: &Path, n: u32) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| FALLBACK_NAME.to_string());
    let file_name = match path.extension() {
        Some(ext) => format!("{stem} ({n}).{}", ext.to_string_lossy()),
        None => format!("{stem} ({n})"),
    };
    path.with_file_name(file_name)
}

impl DownloadSink for DirectorySink {
    fn save(&self, name: &str, bytes: &[u8]) -> Result<PathBuf> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir)?;
        }
        let target = self.target_path(name);

        let mut copy = 0;
        loop {
            let path = if copy == 0 {
                target.clone()
            } else {
                numbered_path(&target, copy)
            };
            match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(mut file) => {
                    file.write_all(bytes)?;
                    return Ok(path);
                }
                Err(e) if e.kind() == ErrorKind::AlreadyExists && copy < MAX_NUMBERED_COPIES => {
                    copy += 1;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }
}
