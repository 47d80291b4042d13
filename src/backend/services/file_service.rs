//! HTTP client for the file server.
//!
//! The server exposes two endpoints:
//! - `POST {api_url}/files` takes a multipart body with a single `file` field
//!   and answers with the stored file's metadata as JSON.
//! - `GET {api_url}/files/{id}` answers with the raw file bytes.
//!
//! Failures collapse into two fixed messages, `Upload failed` and
//! `Download failed`. The underlying cause is only logged at debug level.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use reqwest::multipart::{Form, Part};
use reqwest::{Client, Url};

use crate::backend::models::{FileData, SelectedFile};
use crate::backend::services::download_sink::{DirectorySink, DownloadSink};
use crate::backend::utils::config::AppConfig;
use crate::simple_error;
use crate::utils::{Error, Result};

const UPLOAD_FAILED: &str = "Upload failed";
const DOWNLOAD_FAILED: &str = "Download failed";

/// Client for the upload/download endpoints. Cheap to clone.
#[derive(Clone)]
pub struct FileService {
    client: Client,
    api_url: Url,
    sink: Arc<dyn DownloadSink>,
}

impl FileService {
    /// Creates a service from the application config.
    pub fn new(config: &AppConfig) -> Result<Self> {
        let client = Self::build_client(config)?;
        let sink = DirectorySink::new(config.download_dir());
        Self::with_parts(client, &config.api_url, Arc::new(sink))
    }

    /// HTTP client that only gives up on a connection that cannot be opened
    /// or stops delivering data. Transfer length itself is unbounded.
    pub fn build_client(config: &AppConfig) -> Result<Client> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .read_timeout(Duration::from_secs(config.read_timeout_secs))
            .build()?;
        Ok(client)
    }

    /// Creates a service from an existing client and sink.
    pub fn with_parts(client: Client, api_url: &str, sink: Arc<dyn DownloadSink>) -> Result<Self> {
        let api_url = Url::parse(api_url)
            .map_err(|e| simple_error!("Invalid API URL {}: {}", api_url, e))?;
        if api_url.cannot_be_a_base() {
            return Err(simple_error!("API URL cannot be a base: {}", api_url));
        }
        Ok(Self {
            client,
            api_url,
            sink,
        })
    }

    pub fn api_url(&self) -> &Url {
        &self.api_url
    }

    /// Uploads `file` and returns the metadata the server assigned to it.
    pub async fn upload_file(&self, file: &SelectedFile) -> Result<FileData> {
        let data = tokio::fs::read(&file.path).await?;
        log::debug!("Uploading {} ({} bytes)", file.name, data.len());

        let part = Part::bytes(data).file_name(file.name.clone());
        let form = Form::new().part("file", part);

        let response = self
            .client
            .post(self.files_url(None))
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                log::debug!("Upload request error: {e}");
                Error::from(UPLOAD_FAILED)
            })?;

        if !response.status().is_success() {
            log::debug!("Upload rejected with status {}", response.status());
            return Err(UPLOAD_FAILED.into());
        }

        response.json::<FileData>().await.map_err(|e| {
            log::debug!("Upload response is not valid file metadata: {e}");
            UPLOAD_FAILED.into()
        })
    }

    /// Fetches the raw bytes of the file with the given id.
    pub async fn fetch_file(&self, id: &str) -> Result<Vec<u8>> {
        let response = self
            .client
            .get(self.files_url(Some(id)))
            .send()
            .await
            .map_err(|e| {
                log::debug!("Download request error: {e}");
                Error::from(DOWNLOAD_FAILED)
            })?;

        if !response.status().is_success() {
            log::debug!("Download of {id} rejected with status {}", response.status());
            return Err(DOWNLOAD_FAILED.into());
        }

        let bytes = response.bytes().await.map_err(|e| {
            log::debug!("Download body error: {e}");
            Error::from(DOWNLOAD_FAILED)
        })?;
        Ok(bytes.to_vec())
    }

    /// Downloads the file with the given id and saves it as `name`.
    pub async fn download_file(&self, id: &str, name: &str) -> Result<PathBuf> {
        let bytes = self.fetch_file(id).await?;

        let sink = Arc::clone(&self.sink);
        let name = name.to_string();
        let path = tokio::task::spawn_blocking(move || sink.save(&name, &bytes)).await??;

        log::info!("Saved download to {}", path.display());
        Ok(path)
    }

    /// `{api_url}/files`, or `{api_url}/files/{id}` with the id as one path segment.
    fn files_url(&self, id: Option<&str>) -> Url {
        let mut url = self.api_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("files");
            if let Some(id) = id {
                segments.push(id);
            }
        }
        url
    }
}
