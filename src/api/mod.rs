/// Preview backend access
///
/// This module handles:
/// - The blocking HTTP client and its wire types (client.rs)
/// - Multipart body encoding for uploads (multipart.rs)
/// - The error taxonomy shared by every call (error.rs)
///
/// The async functions below are what the UI schedules with `Task::perform`.
/// They run the blocking client on tokio's blocking pool so the event loop
/// never waits on the network.

pub mod client;
pub mod error;
pub mod multipart;

pub use client::{BackendClient, PreviewBackend, PreviewRequest, DEFAULT_API_BASE_URL};
pub use error::ApiError;

use std::path::PathBuf;
use std::sync::Arc;
use tokio::task;

/// Backend handle shared between the UI and its background tasks
pub type SharedBackend = Arc<dyn PreviewBackend>;

/// Upload a logo and return the remote reference URL
pub async fn upload_image(backend: SharedBackend, path: PathBuf) -> Result<String, ApiError> {
    task::spawn_blocking(move || backend.upload_image(&path).map(|r| r.url))
        .await
        .map_err(|e| ApiError::Task(e.to_string()))?
}

/// Ask the backend to compose a preview and return its URL
pub async fn generate_preview(
    backend: SharedBackend,
    request: PreviewRequest,
) -> Result<String, ApiError> {
    task::spawn_blocking(move || backend.generate_preview(&request).map(|r| r.preview_url))
        .await
        .map_err(|e| ApiError::Task(e.to_string()))?
}

/// Download the image behind a preview URL
pub async fn fetch_preview(backend: SharedBackend, url: String) -> Result<Vec<u8>, ApiError> {
    task::spawn_blocking(move || backend.fetch_preview(&url))
        .await
        .map_err(|e| ApiError::Task(e.to_string()))?
}
