//! HTTP client for the preview backend.
//!
//! Provides [`BackendClient`] which encapsulates all HTTP interactions with
//! the backend. The UI never builds requests itself; it goes through the
//! [`PreviewBackend`] trait so the controller can be driven by a test double.

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::error::ApiError;
use super::multipart::{content_type_for, MultipartForm};

/// Backend used when `IXTAMPA_API_URL` is not set.
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:5000";

// ========== Wire types ==========

/// Body returned by `POST /upload`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResponse {
    pub url: String,
}

/// Body sent to `POST /preview`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewRequest {
    pub image_url: String,
    pub clothing_template: String,
}

/// Body returned by `POST /preview`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewResponse {
    pub preview_url: String,
}

/// Error body the backend sends with 4xx/5xx answers.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

// ========== Backend seam ==========

/// The calls the application makes against the preview backend.
///
/// Implementations are blocking; the async wrappers in [`crate::api`] move
/// them onto tokio's blocking pool.
pub trait PreviewBackend: Send + Sync {
    /// POST the file at `path` as multipart field `file`.
    fn upload_image(&self, path: &Path) -> Result<UploadResponse, ApiError>;

    /// POST `{ image_url, clothing_template }` as JSON.
    fn generate_preview(&self, request: &PreviewRequest) -> Result<PreviewResponse, ApiError>;

    /// GET the bytes behind a preview URL so the window can draw them.
    fn fetch_preview(&self, url: &str) -> Result<Vec<u8>, ApiError>;
}

// ========== BackendClient ==========

/// ureq-backed implementation of [`PreviewBackend`].
///
/// No retries, no timeouts, no auth headers: one request per call.
#[derive(Clone)]
pub struct BackendClient {
    base_url: String,
    agent: ureq::Agent,
}

impl BackendClient {
    /// Create a client rooted at `base_url` (trailing slashes are ignored).
    pub fn new(base_url: &str) -> Self {
        // Status codes are inspected by hand so the backend's error body survives
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            agent,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl std::fmt::Debug for BackendClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl PreviewBackend for BackendClient {
    fn upload_image(&self, path: &Path) -> Result<UploadResponse, ApiError> {
        let data = std::fs::read(path).map_err(|e| ApiError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "upload".to_string());

        let form = MultipartForm::new()
            .file("file", &filename, content_type_for(path), &data)
            .encode();

        tracing::debug!(file = %filename, bytes = data.len(), "POST /upload");

        let response = self
            .agent
            .post(&self.endpoint("/upload"))
            .header("Content-Type", &form.content_type)
            .send(&form.body[..])?;

        read_json(response)
    }

    fn generate_preview(&self, request: &PreviewRequest) -> Result<PreviewResponse, ApiError> {
        tracing::debug!(
            image_url = %request.image_url,
            clothing_template = %request.clothing_template,
            "POST /preview"
        );

        let response = self
            .agent
            .post(&self.endpoint("/preview"))
            .send_json(request)?;

        read_json(response)
    }

    fn fetch_preview(&self, url: &str) -> Result<Vec<u8>, ApiError> {
        let response = self.agent.get(url).call()?;
        let status = response.status();
        let mut body = response.into_body();

        if !status.is_success() {
            return Err(status_error(status, &mut body));
        }

        body.read_to_vec()
            .map_err(|e| ApiError::Transport(format!("error reading preview image: {e}")))
    }
}

// ========== Helpers ==========

/// Check the status and decode a JSON body of the expected shape.
fn read_json<T: DeserializeOwned>(
    response: ureq::http::Response<ureq::Body>,
) -> Result<T, ApiError> {
    let status = response.status();
    let mut body = response.into_body();

    if !status.is_success() {
        return Err(status_error(status, &mut body));
    }

    body.read_json::<T>()
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Build a [`ApiError::Status`], preferring the backend's own `error` message.
fn status_error(status: ureq::http::StatusCode, body: &mut ureq::Body) -> ApiError {
    let message = body
        .read_json::<ErrorBody>()
        .map(|b| b.error)
        .unwrap_or_else(|_| {
            status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string()
        });

    ApiError::Status {
        status: status.as_u16(),
        message,
    }
}
