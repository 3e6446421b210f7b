//! Application controller state
//!
//! Owns the garment selection, the uploaded logo reference and the preview
//! URL, and decides when a preview request may be issued. Network calls are
//! performed by the caller; this type only sees their outcomes.

use thiserror::Error;

use super::data::{ClothingOption, ErrorPolicy};
use super::uploader::Uploader;
use crate::api::{ApiError, PreviewRequest};

/// Why "Generate Preview" was refused before any request went out
///
/// Every variant shows the same notice; the variant only tells the log
/// which step the user skipped.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingInput {
    #[error("Select a garment and upload your logo!")]
    Both,
    #[error("Select a garment and upload your logo!")]
    Garment,
    #[error("Select a garment and upload your logo!")]
    Logo,
}

/// Everything the window shows, owned in one place
#[derive(Debug, Clone, Default)]
pub struct Session {
    selected: Option<ClothingOption>,
    uploader: Uploader,
    uploaded_image: Option<String>,
    preview_url: Option<String>,
    preview_in_flight: bool,
    error_policy: ErrorPolicy,
    upload_error: Option<String>,
    preview_error: Option<String>,
}

impl Session {
    pub fn new(error_policy: ErrorPolicy) -> Self {
        Self {
            error_policy,
            ..Self::default()
        }
    }

    // ========== Garment ==========

    pub fn select_garment(&mut self, option: ClothingOption) {
        tracing::info!(id = option.id, template = option.template, "garment selected");
        self.selected = Some(option);
    }

    pub fn selected(&self) -> Option<ClothingOption> {
        self.selected
    }

    // ========== Upload ==========

    pub fn uploader(&self) -> &Uploader {
        &self.uploader
    }

    pub fn uploader_mut(&mut self) -> &mut Uploader {
        &mut self.uploader
    }

    /// Record the outcome of an upload and clear the busy flag
    ///
    /// A new reference replaces the previous one. A failure keeps whatever
    /// reference was already held.
    pub fn finish_upload(&mut self, result: Result<String, ApiError>) {
        self.uploader.finish();
        match result {
            Ok(url) => {
                tracing::info!(%url, "logo uploaded");
                self.uploaded_image = Some(url);
                self.upload_error = None;
            }
            Err(err) => self.upload_error = self.report("Error uploading image", err),
        }
    }

    #[cfg(test)]
    pub fn uploaded_image(&self) -> Option<&str> {
        self.uploaded_image.as_deref()
    }

    // ========== Preview ==========

    /// Validate inputs and build the one request a click may issue
    ///
    /// `Err` means the missing-input notice must be shown and nothing sent.
    /// `Ok(None)` means a request is already running and this click is dropped.
    pub fn begin_preview(&mut self) -> Result<Option<PreviewRequest>, MissingInput> {
        let (garment, image_url) = match (self.selected, self.uploaded_image.as_ref()) {
            (Some(garment), Some(url)) => (garment, url.clone()),
            (None, None) => return Err(MissingInput::Both),
            (None, Some(_)) => return Err(MissingInput::Garment),
            (Some(_), None) => return Err(MissingInput::Logo),
        };

        if self.preview_in_flight {
            tracing::debug!("preview already requested, ignoring click");
            return Ok(None);
        }

        self.preview_in_flight = true;
        Ok(Some(PreviewRequest {
            image_url,
            clothing_template: garment.template.to_string(),
        }))
    }

    /// Record the outcome of a preview request
    ///
    /// Returns the new preview URL when it changed, so the caller can start
    /// loading the image. A failure leaves the previous preview in place.
    pub fn finish_preview(&mut self, result: Result<String, ApiError>) -> Option<String> {
        self.preview_in_flight = false;
        match result {
            Ok(url) => {
                tracing::info!(%url, "preview generated");
                self.preview_error = None;
                self.preview_url = Some(url.clone());
                Some(url)
            }
            Err(err) => {
                self.preview_error = self.report("Error generating preview", err);
                None
            }
        }
    }

    pub fn preview_url(&self) -> Option<&str> {
        self.preview_url.as_deref()
    }

    pub fn is_preview_in_flight(&self) -> bool {
        self.preview_in_flight
    }

    // ========== Errors ==========

    /// Status lines to show, upload first; always empty under [`ErrorPolicy::LogOnly`]
    ///
    /// Each kind is only cleared by the next success of the same kind.
    pub fn errors(&self) -> impl Iterator<Item = &str> {
        self.upload_error
            .as_deref()
            .into_iter()
            .chain(self.preview_error.as_deref())
    }

    #[cfg(test)]
    pub fn upload_error(&self) -> Option<&str> {
        self.upload_error.as_deref()
    }

    #[cfg(test)]
    pub fn preview_error(&self) -> Option<&str> {
        self.preview_error.as_deref()
    }

    /// Log a failure and return the status line the policy asks for
    fn report(&self, context: &str, err: ApiError) -> Option<String> {
        tracing::error!(error = %err, "{context}");
        match self.error_policy {
            ErrorPolicy::Surface => Some(format!("{context}: {err}")),
            ErrorPolicy::LogOnly => None,
        }
    }
}
