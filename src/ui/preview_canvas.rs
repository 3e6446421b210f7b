//! Composed preview display
//!
//! The backend hands back a URL; the window needs pixels. The bytes are
//! fetched in the background and kept here together with the URL they
//! belong to, so a late download for an older preview is never shown.

use iced::widget::{column, image, text};
use iced::{Alignment, ContentFit, Element};

use crate::Message;

/// Downloaded preview, tagged with its source URL
#[derive(Debug, Clone)]
pub struct PreviewImage {
    url: String,
    handle: image::Handle,
}

impl PreviewImage {
    pub fn new(url: String, bytes: Vec<u8>) -> Self {
        Self {
            url,
            handle: image::Handle::from_bytes(bytes),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Pixels to draw for `url`, if the downloaded image belongs to it
///
/// An image fetched for an earlier URL is never shown for a later one.
pub fn visible_image<'a>(
    url: &str,
    loaded: Option<&'a PreviewImage>,
) -> Option<&'a image::Handle> {
    loaded
        .filter(|img| img.url() == url)
        .map(|img| &img.handle)
}

/// Nothing before the first preview; otherwise the image, or its URL while
/// the bytes are missing
pub fn view<'a>(
    preview_url: Option<&'a str>,
    loaded: Option<&'a PreviewImage>,
) -> Option<Element<'a, Message>> {
    let url = preview_url?;

    let body: Element<'a, Message> = match visible_image(url, loaded) {
        Some(handle) => image(handle.clone())
            .content_fit(ContentFit::ScaleDown)
            .into(),
        None => text(url).size(14).into(),
    };

    Some(
        column![text("Preview").size(24), body]
            .spacing(10)
            .align_x(Alignment::Center)
            .into(),
    )
}
