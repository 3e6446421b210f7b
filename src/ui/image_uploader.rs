//! Logo picker with an explicit Upload confirmation

use iced::widget::{button, column, row, text};
use iced::{Alignment, Element};

use crate::state::uploader::Uploader;
use crate::Message;

/// Extensions offered by the file dialog
pub const IMAGE_EXTENSIONS: [&str; 7] = ["png", "jpg", "jpeg", "gif", "webp", "svg", "bmp"];

/// What pressing Upload does right now; `None` disables the button
///
/// Disabled exactly while an upload is in flight. With no file chosen the
/// button stays enabled and the press is ignored.
pub fn upload_action(uploader: &Uploader) -> Option<Message> {
    (!uploader.is_busy()).then_some(Message::UploadPressed)
}

pub fn view(uploader: &Uploader) -> Element<'_, Message> {
    column![
        text("Upload Your Logo").size(24),
        row![
            button("Choose File...").on_press(Message::ChooseFile),
            text(uploader.file_label()),
        ]
        .spacing(10)
        .align_y(Alignment::Center),
        button(uploader.button_label())
            .on_press_maybe(upload_action(uploader))
            .padding(10),
    ]
    .spacing(10)
    .into()
}
