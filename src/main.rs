use iced::widget::{button, column, container, horizontal_rule, scrollable, text};
use iced::{Alignment, Element, Length, Task, Theme};
use rfd::{FileDialog, MessageButtons, MessageDialog, MessageLevel};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

mod api;
mod config;
mod state;
mod ui;

use api::{ApiError, BackendClient, SharedBackend};
use config::Config;
use state::data::ClothingOption;
use state::session::Session;
use ui::preview_canvas::PreviewImage;

/// Main application state
struct Customizer {
    /// Client for the preview backend, shared with background tasks
    backend: SharedBackend,
    /// Selection, upload and preview state
    session: Session,
    /// Pixels for the current preview, once downloaded
    preview_image: Option<PreviewImage>,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// User picked a garment from the catalog
    GarmentSelected(ClothingOption),
    /// User clicked "Choose File..."
    ChooseFile,
    /// User clicked "Upload"
    UploadPressed,
    /// Background upload finished
    UploadComplete(Result<String, ApiError>),
    /// User clicked "Generate Preview"
    GeneratePreview,
    /// Background preview request finished
    PreviewComplete(Result<String, ApiError>),
    /// Preview bytes arrived for the given URL
    PreviewImageLoaded(String, Result<Vec<u8>, ApiError>),
}

impl Customizer {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        let config = Config::load();
        tracing::info!(
            api = %config.api_base_url,
            policy = ?config.error_policy,
            "Ixtampa customizer starting"
        );

        let client = BackendClient::new(&config.api_base_url);
        tracing::debug!(base_url = client.base_url(), "backend client ready");
        let backend: SharedBackend = Arc::new(client);

        (
            Customizer {
                backend,
                session: Session::new(config.error_policy),
                preview_image: None,
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::GarmentSelected(option) => {
                self.session.select_garment(option);
                Task::none()
            }
            Message::ChooseFile => {
                // Show the native file picker dialog
                let file = FileDialog::new()
                    .set_title("Select Your Logo")
                    .add_filter("Images", &ui::image_uploader::IMAGE_EXTENSIONS)
                    .pick_file();

                if let Some(path) = file {
                    tracing::info!(path = %path.display(), "logo chosen");
                    self.session.uploader_mut().choose_file(path);
                }

                Task::none()
            }
            Message::UploadPressed => match self.session.uploader_mut().begin() {
                Some(path) => {
                    tracing::info!(path = %path.display(), "uploading logo");
                    Task::perform(
                        api::upload_image(self.backend.clone(), path),
                        Message::UploadComplete,
                    )
                }
                None => {
                    tracing::debug!("upload pressed with no file chosen");
                    Task::none()
                }
            },
            Message::UploadComplete(result) => {
                self.session.finish_upload(result);
                Task::none()
            }
            Message::GeneratePreview => match self.session.begin_preview() {
                Err(missing) => {
                    tracing::warn!(?missing, "preview requested with missing input");
                    show_notice(&missing.to_string());
                    Task::none()
                }
                Ok(None) => Task::none(),
                Ok(Some(request)) => Task::perform(
                    api::generate_preview(self.backend.clone(), request),
                    Message::PreviewComplete,
                ),
            },
            Message::PreviewComplete(result) => match self.session.finish_preview(result) {
                Some(url) => Task::perform(
                    api::fetch_preview(self.backend.clone(), url.clone()),
                    move |bytes| Message::PreviewImageLoaded(url.clone(), bytes),
                ),
                None => Task::none(),
            },
            Message::PreviewImageLoaded(url, result) => {
                if self.session.preview_url() != Some(url.as_str()) {
                    tracing::debug!(%url, "dropping image for an outdated preview");
                    return Task::none();
                }

                match result {
                    Ok(bytes) => self.preview_image = Some(PreviewImage::new(url, bytes)),
                    Err(err) => tracing::warn!(%url, error = %err, "could not load preview image"),
                }

                Task::none()
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<'_, Message> {
        let generate = button("Generate Preview")
            .on_press_maybe(
                (!self.session.is_preview_in_flight()).then_some(Message::GeneratePreview),
            )
            .padding(10);

        let content = column![
            text("Ixtampa Customization").size(40),
            ui::clothing_selector::view(self.session.selected()),
            ui::image_uploader::view(self.session.uploader()),
            generate,
        ]
        .extend(
            self.session
                .errors()
                .map(|err| text(err).style(text::danger).into()),
        )
        .push_maybe(ui::preview_canvas::view(
            self.session.preview_url(),
            self.preview_image.as_ref(),
        ))
        .push(horizontal_rule(1))
        .push(ui::widget_notice::view())
        .spacing(20)
        .padding(40)
        .max_width(800)
        .align_x(Alignment::Center);

        container(scrollable(content))
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Light
    }
}

/// Blocking warning dialog for input the user still has to provide
fn show_notice(message: &str) {
    let _ = MessageDialog::new()
        .set_level(MessageLevel::Warning)
        .set_title("Ixtampa")
        .set_description(message)
        .set_buttons(MessageButtons::Ok)
        .show();
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    iced::application(
        "Ixtampa Customizer",
        Customizer::update,
        Customizer::view,
    )
    .theme(Customizer::theme)
    .centered()
    .run_with(Customizer::new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use state::data::find;

    fn shown_url(app: &Customizer) -> Option<&str> {
        app.preview_image.as_ref().map(|img| img.url())
    }

    /// Selection and an uploaded logo, so Generate Preview never opens the notice
    fn ready_customizer() -> Customizer {
        let (mut app, _) = Customizer::new();
        let _ = app.update(Message::GarmentSelected(find("hoodie").unwrap()));
        let _ = app.update(Message::UploadComplete(Ok(
            "https://cdn.test/logo.png".to_string()
        )));
        app
    }

    fn complete_preview(app: &mut Customizer, url: &str) {
        let _ = app.update(Message::GeneratePreview);
        assert!(app.session.is_preview_in_flight());
        let _ = app.update(Message::PreviewComplete(Ok(url.to_string())));
        assert_eq!(app.session.preview_url(), Some(url));
    }

    #[test]
    fn test_outdated_image_is_dropped() {
        let old = "https://cdn.test/preview_1.png";
        let new = "https://cdn.test/preview_2.png";
        let mut app = ready_customizer();

        complete_preview(&mut app, old);
        let _ = app.update(Message::PreviewImageLoaded(old.to_string(), Ok(vec![1])));
        assert_eq!(shown_url(&app), Some(old));

        complete_preview(&mut app, new);

        // The first preview's download lands after the second preview URL
        let _ = app.update(Message::PreviewImageLoaded(old.to_string(), Ok(vec![2])));
        assert_eq!(shown_url(&app), Some(old));
        assert!(ui::preview_canvas::visible_image(new, app.preview_image.as_ref()).is_none());

        let _ = app.update(Message::PreviewImageLoaded(new.to_string(), Ok(vec![3])));
        assert_eq!(shown_url(&app), Some(new));
    }

    #[test]
    fn test_failed_image_fetch_keeps_url_as_text() {
        let url = "https://cdn.test/preview_1.png";
        let mut app = ready_customizer();

        complete_preview(&mut app, url);
        let _ = app.update(Message::PreviewImageLoaded(
            url.to_string(),
            Err(ApiError::Status {
                status: 404,
                message: String::new(),
            }),
        ));

        assert_eq!(app.session.preview_url(), Some(url));
        assert!(app.preview_image.is_none());
    }
}
