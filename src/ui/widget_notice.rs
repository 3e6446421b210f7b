//! Static panel with the copy-paste embed snippet

use iced::widget::{column, container, text};
use iced::{Border, Color, Element, Font, Length};

use crate::Message;

pub const EMBED_SNIPPET: &str = "<div id=\"ixtampa-widget\"></div>\n<script src=\"https://your-cdn.com/ixtampa-widget.bundle.js\"></script>";

pub fn view<'a>() -> Element<'a, Message> {
    let snippet = container(text(EMBED_SNIPPET).font(Font::MONOSPACE).size(13))
        .padding(10)
        .width(Length::Fill)
        .style(container::rounded_box);

    container(
        column![
            text("Widget Preview").size(24),
            text("This widget can be embedded in your website. Copy the code below and add it to your site."),
            snippet,
        ]
        .spacing(10),
    )
    .padding(20)
    .width(Length::Fill)
    .style(|_theme| container::Style {
        border: Border {
            color: Color::from_rgb8(0x00, 0x7b, 0xff),
            width: 2.0,
            radius: 10.0.into(),
        },
        ..container::Style::default()
    })
    .into()
}
