//! Directory entry card

use iced::widget::{column, container, image, row, text, Space};
use iced::{Alignment, Element, Length, Padding};

use super::theme::{self, LightTheme};
use crate::app::Message;
use crate::catalog::ServerRecord;

const LOGO_SIZE: f32 = 40.0;

pub fn view(server: &ServerRecord) -> Element<'_, Message> {
    let header = row![
        logo(server),
        column![
            text(&server.name).size(16).color(LightTheme::TEXT),
            text(format!("by {}", server.provider))
                .size(13)
                .color(LightTheme::TEXT_MUTED),
        ]
        .spacing(2)
        .width(Length::Fill),
        text("★").size(18).color(LightTheme::STAR),
    ]
    .spacing(12)
    .align_y(Alignment::Center);

    let tags: Vec<Element<'_, Message>> = server
        .tags
        .iter()
        .map(|tag| {
            container(text(tag).size(11).color(LightTheme::TEXT_MUTED))
                .padding(Padding::from([2.0, 8.0]))
                .style(theme::badge)
                .into()
        })
        .collect();

    container(
        column![
            header,
            text(&server.description).size(14).color(LightTheme::TEXT),
            row(tags).spacing(6),
            Space::with_height(Length::Fill),
            row![
                Space::with_width(Length::Fill),
                text("Deploy").size(13).color(LightTheme::PRIMARY),
            ],
        ]
        .spacing(14),
    )
    .padding(20)
    .width(Length::Fill)
    .height(220)
    .style(theme::card)
    .into()
}

/// Logo image when the record has one on disk, otherwise a monogram tile
fn logo(server: &ServerRecord) -> Element<'_, Message> {
    match server.logo_url.as_deref() {
        Some(path) if std::path::Path::new(path).exists() => image(path)
            .width(LOGO_SIZE)
            .height(LOGO_SIZE)
            .into(),
        _ => {
            let initial = server
                .name
                .chars()
                .next()
                .map(|c| c.to_uppercase().to_string())
                .unwrap_or_default();
            container(text(initial).size(18))
                .width(LOGO_SIZE)
                .height(LOGO_SIZE)
                .center_x(LOGO_SIZE)
                .center_y(LOGO_SIZE)
                .style(theme::logo_tile)
                .into()
        }
    }
}
