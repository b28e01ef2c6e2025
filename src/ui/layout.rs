//! Header, hero banner, and footer

use chrono::Datelike;
use iced::widget::{button, column, container, row, text, Space};
use iced::{Alignment, Element, Length, Padding};

use super::theme::{self, LightTheme};
use crate::app::Message;

pub const SITE_NAME: &str = "MCP Directory";

/// Footer links; none has a destination yet, so they render as plain labels
const FOOTER_LINKS: [&str; 4] = ["GitHub", "Documentation", "Submit Server", "Contact"];

fn logo<'a>(size: f32, label_size: u16) -> Element<'a, Message> {
    row![
        container(text("M").size(label_size))
            .width(size)
            .height(size)
            .center_x(size)
            .center_y(size)
            .style(theme::logo_tile),
        text(SITE_NAME).size(label_size + 4).color(LightTheme::TEXT),
    ]
    .spacing(8)
    .align_y(Alignment::Center)
    .into()
}

pub fn header<'a>() -> Element<'a, Message> {
    row![
        logo(40.0, 16),
        Space::with_width(Length::Fill),
        button(text("Deploy").size(14))
            .padding(Padding::from([8.0, 16.0]))
            .style(button::danger),
    ]
    .align_y(Alignment::Center)
    .padding(Padding::from([24.0, 0.0]))
    .into()
}

/// Title, tagline, and whatever goes under them (the search panel)
pub fn hero<'a>(content: Option<Element<'a, Message>>) -> Element<'a, Message> {
    let title = row![
        text("Find the ").size(48).color(LightTheme::TEXT),
        text("MCP servers").size(48).color(LightTheme::PRIMARY),
        text(" for your needs").size(48).color(LightTheme::TEXT),
    ];

    let mut hero = column![
        title,
        text("The largest collection of MCP servers for your AI agents")
            .size(20)
            .color(LightTheme::TEXT_MUTED),
    ]
    .spacing(16)
    .align_x(Alignment::Center)
    .width(Length::Fill)
    .padding(Padding::from([48.0, 0.0]));

    if let Some(content) = content {
        hero = hero.push(Space::with_height(16)).push(content);
    }

    hero.into()
}

pub fn footer<'a>() -> Element<'a, Message> {
    let links: Vec<Element<'a, Message>> = FOOTER_LINKS
        .iter()
        .map(|label| text(*label).size(14).color(LightTheme::TEXT_MUTED).into())
        .collect();

    column![
        row![
            logo(32.0, 14),
            Space::with_width(Length::Fill),
            row(links).spacing(24),
        ]
        .align_y(Alignment::Center),
        container(
            text(copyright(chrono::Local::now().year()))
                .size(13)
                .color(LightTheme::TEXT_MUTED),
        )
        .center_x(Length::Fill),
    ]
    .spacing(24)
    .padding(Padding::from([32.0, 0.0]))
    .into()
}

fn copyright(year: i32) -> String {
    format!(
        "© {} {} - The community-driven MCP Server directory",
        year, SITE_NAME
    )
}

/// Red banner shown when the health probe failed
pub fn backend_unavailable<'a>() -> Element<'a, Message> {
    container(
        column![
            text("Backend Not Available").size(15),
            text("Please make sure the search backend is running and reachable.").size(14),
        ]
        .spacing(4),
    )
    .padding(Padding::from([12.0, 16.0]))
    .width(Length::Fill)
    .max_width(720)
    .style(theme::error_banner)
    .into()
}

pub fn error_banner(message: &str) -> Element<'_, Message> {
    container(text(message).size(14))
        .padding(Padding::from([12.0, 16.0]))
        .width(Length::Fill)
        .style(theme::error_banner)
        .into()
}
