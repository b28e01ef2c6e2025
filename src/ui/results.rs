//! Search result cards

use iced::widget::{button, column, container, text};
use iced::{Element, Length, Padding};

use super::theme::{self, LightTheme};
use crate::app::Message;
use crate::backend::types::SearchResult;

pub fn view(results: &[SearchResult]) -> Element<'_, Message> {
    let heading = text("Search Results").size(20).color(LightTheme::TEXT);

    if results.is_empty() {
        return column![
            heading,
            text("No results to display").size(14).color(LightTheme::TEXT_MUTED),
        ]
        .spacing(12)
        .into();
    }

    column![heading, column(results.iter().map(result_card)).spacing(24)]
        .spacing(12)
        .width(Length::Fill)
        .into()
}

fn result_card(result: &SearchResult) -> Element<'_, Message> {
    let link = button(text(&result.url).size(15).color(LightTheme::LINK))
        .padding(0)
        .style(button::text)
        .on_press(Message::OpenLink(result.url.clone()));

    container(
        column![
            link,
            section("What it does", &result.what_can_it_do),
            section("Why it's useful", &result.why_is_it_useful),
        ]
        .spacing(10),
    )
    .padding(Padding::new(16.0))
    .width(Length::Fill)
    .style(theme::result_card)
    .into()
}

fn section<'a>(title: &'a str, body: &'a str) -> Element<'a, Message> {
    column![
        text(title).size(15).color(LightTheme::TEXT),
        text(body).size(13).color(LightTheme::TEXT_MUTED),
    ]
    .spacing(4)
    .into()
}
