//! Titled grid of server cards for one category

use iced::widget::{column, row, text, Space};
use iced::{Element, Length};

use super::server_card;
use super::theme::LightTheme;
use crate::app::Message;
use crate::catalog::CategoryGroup;

const CARDS_PER_ROW: usize = 4;

/// Groups borrow from the static catalog, so the section owns nothing
pub fn view(group: CategoryGroup) -> Element<'static, Message> {
    let title = row![
        text(group.title).size(24).color(LightTheme::TEXT),
        Space::with_width(Length::Fill),
        text("View All →").size(14).color(LightTheme::PRIMARY),
    ];

    let rows: Vec<Element<'static, Message>> = group
        .servers
        .chunks(CARDS_PER_ROW)
        .map(|chunk| {
            let mut cards: Vec<Element<'static, Message>> =
                chunk.iter().copied().map(server_card::view).collect();
            // Pad short rows so cards keep the same width
            while cards.len() < CARDS_PER_ROW {
                cards.push(Space::with_width(Length::Fill).into());
            }
            row(cards).spacing(24).into()
        })
        .collect();

    column![title, column(rows).spacing(24)]
        .spacing(20)
        .width(Length::Fill)
        .into()
}
