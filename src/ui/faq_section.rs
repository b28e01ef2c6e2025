//! FAQ accordion

use iced::widget::{button, column, container, horizontal_rule, row, text, Space};
use iced::{Alignment, Element, Length, Padding};

use super::theme::{self, LightTheme};
use crate::app::Message;
use crate::faq::{Accordion, FaqEntry};

pub fn view<'a>(entries: &'a [FaqEntry], accordion: &Accordion) -> Element<'a, Message> {
    let intro = column![
        container(text("FAQ").size(12))
            .padding(Padding::from([2.0, 10.0]))
            .style(theme::badge),
        text("Frequently Asked Questions").size(40).color(LightTheme::TEXT),
        text("Here are some common questions about MCP Servers.")
            .size(18)
            .color(LightTheme::TEXT_MUTED),
    ]
    .spacing(16)
    .width(Length::FillPortion(1));

    let items = column(
        entries
            .iter()
            .enumerate()
            .map(|(index, entry)| item(index, entry, accordion.is_open(index))),
    )
    .width(Length::FillPortion(1));

    row![intro, items].spacing(40).padding(Padding::from([80.0, 0.0])).into()
}

fn item(index: usize, entry: &FaqEntry, open: bool) -> Element<'_, Message> {
    let chevron = if open { "⌃" } else { "⌄" };
    let trigger = button(
        row![
            text(entry.question).size(16).color(LightTheme::TEXT),
            Space::with_width(Length::Fill),
            text(chevron).size(16).color(LightTheme::TEXT_MUTED),
        ]
        .align_y(Alignment::Center),
    )
    .width(Length::Fill)
    .padding(Padding::from([16.0, 0.0]))
    .style(button::text)
    .on_press(Message::FaqToggled(index));

    let mut body = column![trigger];
    if open {
        body = body.push(
            container(text(entry.answer).size(14).color(LightTheme::TEXT_MUTED))
                .padding(Padding {
                    top: 0.0,
                    right: 0.0,
                    bottom: 16.0,
                    left: 0.0,
                }),
        );
    }

    column![body, horizontal_rule(1)].into()
}
