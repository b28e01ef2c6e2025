//! Search bar widget

use iced::widget::{button, container, row, text, text_input};
use iced::{Alignment, Border, Element, Length, Padding};

use super::theme::LightTheme;

const PLACEHOLDER: &str = "e.g. best servers for web search";

/// Search input with a submit button.
///
/// `on_submit` is `None` while a search is running, which disables both the
/// Enter key and the button.
pub fn view<'a, Message: Clone + 'a>(
    value: &str,
    loading: bool,
    on_input: impl Fn(String) -> Message + 'a,
    on_submit: Option<Message>,
) -> Element<'a, Message> {
    let mut input = text_input(PLACEHOLDER, value)
        .on_input(on_input)
        .padding(Padding::new(16.0))
        .size(18)
        .width(Length::Fill);
    if let Some(message) = on_submit.clone() {
        input = input.on_submit(message);
    }

    let label = if loading { "Searching..." } else { "→" };
    let submit = button(text(label).size(16))
        .padding(Padding::from([8.0, 14.0]))
        .style(button::secondary)
        .on_press_maybe(on_submit);

    container(
        row![input, submit]
            .spacing(8)
            .align_y(Alignment::Center),
    )
    .padding(Padding::from([4.0, 8.0]))
    .max_width(720)
    .style(|_theme| container::Style {
        background: Some(iced::Background::Color(LightTheme::SURFACE)),
        border: Border {
            color: LightTheme::BORDER,
            width: 1.0,
            radius: 10.0.into(),
        },
        ..Default::default()
    })
    .into()
}
