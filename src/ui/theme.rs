//! Theme configuration

use iced::widget::container;
use iced::{Background, Border, Color, Shadow, Vector};

/// Light theme colors
pub struct LightTheme;

impl LightTheme {
    pub const BACKGROUND: Color = Color::from_rgb(0.976, 0.976, 0.976);
    pub const SURFACE: Color = Color::WHITE;
    pub const SURFACE_MUTED: Color = Color::from_rgb(0.953, 0.957, 0.965);
    pub const BORDER: Color = Color::from_rgb(0.898, 0.906, 0.922);
    pub const PRIMARY: Color = Color::from_rgb(0.937, 0.267, 0.267);
    pub const BRAND: Color = Color::from_rgb(0.118, 0.227, 0.541);
    pub const LINK: Color = Color::from_rgb(0.114, 0.306, 0.847);
    pub const STAR: Color = Color::from_rgb(0.980, 0.800, 0.082);
    pub const TEXT: Color = Color::from_rgb(0.067, 0.094, 0.153);
    pub const TEXT_MUTED: Color = Color::from_rgb(0.420, 0.447, 0.502);
    pub const ERROR_BACKGROUND: Color = Color::from_rgb(0.996, 0.949, 0.949);
    pub const ERROR_BORDER: Color = Color::from_rgb(0.996, 0.792, 0.792);
    pub const ERROR_TEXT: Color = Color::from_rgb(0.725, 0.110, 0.110);
}

/// White rounded card with a hairline border
pub fn card(_theme: &iced::Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(LightTheme::SURFACE)),
        border: Border {
            color: LightTheme::BORDER,
            width: 1.0,
            radius: 12.0.into(),
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.04),
            offset: Vector::new(0.0, 2.0),
            blur_radius: 8.0,
        },
        ..Default::default()
    }
}

/// Grey card used for search results
pub fn result_card(_theme: &iced::Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(LightTheme::SURFACE_MUTED)),
        border: Border {
            color: LightTheme::BORDER,
            width: 1.0,
            radius: 8.0.into(),
        },
        ..Default::default()
    }
}

pub fn error_banner(_theme: &iced::Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(LightTheme::ERROR_BACKGROUND)),
        border: Border {
            color: LightTheme::ERROR_BORDER,
            width: 1.0,
            radius: 4.0.into(),
        },
        text_color: Some(LightTheme::ERROR_TEXT),
        ..Default::default()
    }
}

/// Pill behind a tag or badge
pub fn badge(_theme: &iced::Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(LightTheme::SURFACE_MUTED)),
        border: Border::default().rounded(999.0),
        ..Default::default()
    }
}

/// Square logo tile with the brand color
pub fn logo_tile(_theme: &iced::Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(LightTheme::BRAND)),
        border: Border::default().rounded(6.0),
        text_color: Some(Color::WHITE),
        ..Default::default()
    }
}

pub fn page(_theme: &iced::Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(LightTheme::BACKGROUND)),
        text_color: Some(LightTheme::TEXT),
        ..Default::default()
    }
}
