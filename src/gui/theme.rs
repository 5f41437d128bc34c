// Light and dark palettes for the iced GUI

use iced::theme::Palette;
use iced::widget::{button, container};
use iced::{Border, Color, Theme as IcedTheme};

use crate::shared::NotificationKind;

#[derive(Debug, Clone, Copy)]
pub struct HubColors {
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,
    pub card: Color,
    pub card_hover: Color,
    pub border: Color,
    pub accent: Color,
    pub success: Color,
    pub error: Color,
    pub info: Color,
}

impl HubColors {
    pub fn dark() -> Self {
        Self {
            background: Color::from_rgb(0.12, 0.16, 0.22), // gray-800
            foreground: Color::from_rgb(1.0, 1.0, 1.0),
            muted: Color::from_rgb(0.82, 0.84, 0.86), // gray-300
            card: Color::from_rgb(0.22, 0.25, 0.32), // gray-700
            card_hover: Color::from_rgb(0.29, 0.33, 0.39),
            border: Color::from_rgb(0.29, 0.33, 0.39),
            accent: Color::from_rgb(0.94, 0.27, 0.27), // red-500
            success: Color::from_rgb(0.13, 0.40, 0.20), // green-800
            error: Color::from_rgb(0.60, 0.11, 0.11), // red-800
            info: Color::from_rgb(0.12, 0.25, 0.69), // blue-800
        }
    }

    pub fn light() -> Self {
        Self {
            background: Color::from_rgb(0.99, 0.91, 0.95), // pink-100
            foreground: Color::from_rgb(0.12, 0.16, 0.22), // gray-800
            muted: Color::from_rgb(0.29, 0.33, 0.39), // gray-600
            card: Color::from_rgb(1.0, 1.0, 1.0),
            card_hover: Color::from_rgb(0.98, 0.98, 0.98),
            border: Color::from_rgb(0.90, 0.91, 0.92),
            accent: Color::from_rgb(0.94, 0.27, 0.27),
            success: Color::from_rgb(0.73, 0.97, 0.82), // green-200
            error: Color::from_rgb(1.0, 0.79, 0.79), // red-200
            info: Color::from_rgb(0.75, 0.86, 1.0), // blue-200
        }
    }

    pub fn from_dark(dark: bool) -> Self {
        if dark {
            Self::dark()
        } else {
            Self::light()
        }
    }

    pub fn kind_color(&self, kind: NotificationKind) -> Color {
        match kind {
            NotificationKind::Success => self.success,
            NotificationKind::Error => self.error,
            NotificationKind::Info => self.info,
        }
    }
}

/// Get the iced theme for the resolved appearance
pub fn get_iced_theme(dark: bool) -> IcedTheme {
    let colors = HubColors::from_dark(dark);

    IcedTheme::custom(
        if dark { "Link Hub Dark" } else { "Link Hub Light" }.to_string(),
        Palette {
            background: colors.background,
            text: colors.foreground,
            primary: colors.accent,
            success: Color::from_rgb(0.13, 0.77, 0.37),
            danger: colors.accent,
        },
    )
}

/// Rounded card behind each link
pub fn card_button(colors: &HubColors, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => colors.card_hover,
        _ => colors.card,
    };

    button::Style {
        background: Some(background.into()),
        text_color: colors.foreground,
        border: Border {
            color: colors.border,
            width: 1.0,
            radius: 16.0.into(),
        },
        ..Default::default()
    }
}

/// Borderless icon button (theme switcher, copy, close)
pub fn icon_button(colors: &HubColors, status: button::Status) -> button::Style {
    button::Style {
        background: None,
        text_color: match status {
            button::Status::Hovered => colors.accent,
            _ => colors.foreground,
        },
        border: Border::default(),
        ..Default::default()
    }
}

/// Dialog and toast surface
pub fn surface_style(colors: &HubColors, border_color: Color) -> container::Style {
    container::Style {
        background: Some(colors.card.into()),
        text_color: Some(colors.foreground),
        border: Border {
            color: border_color,
            width: 1.0,
            radius: 8.0.into(),
        },
        ..Default::default()
    }
}
