// TUI-specific palette with ratatui colors

use ratatui::style::Color;

use crate::shared::NotificationKind;

pub struct Theme {
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,
    pub border: Color,
    pub border_active: Color,
    pub selection_bg: Color,
    pub selection_fg: Color,
    pub status_bar_bg: Color,
    pub status_bar_fg: Color,
    pub accent: Color,
    pub success: Color,
    pub error: Color,
    pub info: Color,
}

impl Theme {
    /// Palette for the resolved appearance.
    pub fn new(dark: bool) -> Self {
        if dark {
            Self::dark()
        } else {
            Self::light()
        }
    }

    pub fn dark() -> Self {
        Self {
            background: Color::Reset,
            foreground: Color::Indexed(252),
            muted: Color::Indexed(246),
            border: Color::Indexed(240),
            border_active: Color::Indexed(211),
            selection_bg: Color::Indexed(237),
            selection_fg: Color::Indexed(255),
            status_bar_bg: Color::Indexed(235),
            status_bar_fg: Color::Indexed(250),
            accent: Color::Indexed(204),
            success: Color::Indexed(71),
            error: Color::Indexed(167),
            info: Color::Indexed(68),
        }
    }

    pub fn light() -> Self {
        Self {
            background: Color::Indexed(225), // pink-100
            foreground: Color::Indexed(236),
            muted: Color::Indexed(242),
            border: Color::Indexed(245),
            border_active: Color::Indexed(161),
            selection_bg: Color::Indexed(255),
            selection_fg: Color::Indexed(233),
            status_bar_bg: Color::Indexed(218),
            status_bar_fg: Color::Indexed(233),
            accent: Color::Indexed(160),
            success: Color::Indexed(28),
            error: Color::Indexed(124),
            info: Color::Indexed(25),
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
