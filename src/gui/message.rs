// Message types for iced application

use iced::keyboard;

use crate::shared::{ThemePreference, ToastId};

#[derive(Debug, Clone)]
pub enum Message {
    // Links
    OpenLink(usize),
    OpenShortcut(usize),

    // Theme
    SetTheme(ThemePreference),
    ThemeTick,

    // Contact dialog
    CloseContact,
    Copy(String),

    // Toast
    DismissToast,
    ToastExpired(ToastId),

    // Keyboard events
    KeyPressed(keyboard::Key, keyboard::Modifiers),
}
