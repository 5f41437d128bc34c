// Shared modules used by both TUI and GUI

pub mod clipboard;
pub mod config;
pub mod error;
pub mod links;
pub mod notification;
pub mod theme;
pub mod timer;

// Re-export commonly used types
pub use clipboard::{copy_to_clipboard, ClipboardWriter, SystemClipboard, COPY_FAILURE, COPY_SUCCESS};
pub use config::Config;
pub use error::LinkhubError;
pub use links::{open_link, ContactEntry, ContactInfo, LinkAction, LinkIcon, LinkItem, SocialShortcut};
pub use notification::{
    Notification, NotificationCenter, NotificationKind, Scheduler, TimerHandle, ToastId, AUTO_DISMISS,
};
pub use theme::{AppearanceSink, ColorSchemeSource, DarkClass, EnvColorScheme, ThemeController, ThemePreference};
pub use timer::{TokioScheduler, TokioTimer};
