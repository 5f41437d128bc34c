// linkhub library - shared core plus the TUI and GUI frontends

// Shared modules (theme, notifications, links, config)
pub mod shared;

// TUI module (ratatui-based interface)
pub mod tui;

// GUI module (iced-based interface)
pub mod gui;
