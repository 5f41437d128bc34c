// TUI (Terminal User Interface) module for linkhub
// Built with ratatui for terminal-based rendering

pub mod app;
pub mod theme;
pub mod ui;

// Re-export commonly used types
pub use app::{App, AppEvent};
pub use ui::{get_layout_chunks, ui};
