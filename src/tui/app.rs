use ratatui::{
    crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    widgets::ListState,
};
use std::{thread, time::Duration};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::shared::{
    copy_to_clipboard, open_link, ClipboardWriter, Config, DarkClass, EnvColorScheme, LinkAction,
    NotificationCenter, NotificationKind, SystemClipboard, ThemeController, ThemePreference,
    ToastId, TokioScheduler,
};

/// How often `System` re-samples the OS color scheme.
const THEME_REFRESH: Duration = Duration::from_secs(1);

#[derive(Debug)]
pub enum AppEvent {
    Input(Event),
    Tick,
    ToastExpired(ToastId),
}

pub struct App {
    pub config: Config,
    pub link_state: ListState,

    // Contact dialog
    pub contact_open: bool,
    pub contact_state: ListState,

    pub theme: ThemeController<EnvColorScheme, DarkClass>,
    pub notifications: NotificationCenter<TokioScheduler<AppEvent>>,
    pub clipboard: Box<dyn ClipboardWriter>,

    pub should_quit: bool,
    pub event_rx: UnboundedReceiver<AppEvent>,
}

impl App {
    /// Builds the app and starts the input thread and the theme tick.
    /// Must be called from inside a tokio runtime.
    pub fn new(config: Config) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();

        // Input Thread
        let input_tx = tx.clone();
        thread::spawn(move || loop {
            match ratatui::crossterm::event::read() {
                Ok(event) => {
                    if input_tx.send(AppEvent::Input(event)).is_err() {
                        break;
                    }
                }
                Err(err) => {
                    log::error!("terminal input failed: {}", err);
                    break;
                }
            }
        });

        // Tick Task
        let tick_tx = tx.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(THEME_REFRESH);
            loop {
                interval.tick().await;
                if tick_tx.send(AppEvent::Tick).is_err() {
                    break;
                }
            }
        });

        Self::with_channel(config, Box::new(SystemClipboard::new()), tx, rx)
    }

    /// Builds the app around an existing event channel without spawning
    /// input or tick sources.
    pub fn with_channel(
        config: Config,
        clipboard: Box<dyn ClipboardWriter>,
        tx: UnboundedSender<AppEvent>,
        rx: UnboundedReceiver<AppEvent>,
    ) -> Self {
        let theme = ThemeController::new(config.theme, EnvColorScheme, DarkClass::default());
        let mut link_state = ListState::default();
        link_state.select(Some(0));
        let mut contact_state = ListState::default();
        contact_state.select(Some(0));

        Self {
            config,
            link_state,
            contact_open: false,
            contact_state,
            theme,
            notifications: NotificationCenter::new(TokioScheduler::new(tx, AppEvent::ToastExpired)),
            clipboard,
            should_quit: false,
            event_rx: rx,
        }
    }

    pub fn is_dark(&self) -> bool {
        self.theme.sink().is_dark()
    }

    pub fn selected_link(&self) -> usize {
        self.link_state.selected().unwrap_or(0)
    }

    pub fn selected_contact(&self) -> usize {
        self.contact_state.selected().unwrap_or(0)
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Input(Event::Key(key)) => self.handle_key(key),
            AppEvent::Input(_) => {} // Resize and mouse just trigger a redraw
            AppEvent::Tick => self.theme.refresh(),
            AppEvent::ToastExpired(id) => {
                self.notifications.expire(id);
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        // Theme and toast keys work everywhere
        match key.code {
            KeyCode::Char('t') => return self.theme.set_preference(self.theme.preference().cycle()),
            KeyCode::Char('1') => return self.theme.set_preference(ThemePreference::Light),
            KeyCode::Char('2') => return self.theme.set_preference(ThemePreference::Dark),
            KeyCode::Char('3') => return self.theme.set_preference(ThemePreference::System),
            KeyCode::Char('x') => return self.notifications.dismiss(),
            _ => {}
        }

        if self.contact_open {
            self.handle_contact_key(key.code);
        } else {
            self.handle_links_key(key.code);
        }
    }

    fn handle_links_key(&mut self, code: KeyCode) {
        let count = self.config.links.len();
        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Esc => self.notifications.dismiss(),
            KeyCode::Up | KeyCode::Char('k') => {
                let i = self.selected_link();
                self.link_state.select(Some(if i == 0 { count.saturating_sub(1) } else { i - 1 }));
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let i = self.selected_link();
                self.link_state.select(Some(if i + 1 >= count { 0 } else { i + 1 }));
            }
            KeyCode::Enter => self.activate_selected_link(),
            KeyCode::Char('c') => self.open_contact(),
            _ => {} // Ignore other key presses
        }
    }

    fn handle_contact_key(&mut self, code: KeyCode) {
        let count = self.config.contact.copy_entries().count();
        match code {
            KeyCode::Esc | KeyCode::Char('q') => self.contact_open = false,
            KeyCode::Up | KeyCode::Char('k') => {
                let i = self.selected_contact();
                self.contact_state.select(Some(i.saturating_sub(1)));
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let i = self.selected_contact();
                if i + 1 < count {
                    self.contact_state.select(Some(i + 1));
                }
            }
            KeyCode::Enter | KeyCode::Char('y') => self.copy_selected_contact(),
            _ => {}
        }
    }

    fn open_contact(&mut self) {
        self.contact_open = true;
        self.contact_state.select(Some(0));
    }

    fn activate_selected_link(&mut self) {
        let Some(link) = self.config.links.get(self.selected_link()) else {
            return;
        };
        let (action, url) = (link.action, link.url.clone());

        match action {
            LinkAction::ShowContact => self.open_contact(),
            LinkAction::OpenUrl => {
                if let Err(err) = open_link(&url) {
                    log::warn!("{}", err);
                    self.notifications.notify(err.to_string(), NotificationKind::Error);
                }
            }
        }
    }

    fn copy_selected_contact(&mut self) {
        let value = match self.config.contact.copy_entries().nth(self.selected_contact()) {
            Some(entry) => entry.value.clone(),
            None => return,
        };
        copy_to_clipboard(self.clipboard.as_mut(), &value, &mut self.notifications);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::{LinkhubError, COPY_FAILURE, COPY_SUCCESS};
    use ratatui::crossterm::event::KeyEventState;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct SharedClipboard(Arc<Mutex<Option<String>>>);

    impl ClipboardWriter for SharedClipboard {
        fn write_text(&mut self, text: &str) -> Result<(), LinkhubError> {
            *self.0.lock().unwrap() = Some(text.to_string());
            Ok(())
        }
    }

    struct BrokenClipboard;

    impl ClipboardWriter for BrokenClipboard {
        fn write_text(&mut self, _text: &str) -> Result<(), LinkhubError> {
            Err(LinkhubError::Clipboard("no display".to_string()))
        }
    }

    fn app_with(clipboard: Box<dyn ClipboardWriter>) -> App {
        let (tx, rx) = mpsc::unbounded_channel();
        App::with_channel(Config::default(), clipboard, tx, rx)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_event(AppEvent::Input(Event::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })));
    }

    #[tokio::test]
    async fn test_link_selection_wraps() {
        let mut app = app_with(Box::new(SharedClipboard::default()));
        let count = app.config.links.len();

        press(&mut app, KeyCode::Up);
        assert_eq!(app.selected_link(), count - 1);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.selected_link(), 0);
    }

    #[tokio::test]
    async fn test_theme_keys() {
        let mut app = app_with(Box::new(SharedClipboard::default()));
        assert_eq!(app.theme.preference(), ThemePreference::Light);
        assert!(!app.is_dark());

        press(&mut app, KeyCode::Char('2'));
        assert!(app.is_dark());
        press(&mut app, KeyCode::Char('t'));
        assert_eq!(app.theme.preference(), ThemePreference::System);
        press(&mut app, KeyCode::Char('1'));
        assert!(!app.is_dark());
    }

    #[tokio::test]
    async fn test_contact_link_opens_dialog_and_copies() {
        let clipboard = SharedClipboard::default();
        let mut app = app_with(Box::new(clipboard.clone()));

        let contact_idx = app
            .config
            .links
            .iter()
            .position(|l| l.action == LinkAction::ShowContact)
            .unwrap();
        app.link_state.select(Some(contact_idx));
        press(&mut app, KeyCode::Enter);
        assert!(app.contact_open);

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(clipboard.0.lock().unwrap().as_deref(), Some("+85523223403"));

        let snapshot = app.notifications.snapshot();
        assert!(snapshot.visible);
        assert_eq!(snapshot.message, COPY_SUCCESS);

        press(&mut app, KeyCode::Esc);
        assert!(!app.contact_open);
        assert!(app.notifications.is_visible());
        press(&mut app, KeyCode::Esc);
        assert!(!app.notifications.is_visible());
    }

    #[tokio::test]
    async fn test_failed_copy_shows_error() {
        let mut app = app_with(Box::new(BrokenClipboard));
        press(&mut app, KeyCode::Char('c'));
        press(&mut app, KeyCode::Char('y'));

        let snapshot = app.notifications.snapshot();
        assert_eq!(snapshot.kind, NotificationKind::Error);
        assert_eq!(snapshot.message, COPY_FAILURE);
    }

    #[tokio::test]
    async fn test_stale_expiry_event_ignored() {
        let mut app = app_with(Box::new(SharedClipboard::default()));
        app.notifications.notify("A", NotificationKind::Info);
        let first = app.notifications.pending_timer().unwrap();
        app.notifications.notify("B", NotificationKind::Info);

        app.handle_event(AppEvent::ToastExpired(first));
        assert_eq!(app.notifications.snapshot().message, "B");
    }
}
