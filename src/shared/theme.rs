// Theme preference and its resolution against the OS color scheme

use std::env;

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
    System,
}

impl Default for ThemePreference {
    fn default() -> Self {
        ThemePreference::Light
    }
}

// Lenient on read so a stray spelling in the config only affects the theme
impl<'de> Deserialize<'de> for ThemePreference {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(Self::from_str_config(&value))
    }
}

impl ThemePreference {
    /// Parse from a config or command-line string. Unknown values mean `System`.
    pub fn from_str_config(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "light" => Self::Light,
            "dark" => Self::Dark,
            _ => Self::System,
        }
    }

    /// Next preference for the single "toggle theme" binding.
    pub fn cycle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::System,
            Self::System => Self::Light,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
            Self::System => "System",
        }
    }
}

/// Where the OS color-scheme signal comes from.
///
/// `None` means the environment does not report one.
pub trait ColorSchemeSource {
    fn prefers_dark(&self) -> Option<bool>;
}

impl ColorSchemeSource for Option<bool> {
    fn prefers_dark(&self) -> Option<bool> {
        *self
    }
}

/// Receives the resolved appearance. Applying the same value twice must
/// leave the host in the same state.
pub trait AppearanceSink {
    fn apply_dark(&mut self, dark: bool);
}

/// The "dark" marker a frontend reads to pick its palette.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DarkClass {
    dark: bool,
}

impl DarkClass {
    pub fn is_dark(&self) -> bool {
        self.dark
    }
}

impl AppearanceSink for DarkClass {
    fn apply_dark(&mut self, dark: bool) {
        self.dark = dark;
    }
}

/// OS color scheme read from the process environment.
///
/// Checked in order: `LINKHUB_COLOR_SCHEME`, `GTK_THEME`, `COLORFGBG`.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnvColorScheme;

impl ColorSchemeSource for EnvColorScheme {
    fn prefers_dark(&self) -> Option<bool> {
        detect_color_scheme(|name| env::var(name).ok())
    }
}

fn detect_color_scheme(var: impl Fn(&str) -> Option<String>) -> Option<bool> {
    if let Some(value) = var("LINKHUB_COLOR_SCHEME") {
        match value.trim().to_ascii_lowercase().as_str() {
            "dark" => return Some(true),
            "light" => return Some(false),
            _ => {}
        }
    }

    if let Some(name) = var("GTK_THEME") {
        let name = name.to_ascii_lowercase();
        if name.contains("dark") {
            return Some(true);
        }
        if name.contains("light") {
            return Some(false);
        }
    }

    // "fg;bg" or "fg;default;bg"; the background is the last field
    let colorfgbg = var("COLORFGBG")?;
    let bg: u8 = colorfgbg.rsplit(';').next()?.trim().parse().ok()?;
    Some(matches!(bg, 0..=6 | 8))
}

/// Tracks the user's preference and pushes the resolved appearance to a sink.
pub struct ThemeController<S, A> {
    preference: ThemePreference,
    source: S,
    sink: A,
}

impl<S: ColorSchemeSource, A: AppearanceSink> ThemeController<S, A> {
    /// Creates the controller and applies the initial preference.
    pub fn new(preference: ThemePreference, source: S, sink: A) -> Self {
        let mut controller = Self { preference, source, sink };
        controller.refresh();
        controller
    }

    pub fn preference(&self) -> ThemePreference {
        self.preference
    }

    pub fn set_preference(&mut self, preference: ThemePreference) {
        log::debug!("theme preference -> {:?}", preference);
        self.preference = preference;
        self.refresh();
    }

    /// Light is never dark, Dark always is, System follows the OS signal
    /// sampled now (light when there is none).
    pub fn resolve(&self) -> bool {
        match self.preference {
            ThemePreference::Light => false,
            ThemePreference::Dark => true,
            ThemePreference::System => self.source.prefers_dark().unwrap_or(false),
        }
    }

    /// Re-resolves and re-applies without touching the preference.
    pub fn refresh(&mut self) {
        let dark = self.resolve();
        self.sink.apply_dark(dark);
    }

    pub fn sink(&self) -> &A {
        &self.sink
    }

    #[cfg(test)]
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Default)]
    struct RecordingSink {
        dark: bool,
        applied: Vec<bool>,
    }

    impl AppearanceSink for RecordingSink {
        fn apply_dark(&mut self, dark: bool) {
            self.dark = dark;
            self.applied.push(dark);
        }
    }

    #[test]
    fn test_light_and_dark_ignore_os_signal() {
        for signal in [Some(true), Some(false), None] {
            let mut theme = ThemeController::new(ThemePreference::Light, signal, DarkClass::default());
            assert!(!theme.resolve());
            assert!(!theme.sink().is_dark());

            theme.set_preference(ThemePreference::Dark);
            assert!(theme.resolve());
            assert!(theme.sink().is_dark());

            theme.set_preference(ThemePreference::Light);
            assert!(!theme.sink().is_dark());
        }
    }

    #[test]
    fn test_preference_serde_is_lenient_on_read() {
        let parsed: ThemePreference = serde_json::from_str(r#"" DARK ""#).unwrap();
        assert_eq!(parsed, ThemePreference::Dark);
        let parsed: ThemePreference = serde_json::from_str(r#""whatever""#).unwrap();
        assert_eq!(parsed, ThemePreference::System);
        assert_eq!(serde_json::to_string(&ThemePreference::Light).unwrap(), r#""light""#);
    }

    #[test]
    fn test_system_follows_os_signal() {
        let mut theme = ThemeController::new(ThemePreference::System, Some(true), DarkClass::default());
        assert!(theme.resolve());
        assert!(theme.sink().is_dark());

        *theme.source_mut() = Some(false);
        assert!(!theme.resolve());
        // Marker only changes once re-applied
        assert!(theme.sink().is_dark());
        theme.refresh();
        assert!(!theme.sink().is_dark());
    }

    #[test]
    fn test_system_without_signal_is_light() {
        let theme = ThemeController::new(ThemePreference::System, None, DarkClass::default());
        assert!(!theme.resolve());
        assert!(!theme.sink().is_dark());
    }

    #[test]
    fn test_every_change_is_applied() {
        let mut theme = ThemeController::new(ThemePreference::Light, Some(true), RecordingSink::default());
        theme.set_preference(ThemePreference::Dark);
        theme.set_preference(ThemePreference::Dark);
        theme.set_preference(ThemePreference::System);

        assert_eq!(theme.sink().applied, vec![false, true, true, true]);
        assert!(theme.sink().dark);
    }

    #[test]
    fn test_cycle_and_parse() {
        assert_eq!(ThemePreference::default(), ThemePreference::Light);
        assert_eq!(ThemePreference::Light.cycle(), ThemePreference::Dark);
        assert_eq!(ThemePreference::Dark.cycle(), ThemePreference::System);
        assert_eq!(ThemePreference::System.cycle(), ThemePreference::Light);

        assert_eq!(ThemePreference::from_str_config("DARK"), ThemePreference::Dark);
        assert_eq!(ThemePreference::from_str_config(" light "), ThemePreference::Light);
        assert_eq!(ThemePreference::from_str_config("auto"), ThemePreference::System);
    }

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_detect_color_scheme() {

        assert_eq!(detect_color_scheme(env(&[])), None);
        assert_eq!(detect_color_scheme(env(&[("LINKHUB_COLOR_SCHEME", "dark")])), Some(true));
        assert_eq!(detect_color_scheme(env(&[("GTK_THEME", "Adwaita:dark")])), Some(true));
        assert_eq!(detect_color_scheme(env(&[("COLORFGBG", "15;0")])), Some(true));
        assert_eq!(detect_color_scheme(env(&[("COLORFGBG", "0;default;15")])), Some(false));
        assert_eq!(detect_color_scheme(env(&[("COLORFGBG", "garbage")])), None);

        // Explicit override wins over terminal colors
        assert_eq!(
            detect_color_scheme(env(&[("LINKHUB_COLOR_SCHEME", "light"), ("COLORFGBG", "15;0")])),
            Some(false)
        );
    }
}
