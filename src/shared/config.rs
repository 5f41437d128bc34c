use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::error::LinkhubError;
use super::links::{default_links, default_shortcuts, ContactInfo, LinkItem, SocialShortcut};
use super::theme::ThemePreference;

/// Read-only settings. The theme here only seeds the starting preference;
/// switching themes at runtime is never written back.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub theme: ThemePreference,
    #[serde(default = "default_links")]
    pub links: Vec<LinkItem>,
    #[serde(default = "default_shortcuts")]
    pub shortcuts: Vec<SocialShortcut>,
    #[serde(default)]
    pub contact: ContactInfo,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: ThemePreference::default(),
            links: default_links(),
            shortcuts: default_shortcuts(),
            contact: ContactInfo::default(),
        }
    }
}

impl Config {
    /// Loads `~/.linkhub_config.json`, falling back to the built-in catalog.
    pub fn load() -> Self {
        let path = Self::get_config_path();
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("{}; using defaults", err);
                Self::default()
            }
        }
    }

    /// A missing file is not an error; a malformed one is.
    pub fn load_from(path: &Path) -> Result<Self, LinkhubError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(err) => return Err(err.into()),
        };

        let mut config: Config = serde_json::from_str(&content).map_err(|source| LinkhubError::Config {
            path: path.to_path_buf(),
            source,
        })?;

        // An empty list would leave nothing to show
        if config.links.is_empty() {
            config.links = default_links();
        }

        Ok(config)
    }

    fn get_config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".linkhub_config.json")
    }
}
