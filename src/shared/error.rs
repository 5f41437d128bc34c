// Error type for the fallible edges (clipboard, browser, config file)

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LinkhubError {
    #[error("clipboard unavailable: {0}")]
    Clipboard(String),

    #[error("failed to open {url}: {source}")]
    OpenLink {
        url: String,
        #[source]
        source: io::Error,
    },

    #[error("invalid config file {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl From<arboard::Error> for LinkhubError {
    fn from(err: arboard::Error) -> Self {
        LinkhubError::Clipboard(err.to_string())
    }
}
