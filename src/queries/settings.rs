//! Application settings: the MainTop file path.

use crate::config;
use crate::connection::Connection;
use crate::error::{PrintrackError, Result};
use crate::models::{DetectedPath, MainTopPath};

// ---------------------------------------------------------------------------
// SettingsQuery
// ---------------------------------------------------------------------------

pub struct SettingsQuery<'a> {
    conn: &'a Connection,
}

impl<'a> SettingsQuery<'a> {
    /// Create a new `SettingsQuery` bound to the given connection.
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// The configured path to the MainTop log files.
    pub fn main_top_path(&self) -> Result<String> {
        let settings: MainTopPath = self.conn.get_json(config::MAIN_TOP_PATH, &[])?;
        Ok(settings.main_top_path)
    }

    /// Save the MainTop path. The path must not be blank.
    pub fn save_main_top_path(&self, path: &str) -> Result<()> {
        let trimmed = path.trim();
        if trimmed.is_empty() {
            return Err(PrintrackError::InvalidArgument(
                "MainTop path must not be empty".to_string(),
            ));
        }
        let body = MainTopPath {
            main_top_path: trimmed.to_string(),
        };
        self.conn.put_json(config::MAIN_TOP_PATH, &[], &body)
    }

    /// Ask the backend to detect the MainTop installation path.
    ///
    /// Returns `None` when detection ran but found nothing.
    pub fn detect_main_top_path(&self) -> Result<Option<String>> {
        let detected: DetectedPath = self.conn.get_json(config::MAIN_TOP_PATH_DETECT, &[])?;
        Ok(detected.detected_path)
    }
}
