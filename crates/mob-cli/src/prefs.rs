//! Display preferences persisted between runs
//!
//! Only the theme is stored. The catalog never reads this file.

use crate::error::{CliError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

/// Default preference file, relative to the working directory
pub const DEFAULT_PREFS_FILE: &str = "mob-viewer.json";

/// Colour theme for rendered cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => f.write_str("light"),
            Theme::Dark => f.write_str("dark"),
        }
    }
}

/// Contents of the preference file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub theme: Theme,
    /// When the theme was last changed
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Preferences {
    /// Load preferences, or defaults if the file does not exist
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| CliError::PrefsRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        serde_json::from_str(&content).map_err(CliError::Json)
    }

    /// Save preferences as pretty JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Change the theme and stamp the update time
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.updated_at = Some(Utc::now());
    }
}
