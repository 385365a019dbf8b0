//! Site-wide colour theme preference with an explicit storage boundary.
//!
//! The preference is read from storage once, when the store is created, and
//! written back immediately on every toggle. Reads in between never touch
//! storage.

use crate::error::ThemeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Theme preference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Dark,
    Light,
    #[default]
    System,
}

impl Theme {
    /// `System` resolves to `Dark` on the first explicit toggle.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light | Theme::System => Theme::Dark,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Dark => write!(f, "dark"),
            Theme::Light => write!(f, "light"),
            Theme::System => write!(f, "system"),
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoredTheme {
    #[serde(default)]
    theme: Theme,
}

/// Owner of the theme preference for one storage path.
///
/// Hold a single instance per path for the life of the process. Storage is
/// only read in `init_from_storage`, so another store on the same path does
/// not see later toggles.
#[derive(Debug)]
pub struct ThemeStore {
    path: PathBuf,
    current: Theme,
}

impl ThemeStore {
    /// Reads the persisted preference. A missing file yields `Theme::System`.
    pub fn init_from_storage(path: &Path) -> Result<Self, ThemeError> {
        let stored = if path.exists() {
            let content = std::fs::read_to_string(path)?;
            toml::from_str::<StoredTheme>(&content)?
        } else {
            StoredTheme::default()
        };
        tracing::debug!(theme = %stored.theme, path = %path.display(), "theme preference loaded");

        Ok(Self {
            path: path.to_path_buf(),
            current: stored.theme,
        })
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    /// Flips the preference and writes it through to storage.
    ///
    /// The in-memory value only changes once the write succeeds.
    pub fn toggle(&mut self) -> Result<Theme, ThemeError> {
        let next = self.current.toggled();
        let content = toml::to_string_pretty(&StoredTheme { theme: next })?;
        std::fs::write(&self.path, content)?;
        self.current = next;
        Ok(next)
    }
}

#[cfg(test)]
mod tests;
