//! Light/dark theme state, persisted across runs.
//!
//! A two-state machine: the initial state is read from a single-key JSON file
//! in the user config directory, and every toggle writes the new state back.
//! Purely synchronous and local; no network.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The persisted preference. Defaults to `Light` when nothing is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::Light
    }
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Marker class applied to the visual root, if any.
    pub fn body_class(self) -> Option<&'static str> {
        match self {
            Theme::Light => None,
            Theme::Dark => Some("dark-theme"),
        }
    }

    /// Glyph shown on the toggle control: the moon offers dark mode, the sun
    /// offers the way back.
    pub fn toggle_glyph(self) -> &'static str {
        match self {
            Theme::Light => "🌙",
            Theme::Dark => "☀️",
        }
    }

    /// Accent color used by the background animation.
    pub fn accent_color(self) -> &'static str {
        match self {
            Theme::Light => "#5D54A4",
            Theme::Dark => "#8a84e2",
        }
    }

    pub fn flipped(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// On-disk record; a single fixed key.
#[derive(Debug, Serialize, Deserialize)]
struct ThemeRecord {
    theme: Theme,
}

/// Owns the current theme and its persistence.
pub struct ThemeStore {
    path: PathBuf,
    current: Theme,
}

impl ThemeStore {
    /// Open a store backed by `path`. An absent or unreadable file yields the
    /// default theme; it is only an error to fail *writing* a preference.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let current = read_record(&path).unwrap_or_default();
        Self { path, current }
    }

    /// The conventional location under the user config directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("cvpage").join("theme.json"))
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    /// Flip the state, persist it, and return the new state.
    pub fn toggle(&mut self) -> Result<Theme> {
        let next = self.current.flipped();
        self.write(next)?;
        self.current = next;
        Ok(next)
    }

    fn write(&self, theme: Theme) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| Error::StorageError(format!("create {}: {}", parent.display(), e)))?;
        }
        let record = ThemeRecord { theme };
        let body = serde_json::to_string(&record)
            .map_err(|e| Error::StorageError(format!("serialize theme: {}", e)))?;
        fs::write(&self.path, body)
            .map_err(|e| Error::StorageError(format!("write {}: {}", self.path.display(), e)))
    }
}

fn read_record(path: &Path) -> Option<Theme> {
    let body = fs::read_to_string(path).ok()?;
    let record: ThemeRecord = serde_json::from_str(&body).ok()?;
    Some(record.theme)
}
