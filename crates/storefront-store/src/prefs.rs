//! Appearance preferences.
//!
//! Three scalar settings persisted across reloads. Every parse path fails
//! open to the documented defaults: theme "light", language "en", font size
//! "medium".

use crate::kv::KeyValue;
use crate::persist::{load_json, save_json, PREFS_KEY};
use crate::StoreError;
use serde::{Deserialize, Serialize};

/// Color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_key(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse a theme key; unknown keys fall open to the default.
    pub fn from_key(key: &str) -> Self {
        match key {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    /// The other theme.
    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Font size setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FontSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl FontSize {
    pub fn as_key(&self) -> &'static str {
        match self {
            FontSize::Small => "small",
            FontSize::Medium => "medium",
            FontSize::Large => "large",
        }
    }

    /// Parse a font size key; unknown keys fall open to the default.
    pub fn from_key(key: &str) -> Self {
        match key {
            "small" => FontSize::Small,
            "large" => FontSize::Large,
            _ => FontSize::Medium,
        }
    }
}

/// Persisted appearance preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    /// Color theme.
    #[serde(default)]
    pub theme: Theme,
    /// UI language code (e.g., "en").
    #[serde(default = "default_language")]
    pub language: String,
    /// Font size.
    #[serde(default)]
    pub font_size: FontSize,
}

fn default_language() -> String {
    "en".to_string()
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            language: default_language(),
            font_size: FontSize::Medium,
        }
    }
}

impl Preferences {
    /// Load preferences, falling back to defaults when the key is missing or
    /// its value is corrupt.
    pub fn load<S: KeyValue + ?Sized>(store: &S) -> Result<Self, StoreError> {
        Ok(load_json(store, PREFS_KEY)?.unwrap_or_default())
    }

    /// Persist preferences under their fixed key.
    pub fn save<S: KeyValue + ?Sized>(&self, store: &mut S) -> Result<(), StoreError> {
        save_json(store, PREFS_KEY, self)
    }
}
