//! Site-wide UI state: color scheme and current section
//!
//! Both values are [`Observable`]s. The color scheme can be backed by a
//! [`PreferenceStore`]; every change is written through a subscriber.

mod observable;
mod store;

pub use observable::{Observable, SubscriptionId};
pub use store::{JsonFileStore, PreferenceStore, StoredPreferences, PREFERENCES_FILE};

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Section shown when nothing else was selected
pub const DEFAULT_SECTION: &str = "About";

/// Light or dark color scheme
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    pub fn toggle(self) -> Self {
        match self {
            ColorScheme::Light => ColorScheme::Dark,
            ColorScheme::Dark => ColorScheme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ColorScheme::Light => "light",
            ColorScheme::Dark => "dark",
        }
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorScheme {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "light" => Ok(ColorScheme::Light),
            "dark" => Ok(ColorScheme::Dark),
            other => anyhow::bail!("Unknown color scheme: {}. Available: light, dark", other),
        }
    }
}

/// UI preferences for one process
#[derive(Debug)]
pub struct Preferences {
    pub color_scheme: Observable<ColorScheme>,
    pub current_section: Observable<String>,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            color_scheme: Observable::new(ColorScheme::default()),
            current_section: Observable::new(DEFAULT_SECTION.to_string()),
        }
    }
}

impl Preferences {
    /// Load the saved color scheme and write every later change back to `store`
    pub fn persisted<S: PreferenceStore + 'static>(store: S) -> Result<Self> {
        let stored = store.load()?.unwrap_or_default();
        let mut prefs = Self::default();
        prefs.color_scheme = Observable::new(stored.color_scheme);

        prefs.color_scheme.subscribe(move |scheme| {
            let stored = StoredPreferences {
                color_scheme: *scheme,
            };
            if let Err(e) = store.save(&stored) {
                tracing::warn!("Failed to save preferences: {:#}", e);
            }
        });

        Ok(prefs)
    }

    pub fn color_scheme(&self) -> ColorScheme {
        *self.color_scheme.get()
    }

    pub fn toggle_color_scheme(&mut self) -> ColorScheme {
        self.color_scheme.update(|scheme| scheme.toggle());
        self.color_scheme()
    }

    pub fn set_current_section(&mut self, section: impl Into<String>) {
        self.current_section.set(section.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let prefs = Preferences::default();
        assert_eq!(prefs.color_scheme(), ColorScheme::Light);
        assert_eq!(prefs.current_section.get(), "About");
    }

    #[test]
    fn test_toggle() {
        assert_eq!(ColorScheme::Light.toggle(), ColorScheme::Dark);
        assert_eq!(ColorScheme::Dark.toggle().toggle(), ColorScheme::Dark);
        let mut prefs = Preferences::default();
        assert_eq!(prefs.toggle_color_scheme(), ColorScheme::Dark);
        prefs.set_current_section("Projects");
        assert_eq!(prefs.current_section.get(), "Projects");
    }

    #[test]
    fn test_parse_color_scheme() {
        assert_eq!("Dark".parse::<ColorScheme>().unwrap(), ColorScheme::Dark);
        assert!("sepia".parse::<ColorScheme>().is_err());
    }

    #[test]
    fn test_persisted_preferences_survive_reload() {
        let dir = TempDir::new().unwrap();

        let mut prefs = Preferences::persisted(JsonFileStore::in_site(dir.path())).unwrap();
        assert_eq!(prefs.color_scheme(), ColorScheme::Light);
        prefs.toggle_color_scheme();

        let reloaded = Preferences::persisted(JsonFileStore::in_site(dir.path())).unwrap();
        assert_eq!(reloaded.color_scheme(), ColorScheme::Dark);
    }
}
