use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::{info, warn};

use crate::error::{Error, Result};

/// Persistent key-value flags, e.g. the theme preference
pub trait FlagStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

#[derive(Debug, Default)]
pub struct MemoryFlagStore {
    values: HashMap<String, String>,
}

impl MemoryFlagStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FlagStore for MemoryFlagStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Flags kept in a JSON object on disk, written on every change
#[derive(Debug)]
pub struct JsonFlagStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl JsonFlagStore {
    /// Opens the store, starting empty when the file does not exist yet
    pub fn open(path: &Path) -> Result<Self> {
        let values = if path.exists() {
            let content = std::fs::read(path).map_err(Error::FlagStoreReadFailure)?;
            serde_json::from_slice(&content)?
        } else {
            info!(path = %path.display(), "No preferences file found, starting with defaults");
            BTreeMap::new()
        };

        Ok(Self {
            path: path.to_path_buf(),
            values,
        })
    }

    fn save(&self) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir).map_err(Error::FlagStoreWriteFailure)?;
        }

        let payload = serde_json::to_string_pretty(&self.values)?;
        std::fs::write(&self.path, payload).map_err(Error::FlagStoreWriteFailure)
    }
}

impl FlagStore for JsonFlagStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        self.save()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Theme switch with its short spin animation
#[derive(Debug)]
pub struct ThemeToggle {
    theme: Theme,
    spinning: bool,
}

impl ThemeToggle {
    pub const KEY: &'static str = "theme";
    pub const SPIN: Duration = Duration::from_millis(300);

    pub fn load(store: &dyn FlagStore) -> Self {
        let theme = match store.get(Self::KEY) {
            Some(value) => Theme::parse(&value).unwrap_or_else(|| {
                warn!(value = value.as_str(), "Unknown stored theme, using light");
                Theme::Light
            }),
            None => Theme::Light,
        };

        Self {
            theme,
            spinning: false,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn is_spinning(&self) -> bool {
        self.spinning
    }

    /// Flips and persists the theme. The in-memory theme flips even when
    /// persisting fails.
    pub fn toggle(&mut self, store: &mut dyn FlagStore) -> Result<Theme> {
        self.theme = self.theme.toggled();
        self.spinning = true;

        info!(theme = %self.theme, "Theme toggled");
        store.set(Self::KEY, self.theme.as_str())?;

        Ok(self.theme)
    }

    pub fn stop_spin(&mut self) {
        self.spinning = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_light() {
        let store = MemoryFlagStore::new();

        assert_eq!(ThemeToggle::load(&store).theme(), Theme::Light);
    }

    #[test]
    fn toggle_persists() {
        let mut store = MemoryFlagStore::new();
        let mut toggle = ThemeToggle::load(&store);

        assert_eq!(toggle.toggle(&mut store).unwrap(), Theme::Dark);
        assert!(toggle.is_spinning());
        assert_eq!(store.get("theme").as_deref(), Some("dark"));

        assert_eq!(ThemeToggle::load(&store).theme(), Theme::Dark);
    }

    #[test]
    fn garbage_value_falls_back_to_light() {
        let mut store = MemoryFlagStore::new();
        store.set("theme", "sepia").unwrap();

        assert_eq!(ThemeToggle::load(&store).theme(), Theme::Light);
    }

    #[test]
    fn json_store_survives_reopen() {
        let path = std::env::temp_dir()
            .join("pf_effects_flag_store")
            .join("preferences.json");
        std::fs::remove_file(&path).ok();

        let mut store = JsonFlagStore::open(&path).unwrap();
        assert_eq!(store.get("theme"), None);
        store.set("theme", "dark").unwrap();

        let reopened = JsonFlagStore::open(&path).unwrap();
        assert_eq!(reopened.get("theme").as_deref(), Some("dark"));

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn json_store_rejects_malformed_file() {
        let path = std::env::temp_dir().join("pf_effects_malformed_preferences.json");
        std::fs::write(&path, "not json").unwrap();

        let result = JsonFlagStore::open(&path);
        std::fs::remove_file(&path).ok();

        assert!(matches!(result, Err(Error::FlagStoreFormat(_))));
    }
}
