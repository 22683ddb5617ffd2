use pf_navigation::settings::Layout;

pub const STATE_PATH: &str = "./data/viewer.json";
pub const PREFERENCES_PATH: &str = "./data/preferences.json";

#[derive(PartialEq, Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
pub enum DetailsNavigation {
    Log,
    Console,
}

#[derive(Debug, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct AppState {
    /// Site definition opened last, the built-in portfolio when `None`
    pub site_path: Option<String>,

    pub layout: Layout,

    pub details: DetailsNavigation,
}

impl AppState {
    pub fn new() -> Self {
        AppState {
            site_path: None,
            layout: Layout::Paged,
            details: DetailsNavigation::Log,
        }
    }

    pub fn load(path: &std::path::Path) -> Self {
        if !path.exists() {
            tracing::info!("No viewer state found, starting with defaults");
            return AppState::new();
        }

        let content_result = std::fs::read(path);

        match content_result {
            Ok(content) => match serde_json::from_slice(&content) {
                Ok(app_state) => app_state,
                Err(e) => {
                    tracing::warn!("Could not parse viewer state, starting with defaults: {}", e);
                    AppState::new()
                }
            },
            Err(e) => {
                tracing::warn!("Could not read viewer state, starting with defaults: {}", e);
                AppState::new()
            }
        }
    }

    pub fn save(&self, path: &std::path::Path) {
        if let Some(dir) = path.parent() {
            if let Err(e) = std::fs::create_dir_all(dir) {
                tracing::error!("Failed to create data directory: {}", e);
                return;
            }
        }

        match serde_json::to_string_pretty(&self) {
            Ok(payload) => match std::fs::write(path, payload) {
                Ok(()) => tracing::info!("Viewer state saved"),
                Err(e) => tracing::error!("Failed to write file: {}", e),
            },
            Err(e) => tracing::error!("Failed to serialize viewer state: {}", e),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_and_load() {
        let path = std::env::temp_dir()
            .join("pf_viewer_state")
            .join("viewer.json");
        std::fs::remove_file(&path).ok();

        let state = AppState {
            site_path: Some("site.json".to_string()),
            layout: Layout::Continuous,
            details: DetailsNavigation::Console,
        };
        state.save(&path);

        let loaded = AppState::load(&path);
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded.site_path.as_deref(), Some("site.json"));
        assert_eq!(loaded.layout, Layout::Continuous);
        assert_eq!(loaded.details, DetailsNavigation::Console);
    }

    #[test]
    fn broken_file_gives_defaults() {
        let path = std::env::temp_dir().join("pf_viewer_broken_state.json");
        std::fs::write(&path, "{ nope").unwrap();

        let loaded = AppState::load(&path);
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded.layout, Layout::Paged);
        assert_eq!(loaded.site_path, None);
    }
}
