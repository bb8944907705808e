//! Startup configuration for the showcase app.

use std::path::PathBuf;
use std::sync::Arc;

use acolyte_catalog::{
    FileSettingsStore, MediaResolver, MemorySettingsStore, PageVariant, SettingsStore, ViewMode,
};

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "ACOLYTE_DATA_DIR";

/// Application directory name under the platform data directory.
const APP_DIR_NAME: &str = "acolyte-sandbox";

/// Get the default data directory.
pub fn default_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
        return PathBuf::from(dir);
    }

    #[cfg(target_os = "macos")]
    {
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home)
                .join("Library/Application Support")
                .join(APP_DIR_NAME);
        }
    }
    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = std::env::var("XDG_DATA_HOME") {
            return PathBuf::from(xdg).join(APP_DIR_NAME);
        }
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home).join(".local/share").join(APP_DIR_NAME);
        }
    }
    #[cfg(target_os = "windows")]
    {
        if let Ok(appdata) = std::env::var("APPDATA") {
            return PathBuf::from(appdata).join(APP_DIR_NAME);
        }
    }
    PathBuf::from(".").join(APP_DIR_NAME)
}

/// Resolved startup settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SandboxConfig {
    pub variant: PageVariant,
    pub view_mode: ViewMode,
    pub data_dir: PathBuf,
    /// Directory demo images and videos are checked against.
    pub asset_dir: Option<PathBuf>,
    /// Keep progress on disk; `false` uses an in-memory store.
    pub persist: bool,
    /// Clear progress before the first render.
    pub reset_progress: bool,
}

impl Default for SandboxConfig {
    fn default() -> Self {
        Self {
            variant: PageVariant::default(),
            view_mode: ViewMode::default(),
            data_dir: default_data_dir(),
            asset_dir: None,
            persist: true,
            reset_progress: false,
        }
    }
}

impl SandboxConfig {
    /// Opens the settings store.
    ///
    /// Falls back to memory when the data directory is unusable, so the page
    /// still renders with progress kept for this run only.
    pub fn open_store(&self) -> Arc<dyn SettingsStore> {
        if !self.persist {
            tracing::info!("Progress persistence disabled");
            return Arc::new(MemorySettingsStore::new());
        }

        match FileSettingsStore::open(&self.data_dir) {
            Ok(store) => {
                tracing::info!("Settings at {}", store.path().display());
                Arc::new(store)
            }
            Err(e) => {
                tracing::warn!(
                    "Cannot use data directory {}: {}; progress will not be persisted",
                    self.data_dir.display(),
                    e
                );
                Arc::new(MemorySettingsStore::new())
            }
        }
    }

    pub fn media_resolver(&self) -> MediaResolver {
        match &self.asset_dir {
            Some(dir) => MediaResolver::with_asset_root(dir),
            None => MediaResolver::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_when_not_persisting() {
        let dir = tempfile::tempdir().unwrap();
        let config = SandboxConfig {
            data_dir: dir.path().to_path_buf(),
            persist: false,
            ..SandboxConfig::default()
        };

        config.open_store().set("k", "v").unwrap();
        assert!(!dir.path().join(FileSettingsStore::FILE_NAME).exists());
    }

    #[test]
    fn test_file_store_in_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config = SandboxConfig {
            data_dir: dir.path().join("data"),
            ..SandboxConfig::default()
        };

        config.open_store().set("k", "v").unwrap();
        assert!(dir.path().join("data").join(FileSettingsStore::FILE_NAME).exists());
    }

    #[test]
    fn test_unusable_data_dir_falls_back_to_memory() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, "file").unwrap();
        let config = SandboxConfig {
            data_dir: blocker,
            ..SandboxConfig::default()
        };

        let store = config.open_store();
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn test_media_resolver_follows_asset_dir() {
        let config = SandboxConfig {
            asset_dir: Some(PathBuf::from("public")),
            ..SandboxConfig::default()
        };
        assert_eq!(
            config.media_resolver(),
            MediaResolver::with_asset_root("public")
        );
        assert_eq!(SandboxConfig::default().media_resolver(), MediaResolver::new());
    }
}
