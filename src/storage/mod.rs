// Copyright © 2025 Nipun Kumar

use async_trait::async_trait;

use crate::AppSettings;

#[cfg(target_arch = "wasm32")]
mod browser_storage;
#[cfg(not(target_arch = "wasm32"))]
mod file_storage;

#[cfg(not(target_arch = "wasm32"))]
pub type AppStorage = file_storage::FileStorage;
#[cfg(target_arch = "wasm32")]
pub type AppStorage = browser_storage::IdbStorage;

#[async_trait(?Send)]
pub trait Storage {
    async fn save_settings(&self, settings: &AppSettings) -> anyhow::Result<()>;
    async fn load_settings(&self) -> anyhow::Result<Option<AppSettings>>;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn get_storage() -> anyhow::Result<AppStorage> {
    use std::path::PathBuf;
    use directories_next::ProjectDirs;

    let base = if let Some(proj_dirs) = ProjectDirs::from("com", "chatlog", "chatlog-web") {
        proj_dirs.config_dir().to_path_buf()
    } else {
        PathBuf::from(".")
    };
    let storage = AppStorage::new(base);
    Ok(storage)
}

#[cfg(target_arch = "wasm32")]
pub async fn get_storage() -> anyhow::Result<AppStorage> {
    let storage = AppStorage::new().await?;
    Ok(storage)
}

/// Loads saved settings, falling back to defaults when storage is unavailable
/// or empty.
pub async fn load_or_default() -> AppSettings {
    use dioxus::logger::tracing::warn;

    let storage = match get_storage().await {
        Ok(s) => s,
        Err(e) => {
            warn!("Could not get storage: {e:?}");
            return AppSettings::default();
        }
    };
    match storage.load_settings().await {
        Ok(Some(s)) => s.sanitized(),
        Ok(None) => AppSettings::default(),
        Err(e) => {
            warn!("Could not load settings: {e:?}");
            AppSettings::default()
        }
    }
}
