// Copyright © 2025 Nipun Kumar

use std::path::PathBuf;
use tokio::fs;
use anyhow::{Context, Result};

use crate::AppSettings;

pub struct FileStorage {
    base: PathBuf,
}

impl FileStorage {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    fn settings_path(&self) -> PathBuf {
        self.base.join("settings.json")
    }
}

#[async_trait::async_trait(?Send)]
impl super::Storage for FileStorage {
    async fn save_settings(&self, settings: &AppSettings) -> Result<()> {
        fs::create_dir_all(&self.base)
            .await
            .with_context(|| format!("creating {}", self.base.display()))?;
        let json = serde_json::to_string_pretty(settings)?;
        fs::write(self.settings_path(), json).await?;
        Ok(())
    }

    async fn load_settings(&self) -> Result<Option<AppSettings>> {
        match fs::read_to_string(self.settings_path()).await {
            Ok(data) => Ok(Some(serde_json::from_str(&data)?)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).context("reading settings.json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Storage;

    fn scratch_dir(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("chatlog-web-{name}-{}", std::process::id()))
    }

    #[tokio::test]
    async fn missing_file_loads_as_none() {
        let storage = FileStorage::new(scratch_dir("missing"));
        assert!(storage.load_settings().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn saved_settings_load_back() {
        let dir = scratch_dir("saved");
        let storage = FileStorage::new(&dir);
        let settings = AppSettings {
            id: Some(1),
            api_base: "http://10.0.0.2:5030".into(),
            page_size: 50,
        };
        storage.save_settings(&settings).await.unwrap();

        let loaded = storage.load_settings().await.unwrap();
        assert_eq!(loaded, Some(settings));
        let _ = std::fs::remove_dir_all(dir);
    }
}
