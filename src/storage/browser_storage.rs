// Copyright © 2025 Nipun Kumar

use anyhow::anyhow;
use idb::{Database, DatabaseEvent, Factory, KeyPath, ObjectStoreParams, TransactionMode};
use js_sys::wasm_bindgen::JsValue;
use serde::Serialize;
use serde_wasm_bindgen::Serializer;

use dioxus::logger::tracing::warn;

use crate::AppSettings;
use super::Storage;

const DB_NAME: &str = "chatlog_web";
const SETTINGS_STORE: &str = "settings";

#[derive(Debug)]
pub struct IdbStorage {
    db: Database,
}

impl IdbStorage {
    pub async fn new() -> anyhow::Result<Self> {
        let db = Self::create_db().await?;
        Ok(Self { db })
    }

    pub async fn create_db() -> anyhow::Result<Database> {
        let factory = Factory::new().map_err(|e| anyhow!("{e:?}"))?;
        let mut open_request = factory
            .open(DB_NAME, Some(1))
            .map_err(|e| anyhow!("{e:?}"))?;

        open_request.on_upgrade_needed(|event| {
            let database = match event.database() {
                Ok(db) => db,
                Err(e) => {
                    warn!("Could not upgrade settings database: {e:?}");
                    return;
                }
            };
            let mut store_params = ObjectStoreParams::new();
            store_params.auto_increment(false);
            store_params.key_path(Some(KeyPath::new_single("id")));
            if let Err(e) = database.create_object_store(SETTINGS_STORE, store_params) {
                warn!("Could not create settings store: {e:?}");
            }
        });

        let db = open_request.await.map_err(|e| anyhow!("{e:?}"))?;
        Ok(db)
    }
}

#[async_trait::async_trait(?Send)]
impl Storage for IdbStorage {
    async fn save_settings(&self, settings: &AppSettings) -> anyhow::Result<()> {
        let transaction = self.db
            .transaction(&[SETTINGS_STORE], TransactionMode::ReadWrite)
            .map_err(|e| anyhow!("{e:?}"))?;
        let store = transaction
            .object_store(SETTINGS_STORE)
            .map_err(|e| anyhow!("{e:?}"))?;

        let doc = settings
            .serialize(&Serializer::json_compatible())
            .map_err(|e| anyhow!("{e:?}"))?;
        store
            .put(&doc, None)
            .map_err(|e| anyhow!("{e:?}"))?
            .await
            .map_err(|e| anyhow!("{e:?}"))?;
        transaction
            .commit()
            .map_err(|e| anyhow!("{e:?}"))?
            .await
            .map_err(|e| anyhow!("{e:?}"))?;
        Ok(())
    }

    async fn load_settings(&self) -> anyhow::Result<Option<AppSettings>> {
        let transaction = self.db
            .transaction(&[SETTINGS_STORE], TransactionMode::ReadOnly)
            .map_err(|e| anyhow!("{e:?}"))?;
        let store = transaction
            .object_store(SETTINGS_STORE)
            .map_err(|e| anyhow!("{e:?}"))?;
        let stored: Option<JsValue> = store
            .get(JsValue::from_f64(1.))
            .map_err(|e| anyhow!("{e:?}"))?
            .await
            .map_err(|e| anyhow!("{e:?}"))?;

        let stored = stored
            .map(|v| serde_wasm_bindgen::from_value(v).map_err(|e| anyhow!("{e:?}")))
            .transpose()?;

        transaction.await.map_err(|e| anyhow!("{e:?}"))?;
        Ok(stored)
    }
}
