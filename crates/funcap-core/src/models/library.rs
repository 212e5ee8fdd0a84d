use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::loose;

/// Digital-library metadata blob from the wizard. When `storage_mode` is
/// [`StorageMode::ObjectStore`] the image bytes live in the binary
/// attachment store and `items` carries metadata only; otherwise each item
/// embeds its own data URL.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct DigitalLibraryMeta {
    #[serde(rename = "storageType")]
    pub storage_mode: StorageMode,
    pub items: Vec<DigitalLibraryItem>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct DigitalLibraryItem {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub mime_type: String,
    #[serde(deserialize_with = "loose::count")]
    pub size: u32,
    pub category: String,
    pub data_url: Option<String>,
    /// Browser epoch milliseconds.
    pub timestamp: Option<i64>,
}

/// Where the library image bytes live.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum StorageMode {
    /// Data URLs embedded in the metadata blob (legacy).
    #[default]
    Embedded,
    /// Bytes in the id-keyed binary attachment store.
    ObjectStore,
}

impl<'de> serde::Deserialize<'de> for StorageMode {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match loose::keyword(deserializer)?.as_deref() {
            Some("indexeddb") | Some("object_store") => StorageMode::ObjectStore,
            _ => StorageMode::Embedded,
        })
    }
}
