use crate::models::OrgDocument;
use serde::{Deserialize, Serialize};

/// Single persisted blob; the JSON export uses the same name with `.json`.
pub(crate) const DATA_KEY: &str = "karsel10_data";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

pub(crate) fn load_json_from_storage<T: for<'de> Deserialize<'de>>(key: &str) -> Option<T> {
    let json = local_storage()?.get_item(key).ok().flatten()?;
    serde_json::from_str(&json).ok()
}

pub(crate) fn save_json_to_storage<T: Serialize>(key: &str, value: &T) {
    if let Ok(json) = serde_json::to_string(value) {
        if let Some(storage) = local_storage() {
            // Quota failures are deliberately ignored; the in-memory document
            // stays authoritative for the rest of the session.
            let _ = storage.set_item(key, &json);
        }
    }
}

/// Absent or unparseable state silently falls back to the seed document.
pub(crate) fn load_document() -> OrgDocument {
    load_json_from_storage::<OrgDocument>(DATA_KEY).unwrap_or_else(OrgDocument::seed)
}

pub(crate) fn save_document(doc: &OrgDocument) {
    save_json_to_storage(DATA_KEY, doc);
}

pub(crate) fn clear_document() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(DATA_KEY);
    }
}
