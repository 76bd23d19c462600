use crate::models::OrgDocument;
use crate::storage::{clear_document, load_document, save_document};
use crate::store;
use leptos::prelude::*;

/// One instance per session, provided through context in `App`.
///
/// The document signal is the only writer path to localStorage: every
/// mutation goes through `commit`, so the persisted blob can never lag behind
/// what the pages render.
#[derive(Clone, Copy)]
pub(crate) struct AppState {
    pub document: RwSignal<OrgDocument>,

    /// In-memory only; a reload always starts logged out.
    pub admin_mode: RwSignal<bool>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            document: RwSignal::new(load_document()),
            admin_mode: RwSignal::new(false),
        }
    }

    /// Apply a command to the document, persist, then notify subscribers.
    pub fn commit<R>(&self, f: impl FnOnce(&mut OrgDocument) -> R) -> R {
        let mut doc = self.document.get_untracked();
        let out = f(&mut doc);
        save_document(&doc);
        self.document.set(doc);
        out
    }

    pub fn login(&self, password: &str) -> bool {
        let ok = store::authenticate(&self.document.get_untracked(), password);
        if ok {
            self.admin_mode.set(true);
        }
        ok
    }

    pub fn logout(&self) {
        self.admin_mode.set(false);
    }

    /// Replace the whole document from an imported JSON file. The parse is
    /// the only validation; anything that deserializes is trusted.
    pub fn import_document(&self, text: &str) -> Result<(), String> {
        let doc = store::parse_document(text)
            .map_err(|e| format!("File JSON tidak valid: {e}"))?;
        save_document(&doc);
        self.document.set(doc);
        Ok(())
    }

    pub fn reset_to_default(&self) {
        clear_document();
        let doc = OrgDocument::seed();
        save_document(&doc);
        self.document.set(doc);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Copy)]
pub(crate) struct AppContext(pub AppState);
