mod app;
mod components;
mod export;
mod models;
mod pages;
mod state;
mod storage;
mod store;
mod util;

use leptos::prelude::*;

// Needed for `#[wasm_bindgen(start)]` on the wasm entrypoint.
#[cfg(all(target_arch = "wasm32", not(test)))]
use wasm_bindgen::prelude::wasm_bindgen;

// Only register the WASM start function for normal builds (not for tests),
// otherwise wasm-bindgen-test will end up with multiple entry symbols.
#[cfg_attr(all(target_arch = "wasm32", not(test)), wasm_bindgen(start))]
pub fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(app::App);
}

// WASM-only tests (run with `cargo test --target wasm32-unknown-unknown` + wasm-bindgen-test-runner)
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use crate::models::OrgDocument;
    use crate::storage::{clear_document, load_document, save_document, DATA_KEY};
    use crate::store;
    use crate::util::now_ms;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn raw_set(value: &str) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .expect("localStorage should be available in the test browser");
        storage.set_item(DATA_KEY, value).unwrap();
    }

    #[wasm_bindgen_test]
    fn test_document_storage_roundtrip() {
        clear_document();

        // First load falls back to the seed.
        let doc = load_document();
        assert_eq!(doc, OrgDocument::seed());

        let mut doc = doc;
        store::change_admin_password(&mut doc, "baru");
        save_document(&doc);

        let reloaded = load_document();
        assert_eq!(reloaded.settings.admin_password, "baru");

        clear_document();
    }

    #[wasm_bindgen_test]
    fn test_load_falls_back_on_garbage() {
        raw_set("{{{ not json");
        let doc = load_document();
        assert_eq!(doc, OrgDocument::seed());
        clear_document();
    }

    #[wasm_bindgen_test]
    fn test_mutation_then_reload_keeps_data() {
        clear_document();

        let mut doc = load_document();
        let id = store::upsert_activity(
            &mut doc,
            crate::models::ActivityForm {
                id: None,
                title: "Bakti sosial".to_string(),
                date: "2025-09-07".to_string(),
                description: String::new(),
            },
            now_ms(),
        );
        save_document(&doc);

        let reloaded = load_document();
        assert_eq!(reloaded.kegiatan.first().map(|a| a.id), Some(id));

        clear_document();
    }
}
