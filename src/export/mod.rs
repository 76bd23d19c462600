//! Browser glue for file export/import: blob downloads and FileReader reads.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

pub(crate) const JSON_EXPORT_FILENAME: &str = "karsel10_data.json";
pub(crate) const CSV_EXPORT_FILENAME: &str = "kas_karsel10.csv";

/// Offer `content` as a downloadable file via a temporary object URL and a
/// synthesized anchor click.
pub(crate) fn download_text(filename: &str, mime: &str, content: &str) -> Result<(), String> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type(mime);

    let blob = Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {e:?}"))?;

    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;

    let url = Url::create_object_url_with_blob(&blob)
        .map_err(|e| format!("Failed to create object URL: {e:?}"))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {e:?}"))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {e:?}"))?;

    anchor.set_href(&url);
    anchor.set_download(filename);

    let body = document.body().ok_or("No body element")?;
    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {e:?}"))?;
    anchor.click();
    let _ = body.remove_child(&anchor);
    let _ = Url::revoke_object_url(&url);

    Ok(())
}

/// Read a user-picked file as text and hand it to `on_done`.
///
/// The closure is leaked with `forget()`; imports are a rare admin action, so
/// one listener per pick is fine.
pub(crate) fn read_file_text(
    file: web_sys::File,
    on_done: impl Fn(String) + 'static,
) -> Result<(), String> {
    let reader = web_sys::FileReader::new().map_err(|e| format!("FileReader: {e:?}"))?;

    let reader_for_load = reader.clone();
    let onloadend = Closure::<dyn FnMut(web_sys::ProgressEvent)>::new(move |_| {
        if let Ok(value) = reader_for_load.result() {
            if let Some(text) = value.as_string() {
                on_done(text);
            }
        }
    });
    reader.set_onloadend(Some(onloadend.as_ref().unchecked_ref()));
    onloadend.forget();

    reader
        .read_as_text(&file)
        .map_err(|e| format!("read_as_text: {e:?}"))
}
