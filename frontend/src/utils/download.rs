use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use crate::utils::storage;

/// Builds a CSV blob and clicks a synthetic anchor to save it under
/// `filename`.
pub fn trigger_csv_download(contents: &str, filename: &str) -> Result<(), String> {
    let document = storage::document()?;

    let parts = js_sys::Array::new();
    parts.push(&JsValue::from_str(contents));
    let options = BlobPropertyBag::new();
    options.set_type("text/csv;charset=utf-8;");
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)
        .map_err(|_| "Failed to build CSV blob".to_string())?;
    let url = Url::create_object_url_with_blob(&blob)
        .map_err(|_| "Failed to create download URL".to_string())?;

    let anchor = document
        .create_element("a")
        .map_err(|_| "Failed to create download link".to_string())?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|_| "Failed to create download link".to_string())?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();
    let _ = Url::revoke_object_url(&url);
    Ok(())
}
