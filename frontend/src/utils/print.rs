use wasm_bindgen::{JsCast, JsValue};

use crate::utils::storage;

/// Opens a blank window, writes the printable markup into it, and invokes
/// the browser print dialog. Popup blockers return no window handle.
pub fn open_print_window(html: &str) -> Result<(), String> {
    let window = storage::window()?;
    let popup = window
        .open_with_url_and_target("", "_blank")
        .map_err(|_| "Failed to open print window".to_string())?
        .ok_or_else(|| "Please allow pop-ups to download the PDF".to_string())?;

    let document = popup
        .document()
        .ok_or_else(|| "No document in print window".to_string())?
        .unchecked_into::<web_sys::HtmlDocument>();
    document
        .write(&js_sys::Array::of1(&JsValue::from_str(html)))
        .map_err(|_| "Failed to write print document".to_string())?;
    document
        .close()
        .map_err(|_| "Failed to finalize print document".to_string())?;
    let _ = popup.focus();
    let _ = popup.print();
    Ok(())
}
