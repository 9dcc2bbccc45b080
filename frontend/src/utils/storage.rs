pub fn window() -> Result<web_sys::Window, String> {
    web_sys::window().ok_or_else(|| "No window available".to_string())
}

pub fn document() -> Result<web_sys::Document, String> {
    window()?
        .document()
        .ok_or_else(|| "No document available".to_string())
}

pub fn local_storage() -> Result<web_sys::Storage, String> {
    window()?
        .local_storage()
        .map_err(|_| "Failed to access localStorage".to_string())?
        .ok_or_else(|| "localStorage unavailable".to_string())
}
