mod api;
mod components;
pub mod config;
mod pages;
pub mod router;
mod state;
#[cfg(test)]
mod test_support;
pub mod utils;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use leptos::*;

    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    let _ = console_log::init_with_level(level);
    log::info!("Starting New Daybreak frontend (wasm)");

    // Kick off runtime config load from ./config.json (non-blocking).
    // If window.__DAYBREAK_ENV is present (env.js), it takes precedence.
    leptos::spawn_local(async move {
        config::init().await;
        log::info!("Runtime config initialized");
    });

    mount_to_body(|| {
        view! {
            <crate::state::session::SessionProvider>
                <crate::router::AppRouter/>
            </crate::state::session::SessionProvider>
        }
    });
}
