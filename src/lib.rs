pub mod api;
mod components;
pub mod config;
pub mod pages;
pub mod utils;

#[cfg(all(test, not(target_arch = "wasm32")))]
mod test_support;

// The app itself only runs in the browser; the non-wasm build of this
// library exists for the host-side test suite.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use crate::pages::reset_password::ResetPasswordPage;
    use leptos::*;
    use leptos_router::*;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Starting SiteVolt Frontend (wasm)");

    // Kick off runtime config load from ./config.json (non-blocking).
    // If window.__SITEVOLT_ENV is present (env.js), it takes precedence.
    leptos::spawn_local(async move {
        config::init().await;
        log::info!("Runtime config initialized");
    });

    mount_to_body(|| {
        view! {
            <Router>
                <Routes>
                    <Route path="/reset-password" view=ResetPasswordPage/>
                </Routes>
            </Router>
        }
    });
}
