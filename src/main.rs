#[cfg(target_arch = "wasm32")]
fn main() {
    use leptos::*;
    use leptos_router::*;
    use sitevolt_frontend::config;
    use sitevolt_frontend::pages::reset_password::ResetPasswordPage;
    use wasm_bindgen_futures::spawn_local;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Starting SiteVolt Frontend: initializing runtime config");

    spawn_local(async move {
        config::init().await;
        log::info!("Runtime config initialized");
        mount_to_body(|| {
            view! {
                <Router>
                    <Routes>
                        <Route path="/reset-password" view=ResetPasswordPage/>
                    </Routes>
                </Router>
            }
        });
    });
}

// The app only runs in the browser; the native binary is a stub so the
// workspace still builds for host tests.
#[cfg(not(target_arch = "wasm32"))]
fn main() {}
