use leptos::*;

#[component]
pub fn SuccessAlert(#[prop(into)] title: String, children: Children) -> impl IntoView {
    view! {
        <div class="rounded-md bg-status-success-bg p-4 text-status-success-text">
            <div class="flex">
                <div class="flex-shrink-0">
                    <svg
                        class="h-5 w-5 text-status-success-text"
                        viewBox="0 0 20 20"
                        fill="currentColor"
                    >
                        <path
                            fill-rule="evenodd"
                            d="M10 18a8 8 0 100-16 8 8 0 000 16zm3.707-9.293a1 1 0 00-1.414-1.414L9 10.586 7.707 9.293a1 1 0 00-1.414 1.414l2 2a1 1 0 001.414 0l4-4z"
                            clip-rule="evenodd"
                        ></path>
                    </svg>
                </div>
                <div class="ml-3">
                    <h3 class="text-sm font-medium text-status-success-text">{title}</h3>
                    <div class="mt-2 text-sm text-status-success-text">{children()}</div>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn ErrorAlert(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some() fallback=|| ()>
            <div class="rounded-md bg-status-error-bg border border-status-error-border p-4 text-status-error-text">
                <div class="flex">
                    <div class="ml-3">
                        <h3 class="text-sm font-medium text-status-error-text">"Error"</h3>
                        <div class="mt-2 text-sm text-status-error-text">
                            <p>{move || message.get().unwrap_or_default()}</p>
                        </div>
                    </div>
                </div>
            </div>
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn success_alert_renders_title_and_body() {
        let html = render_to_string(move || {
            view! {
                <SuccessAlert title="Success!">
                    <p>"Your password has been reset."</p>
                </SuccessAlert>
            }
        });
        assert!(html.contains("Success!"));
        assert!(html.contains("Your password has been reset."));
    }

    #[test]
    fn error_alert_renders_only_when_message_present() {
        let html = render_to_string(move || {
            let message = create_rw_signal(Some("Token expired".to_string()));
            view! { <ErrorAlert message /> }
        });
        assert!(html.contains("Token expired"));

        let empty = render_to_string(move || {
            let message = create_rw_signal(None::<String>);
            view! { <ErrorAlert message /> }
        });
        assert!(!empty.contains("Error"));
    }
}
