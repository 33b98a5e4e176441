use super::view_model::{use_reset_password_view_model, ScreenState};
use crate::api::ApiClient;
use crate::components::alerts::{ErrorAlert, SuccessAlert};
use crate::utils::password::{strength_label, PasswordStrength};
use leptos::*;
use leptos_router::*;
use std::rc::Rc;

#[component]
pub fn ResetPasswordPanel(client: Rc<ApiClient>) -> impl IntoView {
    let vm = use_reset_password_view_model(client);
    let screen = vm.screen;
    let checking_token = vm.checking_token;

    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8">
                <div>
                    <h2 class="mt-6 text-center text-3xl font-extrabold text-fg">
                        "Set new password"
                    </h2>
                </div>

                {move || match screen.get() {
                    ScreenState::Success => view! { <SuccessCard /> }.into_view(),
                    ScreenState::InvalidToken(reason) => {
                        view! { <InvalidTokenCard reason /> }.into_view()
                    }
                    ScreenState::Form => {
                        if checking_token.get() {
                            view! {
                                <p class="text-center text-sm text-fg-muted">
                                    "Checking reset link..."
                                </p>
                            }
                                .into_view()
                        } else {
                            let vm = vm.clone();
                            view! { <ResetForm vm /> }.into_view()
                        }
                    }
                }}

            </div>
        </div>
    }
}

#[component]
fn ResetForm(vm: super::view_model::ResetPasswordViewModel) -> impl IntoView {
    let password = vm.password;
    let confirm_password = vm.confirm_password;
    let attempted = vm.attempted;
    let field_errors = vm.field_errors;
    let strength = vm.strength;
    let submit_error = vm.submit_error;
    let pending = vm.submit_action.pending();
    let email = vm.request.email.clone();

    let vm_for_submit = vm.clone();

    view! {
        <form
            class="mt-8 space-y-6"
            on:submit=move |ev| {
                ev.prevent_default();
                vm_for_submit.submit();
            }
        >
            {email
                .map(|email| {
                    view! {
                        <p class="text-center text-sm text-fg-muted">
                            "Resetting password for " <span class="font-medium">{email}</span>
                        </p>
                    }
                })}

            <div class="space-y-4">
                <div>
                    <label for="password" class="sr-only">
                        "New Password"
                    </label>
                    <input
                        id="password"
                        name="password"
                        type="password"
                        required
                        class="appearance-none rounded-md relative block w-full px-3 py-2 border border-form-control-border bg-form-control-bg placeholder-form-control-placeholder text-form-control-text focus:outline-none focus:ring-2 focus:ring-action-primary-focus focus:border-action-primary-border focus:z-10 sm:text-sm"
                        placeholder="New Password"
                        disabled=move || pending.get()
                        prop:value=password
                        on:input=move |ev| {
                            password.set(event_target_value(&ev));
                        }
                    />
                    <StrengthMeter strength />
                    {move || {
                        let show = attempted.get() || !password.get().is_empty();
                        field_errors
                            .get()
                            .password
                            .filter(|_| show)
                            .map(|msg| {
                                view! { <p class="mt-1 text-sm text-status-error-text">{msg}</p> }
                            })
                    }}

                </div>
                <div>
                    <label for="confirm-password" class="sr-only">
                        "Confirm Password"
                    </label>
                    <input
                        id="confirm-password"
                        name="confirm-password"
                        type="password"
                        required
                        class="appearance-none rounded-md relative block w-full px-3 py-2 border border-form-control-border bg-form-control-bg placeholder-form-control-placeholder text-form-control-text focus:outline-none focus:ring-2 focus:ring-action-primary-focus focus:border-action-primary-border focus:z-10 sm:text-sm"
                        placeholder="Confirm Password"
                        disabled=move || pending.get()
                        prop:value=confirm_password
                        on:input=move |ev| {
                            confirm_password.set(event_target_value(&ev));
                        }
                    />
                    {move || {
                        let show = attempted.get() || !confirm_password.get().is_empty();
                        field_errors
                            .get()
                            .confirm_password
                            .filter(|_| show)
                            .map(|msg| {
                                view! { <p class="mt-1 text-sm text-status-error-text">{msg}</p> }
                            })
                    }}

                </div>
            </div>

            <ErrorAlert message=submit_error />

            <div>
                <button
                    type="submit"
                    disabled=move || pending.get()
                    class="group relative w-full flex justify-center py-2 px-4 border border-transparent text-sm font-medium rounded-md text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg_hover focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-action-primary-focus disabled:opacity-50"
                >
                    {move || {
                        if pending.get() { "Resetting..." } else { "Reset Password" }
                    }}

                </button>
            </div>
        </form>
    }
}

#[component]
fn SuccessCard() -> impl IntoView {
    view! {
        <SuccessAlert title="Success!">
            <p>"Your password has been reset."</p>
            <div class="mt-4">
                <div class="-mx-2 -my-1.5 flex">
                    <A
                        href="/login"
                        class="px-2 py-1.5 rounded-md text-sm font-medium text-status-success-text hover:bg-status-success-bg focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-offset-status-success-bg focus:ring-status-success-border"
                    >
                        "Go to login"
                    </A>
                </div>
            </div>
        </SuccessAlert>
    }
}

#[component]
fn InvalidTokenCard(reason: String) -> impl IntoView {
    view! {
        <div class="rounded-md bg-status-error-bg border border-status-error-border p-4 text-status-error-text">
            <h3 class="text-sm font-medium text-status-error-text">{reason}</h3>
            <p class="mt-2 text-sm text-status-error-text">
                "Reset links expire after a short time. Request a new one from the login page."
            </p>
        </div>
    }
}

#[component]
fn StrengthMeter(#[prop(into)] strength: Signal<PasswordStrength>) -> impl IntoView {
    view! {
        <div class="mt-2">
            <div class="flex items-center justify-between text-xs text-fg-muted">
                <span>"Password strength"</span>
                <span>{move || strength_label(strength.get().score)}</span>
            </div>
            <div class="mt-1 h-1.5 w-full rounded-full bg-surface-muted">
                <div
                    class="h-1.5 rounded-full bg-action-primary-bg transition-all"
                    style=move || format!("width: {}%", strength.get().score)
                ></div>
            </div>
            {move || {
                let feedback = strength.get().feedback;
                if feedback.is_empty() {
                    ().into_view()
                } else {
                    view! {
                        <ul class="mt-1 list-disc list-inside text-xs text-fg-muted">
                            {feedback
                                .into_iter()
                                .map(|hint| view! { <li>{hint}</li> })
                                .collect_view()}
                        </ul>
                    }
                        .into_view()
                }
            }}

        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;
    use crate::utils::password::evaluate_password;

    #[test]
    fn invalid_token_card_renders_reason() {
        let html = render_to_string(move || {
            view! { <InvalidTokenCard reason="Invalid or expired reset token".to_string() /> }
        });
        assert!(html.contains("Invalid or expired reset token"));
        assert!(html.contains("Request a new one"));
    }

    #[test]
    fn strength_meter_shows_label_and_feedback() {
        let html = render_to_string(move || {
            let strength = create_rw_signal(evaluate_password("abc"));
            view! { <StrengthMeter strength /> }
        });
        assert!(html.contains("Weak"));
        assert!(html.contains("width: 20%"));
        assert!(html.contains("Add an uppercase letter"));
    }

    #[test]
    fn strength_meter_is_clean_for_a_strong_password() {
        let html = render_to_string(move || {
            let strength = create_rw_signal(evaluate_password("Valid1Pass!"));
            view! { <StrengthMeter strength /> }
        });
        assert!(html.contains("Strong"));
        assert!(html.contains("width: 100%"));
        assert!(!html.contains("Add a"));
    }
}
