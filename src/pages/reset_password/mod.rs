use leptos::*;
use std::rc::Rc;

mod panel;
mod repository;
mod view_model;

pub use panel::ResetPasswordPanel;

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    // The page owns the API client and hands it down explicitly.
    let client = Rc::new(crate::api::ApiClient::new());
    view! { <ResetPasswordPanel client /> }
}
