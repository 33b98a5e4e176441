use super::repository::ResetPasswordRepository;
use crate::api::{ApiClient, ApiError, MessageResponse};
use crate::utils::password::{evaluate_password, PasswordStrength};
use leptos::*;
use leptos_router::{use_query_map, ParamsMap};
use std::rc::Rc;

pub const MISSING_TOKEN_MESSAGE: &str = "Invalid or missing reset token";
pub const EXPIRED_TOKEN_MESSAGE: &str = "Invalid or expired reset token";

/// Parsed once from the deep-link query string; immutable afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResetRequest {
    pub token: Option<String>,
    pub email: Option<String>,
}

impl ResetRequest {
    pub fn from_query(query: &ParamsMap) -> Self {
        Self {
            token: query
                .get("token")
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty()),
            email: query.get("email").cloned().filter(|e| !e.is_empty()),
        }
    }
}

/// Which of the three mutually exclusive screens is active. `Success`
/// and `InvalidToken` are terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenState {
    Form,
    InvalidToken(String),
    Success,
}

impl ScreenState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, ScreenState::Form)
    }

    /// Moves to `next` unless the current state is terminal. A success
    /// that lands before a late token rejection therefore wins.
    pub fn advance(&mut self, next: ScreenState) {
        if !self.is_terminal() {
            *self = next;
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub password: Option<String>,
    pub confirm_password: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.password.is_none() && self.confirm_password.is_none()
    }
}

/// Field rules mirrored from the auth service: minimum length 8 plus
/// at least one lowercase, uppercase, digit, and special character. A
/// confirm mismatch is reported against the confirm field.
pub fn validate_new_password(password: &str, confirm_password: &str) -> FieldErrors {
    let mut errors = FieldErrors::default();

    if password.chars().count() < 8 {
        errors.password = Some("Password must be at least 8 characters".to_string());
    } else {
        let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
        let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
        let has_digit = password.chars().any(|c| c.is_ascii_digit());
        let has_special = password.chars().any(|c| !c.is_ascii_alphanumeric());
        if !(has_lower && has_upper && has_digit && has_special) {
            errors.password = Some(
                "Password must include lowercase, uppercase, number, and special character"
                    .to_string(),
            );
        }
    }

    if confirm_password.is_empty() {
        errors.confirm_password = Some("Please confirm your password".to_string());
    } else if confirm_password != password {
        errors.confirm_password = Some("Passwords do not match".to_string());
    }

    errors
}

#[derive(Clone)]
pub struct ResetPasswordViewModel {
    pub request: ResetRequest,
    pub password: RwSignal<String>,
    pub confirm_password: RwSignal<String>,
    pub attempted: RwSignal<bool>,
    pub field_errors: Signal<FieldErrors>,
    pub strength: Signal<PasswordStrength>,
    pub screen: RwSignal<ScreenState>,
    pub checking_token: RwSignal<bool>,
    pub submit_error: RwSignal<Option<String>>,
    pub status: RwSignal<SubmissionStatus>,
    pub submit_action: Action<(String, String), Result<MessageResponse, ApiError>>,
    repository: ResetPasswordRepository,
}

pub fn use_reset_password_view_model(client: Rc<ApiClient>) -> ResetPasswordViewModel {
    let query = use_query_map();
    let request = query.with_untracked(ResetRequest::from_query);
    let vm = ResetPasswordViewModel::new(client, request);
    vm.spawn_token_check();
    vm
}

impl ResetPasswordViewModel {
    pub fn new(client: Rc<ApiClient>, request: ResetRequest) -> Self {
        let repository = ResetPasswordRepository::new_with_client(client);

        let password = create_rw_signal(String::new());
        let confirm_password = create_rw_signal(String::new());
        let attempted = create_rw_signal(false);
        let screen = create_rw_signal(ScreenState::Form);
        let checking_token = create_rw_signal(false);
        let submit_error = create_rw_signal(None);
        let status = create_rw_signal(SubmissionStatus::default());

        let field_errors = Signal::derive(move || {
            validate_new_password(&password.get(), &confirm_password.get())
        });
        let strength = Signal::derive(move || evaluate_password(&password.get()));

        if request.token.is_none() {
            screen.update(|s| {
                s.advance(ScreenState::InvalidToken(MISSING_TOKEN_MESSAGE.to_string()))
            });
        }

        let repo_for_submit = repository.clone();
        let submit_action = create_action(move |input: &(String, String)| {
            let repo = repo_for_submit.clone();
            let (token, new_password) = input.clone();
            async move { repo.reset_password(token, new_password).await }
        });

        let vm = Self {
            request,
            password,
            confirm_password,
            attempted,
            field_errors,
            strength,
            screen,
            checking_token,
            submit_error,
            status,
            submit_action,
            repository,
        };

        let vm_for_effect = vm.clone();
        create_effect(move |_| {
            if let Some(result) = vm_for_effect.submit_action.value().get() {
                vm_for_effect.apply_submit_result(&result);
            }
        });

        vm
    }

    /// Issues the single token check when the deep link carried a
    /// token. Missing tokens were already routed to `InvalidToken` in
    /// `new` without touching the network.
    pub fn spawn_token_check(&self) {
        let Some(token) = self.request.token.clone() else {
            return;
        };
        let repo = self.repository.clone();
        let screen = self.screen;
        let checking_token = self.checking_token;
        checking_token.set(true);
        spawn_local(async move {
            if let Err(reason) = run_token_check(&repo, token).await {
                screen.update(|s| s.advance(ScreenState::InvalidToken(reason)));
            }
            checking_token.set(false);
        });
    }

    pub fn submit(&self) {
        // At most one outstanding submission per form instance.
        if self.status.get_untracked() == SubmissionStatus::Submitting {
            return;
        }
        self.attempted.set(true);

        let password = self.password.get_untracked();
        let confirm_password = self.confirm_password.get_untracked();
        if !validate_new_password(&password, &confirm_password).is_empty() {
            return;
        }

        let Some(token) = self.request.token.clone() else {
            self.submit_error.set(Some("Invalid reset token".to_string()));
            self.status.set(SubmissionStatus::Failed);
            return;
        };

        self.submit_error.set(None);
        self.status.set(SubmissionStatus::Submitting);
        self.submit_action.dispatch((token, password));
    }

    pub(crate) fn apply_submit_result(&self, result: &Result<MessageResponse, ApiError>) {
        match result {
            Ok(_) => {
                self.status.set(SubmissionStatus::Succeeded);
                self.submit_error.set(None);
                self.screen.update(|s| s.advance(ScreenState::Success));
            }
            Err(err) => {
                self.status.set(SubmissionStatus::Failed);
                self.submit_error.set(Some(err.to_string()));
            }
        }
    }
}

/// Single attempt, no retry. Rejections and transport failures collapse
/// into one user-facing message.
pub(crate) async fn run_token_check(
    repo: &ResetPasswordRepository,
    token: String,
) -> Result<(), String> {
    repo.validate_token(token)
        .await
        .map_err(|_| EXPIRED_TOKEN_MESSAGE.to_string())
}



#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn validate_rules_match_the_auth_service() {
        assert!(validate_new_password("Valid1Pass!", "Valid1Pass!").is_empty());
        assert!(validate_new_password("short1", "short1").password.is_some());
    }

    #[wasm_bindgen_test]
    fn reset_request_trims_the_token() {
        let mut query = ParamsMap::new();
        query.insert("token".to_string(), " abc ".to_string());
        let request = ResetRequest::from_query(&query);
        assert_eq!(request.token.as_deref(), Some("abc"));
    }
}
