use leptos::*;

use crate::api::{ApiError, LoginRequest};
use crate::pages::login::repository::LoginRepository;
use crate::state::tokens::TokenSlot;

#[derive(Clone, Copy)]
pub struct LoginFormState {
    email: RwSignal<String>,
    password: RwSignal<String>,
    show_password: RwSignal<bool>,
}

impl LoginFormState {
    pub fn new() -> Self {
        Self {
            email: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
            show_password: create_rw_signal(false),
        }
    }

    pub fn email(&self) -> RwSignal<String> {
        self.email
    }

    pub fn password(&self) -> RwSignal<String> {
        self.password
    }

    pub fn show_password(&self) -> RwSignal<bool> {
        self.show_password
    }

    pub fn to_request(&self) -> Result<LoginRequest, ApiError> {
        let email = self.email.get_untracked().trim().to_string();
        let password = self.password.get_untracked();
        if email.is_empty() {
            return Err(ApiError::validation("Please enter your email address."));
        }
        if password.is_empty() {
            return Err(ApiError::validation("Please enter your password."));
        }
        Ok(LoginRequest { email, password })
    }
}

impl Default for LoginFormState {
    fn default() -> Self {
        Self::new()
    }
}

/// Admin-only credential exchange. A token issued for any other role is
/// discarded without being stored.
pub async fn admin_login(
    repository: &LoginRepository,
    request: &LoginRequest,
) -> Result<(), ApiError> {
    let response = repository.login(request).await?;
    if response.user.role != "admin" {
        return Err(ApiError::validation("Only administrators can log in here."));
    }
    repository
        .client()
        .token_store()
        .set(TokenSlot::Admin, &response.token);
    Ok(())
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use crate::api::ApiClient;
    use crate::state::tokens::MemoryTokens;
    use std::rc::Rc;
    use std::sync::Arc;

    fn repository(server: &MockServer) -> LoginRepository {
        let client = ApiClient::new_with_parts(server.url("/api"), Arc::new(MemoryTokens::default()));
        LoginRepository::new_with_client(Rc::new(client))
    }

    fn request() -> LoginRequest {
        LoginRequest {
            email: "admin@daybreak.test".into(),
            password: "pw".into(),
        }
    }

    #[tokio::test]
    async fn admin_login_stores_the_token_for_admin_users() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/login");
            then.status(200).json_body(serde_json::json!({
                "token": "tok-admin",
                "user": { "role": "admin", "name": "Dana" }
            }));
        });

        let repository = repository(&server);
        admin_login(&repository, &request()).await.unwrap();
        assert_eq!(
            repository.client().token_store().get(TokenSlot::Admin),
            Some("tok-admin".to_string())
        );
    }

    #[tokio::test]
    async fn non_admin_tokens_are_rejected_and_never_stored() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/login");
            then.status(200).json_body(serde_json::json!({
                "token": "tok-emp",
                "user": { "role": "employee" }
            }));
        });

        let repository = repository(&server);
        let err = admin_login(&repository, &request()).await.unwrap_err();
        assert_eq!(err.to_string(), "Only administrators can log in here.");
        assert!(repository
            .client()
            .token_store()
            .get(TokenSlot::Admin)
            .is_none());
    }

    #[tokio::test]
    async fn bad_credentials_surface_the_server_message() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/login");
            then.status(401)
                .json_body(serde_json::json!({ "message": "Invalid email or password" }));
        });

        let repository = repository(&server);
        let err = admin_login(&repository, &request()).await.unwrap_err();
        assert_eq!(err.to_string(), "Invalid email or password");
    }
}
