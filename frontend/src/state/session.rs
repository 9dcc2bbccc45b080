use leptos::*;

use crate::api::{ApiClient, ApiError};
use crate::router;
use crate::state::tokens::TokenSlot;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Admin,
    Employee,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Employee => "employee",
        }
    }

    pub fn token_slot(self) -> TokenSlot {
        match self {
            Role::Admin => TokenSlot::Admin,
            Role::Employee => TokenSlot::Employee,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub role: Option<Role>,
    pub loading: bool,
}

pub type SessionContext = (ReadSignal<SessionState>, WriteSignal<SessionState>);

/// Resolves the stored tokens into at most one active role. The admin slot
/// wins when both verify. A token is deleted only when the server
/// explicitly rejects it or reports a different role; transport failures
/// leave it in place for the next load.
pub async fn bootstrap(client: &ApiClient) -> Option<Role> {
    let tokens = client.token_store();
    for role in [Role::Admin, Role::Employee] {
        let slot = role.token_slot();
        if tokens.get(slot).is_none() {
            continue;
        }
        match client.get_me(slot).await {
            Ok(me) if me.role == role.as_str() => return Some(role),
            Ok(_) | Err(ApiError::AuthRejected) => tokens.clear(slot),
            Err(_) => {}
        }
    }
    None
}

/// Verifies stored credentials once at startup and exposes the result to
/// the rest of the app. The whole app sits behind a loading screen until
/// the stored tokens resolve, so no view is interactive before the
/// session settles.
#[component]
pub fn SessionProvider(children: ChildrenFn) -> impl IntoView {
    let client = ApiClient::new();
    let (session, set_session) = create_signal(SessionState {
        role: None,
        loading: true,
    });
    provide_context::<SessionContext>((session, set_session));

    spawn_local(async move {
        let role = bootstrap(&client).await;
        set_session.update(|state| {
            state.role = role;
            state.loading = false;
        });
        if let Some(role) = role {
            redirect_from_landing(role);
        }
    });

    view! {
        {move || {
            if session.get().loading {
                view! {
                    <div class="flex min-h-screen items-center justify-center bg-gray-50">
                        <div class="h-12 w-12 animate-spin rounded-full border-b-2 border-yellow-600"></div>
                    </div>
                }
                    .into_view()
            } else {
                children().into_view()
            }
        }}
    }
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().unwrap_or_else(|| create_signal(SessionState::default()))
}

/// Stores the token and activates the role, in that order.
pub fn begin_session(
    client: &ApiClient,
    role: Role,
    token: &str,
    set_session: WriteSignal<SessionState>,
) {
    client.token_store().set(role.token_slot(), token);
    set_session.update(|state| {
        state.role = Some(role);
        state.loading = false;
    });
}

/// Drops the stored token for `role` and clears the active session.
pub fn end_session(client: &ApiClient, role: Role, set_session: WriteSignal<SessionState>) {
    client.token_store().clear(role.token_slot());
    set_session.update(|state| state.role = None);
}

fn redirect_from_landing(role: Role) {
    if let Ok(window) = crate::utils::storage::window() {
        let location = window.location();
        if location.pathname().as_deref() == Ok("/") {
            let _ = location.set_href(router::dashboard_path(role));
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use crate::state::tokens::{MemoryTokens, TokenStore};
    use std::sync::Arc;

    fn client_with(server: &MockServer, tokens: MemoryTokens) -> ApiClient {
        ApiClient::new_with_parts(server.url("/api"), Arc::new(tokens))
    }

    #[tokio::test]
    async fn no_stored_tokens_resolve_to_no_role() {
        let server = MockServer::start();
        let client = client_with(&server, MemoryTokens::default());
        assert_eq!(bootstrap(&client).await, None);
    }

    #[tokio::test]
    async fn valid_admin_token_wins_over_employee_token() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET)
                .path("/api/me")
                .header("authorization", "Bearer tok-admin");
            then.status(200)
                .json_body(serde_json::json!({ "role": "admin" }));
        });

        let tokens = MemoryTokens::with_token(TokenSlot::Admin, "tok-admin");
        tokens.set(TokenSlot::Employee, "tok-emp");
        let client = client_with(&server, tokens);

        assert_eq!(bootstrap(&client).await, Some(Role::Admin));
        let store = client.token_store();
        assert!(store.get(TokenSlot::Admin).is_some());
        assert!(store.get(TokenSlot::Employee).is_some());
    }

    #[tokio::test]
    async fn rejected_admin_token_is_deleted_and_employee_takes_over() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET)
                .path("/api/me")
                .header("authorization", "Bearer tok-admin");
            then.status(401).json_body(serde_json::json!({}));
        });
        server.mock(|when, then| {
            when.method(GET)
                .path("/api/me")
                .header("authorization", "Bearer tok-emp");
            then.status(200)
                .json_body(serde_json::json!({ "role": "employee" }));
        });

        let tokens = MemoryTokens::with_token(TokenSlot::Admin, "tok-admin");
        tokens.set(TokenSlot::Employee, "tok-emp");
        let client = client_with(&server, tokens);

        assert_eq!(bootstrap(&client).await, Some(Role::Employee));
        let store = client.token_store();
        assert!(store.get(TokenSlot::Admin).is_none());
        assert!(store.get(TokenSlot::Employee).is_some());
    }

    #[tokio::test]
    async fn token_reporting_the_wrong_role_is_deleted() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/me");
            then.status(200)
                .json_body(serde_json::json!({ "role": "employee" }));
        });

        let client = client_with(
            &server,
            MemoryTokens::with_token(TokenSlot::Admin, "tok-admin"),
        );

        assert_eq!(bootstrap(&client).await, None);
        assert!(client.token_store().get(TokenSlot::Admin).is_none());
    }

    #[tokio::test]
    async fn nothing_renders_behind_the_loading_screen_while_tokens_resolve() {
        // spawn_local on the host needs a LocalSet; the render itself is
        // synchronous, so only the initial frame is observed.
        let local = tokio::task::LocalSet::new();
        local
            .run_until(async {
                let html = crate::test_support::ssr::render_to_string(|| {
                    view! { <SessionProvider><div>"app content"</div></SessionProvider> }
                });
                assert!(html.contains("animate-spin"));
                assert!(!html.contains("app content"));
            })
            .await;
    }

    #[tokio::test]
    async fn transport_failure_keeps_the_stored_token() {
        let server = MockServer::start();
        // No routes registered, so the check fails like an unreachable host.
        let client = client_with(
            &server,
            MemoryTokens::with_token(TokenSlot::Admin, "tok-admin"),
        );

        assert_eq!(bootstrap(&client).await, None);
        assert!(client.token_store().get(TokenSlot::Admin).is_some());
    }
}
