use leptos::*;

use crate::components::common::LoadingSpinner;
use crate::pages::login::LoginPage;
use crate::state::session::{use_session, Role, SessionState};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gate {
    Loading,
    Content,
    Login,
}

/// What a role-gated route shows for the current session.
pub fn gate(session: SessionState, required: Role) -> Gate {
    if session.loading {
        Gate::Loading
    } else if session.role == Some(required) {
        Gate::Content
    } else {
        Gate::Login
    }
}

/// Renders its children only for sessions holding `role`. Anyone else gets
/// the login screen in place; the URL does not change.
#[component]
pub fn RequireRole(role: Role, children: ChildrenFn) -> impl IntoView {
    let (session, _) = use_session();
    view! {
        {move || match gate(session.get(), role) {
            Gate::Loading => view! { <LoadingSpinner/> }.into_view(),
            Gate::Content => children().into_view(),
            Gate::Login => view! { <LoginPage/> }.into_view(),
        }}
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;

    #[test]
    fn gate_waits_while_the_session_is_loading() {
        let session = SessionState {
            role: None,
            loading: true,
        };
        assert_eq!(gate(session, Role::Admin), Gate::Loading);
        assert_eq!(gate(session, Role::Employee), Gate::Loading);
    }

    #[test]
    fn gate_admits_only_the_matching_role() {
        let admin = SessionState {
            role: Some(Role::Admin),
            loading: false,
        };
        assert_eq!(gate(admin, Role::Admin), Gate::Content);
        assert_eq!(gate(admin, Role::Employee), Gate::Login);

        let anonymous = SessionState {
            role: None,
            loading: false,
        };
        assert_eq!(gate(anonymous, Role::Admin), Gate::Login);
    }

    #[test]
    fn matching_role_renders_the_gated_children() {
        use crate::test_support::helpers::provide_session;
        use crate::test_support::ssr::render_with_router;

        let html = render_with_router(|| {
            provide_session(Some(Role::Admin));
            view! { <RequireRole role=Role::Admin><div>"gated content"</div></RequireRole> }
        });
        assert!(html.contains("gated content"));
    }

    #[test]
    fn visitors_without_the_role_see_the_login_screen_instead() {
        use crate::test_support::helpers::provide_session;
        use crate::test_support::ssr::render_with_router;

        let html = render_with_router(|| {
            provide_session(None);
            view! { <RequireRole role=Role::Admin><div>"gated content"</div></RequireRole> }
        });
        assert!(!html.contains("gated content"));
        assert!(html.contains("Login as Admin"));
    }

    #[test]
    fn loading_sessions_show_the_spinner() {
        use crate::test_support::helpers::provide_loading_session;
        use crate::test_support::ssr::render_with_router;

        let html = render_with_router(|| {
            provide_loading_session();
            view! { <RequireRole role=Role::Employee><div>"gated content"</div></RequireRole> }
        });
        assert!(!html.contains("gated content"));
        assert!(html.contains("animate-spin"));
    }
}
