#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::state::session::{Role, SessionState};
    use leptos::*;

    /// Provides a settled session context holding `role`.
    pub fn provide_session(role: Option<Role>) -> WriteSignal<SessionState> {
        let (session, set_session) = create_signal(SessionState {
            role,
            loading: false,
        });
        provide_context((session, set_session));
        set_session
    }

    /// Provides a session context that is still resolving stored tokens.
    pub fn provide_loading_session() {
        let (session, set_session) = create_signal(SessionState {
            role: None,
            loading: true,
        });
        provide_context((session, set_session));
    }
}
