use std::rc::Rc;

use leptos::*;
use leptos_router::{use_navigate, A};

use crate::api::{ApiClient, LoginRequest};
use crate::components::common::ErrorMessage;
use crate::pages::login::repository::LoginRepository;
use crate::pages::login::view_model::{admin_login, LoginFormState};
use crate::router::dashboard_path;
use crate::state::session::{use_session, Role};

#[component]
pub fn LoginPage() -> impl IntoView {
    let repository = Rc::new(LoginRepository::new_with_client(Rc::new(ApiClient::new())));
    let form = LoginFormState::new();
    let (_, set_session) = use_session();
    let error = create_rw_signal(Option::<String>::None);

    let login_action = create_action({
        let repository = repository.clone();
        move |request: &LoginRequest| {
            let repository = repository.clone();
            let request = request.clone();
            async move { admin_login(&repository, &request).await }
        }
    });
    let pending = login_action.pending();

    let navigate = use_navigate();
    create_effect(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(()) => {
                    set_session.update(|state| {
                        state.role = Some(Role::Admin);
                        state.loading = false;
                    });
                    navigate(dashboard_path(Role::Admin), Default::default());
                }
                Err(err) => error.set(Some(err.to_string())),
            }
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        match form.to_request() {
            Ok(request) => {
                error.set(None);
                login_action.dispatch(request);
            }
            Err(err) => error.set(Some(err.to_string())),
        }
    };

    view! {
        <div class="flex min-h-screen items-center justify-center bg-gradient-to-br from-blue-50 via-white to-yellow-50 p-6">
            <div class="w-full max-w-md space-y-8">
                <div class="text-center">
                    <h1 class="bg-gradient-to-r from-blue-600 to-yellow-500 bg-clip-text text-2xl font-bold text-transparent">
                        "New Daybreak"
                    </h1>
                    <p class="text-sm text-yellow-600">"Home Support"</p>
                    <h2 class="mt-6 text-2xl font-bold">"Admin Login"</h2>
                </div>

                <div class="rounded border border-blue-300 bg-white p-6 shadow">
                    <form on:submit=on_submit class="space-y-4">
                        <Show when=move || error.get().is_some()>
                            <ErrorMessage message=Signal::derive(move || error.get().unwrap_or_default())/>
                        </Show>

                        <div>
                            <label class="text-sm">"Email"</label>
                            <input
                                type="email"
                                required
                                prop:value=move || form.email().get()
                                on:input=move |ev| form.email().set(event_target_value(&ev))
                                class="w-full rounded border p-2"
                            />
                        </div>

                        <div>
                            <label class="text-sm">"Password"</label>
                            <div class="relative">
                                <input
                                    type=move || if form.show_password().get() { "text" } else { "password" }
                                    required
                                    prop:value=move || form.password().get()
                                    on:input=move |ev| form.password().set(event_target_value(&ev))
                                    class="w-full rounded border p-2 pr-10"
                                />
                                <button
                                    type="button"
                                    on:click=move |_| form.show_password().update(|shown| *shown = !*shown)
                                    class="absolute right-2 top-1/2 -translate-y-1/2 text-sm text-gray-500"
                                >
                                    {move || if form.show_password().get() { "Hide" } else { "Show" }}
                                </button>
                            </div>
                        </div>

                        <button
                            type="submit"
                            disabled=move || pending.get()
                            class="w-full rounded bg-yellow-600 py-2 text-white disabled:opacity-60"
                        >
                            {move || if pending.get() { "Logging in..." } else { "Login as Admin" }}
                        </button>
                    </form>

                    <div class="mt-3 text-center">
                        <A href="/" class="text-blue-600">
                            "← Back to Website"
                        </A>
                    </div>
                </div>
            </div>
        </div>
    }
}
