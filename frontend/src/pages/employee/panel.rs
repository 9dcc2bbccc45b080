use std::rc::Rc;

use chrono::Utc;
use gloo_timers::callback::Interval;
use leptos::*;

use crate::api::ApiClient;
use crate::components::common::ErrorMessage;
use crate::pages::employee::repository::EmployeeRepository;
use crate::pages::employee::view_model::{
    after_check_out, perform_check_in, perform_check_out, sync_attendance, CheckInOutcome,
    CheckOutOutcome, ClockState, SyncOutcome, SESSION_EXPIRED,
};
use crate::state::session::{end_session, use_session, Role};
use crate::utils::time::format_elapsed;

const POLL_MS: u32 = 10_000;
const TICK_MS: u32 = 1_000;

#[component]
pub fn EmployeeDashboardPage() -> impl IntoView {
    let repository = Rc::new(EmployeeRepository::new_with_client(Rc::new(ApiClient::new())));
    let (_, set_session) = use_session();

    let state = create_rw_signal(ClockState::Syncing);
    let elapsed = create_rw_signal(0i64);
    let message = create_rw_signal(Option::<String>::None);

    // Dropping an Interval cancels it, so taking the handle stops the timer
    // and unmounting stops both.
    let poll_handle = store_value(Option::<Interval>::None);
    let tick_handle = store_value(Option::<Interval>::None);
    let stop_timers = move || {
        poll_handle.update_value(|handle| {
            handle.take();
        });
        tick_handle.update_value(|handle| {
            handle.take();
        });
    };

    let sync_action = create_action({
        let repository = repository.clone();
        move |_: &()| {
            let repository = repository.clone();
            async move { sync_attendance(repository.client(), Utc::now()).await }
        }
    });
    let check_in_action = create_action({
        let repository = repository.clone();
        move |_: &()| {
            let repository = repository.clone();
            async move { perform_check_in(repository.client(), Utc::now()).await }
        }
    });
    let check_out_action = create_action({
        let repository = repository.clone();
        move |_: &()| {
            let repository = repository.clone();
            async move { perform_check_out(repository.client()).await }
        }
    });

    let syncing = sync_action.pending();
    let mutating = Signal::derive(move || {
        check_in_action.pending().get() || check_out_action.pending().get()
    });

    let expire = move || {
        message.set(Some(SESSION_EXPIRED.to_string()));
        elapsed.set(0);
        state.set(ClockState::NoSession);
        stop_timers();
    };

    create_effect(move |_| {
        if let Some(outcome) = sync_action.value().get() {
            match outcome {
                SyncOutcome::NoSession => {
                    state.set(ClockState::NoSession);
                    stop_timers();
                }
                SyncOutcome::CheckedOut => {
                    elapsed.set(0);
                    state.set(ClockState::CheckedOut);
                }
                SyncOutcome::CheckedIn { elapsed_seconds } => {
                    elapsed.set(elapsed_seconds);
                    state.set(ClockState::CheckedIn);
                }
                SyncOutcome::SessionExpired => expire(),
                SyncOutcome::Unavailable(text) => message.set(Some(text)),
            }
        }
    });

    create_effect(move |_| {
        if let Some(outcome) = check_in_action.value().get() {
            match outcome {
                CheckInOutcome::Started { elapsed_seconds } => {
                    message.set(None);
                    elapsed.set(elapsed_seconds);
                    state.set(ClockState::CheckedIn);
                }
                CheckInOutcome::NeedsSync => sync_action.dispatch(()),
                CheckInOutcome::SessionExpired => expire(),
                CheckInOutcome::Failed(text) => message.set(Some(text)),
            }
        }
    });

    create_effect(move |_| {
        if let Some(outcome) = check_out_action.value().get() {
            match outcome {
                CheckOutOutcome::Done => {
                    message.set(None);
                    let (next, seconds) = after_check_out();
                    elapsed.set(seconds);
                    state.set(next);
                    sync_action.dispatch(());
                }
                CheckOutOutcome::SessionExpired => expire(),
                CheckOutOutcome::Failed(text) => message.set(Some(text)),
            }
        }
    });

    sync_action.dispatch(());
    poll_handle.set_value(Some(Interval::new(POLL_MS, move || {
        let idle = !syncing.get_untracked() && !mutating.get_untracked();
        if idle && state.get_untracked() != ClockState::NoSession {
            sync_action.dispatch(());
        }
    })));
    tick_handle.set_value(Some(Interval::new(TICK_MS, move || {
        if state.get_untracked() == ClockState::CheckedIn {
            elapsed.update(|seconds| *seconds += 1);
        }
    })));

    let status_label = move || match state.get() {
        ClockState::NoSession => "No active session",
        ClockState::Syncing => "Syncing...",
        ClockState::CheckedOut => "Checked Out",
        ClockState::CheckedIn => "Checked In",
    };

    let logout_repository = repository.clone();

    view! {
        <div class="min-h-screen bg-gray-50">
            <header class="border-b bg-white shadow-sm">
                <div class="mx-auto flex max-w-3xl items-center justify-between px-4 py-4">
                    <div>
                        <h1 class="bg-gradient-to-r from-blue-600 to-yellow-500 bg-clip-text text-xl font-bold text-transparent">
                            "Employee Dashboard"
                        </h1>
                        <p class="text-sm text-yellow-600">"New Daybreak Home Support"</p>
                    </div>
                    <button
                        on:click=move |_| {
                            stop_timers();
                            end_session(logout_repository.client(), Role::Employee, set_session);
                        }
                        class="rounded-lg px-4 py-2 text-gray-600 hover:bg-red-50 hover:text-red-600"
                    >
                        "Logout"
                    </button>
                </div>
            </header>

            <main class="mx-auto max-w-3xl px-4 py-10">
                <div class="rounded-lg border border-blue-200 bg-white p-8 text-center shadow-sm">
                    <h2 class="mb-1 text-lg font-semibold text-gray-700">"Time Clock"</h2>
                    <p class="mb-6 text-sm text-gray-500">{status_label}</p>

                    <Show when=move || state.get() == ClockState::CheckedIn>
                        <p class="mb-6 font-mono text-5xl font-bold tracking-wider text-gray-900">
                            {move || format_elapsed(elapsed.get())}
                        </p>
                    </Show>

                    <Show when=move || state.get() == ClockState::Syncing>
                        <div class="mx-auto mb-6 h-10 w-10 animate-spin rounded-full border-b-2 border-yellow-600"></div>
                    </Show>

                    <div class="flex justify-center gap-4">
                        <Show when=move || state.get() == ClockState::CheckedOut>
                            <button
                                disabled=move || mutating.get() || syncing.get()
                                on:click=move |_| check_in_action.dispatch(())
                                class="rounded-lg bg-green-600 px-8 py-3 text-lg font-medium text-white hover:bg-green-700 disabled:opacity-50"
                            >
                                {move || if check_in_action.pending().get() { "Checking In..." } else { "Check In" }}
                            </button>
                        </Show>
                        <Show when=move || state.get() == ClockState::CheckedIn>
                            <button
                                disabled=move || mutating.get() || syncing.get()
                                on:click=move |_| check_out_action.dispatch(())
                                class="rounded-lg bg-red-600 px-8 py-3 text-lg font-medium text-white hover:bg-red-700 disabled:opacity-50"
                            >
                                {move || if check_out_action.pending().get() { "Checking Out..." } else { "Check Out" }}
                            </button>
                        </Show>
                    </div>

                    <Show when=move || message.get().is_some()>
                        <div class="mt-6">
                            <ErrorMessage message=Signal::derive(move || {
                                message.get().unwrap_or_default()
                            })/>
                        </div>
                    </Show>
                </div>
            </main>
        </div>
    }
}
