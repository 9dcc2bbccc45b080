use std::rc::Rc;

use leptos::*;

use crate::api::{ApiClient, ApplicationRecord};
use crate::components::common::ErrorMessage;
use crate::pages::admin::components::detail::DetailModal;
use crate::pages::admin::components::filters::FilterBar;
use crate::pages::admin::components::stats::StatsCards;
use crate::pages::admin::components::table::ApplicationsTable;
use crate::pages::admin::repository::AdminRepository;
use crate::pages::admin::utils::{
    csv_filename, filter_applications, render_application_html, stats_for, to_csv, FilterState,
};
use crate::pages::admin::view_model::{
    enter_dashboard, fetch_printable, update_status, AdminEntry, DetailOutcome, MutationOutcome,
};
use crate::state::session::{end_session, use_session, Role};
use crate::state::tokens::TokenSlot;
use crate::utils::download::trigger_csv_download;
use crate::utils::print::open_print_window;

#[derive(Clone, PartialEq)]
enum Phase {
    Verifying,
    Denied(String),
    Ready,
}

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let repository = Rc::new(AdminRepository::new_with_client(Rc::new(ApiClient::new())));
    let (_, set_session) = use_session();

    let phase = create_rw_signal(Phase::Verifying);
    let applications = create_rw_signal(Vec::<ApplicationRecord>::new());
    let selected = create_rw_signal(Option::<ApplicationRecord>::None);
    let notice = create_rw_signal(Option::<String>::None);
    let filter = FilterState::new();

    let drop_session = move |repository: &AdminRepository| {
        end_session(repository.client(), Role::Admin, set_session);
    };

    let load_action = create_action({
        let repository = repository.clone();
        move |_: &()| {
            let repository = repository.clone();
            async move { enter_dashboard(repository.client()).await }
        }
    });
    create_effect({
        let repository = repository.clone();
        move |_| {
            if let Some(entry) = load_action.value().get() {
                match entry {
                    AdminEntry::Ready {
                        applications: rows,
                        notice: message,
                    } => {
                        applications.set(rows);
                        notice.set(message);
                        phase.set(Phase::Ready);
                    }
                    AdminEntry::AccessDenied(message) => phase.set(Phase::Denied(message)),
                    AdminEntry::RedirectToLogin => drop_session(&repository),
                }
            }
        }
    });
    load_action.dispatch(());

    let status_action = create_action({
        let repository = repository.clone();
        move |(id, status): &(i64, String)| {
            let repository = repository.clone();
            let id = *id;
            let status = status.clone();
            async move {
                let outcome = update_status(repository.client(), id, &status).await;
                (id, status, outcome)
            }
        }
    });
    create_effect({
        let repository = repository.clone();
        move |_| {
            if let Some((id, status, outcome)) = status_action.value().get() {
                match outcome {
                    MutationOutcome::Applied => {
                        let mut rows = applications.get_untracked();
                        let mut open = selected.get_untracked();
                        crate::pages::admin::utils::apply_status_update(
                            &mut rows, &mut open, id, &status,
                        );
                        applications.set(rows);
                        selected.set(open);
                    }
                    MutationOutcome::RedirectToLogin => drop_session(&repository),
                    MutationOutcome::Failed(message) => notice.set(Some(message)),
                }
            }
        }
    });

    let download_action = create_action({
        let repository = repository.clone();
        move |id: &i64| {
            let repository = repository.clone();
            let id = *id;
            async move { fetch_printable(repository.client(), id).await }
        }
    });
    create_effect({
        let repository = repository.clone();
        move |_| {
            if let Some(outcome) = download_action.value().get() {
                match outcome {
                    DetailOutcome::Ready(record) => {
                        if let Err(message) = open_print_window(&render_application_html(&record)) {
                            notice.set(Some(message));
                        }
                    }
                    DetailOutcome::RedirectToLogin => drop_session(&repository),
                    DetailOutcome::Failed(message) => notice.set(Some(message)),
                }
            }
        }
    });

    let filtered = create_memo(move |_| filter_applications(&applications.get(), &filter.snapshot()));
    let stats = Signal::derive(move || stats_for(&applications.get()));

    let export_csv = move |_: ()| {
        let csv = to_csv(&filtered.get_untracked());
        let filename = csv_filename(chrono::Utc::now().date_naive());
        if let Err(message) = trigger_csv_download(&csv, &filename) {
            notice.set(Some(message));
        }
    };
    let refresh = move |_: ()| {
        load_action.dispatch(());
    };

    // One status update at a time; a second click while the first is in
    // flight is dropped.
    let approve = Callback::new(move |id: i64| {
        if status_action.pending().get_untracked() {
            return;
        }
        status_action.dispatch((id, "approved".to_string()));
    });
    let reject = Callback::new(move |id: i64| {
        if status_action.pending().get_untracked() {
            return;
        }
        status_action.dispatch((id, "rejected".to_string()));
    });
    let download = Callback::new(move |id: i64| {
        download_action.dispatch(id);
    });

    let logout_repository = repository.clone();
    let return_repository = repository.clone();

    view! {
        {move || match phase.get() {
            Phase::Verifying => {
                view! {
                    <div class="flex min-h-screen items-center justify-center bg-gray-50">
                        <div class="text-center">
                            <div class="mx-auto h-12 w-12 animate-spin rounded-full border-b-2 border-yellow-600"></div>
                            <p class="mt-4 text-gray-600">"Verifying admin access..."</p>
                        </div>
                    </div>
                }
                    .into_view()
            }
            Phase::Denied(message) => {
                let return_repository = return_repository.clone();
                view! {
                    <div class="flex min-h-screen items-center justify-center bg-gray-50 p-6">
                        <div class="max-w-md rounded-lg bg-white p-8 text-center shadow-md">
                            <h2 class="mb-2 text-2xl font-bold text-gray-900">"Access Denied"</h2>
                            <p class="mb-6 text-gray-600">{message}</p>
                            <button
                                on:click=move |_| {
                                    return_repository.client().token_store().clear(TokenSlot::Admin);
                                    set_session.update(|state| state.role = None);
                                }
                                class="w-full rounded-lg bg-yellow-600 px-6 py-2.5 font-medium text-white hover:bg-yellow-700"
                            >
                                "Return to Login"
                            </button>
                        </div>
                    </div>
                }
                    .into_view()
            }
            Phase::Ready => {
                let logout_repository = logout_repository.clone();
                view! {
                    <div class="min-h-screen bg-gray-50">
                        <header class="sticky top-0 z-10 border-b bg-white shadow-sm">
                            <div class="mx-auto flex max-w-7xl items-center justify-between px-4 py-4">
                                <div>
                                    <h1 class="bg-gradient-to-r from-blue-600 to-yellow-500 bg-clip-text text-xl font-bold text-transparent">
                                        "Admin Dashboard"
                                    </h1>
                                    <p class="text-sm text-yellow-600">"New Daybreak Home Support"</p>
                                </div>
                                <button
                                    on:click=move |_| drop_session(&logout_repository)
                                    class="rounded-lg px-4 py-2 text-gray-600 hover:bg-red-50 hover:text-red-600"
                                >
                                    "Logout"
                                </button>
                            </div>
                        </header>

                        <main class="mx-auto max-w-7xl px-4 py-8">
                            <StatsCards stats=stats/>
                            <FilterBar filter=filter on_export=export_csv on_refresh=refresh/>
                            <ApplicationsTable
                                rows=Signal::derive(move || filtered.get())
                                on_view=Callback::new(move |app| selected.set(Some(app)))
                                on_approve=approve
                                on_reject=reject
                                on_download=download
                                busy=status_action.pending()
                            />
                            <Show when=move || notice.get().is_some()>
                                <div class="mt-4">
                                    <ErrorMessage message=Signal::derive(move || {
                                        notice.get().unwrap_or_default()
                                    })/>
                                </div>
                            </Show>
                        </main>

                        <DetailModal
                            selected=selected
                            on_approve=approve
                            on_reject=reject
                            on_download=download
                            busy=status_action.pending()
                        />
                    </div>
                }
                    .into_view()
            }
        }}
    }
}
