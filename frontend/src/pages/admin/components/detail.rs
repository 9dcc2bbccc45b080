use leptos::*;

use crate::api::ApplicationRecord;
use crate::pages::admin::components::table::StatusBadge;
use crate::pages::admin::utils::format_submitted;

/// Modal over the table showing one application's summary fields, with the
/// same approve/reject/download actions as the row.
#[component]
pub fn DetailModal(
    selected: RwSignal<Option<ApplicationRecord>>,
    #[prop(into)] on_approve: Callback<i64>,
    #[prop(into)] on_reject: Callback<i64>,
    #[prop(into)] on_download: Callback<i64>,
    /// Locks the status actions while an update is in flight.
    #[prop(into)]
    busy: Signal<bool>,
) -> impl IntoView {
    view! {
        <Show when=move || selected.get().is_some()>
            {move || {
                selected
                    .get()
                    .map(|app| {
                        let id = app.id;
                        view! {
                            <div
                                class="fixed inset-0 z-50 flex items-center justify-center bg-black bg-opacity-50 p-4"
                                on:click=move |_| selected.set(None)
                            >
                                <div
                                    class="max-h-[90vh] w-full max-w-2xl overflow-y-auto rounded-lg bg-white shadow-xl"
                                    on:click=|ev| ev.stop_propagation()
                                >
                                    <div class="sticky top-0 flex items-start justify-between border-b bg-white p-6">
                                        <div>
                                            <h3 class="text-xl font-bold text-gray-900">
                                                {app.full_name.clone()}
                                            </h3>
                                            <p class="mt-1 text-sm text-gray-500">
                                                {format!("Application #{}", app.id)}
                                            </p>
                                        </div>
                                        <button
                                            on:click=move |_| selected.set(None)
                                            class="text-gray-400 hover:text-gray-600"
                                        >
                                            "✕"
                                        </button>
                                    </div>

                                    <div class="space-y-6 p-6">
                                        <div>
                                            <h4 class="mb-3 text-sm font-semibold text-gray-700">"Status"</h4>
                                            <StatusBadge status=app.status.clone()/>
                                        </div>
                                        <div>
                                            <h4 class="mb-3 text-sm font-semibold text-gray-700">
                                                "Contact Information"
                                            </h4>
                                            <div class="space-y-2 text-sm">
                                                <p>
                                                    <span class="text-gray-500">"Email: "</span>
                                                    <span class="text-gray-900">{app.email.clone()}</span>
                                                </p>
                                                <p>
                                                    <span class="text-gray-500">"Phone: "</span>
                                                    <span class="text-gray-900">{app.phone.clone()}</span>
                                                </p>
                                            </div>
                                        </div>
                                        <div>
                                            <h4 class="mb-3 text-sm font-semibold text-gray-700">
                                                "Position Details"
                                            </h4>
                                            <div class="space-y-2 text-sm">
                                                <p>
                                                    <span class="text-gray-500">"Position Desired: "</span>
                                                    <span class="text-gray-900">
                                                        {app.position_desired.clone()}
                                                    </span>
                                                </p>
                                                <p>
                                                    <span class="text-gray-500">"Submitted: "</span>
                                                    <span class="text-gray-900">
                                                        {format_submitted(app.submitted_at.as_deref())}
                                                    </span>
                                                </p>
                                            </div>
                                        </div>
                                        <div class="flex gap-3 border-t pt-4">
                                            <button
                                                disabled=move || busy.get()
                                                on:click=move |_| on_approve.call(id)
                                                class="flex-1 rounded-lg bg-green-600 px-4 py-2 font-medium text-white hover:bg-green-700 disabled:opacity-50"
                                            >
                                                "Approve"
                                            </button>
                                            <button
                                                disabled=move || busy.get()
                                                on:click=move |_| on_reject.call(id)
                                                class="flex-1 rounded-lg bg-red-600 px-4 py-2 font-medium text-white hover:bg-red-700 disabled:opacity-50"
                                            >
                                                "Reject"
                                            </button>
                                            <button
                                                on:click=move |_| on_download.call(id)
                                                class="rounded-lg bg-purple-600 px-4 py-2 font-medium text-white hover:bg-purple-700"
                                            >
                                                "PDF"
                                            </button>
                                        </div>
                                    </div>
                                </div>
                            </div>
                        }
                    })
            }}
        </Show>
    }
}
