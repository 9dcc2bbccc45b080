use leptos::*;

use crate::pages::admin::utils::{FilterState, STATUS_OPTIONS};

#[component]
pub fn FilterBar(
    filter: FilterState,
    #[prop(into)] on_export: Callback<()>,
    #[prop(into)] on_refresh: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="mb-6 rounded-lg border border-blue-200 bg-white p-4 shadow-sm">
            <div class="flex flex-col justify-between gap-4 sm:flex-row">
                <div class="flex flex-1 flex-col gap-3 sm:flex-row">
                    <input
                        placeholder="Search by name, email, or position..."
                        prop:value=move || filter.search.get()
                        on:input=move |ev| filter.search.set(event_target_value(&ev))
                        class="w-full max-w-md rounded-lg border border-blue-300 px-4 py-2"
                    />
                    <select
                        prop:value=move || filter.status.get()
                        on:change=move |ev| filter.status.set(event_target_value(&ev))
                        class="rounded-lg border border-blue-300 bg-white px-4 py-2"
                    >
                        {STATUS_OPTIONS
                            .into_iter()
                            .map(|(value, label)| view! { <option value=value>{label}</option> })
                            .collect_view()}
                    </select>
                </div>
                <div class="flex gap-2">
                    <button
                        on:click=move |_| on_export.call(())
                        class="rounded-lg bg-green-600 px-4 py-2 font-medium text-white hover:bg-green-700"
                    >
                        "Export CSV"
                    </button>
                    <button
                        on:click=move |_| on_refresh.call(())
                        class="rounded-lg border border-blue-300 bg-gray-200 px-4 py-2 font-medium text-gray-700 hover:bg-gray-300"
                    >
                        "Refresh"
                    </button>
                </div>
            </div>
        </div>
    }
}
