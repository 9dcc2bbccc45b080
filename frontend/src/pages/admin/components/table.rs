use leptos::*;

use crate::api::ApplicationRecord;
use crate::pages::admin::utils::{format_submitted_date, initials};

pub fn status_badge_class(status: &str) -> &'static str {
    match status {
        "approved" => "bg-green-100 text-green-800 border-green-200",
        "rejected" => "bg-red-100 text-red-800 border-red-200",
        _ => "bg-yellow-100 text-yellow-800 border-yellow-200",
    }
}

fn capitalize(status: &str) -> String {
    let mut chars = status.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[component]
pub fn StatusBadge(#[prop(into)] status: String) -> impl IntoView {
    view! {
        <span class=format!(
            "inline-flex items-center rounded-full border px-2.5 py-1 text-xs font-medium {}",
            status_badge_class(&status),
        )>{capitalize(&status)}</span>
    }
}

#[component]
pub fn ApplicationsTable(
    #[prop(into)] rows: Signal<Vec<ApplicationRecord>>,
    #[prop(into)] on_view: Callback<ApplicationRecord>,
    #[prop(into)] on_approve: Callback<i64>,
    #[prop(into)] on_reject: Callback<i64>,
    #[prop(into)] on_download: Callback<i64>,
    /// Locks the status actions while an update is in flight.
    #[prop(into)]
    busy: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="overflow-hidden rounded-lg border border-blue-200 bg-white shadow-sm">
            <div class="overflow-x-auto">
                <table class="min-w-full divide-y divide-gray-200">
                    <thead class="bg-gray-50">
                        <tr>
                            <Th label="Applicant"/>
                            <Th label="Details"/>
                            <Th label="Position"/>
                            <Th label="Submitted"/>
                            <Th label="Status"/>
                            <Th label="Actions"/>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-gray-200 bg-white">
                        <Show
                            when=move || !rows.get().is_empty()
                            fallback=|| {
                                view! {
                                    <tr>
                                        <td colspan="6" class="px-6 py-12 text-center text-gray-500">
                                            <p class="text-lg font-medium">"No applications found"</p>
                                            <p class="mt-1 text-sm">"Try adjusting your search or filters"</p>
                                        </td>
                                    </tr>
                                }
                            }
                        >
                            {move || {
                                rows.get()
                                    .into_iter()
                                    .map(|app| {
                                        let id = app.id;
                                        let approved = app.status == "approved";
                                        let rejected = app.status == "rejected";
                                        let row = app.clone();
                                        view! {
                                            <tr class="hover:bg-gray-50">
                                                <td class="px-6 py-4">
                                                    <div class="flex items-center">
                                                        <div class="flex h-10 w-10 items-center justify-center rounded-full bg-yellow-100">
                                                            <span class="text-sm font-semibold text-yellow-700">
                                                                {initials(&app.full_name)}
                                                            </span>
                                                        </div>
                                                        <div class="ml-4">
                                                            <div class="text-sm font-medium text-gray-900">
                                                                {app.full_name.clone()}
                                                            </div>
                                                            <div class="text-sm text-gray-500">
                                                                {format!("ID: #{}", app.id)}
                                                            </div>
                                                        </div>
                                                    </div>
                                                </td>
                                                <td class="px-6 py-4">
                                                    <div class="text-sm text-gray-900">{app.email.clone()}</div>
                                                    <div class="text-sm text-gray-500">{app.phone.clone()}</div>
                                                </td>
                                                <td class="px-6 py-4 text-sm text-gray-900">
                                                    {app.position_desired.clone()}
                                                </td>
                                                <td class="px-6 py-4 text-sm text-gray-500">
                                                    {format_submitted_date(app.submitted_at.as_deref())}
                                                </td>
                                                <td class="px-6 py-4">
                                                    <StatusBadge status=app.status.clone()/>
                                                </td>
                                                <td class="px-6 py-4">
                                                    <div class="flex items-center gap-2">
                                                        <button
                                                            title="View Details"
                                                            on:click=move |_| on_view.call(row.clone())
                                                            class="rounded-lg p-2 text-blue-600 hover:bg-blue-50"
                                                        >
                                                            "View"
                                                        </button>
                                                        <button
                                                            title="Approve"
                                                            disabled=move || approved || busy.get()
                                                            on:click=move |_| on_approve.call(id)
                                                            class="rounded-lg p-2 text-green-600 hover:bg-green-50 disabled:opacity-50"
                                                        >
                                                            "Approve"
                                                        </button>
                                                        <button
                                                            title="Reject"
                                                            disabled=move || rejected || busy.get()
                                                            on:click=move |_| on_reject.call(id)
                                                            class="rounded-lg p-2 text-red-600 hover:bg-red-50 disabled:opacity-50"
                                                        >
                                                            "Reject"
                                                        </button>
                                                        <button
                                                            title="Download PDF"
                                                            on:click=move |_| on_download.call(id)
                                                            class="rounded-lg p-2 text-purple-600 hover:bg-purple-50"
                                                        >
                                                            "PDF"
                                                        </button>
                                                    </div>
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </Show>
                    </tbody>
                </table>
            </div>
        </div>
    }
}

#[component]
fn Th(label: &'static str) -> impl IntoView {
    view! {
        <th class="px-6 py-3 text-left text-xs font-medium uppercase tracking-wider text-gray-500">
            {label}
        </th>
    }
}
