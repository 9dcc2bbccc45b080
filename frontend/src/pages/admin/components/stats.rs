use leptos::*;

use crate::pages::admin::utils::Stats;

#[component]
pub fn StatsCards(#[prop(into)] stats: Signal<Stats>) -> impl IntoView {
    view! {
        <div class="mb-8 grid grid-cols-1 gap-4 sm:grid-cols-2 lg:grid-cols-4">
            <StatCard label="Total Applications" value=Signal::derive(move || stats.get().total) accent="text-gray-900"/>
            <StatCard label="Pending" value=Signal::derive(move || stats.get().pending) accent="text-yellow-600"/>
            <StatCard label="Approved" value=Signal::derive(move || stats.get().approved) accent="text-green-600"/>
            <StatCard label="Rejected" value=Signal::derive(move || stats.get().rejected) accent="text-red-600"/>
        </div>
    }
}

#[component]
fn StatCard(
    label: &'static str,
    #[prop(into)] value: Signal<usize>,
    accent: &'static str,
) -> impl IntoView {
    view! {
        <div class="rounded-lg border border-blue-200 bg-white p-6 shadow-sm">
            <p class="mb-1 text-sm text-gray-600">{label}</p>
            <p class=format!("text-3xl font-bold {}", accent)>{move || value.get()}</p>
        </div>
    }
}
