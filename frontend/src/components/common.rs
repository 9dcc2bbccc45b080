use leptos::*;

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center py-12">
            <div class="h-10 w-10 animate-spin rounded-full border-4 border-sky-600 border-t-transparent"></div>
        </div>
    }
}

#[component]
pub fn ErrorMessage(#[prop(into)] message: MaybeSignal<String>) -> impl IntoView {
    view! {
        <div class="rounded-md border border-red-300 bg-red-50 px-4 py-3 text-sm text-red-700">
            {move || message.get()}
        </div>
    }
}

#[component]
pub fn SuccessMessage(#[prop(into)] message: MaybeSignal<String>) -> impl IntoView {
    view! {
        <div class="rounded-md border border-green-300 bg-green-50 px-4 py-3 text-sm text-green-700">
            {move || message.get()}
        </div>
    }
}
