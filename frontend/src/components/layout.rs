use leptos::*;
use leptos_router::A;

use crate::router::View;

const NAV_LINKS: [(View, &str); 6] = [
    (View::Home, "Home"),
    (View::About, "About Us"),
    (View::Services, "Services"),
    (View::WhyChooseUs, "Why Choose Us"),
    (View::Careers, "Careers"),
    (View::Contact, "Contact"),
];

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="sticky top-0 z-10 bg-white shadow">
            <div class="mx-auto flex max-w-6xl items-center justify-between px-4 py-3">
                <A href="/" class="text-xl font-bold text-sky-700">
                    "New Daybreak Home Support"
                </A>
                <nav class="flex gap-4 text-sm font-medium text-gray-700">
                    {NAV_LINKS
                        .into_iter()
                        .map(|(view, label)| {
                            view! {
                                <A href=view.path() class="hover:text-sky-700">
                                    {label}
                                </A>
                            }
                        })
                        .collect_view()}
                </nav>
            </div>
        </header>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-gray-900 py-6 text-center text-sm text-gray-300">
            <p>"© 2025 New Daybreak Home Support. All rights reserved."</p>
        </footer>
    }
}

/// Marketing chrome for the public pages. Gated dashboards and the login
/// screen render without it.
#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="flex min-h-screen flex-col bg-gray-50">
            <Header/>
            <main class="flex-1">{children()}</main>
            <Footer/>
        </div>
    }
}
