use leptos::*;
use leptos_router::A;

use crate::router::View;

const OVERVIEW_CARDS: [(&str, &str); 3] = [
    (
        "Compassionate Care",
        "Our caregivers provide warm, personalized support with genuine compassion.",
    ),
    (
        "Trusted Professionals",
        "Licensed, insured, and thoroughly background-checked caregivers.",
    ),
    (
        "Peace of Mind, Every Day",
        "Reliable care that gives families confidence and comfort.",
    ),
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="bg-white">
            <section class="bg-gradient-to-br from-blue-50 via-white to-yellow-50 py-20">
                <div class="mx-auto max-w-7xl px-4 text-center lg:text-left">
                    <h1 class="mb-6 text-4xl font-bold leading-tight text-gray-900 sm:text-5xl">
                        "Care for You With Every "
                        <span class="bg-gradient-to-r from-blue-500 via-sky-400 to-yellow-500 bg-clip-text text-transparent">
                            "Sunrise"
                        </span>
                    </h1>
                    <p class="mb-8 text-xl leading-relaxed text-gray-700">
                        "Providing compassionate, non-medical home support that helps you live independently and with dignity."
                    </p>
                    <div class="flex flex-col justify-center gap-4 sm:flex-row lg:justify-start">
                        <A
                            href=View::About.path()
                            class="rounded-full bg-gradient-to-r from-blue-500 to-sky-600 px-8 py-4 font-semibold text-white shadow-lg hover:from-blue-600 hover:to-sky-700"
                        >
                            "Learn More"
                        </A>
                        <A
                            href=View::Contact.path()
                            class="rounded-full border-2 border-blue-400 px-8 py-4 font-semibold text-blue-600 hover:bg-blue-50"
                        >
                            "Contact Us"
                        </A>
                    </div>
                </div>
            </section>

            <section class="bg-white py-20">
                <div class="mx-auto max-w-7xl px-4">
                    <div class="mb-16 text-center">
                        <h2 class="mb-4 text-3xl font-bold text-gray-900 sm:text-4xl">
                            "Why Families Choose Us"
                        </h2>
                        <p class="mx-auto max-w-3xl text-xl text-gray-600">
                            "We're committed to providing exceptional home care that makes a real difference in people's lives."
                        </p>
                    </div>
                    <div class="grid gap-8 md:grid-cols-3">
                        {OVERVIEW_CARDS
                            .into_iter()
                            .map(|(title, description)| {
                                view! {
                                    <div class="rounded-2xl border border-gray-100 bg-white p-8 shadow-lg hover:shadow-xl">
                                        <h3 class="mb-4 text-xl font-bold text-gray-900">{title}</h3>
                                        <p class="leading-relaxed text-gray-600">{description}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>

            <section class="bg-gradient-to-r from-blue-500 via-sky-500 to-yellow-400 py-20">
                <div class="mx-auto max-w-4xl px-4 text-center">
                    <h2 class="mb-6 text-3xl font-bold text-white sm:text-4xl">
                        "Ready to Experience Compassionate Care?"
                    </h2>
                    <p class="mb-8 text-xl text-blue-100">
                        "Let us help you or your loved one live independently with dignity and comfort."
                    </p>
                    <div class="flex flex-col justify-center gap-4 sm:flex-row">
                        <A
                            href=View::Contact.path()
                            class="rounded-full bg-white px-8 py-4 font-semibold text-blue-600 shadow-lg hover:bg-gray-50"
                        >
                            "Get Started Today"
                        </A>
                        <A
                            href=View::Services.path()
                            class="rounded-full border-2 border-white px-8 py-4 font-semibold text-white hover:bg-white hover:text-blue-600"
                        >
                            "View Our Services"
                        </A>
                    </div>
                </div>
            </section>
        </div>
    }
}
