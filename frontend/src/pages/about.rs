use leptos::*;

const CORE_VALUES: [(&str, &str); 4] = [
    (
        "Compassion",
        "We care deeply about every client's wellbeing and happiness.",
    ),
    (
        "Dignity",
        "We treat every person with respect and honor their independence.",
    ),
    (
        "Excellence",
        "We strive for the highest standards in everything we do.",
    ),
    (
        "Trust",
        "We build lasting relationships through honesty and reliability.",
    ),
];

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="bg-gradient-to-br from-blue-50 via-white to-yellow-50 py-20">
            <div class="mx-auto max-w-7xl px-4">
                <div class="mb-16 text-center">
                    <h1 class="mb-6 text-4xl font-bold text-gray-900 sm:text-5xl">
                        "About "
                        <span class="bg-gradient-to-r from-blue-600 to-yellow-500 bg-clip-text text-transparent">
                            "New Daybreak"
                        </span>
                    </h1>
                    <p class="mx-auto max-w-3xl text-xl leading-relaxed text-gray-600">
                        "Embracing each new day as a chance to bring comfort, independence, and care into the lives of those we serve."
                    </p>
                </div>

                <div class="mb-20 space-y-6">
                    <h2 class="text-3xl font-bold text-gray-900">"Our Story"</h2>
                    <p class="text-lg leading-relaxed text-gray-700">
                        "At New Daybreak Home Support, we embrace each new day as a chance to bring comfort, independence, and care into the lives of those we serve. Our compassionate caregivers support clients with dignity and warmth, helping them live fulfilling lives in the comfort of their homes."
                    </p>
                    <p class="text-lg leading-relaxed text-gray-700">
                        "Founded on the belief that everyone deserves to age gracefully in their own home, we provide personalized, non-medical care that respects individual needs and preferences. Our team is dedicated to creating meaningful connections that enrich the lives of our clients and their families."
                    </p>
                </div>

                <div class="mb-20 grid gap-12 md:grid-cols-2">
                    <div class="rounded-2xl border border-blue-100 bg-gradient-to-br from-blue-50 to-sky-100 p-8">
                        <h3 class="mb-6 text-2xl font-bold text-gray-900">"Our Mission"</h3>
                        <p class="text-lg leading-relaxed text-gray-700">
                            "To provide reliable, compassionate, and respectful home care that enhances quality of life for our clients and peace of mind for their families."
                        </p>
                    </div>
                    <div class="rounded-2xl border border-yellow-100 bg-gradient-to-br from-yellow-50 to-orange-50 p-8">
                        <h3 class="mb-6 text-2xl font-bold text-gray-900">"Our Vision"</h3>
                        <p class="text-lg leading-relaxed text-gray-700">
                            "To be Washington's most trusted, heart-centered home care provider, setting the standard for compassionate, personalized care in our communities."
                        </p>
                    </div>
                </div>

                <div class="text-center">
                    <h2 class="mb-12 text-3xl font-bold text-gray-900">"Our Core Values"</h2>
                    <div class="grid gap-8 sm:grid-cols-2 lg:grid-cols-4">
                        {CORE_VALUES
                            .into_iter()
                            .map(|(title, description)| {
                                view! {
                                    <div class="text-center">
                                        <h4 class="mb-3 text-xl font-bold text-gray-900">{title}</h4>
                                        <p class="leading-relaxed text-gray-600">{description}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </div>
    }
}
