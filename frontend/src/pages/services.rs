use leptos::*;

const SERVICES: [(&str, &str); 9] = [
    (
        "Personal Care Assistance",
        "Help with bathing, dressing, grooming, and other daily personal care needs.",
    ),
    (
        "Meal Preparation",
        "Nutritious meal planning, cooking, and assistance with eating when needed.",
    ),
    (
        "Companionship & Emotional Support",
        "Friendly conversation, social activities, and emotional comfort to reduce isolation.",
    ),
    (
        "Light Housekeeping",
        "Assistance with cleaning, laundry, organization, and maintaining a tidy home.",
    ),
    (
        "Medication Reminders",
        "Non-medical reminders to help clients take medications as prescribed.",
    ),
    (
        "Mobility & Transfer Assistance",
        "Safe assistance with walking, transferring, and mobility support.",
    ),
    (
        "Errands & Transportation",
        "Grocery shopping, appointment transportation, and running essential errands.",
    ),
    (
        "Respite Care for Family Caregivers",
        "Temporary relief for family members providing care to their loved ones.",
    ),
    (
        "24-Hour & Overnight Care",
        "Round-the-clock supervision and assistance for clients requiring continuous care.",
    ),
];

#[component]
pub fn ServicesPage() -> impl IntoView {
    view! {
        <div class="bg-gradient-to-br from-blue-50 via-white to-yellow-50 py-20">
            <div class="mx-auto max-w-7xl px-4">
                <div class="mb-16 text-center">
                    <h1 class="mb-6 text-4xl font-bold text-gray-900 sm:text-5xl">
                        "Our "
                        <span class="bg-gradient-to-r from-blue-600 to-yellow-500 bg-clip-text text-transparent">
                            "Services"
                        </span>
                    </h1>
                    <p class="mx-auto max-w-3xl text-xl leading-relaxed text-gray-600">
                        "Comprehensive, compassionate care tailored to your unique needs and preferences."
                    </p>
                </div>

                <div class="mb-20 grid gap-8 md:grid-cols-2 lg:grid-cols-3">
                    {SERVICES
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

                <div class="rounded-2xl bg-gradient-to-br from-yellow-50 to-orange-50 p-12 text-center">
                    <h2 class="mb-6 text-3xl font-bold text-gray-900">"Personalized Care Plans"</h2>
                    <p class="mx-auto mb-8 max-w-3xl text-lg leading-relaxed text-gray-700">
                        "Every client receives a customized care plan designed specifically for their needs, preferences, and goals. We work closely with families to ensure our services enhance quality of life and promote independence."
                    </p>
                    <div class="mt-12 grid gap-8 sm:grid-cols-3">
                        <div class="text-center">
                            <div class="mb-2 text-3xl font-bold text-yellow-600">"24/7"</div>
                            <p class="text-gray-700">"Availability for emergencies"</p>
                        </div>
                        <div class="text-center">
                            <div class="mb-2 text-3xl font-bold text-yellow-600">"100%"</div>
                            <p class="text-gray-700">"Licensed & insured caregivers"</p>
                        </div>
                        <div class="text-center">
                            <div class="mb-2 text-3xl font-bold text-yellow-600">"5★"</div>
                            <p class="text-gray-700">"Family satisfaction rating"</p>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
