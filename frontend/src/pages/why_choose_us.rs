use leptos::*;

const REASONS: [(&str, &str); 6] = [
    (
        "Compassionate, Professional Caregivers",
        "Our team is carefully selected for their expertise, empathy, and dedication to providing exceptional care.",
    ),
    (
        "Fully Licensed and Insured in Washington",
        "We meet all state requirements and maintain comprehensive insurance coverage for your peace of mind.",
    ),
    (
        "Reliable and Flexible Scheduling",
        "We adapt to your schedule and needs, providing consistent care when you need it most.",
    ),
    (
        "Personalized Care Plans",
        "Every client receives individualized attention with care plans tailored to their unique needs and preferences.",
    ),
    (
        "Affordable, Transparent Pricing",
        "Clear, honest pricing with no hidden fees. We work with families to find affordable care solutions.",
    ),
    (
        "Locally Owned and Community-Focused",
        "As a local business, we understand our community's needs and are committed to serving our neighbors.",
    ),
];

#[component]
pub fn WhyChooseUsPage() -> impl IntoView {
    view! {
        <div class="bg-gradient-to-br from-blue-50 via-white to-yellow-50 py-20">
            <div class="mx-auto max-w-7xl px-4">
                <div class="mb-16 text-center">
                    <h1 class="mb-6 text-4xl font-bold text-gray-900 sm:text-5xl">
                        "Why Choose "
                        <span class="bg-gradient-to-r from-blue-600 to-yellow-500 bg-clip-text text-transparent">
                            "New Daybreak"
                        </span>
                    </h1>
                    <p class="mx-auto max-w-3xl text-xl leading-relaxed text-gray-600">
                        "We're committed to excellence in every aspect of our care, from our caregivers to our customer service."
                    </p>
                </div>

                <div class="mb-20 rounded-2xl bg-gradient-to-r from-yellow-400 to-orange-500 p-12 text-center text-white">
                    <h2 class="mb-12 text-3xl font-bold">"Our Commitment to Excellence"</h2>
                    <div class="grid gap-8 sm:grid-cols-2 lg:grid-cols-4">
                        <div>
                            <div class="mb-2 text-4xl font-bold">"5+"</div>
                            <p class="text-yellow-100">"Years of Experience"</p>
                        </div>
                        <div>
                            <div class="mb-2 text-4xl font-bold">"500+"</div>
                            <p class="text-yellow-100">"Families Served"</p>
                        </div>
                        <div>
                            <div class="mb-2 text-4xl font-bold">"50+"</div>
                            <p class="text-yellow-100">"Certified Caregivers"</p>
                        </div>
                        <div>
                            <div class="mb-2 text-4xl font-bold">"98%"</div>
                            <p class="text-yellow-100">"Client Satisfaction"</p>
                        </div>
                    </div>
                </div>

                <div class="grid gap-8 md:grid-cols-2 lg:grid-cols-3">
                    {REASONS
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
        </div>
    }
}
