use leptos::*;

const SERVICE_OPTIONS: [(&str, &str); 8] = [
    ("personal-care", "Personal Care Assistance"),
    ("companionship", "Companionship"),
    ("housekeeping", "Light Housekeeping"),
    ("meal-prep", "Meal Preparation"),
    ("transportation", "Transportation"),
    ("overnight", "Overnight Care"),
    ("respite", "Respite Care"),
    ("consultation", "Free Consultation"),
];

/// Contact details plus a message form. The form does not post anywhere;
/// submitting shows an acknowledgement and clears the fields.
#[component]
pub fn ContactPage() -> impl IntoView {
    let name = create_rw_signal(String::new());
    let email = create_rw_signal(String::new());
    let phone = create_rw_signal(String::new());
    let service = create_rw_signal(String::new());
    let message = create_rw_signal(String::new());
    let acknowledged = create_rw_signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        acknowledged.set(true);
        name.set(String::new());
        email.set(String::new());
        phone.set(String::new());
        service.set(String::new());
        message.set(String::new());
    };

    view! {
        <div class="bg-gradient-to-br from-blue-50 via-white to-yellow-50 py-20">
            <div class="mx-auto max-w-7xl px-4">
                <div class="mb-16 text-center">
                    <h1 class="mb-6 text-4xl font-bold text-gray-900 sm:text-5xl">
                        "Contact "
                        <span class="bg-gradient-to-r from-blue-600 to-yellow-500 bg-clip-text text-transparent">
                            "New Daybreak"
                        </span>
                    </h1>
                    <p class="mx-auto max-w-3xl text-xl leading-relaxed text-gray-600">
                        "We're here to answer your questions and help you find the right care solution for your family."
                    </p>
                </div>

                <div class="grid gap-16 lg:grid-cols-2">
                    <div class="rounded-2xl bg-gradient-to-br from-yellow-50 to-orange-50 p-8">
                        <h2 class="mb-8 text-2xl font-bold text-gray-900">"Get in Touch"</h2>
                        <div class="space-y-6 text-gray-700">
                            <div>
                                <p class="font-semibold text-gray-900">"Phone"</p>
                                <p>"+1- 253-337-6227"</p>
                            </div>
                            <div>
                                <p class="font-semibold text-gray-900">"Email"</p>
                                <p>"info@newdaybreakhomesupport.com"</p>
                            </div>
                            <div>
                                <p class="font-semibold text-gray-900">"Location"</p>
                                <p>"Seattle, WA"</p>
                                <p class="mt-1 text-sm text-gray-600">"Serving the Greater Seattle Area"</p>
                            </div>
                            <div class="border-t border-yellow-200 pt-6">
                                <p class="mb-2 font-semibold text-gray-900">"Office Hours"</p>
                                <p>"Monday – Friday: 8:00 AM – 6:00 PM"</p>
                                <p>"Saturday: 9:00 AM – 4:00 PM"</p>
                                <p>"Sunday: Closed"</p>
                                <p class="mt-2 text-sm font-medium text-yellow-600">
                                    "24/7 emergency support available for existing clients"
                                </p>
                            </div>
                        </div>
                    </div>

                    <div class="rounded-2xl border border-gray-100 bg-white p-8 shadow-xl">
                        <h2 class="mb-6 text-2xl font-bold text-gray-900">"Send us a Message"</h2>
                        <Show when=move || acknowledged.get()>
                            <div class="mb-6 rounded-md border border-green-300 bg-green-50 px-4 py-3 text-sm text-green-700">
                                "Thank you for your message! We will contact you within 24 hours."
                            </div>
                        </Show>
                        <form on:submit=on_submit class="space-y-6">
                            <div>
                                <label class="mb-2 block text-sm font-medium text-gray-700">"Full Name *"</label>
                                <input
                                    type="text"
                                    required
                                    prop:value=move || name.get()
                                    on:input=move |ev| name.set(event_target_value(&ev))
                                    class="w-full rounded-lg border border-gray-300 px-4 py-3"
                                />
                            </div>
                            <div>
                                <label class="mb-2 block text-sm font-medium text-gray-700">"Email *"</label>
                                <input
                                    type="email"
                                    required
                                    prop:value=move || email.get()
                                    on:input=move |ev| email.set(event_target_value(&ev))
                                    class="w-full rounded-lg border border-gray-300 px-4 py-3"
                                />
                            </div>
                            <div>
                                <label class="mb-2 block text-sm font-medium text-gray-700">"Phone"</label>
                                <input
                                    type="tel"
                                    prop:value=move || phone.get()
                                    on:input=move |ev| phone.set(event_target_value(&ev))
                                    class="w-full rounded-lg border border-gray-300 px-4 py-3"
                                />
                            </div>
                            <div>
                                <label class="mb-2 block text-sm font-medium text-gray-700">"Service Interest"</label>
                                <select
                                    prop:value=move || service.get()
                                    on:change=move |ev| service.set(event_target_value(&ev))
                                    class="w-full rounded-lg border border-gray-300 px-4 py-3"
                                >
                                    <option value="">"Select a service"</option>
                                    {SERVICE_OPTIONS
                                        .into_iter()
                                        .map(|(value, label)| view! { <option value=value>{label}</option> })
                                        .collect_view()}
                                </select>
                            </div>
                            <div>
                                <label class="mb-2 block text-sm font-medium text-gray-700">"Message *"</label>
                                <textarea
                                    rows=4
                                    required
                                    prop:value=move || message.get()
                                    on:input=move |ev| message.set(event_target_value(&ev))
                                    placeholder="Tell us about your care needs or ask any questions..."
                                    class="w-full rounded-lg border border-gray-300 px-4 py-3"
                                ></textarea>
                            </div>
                            <button
                                type="submit"
                                class="w-full rounded-lg bg-gradient-to-r from-yellow-400 to-yellow-600 py-4 font-semibold text-white shadow-lg hover:from-yellow-500 hover:to-yellow-700"
                            >
                                "Send Message"
                            </button>
                        </form>
                    </div>
                </div>
            </div>
        </div>
    }
}
