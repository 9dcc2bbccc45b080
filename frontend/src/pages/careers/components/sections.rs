use leptos::*;

use crate::pages::careers::view_model::{
    CareersFormState, AVAILABILITY_OPTIONS, CERTIFICATION_OPTIONS, EDUCATION_OPTIONS,
    POSITION_OPTIONS,
};

#[component]
fn TextField(
    label: &'static str,
    value: RwSignal<String>,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(default = false)] required: bool,
    #[prop(optional)] placeholder: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div>
            <label class="mb-2 block text-sm font-medium text-gray-700">{label}</label>
            <input
                type=input_type
                required=required
                placeholder=placeholder.unwrap_or_default()
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
                class="w-full rounded border px-4 py-3"
            />
        </div>
    }
}

#[component]
fn PlainInput(
    placeholder: &'static str,
    value: RwSignal<String>,
) -> impl IntoView {
    view! {
        <input
            placeholder=placeholder
            prop:value=move || value.get()
            on:input=move |ev| value.set(event_target_value(&ev))
            class="w-full rounded border px-4 py-3"
        />
    }
}

#[component]
pub fn PersonalSection(form: CareersFormState) -> impl IntoView {
    view! {
        <section class="rounded-2xl bg-gradient-to-br from-blue-50 to-indigo-50 p-8">
            <h2 class="mb-6 text-2xl font-bold text-gray-900">"Personal Information"</h2>
            <div class="grid gap-6 md:grid-cols-2">
                <TextField label="First Name *" value=form.first_name required=true/>
                <TextField label="Last Name *" value=form.last_name required=true/>
                <TextField label="Email *" value=form.email input_type="email" required=true/>
                <TextField label="Phone *" value=form.phone input_type="tel" required=true/>
                <div class="md:col-span-2">
                    <TextField label="Address *" value=form.address required=true/>
                </div>
                <TextField label="City *" value=form.city required=true/>
                <TextField label="ZIP Code *" value=form.zip_code required=true/>
            </div>
        </section>
    }
}

#[component]
pub fn AvailabilitySection(form: CareersFormState) -> impl IntoView {
    view! {
        <section class="rounded-2xl bg-gradient-to-br from-green-50 to-emerald-50 p-8">
            <h2 class="mb-6 text-2xl font-bold text-gray-900">"Availability & Position"</h2>
            <div class="space-y-6">
                <div>
                    <label class="mb-3 block text-sm font-medium text-gray-700">
                        "Availability (check all that apply)"
                    </label>
                    <div class="grid grid-cols-2 gap-3 md:grid-cols-4">
                        {AVAILABILITY_OPTIONS
                            .into_iter()
                            .map(|option| {
                                view! {
                                    <label class="flex items-center">
                                        <input
                                            type="checkbox"
                                            prop:checked=move || {
                                                form.availability.get().iter().any(|item| item == option)
                                            }
                                            on:change=move |ev| {
                                                form.toggle_availability(option, event_target_checked(&ev))
                                            }
                                            class="rounded border-gray-300 text-yellow-600"
                                        />
                                        <span class="ml-2 text-sm text-gray-700">{option}</span>
                                    </label>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <TextField
                    label="Supported Living Availability (days & times)"
                    value=form.supported_living_availability
                    placeholder="E.g., Mon-Fri 8am-6pm, Weekends unavailable"
                />

                <div>
                    <label class="mb-2 block text-sm font-medium text-gray-700">"Position Interest *"</label>
                    <select
                        required
                        prop:value=move || form.position_interest.get()
                        on:change=move |ev| form.position_interest.set(event_target_value(&ev))
                        class="w-full rounded border px-4 py-3"
                    >
                        <option value="">"Select a position"</option>
                        {POSITION_OPTIONS
                            .into_iter()
                            .map(|(value, label)| view! { <option value=value>{label}</option> })
                            .collect_view()}
                    </select>
                </div>

                <TextField
                    label="Available Start Date (optional)"
                    value=form.available_start_date
                    input_type="date"
                />
            </div>
        </section>
    }
}

#[component]
pub fn EmploymentHistorySection(form: CareersFormState) -> impl IntoView {
    view! {
        <section class="rounded-2xl bg-gradient-to-br from-purple-50 to-violet-50 p-8">
            <h2 class="mb-6 text-2xl font-bold text-gray-900">"Employment History"</h2>
            <div class="space-y-8">
                <div>
                    <h3 class="mb-4 text-lg font-semibold text-gray-900">"Most Recent Employer"</h3>
                    <div class="grid gap-4 md:grid-cols-2">
                        <PlainInput placeholder="Employer Name" value=form.employer1_name/>
                        <PlainInput placeholder="Position" value=form.employer1_position/>
                        <PlainInput
                            placeholder="Duration (e.g., Jan 2020 - Dec 2023)"
                            value=form.employer1_duration
                        />
                        <PlainInput placeholder="Reason for Leaving" value=form.employer1_reason/>
                    </div>
                </div>
                <div>
                    <h3 class="mb-4 text-lg font-semibold text-gray-900">"Previous Employer"</h3>
                    <div class="grid gap-4 md:grid-cols-2">
                        <PlainInput placeholder="Employer Name" value=form.employer2_name/>
                        <PlainInput placeholder="Position" value=form.employer2_position/>
                        <PlainInput placeholder="Duration" value=form.employer2_duration/>
                        <PlainInput placeholder="Reason for Leaving" value=form.employer2_reason/>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn EducationSection(form: CareersFormState) -> impl IntoView {
    view! {
        <section class="rounded-2xl bg-gradient-to-br from-orange-50 to-red-50 p-8">
            <h2 class="mb-6 text-2xl font-bold text-gray-900">"Education & Certifications"</h2>
            <div class="space-y-6">
                <select
                    prop:value=move || form.education.get()
                    on:change=move |ev| form.education.set(event_target_value(&ev))
                    class="w-full rounded border px-4 py-3"
                >
                    <option value="">"Select education level"</option>
                    {EDUCATION_OPTIONS
                        .into_iter()
                        .map(|(value, label)| view! { <option value=value>{label}</option> })
                        .collect_view()}
                </select>

                <div>
                    <label class="mb-3 block text-sm font-medium text-gray-700">
                        "Certifications (check all that apply)"
                    </label>
                    <div class="grid grid-cols-1 gap-3 md:grid-cols-2">
                        {CERTIFICATION_OPTIONS
                            .into_iter()
                            .map(|option| {
                                view! {
                                    <label class="flex items-center">
                                        <input
                                            type="checkbox"
                                            prop:checked=move || {
                                                form.certifications.get().iter().any(|item| item == option)
                                            }
                                            on:change=move |ev| {
                                                form.toggle_certification(option, event_target_checked(&ev))
                                            }
                                            class="rounded border-gray-300 text-yellow-600"
                                        />
                                        <span class="ml-2 text-sm text-gray-700">{option}</span>
                                    </label>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn SkillsSection(form: CareersFormState) -> impl IntoView {
    view! {
        <section class="rounded-2xl bg-gradient-to-br from-teal-50 to-cyan-50 p-8">
            <h2 class="mb-6 text-2xl font-bold text-gray-900">"Skills & Experience"</h2>
            <div class="space-y-6">
                <textarea
                    rows=4
                    placeholder="Describe your experience..."
                    prop:value=move || form.experience.get()
                    on:input=move |ev| form.experience.set(event_target_value(&ev))
                    class="w-full rounded border px-4 py-3"
                ></textarea>
                <textarea
                    rows=3
                    placeholder="Languages spoken, special training, etc..."
                    prop:value=move || form.skills.get()
                    on:input=move |ev| form.skills.set(event_target_value(&ev))
                    class="w-full rounded border px-4 py-3"
                ></textarea>
            </div>
        </section>
    }
}

#[component]
pub fn ReferencesSection(form: CareersFormState) -> impl IntoView {
    view! {
        <section class="rounded-2xl bg-gradient-to-br from-pink-50 to-rose-50 p-8">
            <h2 class="mb-6 text-2xl font-bold text-gray-900">"References"</h2>
            <div class="space-y-8">
                <div>
                    <h3 class="mb-4 text-lg font-semibold text-gray-900">"Reference 1"</h3>
                    <div class="grid gap-4 md:grid-cols-3">
                        <PlainInput placeholder="Full Name" value=form.reference1_name/>
                        <PlainInput placeholder="Phone Number" value=form.reference1_phone/>
                        <PlainInput placeholder="Relationship" value=form.reference1_relationship/>
                    </div>
                </div>
                <div>
                    <h3 class="mb-4 text-lg font-semibold text-gray-900">"Reference 2"</h3>
                    <div class="grid gap-4 md:grid-cols-3">
                        <PlainInput placeholder="Full Name" value=form.reference2_name/>
                        <PlainInput placeholder="Phone Number" value=form.reference2_phone/>
                        <PlainInput placeholder="Relationship" value=form.reference2_relationship/>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn EmergencyContactSection(form: CareersFormState) -> impl IntoView {
    view! {
        <section class="rounded-2xl bg-gradient-to-br from-yellow-50 to-orange-50 p-8">
            <h2 class="mb-6 text-2xl font-bold text-gray-900">"Emergency Contact"</h2>
            <div class="grid gap-4 md:grid-cols-3">
                <PlainInput placeholder="Full Name" value=form.emergency_name/>
                <PlainInput placeholder="Phone Number" value=form.emergency_phone/>
                <PlainInput placeholder="Relationship" value=form.emergency_relationship/>
            </div>
        </section>
    }
}

#[component]
pub fn SignatureSection(form: CareersFormState) -> impl IntoView {
    view! {
        <section class="rounded-2xl bg-gray-50 p-8">
            <h2 class="mb-6 text-2xl font-bold text-gray-900">"Acknowledgment & Signature"</h2>
            <label class="mb-4 flex items-start">
                <input
                    type="checkbox"
                    required
                    prop:checked=move || form.acknowledgment.get()
                    on:change=move |ev| form.acknowledgment.set(event_target_checked(&ev))
                    class="mt-1 rounded border-gray-300 text-yellow-600"
                />
                <span class="ml-3 text-sm text-gray-700">
                    "I acknowledge that all information provided is true and accurate. I authorize New Daybreak Home Support to verify the information and perform background checks as necessary."
                </span>
            </label>
            <TextField
                label="Digital Signature *"
                value=form.signature
                required=true
                placeholder="Type your full name as your digital signature"
            />
        </section>
    }
}
