use leptos::*;

use crate::pages::careers::view_model::{CareersFormState, SCREENING_QUESTIONS};

#[component]
pub fn ScreeningSection(form: CareersFormState) -> impl IntoView {
    view! {
        <section class="rounded-2xl border bg-white p-6">
            <h2 class="mb-4 text-xl font-bold">"Screening & Eligibility (required)"</h2>
            {SCREENING_QUESTIONS
                .iter()
                .enumerate()
                .map(|(index, question)| {
                    let answers = form.screening_answers;
                    view! {
                        <div class="mb-4">
                            <label class="mb-2 block text-sm font-medium text-gray-700">
                                {question.prompt}
                            </label>
                            <div class="flex items-center space-x-4">
                                <label class="inline-flex items-center">
                                    <input
                                        type="radio"
                                        name=format!("screening-{}", index)
                                        prop:checked=move || answers.get().get(index).copied().flatten() == Some(true)
                                        on:change=move |_| form.set_screening_answer(index, true)
                                    />
                                    <span class="ml-2">"Yes"</span>
                                </label>
                                <label class="inline-flex items-center">
                                    <input
                                        type="radio"
                                        name=format!("screening-{}", index)
                                        prop:checked=move || answers.get().get(index).copied().flatten() == Some(false)
                                        on:change=move |_| form.set_screening_answer(index, false)
                                    />
                                    <span class="ml-2">"No"</span>
                                </label>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </section>
    }
}
