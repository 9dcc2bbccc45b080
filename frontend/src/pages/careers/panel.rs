use std::rc::Rc;

use leptos::*;

use crate::api::{ApiClient, ApplicationPayload};
use crate::components::common::{ErrorMessage, SuccessMessage};
use crate::pages::careers::components::screening::ScreeningSection;
use crate::pages::careers::components::sections::{
    AvailabilitySection, EducationSection, EmergencyContactSection, EmploymentHistorySection,
    PersonalSection, ReferencesSection, SignatureSection, SkillsSection,
};
use crate::pages::careers::repository::CareersRepository;
use crate::pages::careers::view_model::{success_message, CareersFormState};

#[component]
pub fn CareersPage() -> impl IntoView {
    let repository = Rc::new(CareersRepository::new_with_client(Rc::new(ApiClient::new())));
    let form = CareersFormState::new();
    let success = create_rw_signal(Option::<String>::None);
    let error = create_rw_signal(Option::<String>::None);

    let submit_action = create_action({
        let repository = repository.clone();
        move |payload: &ApplicationPayload| {
            let repository = repository.clone();
            let payload = payload.clone();
            async move { repository.submit(&payload).await }
        }
    });
    let pending = submit_action.pending();

    create_effect(move |_| {
        if let Some(result) = submit_action.value().get() {
            match result {
                Ok(response) => {
                    success.set(Some(success_message(response.application_id)));
                    error.set(None);
                    form.reset();
                }
                Err(err) => {
                    success.set(None);
                    error.set(Some(err.to_string()));
                }
            }
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        success.set(None);
        match form.to_payload() {
            Ok(payload) => {
                error.set(None);
                submit_action.dispatch(payload);
            }
            Err(err) => error.set(Some(err.to_string())),
        }
    };

    view! {
        <div class="bg-gradient-to-br from-blue-50 via-white to-yellow-50 py-20">
            <div class="mx-auto max-w-4xl px-4">
                <div class="mb-16 text-center">
                    <h1 class="mb-6 text-4xl font-bold text-gray-900 sm:text-5xl">
                        "Join Our "
                        <span class="bg-gradient-to-r from-blue-600 to-yellow-500 bg-clip-text text-transparent">
                            "Caring Team"
                        </span>
                    </h1>
                    <p class="mx-auto max-w-3xl text-xl leading-relaxed text-gray-600">
                        "Make a meaningful difference in the lives of others. Apply to become a caregiver with New Daybreak Home Support."
                    </p>
                </div>

                <div class="mb-6 space-y-4">
                    <Show when=move || success.get().is_some()>
                        <SuccessMessage message=Signal::derive(move || success.get().unwrap_or_default())/>
                    </Show>
                    <Show when=move || error.get().is_some()>
                        <ErrorMessage message=Signal::derive(move || error.get().unwrap_or_default())/>
                    </Show>
                </div>

                <form on:submit=on_submit class="space-y-12">
                    <PersonalSection form=form/>
                    <AvailabilitySection form=form/>
                    <EmploymentHistorySection form=form/>
                    <EducationSection form=form/>
                    <SkillsSection form=form/>
                    <ScreeningSection form=form/>
                    <ReferencesSection form=form/>
                    <EmergencyContactSection form=form/>
                    <SignatureSection form=form/>

                    <div class="text-center">
                        <button
                            type="submit"
                            disabled=move || pending.get()
                            class="inline-flex items-center rounded-full bg-gradient-to-r from-yellow-400 to-yellow-600 px-12 py-4 font-semibold text-white shadow-lg disabled:opacity-60"
                        >
                            {move || if pending.get() { "Sending..." } else { "Submit Application" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
