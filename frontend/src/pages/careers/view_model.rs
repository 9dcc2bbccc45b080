use leptos::*;

use crate::api::{
    ApiError, ApplicationPayload, EmergencyContact, EmployerEntry, EmploymentHistory,
    ReferenceEntry, References,
};

pub const AVAILABILITY_OPTIONS: [&str; 6] = [
    "Mornings",
    "Afternoons",
    "Evenings",
    "Weekends",
    "Overnight",
    "24-Hour",
];

pub const CERTIFICATION_OPTIONS: [&str; 6] = ["CPR", "CNA", "HCA", "First Aid", "Dementia Care", "Other"];

pub const POSITION_OPTIONS: [(&str, &str); 4] = [
    ("caregiver", "Caregiver"),
    ("companion", "Companion"),
    ("housekeeper", "Housekeeper"),
    ("overnight", "Overnight Caregiver"),
];

pub const EDUCATION_OPTIONS: [(&str, &str); 6] = [
    ("high-school", "High School Diploma/GED"),
    ("some-college", "Some College"),
    ("associate", "Associate Degree"),
    ("bachelor", "Bachelor's Degree"),
    ("master", "Master's Degree"),
    ("other", "Other"),
];

pub struct ScreeningQuestion {
    /// Full prompt shown in the form.
    pub prompt: &'static str,
    /// Short label used in the "Please answer: ..." validation message.
    pub missing_label: &'static str,
}

pub const SCREENING_QUESTIONS: [ScreeningQuestion; 7] = [
    ScreeningQuestion {
        prompt: "Are you at least 18 years of age or older?",
        missing_label: "Are you at least 18 years of age?",
    },
    ScreeningQuestion {
        prompt: "Are you able to bend, lift up to 25 pounds, stoop, stand and/or sit for long periods?",
        missing_label: "Are you able to bend/lift/stand for long periods?",
    },
    ScreeningQuestion {
        prompt: "Are you able to provide physical assistance if needed?",
        missing_label: "Can you provide physical assistance if needed?",
    },
    ScreeningQuestion {
        prompt: "Are you willing to provide personal hygiene assistance if needed?",
        missing_label: "Willing to provide personal hygiene assistance?",
    },
    ScreeningQuestion {
        prompt: "Do you have a current Driver's License or the ability to obtain one prior to employment?",
        missing_label: "Do you have a Driver's License or ability to obtain one?",
    },
    ScreeningQuestion {
        prompt: "Do you have good verbal and written communication skills?",
        missing_label: "Do you have good verbal and written communication skills?",
    },
    ScreeningQuestion {
        prompt: "Do you have your own vehicle or access to a vehicle you are insured to drive and reliably transport clients?",
        missing_label: "Do you have your own vehicle / reliable transport?",
    },
];

const DEFAULT_STATE: &str = "WA";

/// Signal-per-field state for the application form. `to_payload` validates
/// in form order and produces the request body; `reset` restores every
/// field to its initial value.
#[derive(Clone, Copy)]
pub struct CareersFormState {
    pub first_name: RwSignal<String>,
    pub last_name: RwSignal<String>,
    pub email: RwSignal<String>,
    pub phone: RwSignal<String>,
    pub address: RwSignal<String>,
    pub city: RwSignal<String>,
    pub state: RwSignal<String>,
    pub zip_code: RwSignal<String>,

    pub availability: RwSignal<Vec<String>>,
    pub supported_living_availability: RwSignal<String>,
    pub position_interest: RwSignal<String>,
    pub available_start_date: RwSignal<String>,

    pub employer1_name: RwSignal<String>,
    pub employer1_position: RwSignal<String>,
    pub employer1_duration: RwSignal<String>,
    pub employer1_reason: RwSignal<String>,
    pub employer2_name: RwSignal<String>,
    pub employer2_position: RwSignal<String>,
    pub employer2_duration: RwSignal<String>,
    pub employer2_reason: RwSignal<String>,

    pub education: RwSignal<String>,
    pub certifications: RwSignal<Vec<String>>,

    pub experience: RwSignal<String>,
    pub skills: RwSignal<String>,

    pub reference1_name: RwSignal<String>,
    pub reference1_phone: RwSignal<String>,
    pub reference1_relationship: RwSignal<String>,
    pub reference2_name: RwSignal<String>,
    pub reference2_phone: RwSignal<String>,
    pub reference2_relationship: RwSignal<String>,

    pub emergency_name: RwSignal<String>,
    pub emergency_phone: RwSignal<String>,
    pub emergency_relationship: RwSignal<String>,

    pub screening_answers: RwSignal<[Option<bool>; 7]>,

    pub acknowledgment: RwSignal<bool>,
    pub signature: RwSignal<String>,
}

fn text_signal() -> RwSignal<String> {
    create_rw_signal(String::new())
}

fn opt(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

impl CareersFormState {
    pub fn new() -> Self {
        Self {
            first_name: text_signal(),
            last_name: text_signal(),
            email: text_signal(),
            phone: text_signal(),
            address: text_signal(),
            city: text_signal(),
            state: create_rw_signal(DEFAULT_STATE.to_string()),
            zip_code: text_signal(),
            availability: create_rw_signal(Vec::new()),
            supported_living_availability: text_signal(),
            position_interest: text_signal(),
            available_start_date: text_signal(),
            employer1_name: text_signal(),
            employer1_position: text_signal(),
            employer1_duration: text_signal(),
            employer1_reason: text_signal(),
            employer2_name: text_signal(),
            employer2_position: text_signal(),
            employer2_duration: text_signal(),
            employer2_reason: text_signal(),
            education: text_signal(),
            certifications: create_rw_signal(Vec::new()),
            experience: text_signal(),
            skills: text_signal(),
            reference1_name: text_signal(),
            reference1_phone: text_signal(),
            reference1_relationship: text_signal(),
            reference2_name: text_signal(),
            reference2_phone: text_signal(),
            reference2_relationship: text_signal(),
            emergency_name: text_signal(),
            emergency_phone: text_signal(),
            emergency_relationship: text_signal(),
            screening_answers: create_rw_signal([None; 7]),
            acknowledgment: create_rw_signal(false),
            signature: text_signal(),
        }
    }

    pub fn toggle_availability(&self, value: &str, checked: bool) {
        toggle(self.availability, value, checked);
    }

    pub fn toggle_certification(&self, value: &str, checked: bool) {
        toggle(self.certifications, value, checked);
    }

    pub fn set_screening_answer(&self, index: usize, answer: bool) {
        self.screening_answers.update(|answers| {
            if let Some(slot) = answers.get_mut(index) {
                *slot = Some(answer);
            }
        });
    }

    /// Validates the required fields in form order, then assembles the
    /// request body. Optional empty fields become nulls.
    pub fn to_payload(&self) -> Result<ApplicationPayload, ApiError> {
        let first_name = self.first_name.get_untracked();
        let last_name = self.last_name.get_untracked();
        if first_name.trim().is_empty() || last_name.trim().is_empty() {
            return Err(ApiError::validation("Please provide your full name."));
        }
        let email = self.email.get_untracked();
        if email.trim().is_empty() {
            return Err(ApiError::validation("Please provide an email address."));
        }
        let phone = self.phone.get_untracked();
        if phone.trim().is_empty() {
            return Err(ApiError::validation("Please provide a phone number."));
        }
        let address = self.address.get_untracked();
        if address.trim().is_empty() {
            return Err(ApiError::validation("Please provide an address."));
        }
        let city = self.city.get_untracked();
        let zip_code = self.zip_code.get_untracked();
        if city.trim().is_empty() || zip_code.trim().is_empty() {
            return Err(ApiError::validation("Please provide city and ZIP."));
        }
        let position = self.position_interest.get_untracked();
        if position.is_empty() {
            return Err(ApiError::validation("Please select a position of interest."));
        }
        let signature = self.signature.get_untracked();
        if signature.trim().is_empty() {
            return Err(ApiError::validation("Please provide a digital signature."));
        }
        let answers = self.screening_answers.get_untracked();
        for (answer, question) in answers.iter().zip(SCREENING_QUESTIONS.iter()) {
            if answer.is_none() {
                return Err(ApiError::validation(format!(
                    "Please answer: {}",
                    question.missing_label
                )));
            }
        }

        let experience = self.experience.get_untracked();
        let skills = self.skills.get_untracked();
        let skills_experience = [
            opt(experience).map(|text| format!("Experience: {}", text)),
            opt(skills).map(|text| format!("Skills: {}", text)),
        ]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join("\n");

        Ok(ApplicationPayload {
            full_name: format!("{} {}", first_name, last_name).trim().to_string(),
            email,
            phone,
            address,
            city_state_zip: format!("{}, {} {}", city, self.state.get_untracked(), zip_code),
            days_hours_available: self.availability.get_untracked(),
            supported_living_availability: opt(self.supported_living_availability.get_untracked()),
            position_desired: position,
            available_start_date: opt(self.available_start_date.get_untracked()),
            employment_history: EmploymentHistory {
                employer1: EmployerEntry {
                    name: opt(self.employer1_name.get_untracked()),
                    position: opt(self.employer1_position.get_untracked()),
                    duration: opt(self.employer1_duration.get_untracked()),
                    reason_for_leaving: opt(self.employer1_reason.get_untracked()),
                },
                employer2: EmployerEntry {
                    name: opt(self.employer2_name.get_untracked()),
                    position: opt(self.employer2_position.get_untracked()),
                    duration: opt(self.employer2_duration.get_untracked()),
                    reason_for_leaving: opt(self.employer2_reason.get_untracked()),
                },
            },
            education_level: opt(self.education.get_untracked()),
            certifications: self.certifications.get_untracked(),
            skills_experience,
            references: References {
                reference1: ReferenceEntry {
                    name: opt(self.reference1_name.get_untracked()),
                    phone: opt(self.reference1_phone.get_untracked()),
                    relationship: opt(self.reference1_relationship.get_untracked()),
                },
                reference2: ReferenceEntry {
                    name: opt(self.reference2_name.get_untracked()),
                    phone: opt(self.reference2_phone.get_untracked()),
                    relationship: opt(self.reference2_relationship.get_untracked()),
                },
            },
            emergency_contact: EmergencyContact {
                name: opt(self.emergency_name.get_untracked()),
                phone: opt(self.emergency_phone.get_untracked()),
                relationship: opt(self.emergency_relationship.get_untracked()),
            },
            signature: opt(signature),
            is_over_18: answers[0] == Some(true),
            can_perform_physical_tasks: answers[1] == Some(true),
            can_provide_physical_assistance: answers[2] == Some(true),
            can_provide_hygiene_assistance: answers[3] == Some(true),
            has_drivers_license: answers[4] == Some(true),
            has_communication_skills: answers[5] == Some(true),
            has_reliable_transport: answers[6] == Some(true),
        })
    }

    /// Clears every field back to its initial value. State stays "WA".
    pub fn reset(&self) {
        for signal in [
            self.first_name,
            self.last_name,
            self.email,
            self.phone,
            self.address,
            self.city,
            self.zip_code,
            self.supported_living_availability,
            self.position_interest,
            self.available_start_date,
            self.employer1_name,
            self.employer1_position,
            self.employer1_duration,
            self.employer1_reason,
            self.employer2_name,
            self.employer2_position,
            self.employer2_duration,
            self.employer2_reason,
            self.education,
            self.experience,
            self.skills,
            self.reference1_name,
            self.reference1_phone,
            self.reference1_relationship,
            self.reference2_name,
            self.reference2_phone,
            self.reference2_relationship,
            self.emergency_name,
            self.emergency_phone,
            self.emergency_relationship,
            self.signature,
        ] {
            signal.set(String::new());
        }
        self.state.set(DEFAULT_STATE.to_string());
        self.availability.set(Vec::new());
        self.certifications.set(Vec::new());
        self.screening_answers.set([None; 7]);
        self.acknowledgment.set(false);
    }
}

impl Default for CareersFormState {
    fn default() -> Self {
        Self::new()
    }
}

fn toggle(list: RwSignal<Vec<String>>, value: &str, checked: bool) {
    list.update(|items| {
        if checked {
            if !items.iter().any(|item| item == value) {
                items.push(value.to_string());
            }
        } else {
            items.retain(|item| item != value);
        }
    });
}

/// Submission feedback line. Servers that omit the ID get "N/A".
pub fn success_message(application_id: Option<i64>) -> String {
    let reference = application_id
        .map(|id| id.to_string())
        .unwrap_or_else(|| "N/A".to_string());
    format!("Application submitted — reference ID: {}.", reference)
}
