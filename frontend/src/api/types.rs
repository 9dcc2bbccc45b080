use serde::{Deserialize, Serialize};

/// Failure taxonomy for every remote call. `AuthRejected` is the only
/// variant that may cause a stored credential to be cleared, and only the
/// flow that owns the credential does the clearing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("Session expired. Please login again.")]
    AuthRejected,
    #[error("{message}")]
    ServerRejected { status: u16, message: String },
    #[error("Network error. Please try again.")]
    Transport(String),
    #[error("{0}")]
    Validation(String),
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation(message.into())
    }

    pub fn transport(detail: impl Into<String>) -> Self {
        ApiError::Transport(detail.into())
    }

    /// Non-auth HTTP failure; carries the server's message verbatim when
    /// present.
    pub fn server(status: u16, message: Option<String>) -> Self {
        ApiError::ServerRejected {
            status,
            message: message.unwrap_or_else(|| format!("Server error ({})", status)),
        }
    }

    pub fn is_auth_rejected(&self) -> bool {
        matches!(self, ApiError::AuthRejected)
    }
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.to_string()
    }
}

/// Body shape the API uses for non-2xx responses.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MeResponse {
    pub role: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginUser {
    pub role: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: LoginUser,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EmployerEntry {
    pub name: Option<String>,
    pub position: Option<String>,
    pub duration: Option<String>,
    pub reason_for_leaving: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EmploymentHistory {
    pub employer1: EmployerEntry,
    pub employer2: EmployerEntry,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ReferenceEntry {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub relationship: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct References {
    pub reference1: ReferenceEntry,
    pub reference2: ReferenceEntry,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EmergencyContact {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub relationship: Option<String>,
}

/// Request body for `POST /apply`, built by the careers form from its flat
/// field state.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ApplicationPayload {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city_state_zip: String,
    pub days_hours_available: Vec<String>,
    pub supported_living_availability: Option<String>,
    pub position_desired: String,
    pub available_start_date: Option<String>,
    pub employment_history: EmploymentHistory,
    pub education_level: Option<String>,
    pub certifications: Vec<String>,
    pub skills_experience: String,
    pub references: References,
    pub emergency_contact: EmergencyContact,
    pub signature: Option<String>,
    pub is_over_18: bool,
    pub can_perform_physical_tasks: bool,
    pub can_provide_physical_assistance: bool,
    pub can_provide_hygiene_assistance: bool,
    pub has_drivers_license: bool,
    pub has_communication_skills: bool,
    pub has_reliable_transport: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplyResponse {
    #[serde(default)]
    pub application_id: Option<i64>,
}

fn default_status() -> String {
    "pending".to_string()
}

/// Read-model of a submitted application. List responses carry the summary
/// columns; the detail endpoint fills in the rest.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApplicationRecord {
    pub id: i64,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub position_desired: String,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default)]
    pub submitted_at: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city_state_zip: Option<String>,
    #[serde(default)]
    pub days_hours_available: Vec<String>,
    #[serde(default)]
    pub education_level: Option<String>,
    #[serde(default)]
    pub certifications: Vec<String>,
    #[serde(default)]
    pub skills_experience: Option<String>,
    #[serde(default)]
    pub employment_history: Option<serde_json::Value>,
    #[serde(default)]
    pub references: Option<serde_json::Value>,
    #[serde(default)]
    pub emergency_contact: Option<serde_json::Value>,
    #[serde(default)]
    pub signature: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusUpdateRequest {
    pub status: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AttendanceResponse {
    #[serde(default)]
    pub check_in: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn application_list_row_parses_with_summary_fields_only() {
        let row: ApplicationRecord = serde_json::from_str(
            r#"{
                "id": 7,
                "full_name": "Ann Example",
                "email": "ann@example.com",
                "phone": "555-0100",
                "position_desired": "caregiver",
                "status": "pending",
                "submitted_at": "2025-06-01T12:00:00"
            }"#,
        )
        .unwrap();
        assert_eq!(row.id, 7);
        assert_eq!(row.status, "pending");
        assert!(row.address.is_none());
        assert!(row.days_hours_available.is_empty());
    }

    #[test]
    fn application_row_defaults_missing_status_to_pending() {
        let row: ApplicationRecord =
            serde_json::from_str(r#"{"id": 1, "full_name": "Bob"}"#).unwrap();
        assert_eq!(row.status, "pending");
    }

    #[test]
    fn server_error_uses_message_verbatim_or_status_fallback() {
        let explicit = ApiError::server(422, Some("Email already used".into()));
        assert_eq!(explicit.to_string(), "Email already used");

        let fallback = ApiError::server(500, None);
        assert_eq!(fallback.to_string(), "Server error (500)");
    }

    #[test]
    fn transport_error_renders_generic_network_message() {
        let err = ApiError::transport("dns failure");
        assert_eq!(err.to_string(), "Network error. Please try again.");
        assert!(!err.is_auth_rejected());
        assert!(ApiError::AuthRejected.is_auth_rejected());
    }

    #[test]
    fn payload_serializes_nested_sections_with_nulls() {
        let payload = ApplicationPayload {
            full_name: "Ann Example".into(),
            email: "ann@example.com".into(),
            phone: "555-0100".into(),
            address: "1 Main St".into(),
            city_state_zip: "Tacoma, WA 98401".into(),
            days_hours_available: vec!["Mornings".into()],
            supported_living_availability: None,
            position_desired: "caregiver".into(),
            available_start_date: None,
            employment_history: EmploymentHistory::default(),
            education_level: None,
            certifications: vec![],
            skills_experience: String::new(),
            references: References::default(),
            emergency_contact: EmergencyContact::default(),
            signature: Some("Ann Example".into()),
            is_over_18: true,
            can_perform_physical_tasks: true,
            can_provide_physical_assistance: true,
            can_provide_hygiene_assistance: true,
            has_drivers_license: true,
            has_communication_skills: true,
            has_reliable_transport: true,
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert!(value["employment_history"]["employer1"]["name"].is_null());
        assert!(value["supported_living_availability"].is_null());
        assert_eq!(value["city_state_zip"], "Tacoma, WA 98401");
        assert_eq!(value["is_over_18"], true);
    }
}
