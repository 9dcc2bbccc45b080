use crate::api::{ApiClient, ApiError, ApplicationRecord};
use crate::state::tokens::TokenSlot;

/// Result of opening the dashboard: verified and loaded, shown an access
/// error, or bounced back to the login screen. The stored token is deleted
/// only on the redirect paths.
#[derive(Clone, Debug, PartialEq)]
pub enum AdminEntry {
    Ready {
        applications: Vec<ApplicationRecord>,
        notice: Option<String>,
    },
    AccessDenied(String),
    RedirectToLogin,
}

pub async fn enter_dashboard(client: &ApiClient) -> AdminEntry {
    let tokens = client.token_store();
    if tokens.get(TokenSlot::Admin).is_none() {
        return AdminEntry::RedirectToLogin;
    }

    match client.get_me(TokenSlot::Admin).await {
        Ok(me) if me.role == "admin" => {}
        Ok(_) => {
            tokens.clear(TokenSlot::Admin);
            return AdminEntry::RedirectToLogin;
        }
        Err(ApiError::AuthRejected) => {
            tokens.clear(TokenSlot::Admin);
            return AdminEntry::RedirectToLogin;
        }
        Err(ApiError::Transport(_)) => {
            return AdminEntry::AccessDenied("Network error while verifying user".to_string());
        }
        Err(_) => return AdminEntry::AccessDenied("Failed to verify user".to_string()),
    }

    match client.list_applications().await {
        Ok(applications) => AdminEntry::Ready {
            applications,
            notice: None,
        },
        Err(ApiError::AuthRejected) => {
            tokens.clear(TokenSlot::Admin);
            AdminEntry::RedirectToLogin
        }
        Err(ApiError::Transport(_)) => AdminEntry::Ready {
            applications: Vec::new(),
            notice: Some("Network error while loading applications".to_string()),
        },
        Err(_) => AdminEntry::Ready {
            applications: Vec::new(),
            notice: Some("Failed to fetch applications".to_string()),
        },
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum MutationOutcome {
    Applied,
    RedirectToLogin,
    Failed(String),
}

pub async fn update_status(client: &ApiClient, id: i64, status: &str) -> MutationOutcome {
    match client.update_application_status(id, status).await {
        Ok(()) => MutationOutcome::Applied,
        Err(ApiError::AuthRejected) => {
            client.token_store().clear(TokenSlot::Admin);
            MutationOutcome::RedirectToLogin
        }
        Err(ApiError::Transport(_)) => MutationOutcome::Failed("Network error".to_string()),
        Err(err) => MutationOutcome::Failed(err.to_string()),
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DetailOutcome {
    Ready(Box<ApplicationRecord>),
    RedirectToLogin,
    Failed(String),
}

pub async fn fetch_printable(client: &ApiClient, id: i64) -> DetailOutcome {
    match client.fetch_application_detail(id).await {
        Ok(record) => DetailOutcome::Ready(Box::new(record)),
        Err(ApiError::AuthRejected) => {
            client.token_store().clear(TokenSlot::Admin);
            DetailOutcome::RedirectToLogin
        }
        Err(ApiError::Transport(_)) => {
            DetailOutcome::Failed("Network error while downloading".to_string())
        }
        Err(_) => DetailOutcome::Failed("Failed to download".to_string()),
    }
}
