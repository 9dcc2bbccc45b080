use chrono::{DateTime, Utc};

use crate::api::{ApiClient, ApiError};
use crate::state::tokens::TokenSlot;
use crate::utils::time::{parse_check_in, seed_elapsed};

pub const SESSION_EXPIRED: &str = "Session expired. Please login again.";

/// What the attendance clock is currently showing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClockState {
    NoSession,
    Syncing,
    CheckedOut,
    CheckedIn,
}

/// Result of one attendance sync. The stored token is deleted only on
/// `SessionExpired`; transport failures leave it in place.
#[derive(Clone, Debug, PartialEq)]
pub enum SyncOutcome {
    NoSession,
    CheckedOut,
    CheckedIn { elapsed_seconds: i64 },
    SessionExpired,
    Unavailable(String),
}

pub async fn sync_attendance(client: &ApiClient, now: DateTime<Utc>) -> SyncOutcome {
    let tokens = client.token_store();
    if tokens.get(TokenSlot::Employee).is_none() {
        return SyncOutcome::NoSession;
    }

    match client.get_attendance().await {
        Ok(attendance) => match attendance.check_in.as_deref() {
            Some(raw) => {
                // An unparseable timestamp still means an open shift; the
                // counter just starts from zero.
                let elapsed_seconds = parse_check_in(raw)
                    .map(|check_in| seed_elapsed(check_in, now))
                    .unwrap_or(0);
                SyncOutcome::CheckedIn { elapsed_seconds }
            }
            None => SyncOutcome::CheckedOut,
        },
        Err(ApiError::AuthRejected) => {
            tokens.clear(TokenSlot::Employee);
            SyncOutcome::SessionExpired
        }
        Err(ApiError::Transport(_)) => {
            SyncOutcome::Unavailable("Network error. Please try again.".to_string())
        }
        Err(err) => SyncOutcome::Unavailable(err.to_string()),
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum CheckInOutcome {
    Started { elapsed_seconds: i64 },
    NeedsSync,
    SessionExpired,
    Failed(String),
}

/// Starts a shift. When the server omits the new timestamp the caller is
/// told to re-sync instead of guessing.
pub async fn perform_check_in(client: &ApiClient, now: DateTime<Utc>) -> CheckInOutcome {
    match client.check_in().await {
        Ok(attendance) => match attendance.check_in.as_deref().and_then(parse_check_in) {
            Some(check_in) => CheckInOutcome::Started {
                elapsed_seconds: seed_elapsed(check_in, now),
            },
            None => CheckInOutcome::NeedsSync,
        },
        Err(ApiError::AuthRejected) => {
            client.token_store().clear(TokenSlot::Employee);
            CheckInOutcome::SessionExpired
        }
        Err(ApiError::Transport(_)) => {
            CheckInOutcome::Failed("Network error. Please try again.".to_string())
        }
        Err(err) => CheckInOutcome::Failed(err.to_string()),
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum CheckOutOutcome {
    Done,
    SessionExpired,
    Failed(String),
}

/// Counter and state after a completed check-out, ahead of the confirming
/// sync. A finished shift always lands on a zeroed counter.
pub fn after_check_out() -> (ClockState, i64) {
    (ClockState::CheckedOut, 0)
}

pub async fn perform_check_out(client: &ApiClient) -> CheckOutOutcome {
    match client.check_out().await {
        Ok(()) => CheckOutOutcome::Done,
        Err(ApiError::AuthRejected) => {
            client.token_store().clear(TokenSlot::Employee);
            CheckOutOutcome::SessionExpired
        }
        Err(ApiError::Transport(_)) => {
            CheckOutOutcome::Failed("Network error. Please try again.".to_string())
        }
        Err(err) => CheckOutOutcome::Failed(err.to_string()),
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use crate::state::tokens::{MemoryTokens, TokenStore};
    use std::sync::Arc;

    fn client(server: &MockServer) -> ApiClient {
        ApiClient::new_with_parts(
            server.url("/api"),
            Arc::new(MemoryTokens::with_token(TokenSlot::Employee, "tok-emp")),
        )
    }

    fn now() -> DateTime<Utc> {
        parse_check_in("2025-06-01T09:00:00Z").unwrap()
    }

    #[tokio::test]
    async fn sync_with_no_open_shift_resolves_to_checked_out() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/employee/attendance");
            then.status(200)
                .json_body(serde_json::json!({ "check_in": null }));
        });

        assert_eq!(
            sync_attendance(&client(&server), now()).await,
            SyncOutcome::CheckedOut
        );
    }

    #[tokio::test]
    async fn sync_with_an_open_shift_seeds_the_counter_from_the_timestamp() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/employee/attendance");
            then.status(200)
                .json_body(serde_json::json!({ "check_in": "2025-06-01T08:30:00Z" }));
        });

        assert_eq!(
            sync_attendance(&client(&server), now()).await,
            SyncOutcome::CheckedIn {
                elapsed_seconds: 1800
            }
        );
    }

    #[tokio::test]
    async fn sync_with_an_unreadable_timestamp_still_counts_as_checked_in() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/employee/attendance");
            then.status(200)
                .json_body(serde_json::json!({ "check_in": "yesterday-ish" }));
        });

        assert_eq!(
            sync_attendance(&client(&server), now()).await,
            SyncOutcome::CheckedIn { elapsed_seconds: 0 }
        );
    }

    #[tokio::test]
    async fn sync_without_a_stored_token_stays_offline() {
        let server = MockServer::start();
        let client = ApiClient::new_with_parts(server.url("/api"), Arc::new(MemoryTokens::default()));
        // No route registered, so any request would fail loudly.
        assert_eq!(sync_attendance(&client, now()).await, SyncOutcome::NoSession);
    }

    #[tokio::test]
    async fn rejected_sync_deletes_the_token() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/employee/attendance");
            then.status(401).json_body(serde_json::json!({}));
        });

        let client = client(&server);
        assert_eq!(
            sync_attendance(&client, now()).await,
            SyncOutcome::SessionExpired
        );
        assert!(client.token_store().get(TokenSlot::Employee).is_none());
    }

    #[tokio::test]
    async fn transport_failure_during_sync_keeps_the_token() {
        let server = MockServer::start();
        let client = client(&server);
        assert_eq!(
            sync_attendance(&client, now()).await,
            SyncOutcome::Unavailable("Network error. Please try again.".to_string())
        );
        assert!(client.token_store().get(TokenSlot::Employee).is_some());
    }

    #[tokio::test]
    async fn check_in_adopts_the_returned_timestamp() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/employee/checkin");
            then.status(200)
                .json_body(serde_json::json!({ "check_in": "2025-06-01T08:59:55Z" }));
        });

        assert_eq!(
            perform_check_in(&client(&server), now()).await,
            CheckInOutcome::Started { elapsed_seconds: 5 }
        );
    }

    #[tokio::test]
    async fn check_in_without_a_timestamp_requests_a_fresh_sync() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/employee/checkin");
            then.status(200)
                .json_body(serde_json::json!({ "check_in": null }));
        });

        assert_eq!(
            perform_check_in(&client(&server), now()).await,
            CheckInOutcome::NeedsSync
        );
    }

    #[tokio::test]
    async fn successful_check_out_zeroes_the_counter_and_lands_checked_out() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/employee/checkout");
            then.status(200).json_body(serde_json::json!({}));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/employee/attendance");
            then.status(200)
                .json_body(serde_json::json!({ "check_in": null }));
        });

        let client = client(&server);
        assert_eq!(perform_check_out(&client).await, CheckOutOutcome::Done);
        assert_eq!(after_check_out(), (ClockState::CheckedOut, 0));
        assert_eq!(
            sync_attendance(&client, now()).await,
            SyncOutcome::CheckedOut
        );
    }

    #[tokio::test]
    async fn rejected_check_out_deletes_the_token() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/employee/checkout");
            then.status(401).json_body(serde_json::json!({}));
        });

        let client = client(&server);
        assert_eq!(
            perform_check_out(&client).await,
            CheckOutOutcome::SessionExpired
        );
        assert!(client.token_store().get(TokenSlot::Employee).is_none());
    }
}
