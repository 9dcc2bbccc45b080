use crate::api::test_support::mock::*;
use crate::api::{ApiClient, ApiError, LoginRequest};
use crate::state::tokens::{MemoryTokens, TokenSlot};
use std::sync::Arc;

fn admin_client(server: &MockServer) -> ApiClient {
    ApiClient::new_with_parts(
        server.url("/api"),
        Arc::new(MemoryTokens::with_token(TokenSlot::Admin, "tok-admin")),
    )
}

fn employee_client(server: &MockServer) -> ApiClient {
    ApiClient::new_with_parts(
        server.url("/api"),
        Arc::new(MemoryTokens::with_token(TokenSlot::Employee, "tok-emp")),
    )
}

#[tokio::test]
async fn get_me_parses_role() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/me");
        then.status(200)
            .json_body(serde_json::json!({ "role": "admin", "name": "Dana" }));
    });

    let me = admin_client(&server).get_me(TokenSlot::Admin).await.unwrap();
    assert_eq!(me.role, "admin");
    assert_eq!(me.name.as_deref(), Some("Dana"));
}

#[tokio::test]
async fn get_me_maps_401_to_auth_rejected() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/me");
        then.status(401)
            .json_body(serde_json::json!({ "message": "token expired" }));
    });

    let err = admin_client(&server)
        .get_me(TokenSlot::Admin)
        .await
        .unwrap_err();
    assert_eq!(err, ApiError::AuthRejected);
}

#[tokio::test]
async fn get_me_without_token_never_hits_the_network() {
    let server = MockServer::start();
    let client = ApiClient::new_with_parts(server.url("/api"), Arc::new(MemoryTokens::default()));
    let err = client.get_me(TokenSlot::Admin).await.unwrap_err();
    assert_eq!(err, ApiError::AuthRejected);
}

#[tokio::test]
async fn login_surfaces_server_message_verbatim() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/login");
        then.status(401)
            .json_body(serde_json::json!({ "message": "Invalid email or password" }));
    });

    let err = admin_client(&server)
        .login(&LoginRequest {
            email: "x@y.com".into(),
            password: "nope".into(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Invalid email or password");
}

#[tokio::test]
async fn login_falls_back_to_status_message() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/login");
        then.status(500).json_body(serde_json::json!({}));
    });

    let err = admin_client(&server)
        .login(&LoginRequest {
            email: "x@y.com".into(),
            password: "pw".into(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Login failed (500)");
}

#[tokio::test]
async fn status_update_maps_403_to_auth_rejected() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/admin/applications/9/status");
        then.status(403).json_body(serde_json::json!({}));
    });

    let err = admin_client(&server)
        .update_application_status(9, "approved")
        .await
        .unwrap_err();
    assert_eq!(err, ApiError::AuthRejected);
}

#[tokio::test]
async fn attendance_parses_null_and_present_check_in() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/employee/attendance");
        then.status(200)
            .json_body(serde_json::json!({ "check_in": null }));
    });
    let client = employee_client(&server);
    let att = client.get_attendance().await.unwrap();
    assert!(att.check_in.is_none());

    server.mock(|when, then| {
        when.method(GET).path("/api/employee/attendance");
        then.status(200)
            .json_body(serde_json::json!({ "check_in": "2025-06-01T08:00:00Z" }));
    });
    let att = client.get_attendance().await.unwrap();
    assert_eq!(att.check_in.as_deref(), Some("2025-06-01T08:00:00Z"));
}

#[tokio::test]
async fn unmatched_route_behaves_like_transport_failure() {
    let server = MockServer::start();
    // Register the mock host without any routes.
    let client = employee_client(&server);
    let err = client.get_attendance().await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
}

#[tokio::test]
async fn list_applications_parses_rows() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/admin/applications");
        then.status(200).json_body(serde_json::json!([
            { "id": 1, "full_name": "Ann", "email": "a@x.com", "phone": "1", "position_desired": "caregiver", "status": "pending" },
            { "id": 2, "full_name": "Bob", "email": "b@x.com", "phone": "2", "position_desired": "companion", "status": "approved" }
        ]));
    });

    let rows = admin_client(&server).list_applications().await.unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1].full_name, "Bob");
    assert_eq!(rows[1].status, "approved");
}
