mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use common::TestApp;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn parse_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn create_event(app: &TestApp, owner: &str, event_type: &str) -> String {
    let res = app.router.clone().oneshot(
        Request::builder().method("POST").uri("/api/v1/events")
            .header("X-User-Id", owner)
            .header("Content-Type", "application/json")
            .body(Body::from(json!({
                "title": "Birthday Pool",
                "description": "Group gift for Sam",
                "event_type": event_type,
                "event_date": (chrono::Utc::now() + chrono::Duration::days(14)).to_rfc3339()
            }).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    parse_body(res).await["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_invitation_accept_flow() {
    let app = TestApp::new().await;
    let owner = app.register_user("Alice", "alice@example.com").await;
    let guest = app.register_user("Bob", "bob@example.com").await;
    let event_id = create_event(&app, &owner, "ONE_TO_ONE").await;

    // 1. Owner invites
    let res = app.router.clone().oneshot(
        Request::builder().method("POST").uri(format!("/api/v1/events/{}/invitations", event_id))
            .header("X-User-Id", &owner)
            .header("Content-Type", "application/json")
            .body(Body::from(json!({"email": "bob@example.com"}).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let invitation = parse_body(res).await;
    let token = invitation["token"].as_str().unwrap().to_string();
    assert_eq!(invitation["status"], "PENDING");
    assert_eq!(token.len(), 32);

    // 2. Public token lookup shows the event
    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri(format!("/api/v1/invitations/{}", token))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let preview = parse_body(res).await;
    assert_eq!(preview["event"]["title"], "Birthday Pool");

    // 3. Guest accepts and becomes a participant
    let res = app.router.clone().oneshot(
        Request::builder().method("POST").uri(format!("/api/v1/invitations/{}/accept", token))
            .header("X-User-Id", &guest)
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let participant = parse_body(res).await;
    assert_eq!(participant["user_id"], guest.as_str());
    assert_eq!(participant["role"], "MEMBER");

    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri(format!("/api/v1/events/{}/invitations", event_id))
            .header("X-User-Id", &owner)
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    let invitations = parse_body(res).await;
    assert_eq!(invitations[0]["status"], "ACCEPTED");

    // 4. The answered token cannot be used again
    let res = app.router.clone().oneshot(
        Request::builder().method("POST").uri(format!("/api/v1/invitations/{}/accept", token))
            .header("X-User-Id", &guest)
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_invitation_decline() {
    let app = TestApp::new().await;
    let owner = app.register_user("Carol", "carol@example.com").await;
    let event_id = create_event(&app, &owner, "GROUP").await;

    let res = app.router.clone().oneshot(
        Request::builder().method("POST").uri(format!("/api/v1/events/{}/invitations", event_id))
            .header("X-User-Id", &owner)
            .header("Content-Type", "application/json")
            .body(Body::from(json!({}).to_string())).unwrap()
    ).await.unwrap();
    let token = parse_body(res).await["token"].as_str().unwrap().to_string();

    // Declining needs no account, only the token
    let res = app.router.clone().oneshot(
        Request::builder().method("POST").uri(format!("/api/v1/invitations/{}/decline", token))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(parse_body(res).await["status"], "DECLINED");

    let res = app.router.clone().oneshot(
        Request::builder().method("POST").uri(format!("/api/v1/invitations/{}/decline", token))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_only_owner_invites_and_lists() {
    let app = TestApp::new().await;
    let owner = app.register_user("Dave", "dave@example.com").await;
    let member = app.register_user("Erin", "erin@example.com").await;
    let event_id = create_event(&app, &owner, "GROUP").await;

    // Get Erin in as a regular member first
    let res = app.router.clone().oneshot(
        Request::builder().method("POST").uri(format!("/api/v1/events/{}/invitations", event_id))
            .header("X-User-Id", &owner)
            .header("Content-Type", "application/json")
            .body(Body::from(json!({}).to_string())).unwrap()
    ).await.unwrap();
    let token = parse_body(res).await["token"].as_str().unwrap().to_string();
    app.router.clone().oneshot(
        Request::builder().method("POST").uri(format!("/api/v1/invitations/{}/accept", token))
            .header("X-User-Id", &member)
            .body(Body::empty()).unwrap()
    ).await.unwrap();

    let res = app.router.clone().oneshot(
        Request::builder().method("POST").uri(format!("/api/v1/events/{}/invitations", event_id))
            .header("X-User-Id", &member)
            .header("Content-Type", "application/json")
            .body(Body::from(json!({}).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri(format!("/api/v1/events/{}/invitations", event_id))
            .header("X-User-Id", &member)
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_unknown_token() {
    let app = TestApp::new().await;

    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri("/api/v1/invitations/nosuchtoken")
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_owner_revokes_invitation() {
    let app = TestApp::new().await;
    let owner = app.register_user("Frank", "frank@example.com").await;
    let event_id = create_event(&app, &owner, "GROUP").await;

    let res = app.router.clone().oneshot(
        Request::builder().method("POST").uri(format!("/api/v1/events/{}/invitations", event_id))
            .header("X-User-Id", &owner)
            .header("Content-Type", "application/json")
            .body(Body::from(json!({}).to_string())).unwrap()
    ).await.unwrap();
    let invitation = parse_body(res).await;
    let invitation_id = invitation["id"].as_str().unwrap();
    let token = invitation["token"].as_str().unwrap().to_string();

    let res = app.router.clone().oneshot(
        Request::builder().method("DELETE").uri(format!("/api/v1/events/{}/invitations/{}", event_id, invitation_id))
            .header("X-User-Id", &owner)
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri(format!("/api/v1/invitations/{}", token))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}
