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

/// Creates a GROUP event owned by `owner` and joins `members` to it.
async fn setup_event(app: &TestApp, owner: &str, members: &[&str]) -> String {
    let res = app.router.clone().oneshot(
        Request::builder().method("POST").uri("/api/v1/events")
            .header("X-User-Id", owner)
            .header("Content-Type", "application/json")
            .body(Body::from(json!({
                "title": "Housewarming",
                "description": "Gift pool",
                "event_type": "GROUP",
                "event_date": (chrono::Utc::now() + chrono::Duration::days(7)).to_rfc3339()
            }).to_string())).unwrap()
    ).await.unwrap();
    let event_id = parse_body(res).await["id"].as_str().unwrap().to_string();

    for member in members {
        let res = app.router.clone().oneshot(
            Request::builder().method("POST").uri(format!("/api/v1/events/{}/invitations", event_id))
                .header("X-User-Id", owner)
                .header("Content-Type", "application/json")
                .body(Body::from(json!({}).to_string())).unwrap()
        ).await.unwrap();
        let token = parse_body(res).await["token"].as_str().unwrap().to_string();

        let res = app.router.clone().oneshot(
            Request::builder().method("POST").uri(format!("/api/v1/invitations/{}/accept", token))
                .header("X-User-Id", *member)
                .body(Body::empty()).unwrap()
        ).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
    }

    event_id
}

#[tokio::test]
async fn test_wish_claiming_rules() {
    let app = TestApp::new().await;
    let owner = app.register_user("Alice", "alice@example.com").await;
    let wisher = app.register_user("Bob", "bob@example.com").await;
    let third = app.register_user("Carol", "carol@example.com").await;
    let event_id = setup_event(&app, &owner, &[&wisher, &third]).await;

    // Bob wishes for a kettle
    let res = app.router.clone().oneshot(
        Request::builder().method("POST").uri(format!("/api/v1/events/{}/wishes", event_id))
            .header("X-User-Id", &wisher)
            .header("Content-Type", "application/json")
            .body(Body::from(json!({
                "title": "Electric kettle",
                "price_cents": 4500,
                "url": "https://shop.example.com/kettle"
            }).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let wish = parse_body(res).await;
    let wish_id = wish["id"].as_str().unwrap().to_string();
    assert!(wish["claimed_by"].is_null());

    // The wisher cannot claim their own wish
    let res = app.router.clone().oneshot(
        Request::builder().method("POST").uri(format!("/api/v1/wishes/{}/claim", wish_id))
            .header("X-User-Id", &wisher)
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    // Alice claims it
    let res = app.router.clone().oneshot(
        Request::builder().method("POST").uri(format!("/api/v1/wishes/{}/claim", wish_id))
            .header("X-User-Id", &owner)
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(parse_body(res).await["claimed_by"], owner.as_str());

    // A second claim conflicts
    let res = app.router.clone().oneshot(
        Request::builder().method("POST").uri(format!("/api/v1/wishes/{}/claim", wish_id))
            .header("X-User-Id", &third)
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::CONFLICT);

    // Carol sees who claimed; Bob must not
    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri(format!("/api/v1/events/{}/wishes", event_id))
            .header("X-User-Id", &third)
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    let wishes = parse_body(res).await;
    assert_eq!(wishes[0]["claimed_by"], owner.as_str());

    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri(format!("/api/v1/events/{}/wishes", event_id))
            .header("X-User-Id", &wisher)
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    let wishes = parse_body(res).await;
    assert!(wishes[0]["claimed_by"].is_null(), "claimer leaked to the wisher");

    // Only the claimer can release
    let res = app.router.clone().oneshot(
        Request::builder().method("POST").uri(format!("/api/v1/wishes/{}/unclaim", wish_id))
            .header("X-User-Id", &third)
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    let res = app.router.clone().oneshot(
        Request::builder().method("POST").uri(format!("/api/v1/wishes/{}/unclaim", wish_id))
            .header("X-User-Id", &owner)
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert!(parse_body(res).await["claimed_by"].is_null());
}

#[tokio::test]
async fn test_wish_edit_permissions() {
    let app = TestApp::new().await;
    let owner = app.register_user("Dave", "dave@example.com").await;
    let wisher = app.register_user("Erin", "erin@example.com").await;
    let event_id = setup_event(&app, &owner, &[&wisher]).await;

    let res = app.router.clone().oneshot(
        Request::builder().method("POST").uri(format!("/api/v1/events/{}/wishes", event_id))
            .header("X-User-Id", &wisher)
            .header("Content-Type", "application/json")
            .body(Body::from(json!({"title": "Board game"}).to_string())).unwrap()
    ).await.unwrap();
    let wish_id = parse_body(res).await["id"].as_str().unwrap().to_string();

    // Not the wisher: no edit, no delete
    let res = app.router.clone().oneshot(
        Request::builder().method("PUT").uri(format!("/api/v1/wishes/{}", wish_id))
            .header("X-User-Id", &owner)
            .header("Content-Type", "application/json")
            .body(Body::from(json!({"title": "Different game"}).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    let res = app.router.clone().oneshot(
        Request::builder().method("DELETE").uri(format!("/api/v1/wishes/{}", wish_id))
            .header("X-User-Id", &owner)
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    // The wisher edits and deletes
    let res = app.router.clone().oneshot(
        Request::builder().method("PUT").uri(format!("/api/v1/wishes/{}", wish_id))
            .header("X-User-Id", &wisher)
            .header("Content-Type", "application/json")
            .body(Body::from(json!({"title": "Catan", "price_cents": 3900}).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let updated = parse_body(res).await;
    assert_eq!(updated["title"], "Catan");
    assert_eq!(updated["price_cents"], 3900);

    let res = app.router.clone().oneshot(
        Request::builder().method("DELETE").uri(format!("/api/v1/wishes/{}", wish_id))
            .header("X-User-Id", &wisher)
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_outsiders_cannot_see_or_add_wishes() {
    let app = TestApp::new().await;
    let owner = app.register_user("Frank", "frank@example.com").await;
    let outsider = app.register_user("Grace", "grace@example.com").await;
    let event_id = setup_event(&app, &owner, &[]).await;

    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri(format!("/api/v1/events/{}/wishes", event_id))
            .header("X-User-Id", &outsider)
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    let res = app.router.clone().oneshot(
        Request::builder().method("POST").uri(format!("/api/v1/events/{}/wishes", event_id))
            .header("X-User-Id", &outsider)
            .header("Content-Type", "application/json")
            .body(Body::from(json!({"title": "Sneaky wish"}).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::FORBIDDEN);
}
