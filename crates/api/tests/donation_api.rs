//! HTTP-level integration tests for the donation endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener, over an in-memory store.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::{body_bytes, body_json, delete, get, post_json, put_json, send};
use serde_json::{json, Value};

fn alice() -> Value {
    json!({
        "donor_name": "Alice",
        "donation_type": "food",
        "amount": 12,
        "donated_at": "2024-01-05",
    })
}

fn donation(name: &str, date: &str) -> Value {
    json!({
        "donor_name": name,
        "donation_type": "money",
        "amount": 5.5,
        "donated_at": date,
    })
}

// ---------------------------------------------------------------------------
// End-to-end scenario
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_list_update_delete_scenario() {
    let (_store, app) = common::memory_app();

    let response = post_json(app.clone(), "/api/donations", alice()).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    let id = created["id"].as_i64().unwrap();
    assert_eq!(created["donor_name"], "Alice");
    assert_eq!(created["donation_type"], "food");
    assert_eq!(created["amount"], 12.0);
    assert_eq!(created["donated_at"], "2024-01-05T00:00:00Z");
    assert!(created["created_at"].is_string());
    assert!(created["updated_at"].is_string());

    let response = get(app.clone(), "/api/donations").await;
    assert_eq!(response.status(), StatusCode::OK);
    let list = body_json(response).await;
    assert_eq!(list[0]["id"], id);

    let mut changed = alice();
    changed["amount"] = json!(20);
    let response = put_json(app.clone(), &format!("/api/donations/{id}"), changed).await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["id"], id);
    assert_eq!(updated["amount"], 20.0);
    assert_eq!(updated["created_at"], created["created_at"]);

    let response = delete(app.clone(), &format!("/api/donations/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(response).await.is_empty());

    let response = get(app, &format!("/api/donations/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Create / get
// ---------------------------------------------------------------------------

#[tokio::test]
async fn created_record_matches_submitted_fields() {
    let (_store, app) = common::memory_app();
    let body = json!({
        "donor_name": "  Bob  ",
        "donation_type": "clothing",
        "amount": 3,
        "donated_at": "2024-02-10T15:45:00+01:00",
    });
    let created = body_json(post_json(app.clone(), "/api/donations", body).await).await;
    let id = created["id"].as_i64().unwrap();

    let fetched = body_json(get(app, &format!("/api/donations/{id}")).await).await;
    assert_eq!(fetched["donor_name"], "Bob");
    assert_eq!(fetched["donation_type"], "clothing");
    assert_eq!(fetched["amount"], 3.0);
    assert_eq!(fetched["donated_at"], "2024-02-10T14:45:00Z");
}

#[tokio::test]
async fn get_missing_returns_404_with_generic_body() {
    let (_store, app) = common::memory_app();
    let response = get(app, "/api/donations/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Not found");
    assert_eq!(json["code"], "NOT_FOUND");
}

#[tokio::test]
async fn non_numeric_id_is_not_found() {
    let (_store, app) = common::memory_app();
    let response = get(app.clone(), "/api/donations/65f1c0ffee").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = delete(app, "/api/donations/not-an-id").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn invalid_payloads_are_rejected_without_touching_the_store() {
    let (store, app) = common::memory_app();

    let invalid = [
        json!({"donation_type": "food", "amount": 1, "donated_at": "2024-01-01"}),
        json!({"donor_name": "A", "donation_type": "cash", "amount": 1, "donated_at": "2024-01-01"}),
        json!({"donor_name": "A", "donation_type": "food", "amount": -1, "donated_at": "2024-01-01"}),
        json!({"donor_name": "A", "donation_type": "food", "amount": "NaN", "donated_at": "2024-01-01"}),
        json!({"donor_name": "A", "donation_type": "food", "amount": 1, "donated_at": "01/05/2024"}),
        json!({"donor_name": "A", "donation_type": "food", "amount": 1, "donated_at": "2024-02-31"}),
    ];

    for body in invalid {
        let response = post_json(app.clone(), "/api/donations", body.clone()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body {body}");
        let json = body_json(response).await;
        assert_eq!(json["error"], "Invalid input");
        assert_eq!(json["code"], "VALIDATION_ERROR");
        assert_eq!(json["details"].as_array().unwrap().len(), 1, "body {body}");
    }

    assert!(store.is_empty().await);
}

#[tokio::test]
async fn validation_details_name_every_field() {
    let (_store, app) = common::memory_app();
    let response = post_json(app, "/api/donations", json!({"amount": -4})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    let fields: Vec<&str> = json["details"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["donor_name", "donation_type", "amount", "donated_at"]);
}

#[tokio::test]
async fn malformed_json_is_a_bad_request() {
    let (store, app) = common::memory_app();
    let response = send(
        app,
        "POST",
        "/api/donations",
        Some("{\"donor_name\": ".to_string()),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
    assert!(store.is_empty().await);
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[tokio::test]
async fn update_missing_returns_404_and_leaves_store_unchanged() {
    let (store, app) = common::memory_app();
    post_json(app.clone(), "/api/donations", alice()).await;

    let response = put_json(app.clone(), "/api/donations/999", donation("Ghost", "2024-01-01")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    assert_eq!(store.len().await, 1);
    let list = body_json(get(app, "/api/donations").await).await;
    assert_eq!(list[0]["donor_name"], "Alice");
}

#[tokio::test]
async fn update_with_invalid_body_is_400_even_for_missing_id() {
    let (_store, app) = common::memory_app();
    let response = put_json(app, "/api/donations/999", json!({"donor_name": ""})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_with_invalid_body_does_not_mutate() {
    let (_store, app) = common::memory_app();
    let created = body_json(post_json(app.clone(), "/api/donations", alice()).await).await;
    let id = created["id"].as_i64().unwrap();

    let mut bad = alice();
    bad["amount"] = json!(-20);
    let response = put_json(app.clone(), &format!("/api/donations/{id}"), bad).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let fetched = body_json(get(app, &format!("/api/donations/{id}")).await).await;
    assert_eq!(fetched["amount"], 12.0);
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[tokio::test]
async fn second_delete_returns_404() {
    let (_store, app) = common::memory_app();
    let created = body_json(post_json(app.clone(), "/api/donations", alice()).await).await;
    let uri = format!("/api/donations/{}", created["id"]);

    assert_eq!(delete(app.clone(), &uri).await.status(), StatusCode::NO_CONTENT);
    assert_eq!(delete(app, &uri).await.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// List ordering
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_is_ordered_by_date_then_newest_id() {
    let (_store, app) = common::memory_app();
    for (name, date) in [
        ("mid-first", "2024-03-01"),
        ("oldest", "2023-12-31"),
        ("newest", "2024-05-01T08:00:00Z"),
        ("mid-second", "2024-03-01"),
    ] {
        let response = post_json(app.clone(), "/api/donations", donation(name, date)).await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let list = body_json(get(app, "/api/donations").await).await;
    let names: Vec<&str> = list
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["donor_name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["newest", "mid-second", "mid-first", "oldest"]);
}

#[tokio::test]
async fn empty_store_lists_empty_array() {
    let (_store, app) = common::memory_app();
    let response = get(app, "/api/donations").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

// ---------------------------------------------------------------------------
// Store faults
// ---------------------------------------------------------------------------

#[tokio::test]
async fn store_faults_surface_as_opaque_500() {
    let app = common::build_test_app(Arc::new(common::FailingStore));

    let responses = [
        get(app.clone(), "/api/donations").await,
        get(app.clone(), "/api/donations/1").await,
        post_json(app.clone(), "/api/donations", alice()).await,
        put_json(app.clone(), "/api/donations/1", alice()).await,
        delete(app, "/api/donations/1").await,
    ];

    for response in responses {
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = body_bytes(response).await;
        let text = String::from_utf8(bytes).unwrap();
        assert!(!text.contains("db-internal"), "leaked: {text}");
        let json: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json["error"], "Server error");
    }
}

#[tokio::test]
async fn validation_still_runs_before_a_failing_store() {
    let app = common::build_test_app(Arc::new(common::FailingStore));
    let response = post_json(app, "/api/donations", json!({})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Middleware
// ---------------------------------------------------------------------------

#[tokio::test]
async fn responses_carry_a_request_id() {
    let (_store, app) = common::memory_app();
    let response = get(app, "/api/donations").await;
    assert!(response.headers().contains_key("x-request-id"));
}
