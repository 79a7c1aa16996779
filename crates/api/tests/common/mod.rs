#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use donations_api::config::{ServerConfig, StoreBackend};
use donations_api::router::build_app_router;
use donations_api::state::AppState;
use donations_core::donation::{Donation, NewDonation};
use donations_core::types::DbId;
use donations_db::{DonationStore, MemoryDonationStore, StoreError};
use http_body_util::BodyExt;
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        store_backend: StoreBackend::Memory,
        database_url: None,
        static_dir: None,
    }
}

/// Build the full application router over the given store.
pub fn build_test_app(store: Arc<dyn DonationStore>) -> Router {
    let config = test_config();
    let state = AppState {
        store,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Fresh in-memory store plus a router over it. Keep the store to inspect
/// it after requests.
pub fn memory_app() -> (Arc<MemoryDonationStore>, Router) {
    let store = Arc::new(MemoryDonationStore::new());
    let app = build_test_app(store.clone());
    (store, app)
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, "GET", uri, None).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, "DELETE", uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, "POST", uri, Some(body.to_string())).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, "PUT", uri, Some(body.to_string())).await
}

/// Send a raw body with a JSON content type.
pub async fn send(app: Router, method: &str, uri: &str, body: Option<String>) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body)),
        None => builder.body(Body::empty()),
    }
    .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

/// A store whose every operation fails, for exercising the 500 path.
pub struct FailingStore;

#[async_trait]
impl DonationStore for FailingStore {
    async fn list(&self) -> Result<Vec<Donation>, StoreError> {
        Err(fault())
    }

    async fn find_by_id(&self, _id: DbId) -> Result<Option<Donation>, StoreError> {
        Err(fault())
    }

    async fn create(&self, _input: &NewDonation) -> Result<Donation, StoreError> {
        Err(fault())
    }

    async fn update(
        &self,
        _id: DbId,
        _input: &NewDonation,
    ) -> Result<Option<Donation>, StoreError> {
        Err(fault())
    }

    async fn delete(&self, _id: DbId) -> Result<bool, StoreError> {
        Err(fault())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Err(fault())
    }
}

fn fault() -> StoreError {
    StoreError::Database(sqlx::Error::Configuration(
        "connection refused to db-internal:5432".into(),
    ))
}
