//! REST calls against `/api/donations`.

use async_trait::async_trait;
use donations_core::donation::Donation;
use donations_core::types::DbId;
use reqwest::Response;
use serde::Deserialize;

use crate::error::ClientError;
use crate::form::DonationPayload;

/// The operations the UI needs from the server.
#[async_trait]
pub trait DonationsBackend: Send + Sync {
    async fn list(&self) -> Result<Vec<Donation>, ClientError>;

    async fn create(&self, payload: &DonationPayload) -> Result<Donation, ClientError>;

    async fn update(&self, id: DbId, payload: &DonationPayload)
        -> Result<Donation, ClientError>;

    async fn delete(&self, id: DbId) -> Result<(), ClientError>;
}

/// Error envelope returned by the API. Only `error` is read.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: Option<String>,
}

/// Decode an error body, yielding `None` when it is absent or not JSON.
pub async fn safe_json(response: Response) -> Option<ErrorBody> {
    response.json::<ErrorBody>().await.ok()
}

/// [`DonationsBackend`] over HTTP.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    http: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    /// `base_url` is the server root, e.g. `http://localhost:3000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    fn url(&self, id: Option<DbId>) -> String {
        match id {
            Some(id) => format!("{}/api/donations/{id}", self.base_url),
            None => format!("{}/api/donations", self.base_url),
        }
    }
}

/// Turn a non-success response into [`ClientError::Api`], preferring the
/// server's `error` message over `fallback`.
async fn api_error(response: Response, fallback: &str) -> ClientError {
    let status = response.status().as_u16();
    let message = safe_json(response)
        .await
        .and_then(|body| body.error)
        .unwrap_or_else(|| fallback.to_string());
    tracing::debug!(status, %message, "API request failed");
    ClientError::Api { status, message }
}

fn transport(context: &'static str) -> impl FnOnce(reqwest::Error) -> ClientError {
    move |source| ClientError::Transport { context, source }
}

#[async_trait]
impl DonationsBackend for HttpBackend {
    async fn list(&self) -> Result<Vec<Donation>, ClientError> {
        const FAILED: &str = "Failed to fetch donations";
        let response = self
            .http
            .get(self.url(None))
            .send()
            .await
            .map_err(transport(FAILED))?;
        if !response.status().is_success() {
            return Err(ClientError::Api {
                status: response.status().as_u16(),
                message: FAILED.to_string(),
            });
        }
        response.json().await.map_err(transport(FAILED))
    }

    async fn create(&self, payload: &DonationPayload) -> Result<Donation, ClientError> {
        const FAILED: &str = "Failed to create donation";
        let response = self
            .http
            .post(self.url(None))
            .json(payload)
            .send()
            .await
            .map_err(transport(FAILED))?;
        if !response.status().is_success() {
            return Err(api_error(response, FAILED).await);
        }
        response.json().await.map_err(transport(FAILED))
    }

    async fn update(
        &self,
        id: DbId,
        payload: &DonationPayload,
    ) -> Result<Donation, ClientError> {
        const FAILED: &str = "Failed to update donation";
        let response = self
            .http
            .put(self.url(Some(id)))
            .json(payload)
            .send()
            .await
            .map_err(transport(FAILED))?;
        if !response.status().is_success() {
            return Err(api_error(response, FAILED).await);
        }
        response.json().await.map_err(transport(FAILED))
    }

    async fn delete(&self, id: DbId) -> Result<(), ClientError> {
        const FAILED: &str = "Failed to delete donation";
        let response = self
            .http
            .delete(self.url(Some(id)))
            .send()
            .await
            .map_err(transport(FAILED))?;
        if !response.status().is_success() {
            return Err(api_error(response, FAILED).await);
        }
        Ok(())
    }
}
