//! Handlers for the `/donations` resource.
//!
//! Bodies are taken as raw JSON and run through
//! [`validate_donation`] before any store call, so a malformed payload can
//! never reach persistence.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use donations_core::donation::{Donation, NewDonation};
use donations_core::error::CoreError;
use donations_core::types::DbId;
use donations_core::validation::validate_donation;
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

const ENTITY: &str = "Donation";

/// Parse a path identifier. Text that is not an ID names no donation.
fn parse_id(raw: &str) -> AppResult<DbId> {
    raw.parse::<DbId>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| AppError::Core(CoreError::not_found(ENTITY, raw)))
}

fn validated(payload: Result<Json<Value>, JsonRejection>) -> AppResult<NewDonation> {
    let Json(body) = payload?;
    validate_donation(&body).map_err(|violations| {
        tracing::debug!(count = violations.len(), "Rejected donation payload");
        AppError::Core(CoreError::Validation(violations))
    })
}

/// GET /api/donations
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Donation>>> {
    let donations = state.store.list().await?;
    Ok(Json(donations))
}

/// GET /api/donations/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<Donation>> {
    let id = parse_id(&raw_id)?;
    let donation = state
        .store
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found(ENTITY, id)))?;
    Ok(Json(donation))
}

/// POST /api/donations
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Donation>)> {
    let input = validated(payload)?;
    let donation = state.store.create(&input).await?;
    tracing::info!(donation_id = donation.id, donation_type = %donation.donation_type, "Donation created");
    Ok((StatusCode::CREATED, Json(donation)))
}

/// PUT /api/donations/{id}
///
/// Replaces every user field. The body is validated before the ID is
/// looked up, so an invalid body on a missing ID is a 400.
pub async fn update(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<Json<Donation>> {
    let input = validated(payload)?;
    let id = parse_id(&raw_id)?;
    let donation = state
        .store
        .update(id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found(ENTITY, id)))?;
    tracing::info!(donation_id = id, "Donation updated");
    Ok(Json(donation))
}

/// DELETE /api/donations/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<StatusCode> {
    let id = parse_id(&raw_id)?;
    if state.store.delete(id).await? {
        tracing::info!(donation_id = id, "Donation deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::not_found(ENTITY, id)))
    }
}
