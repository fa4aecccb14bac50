//! RSVP Handlers
//!
//! The OSA submission endpoint and the admin guest listing.

use std::sync::Arc;

use axum::{extract::State, Json};
use validator::Validate;

use crate::application::dto::request::SubmitRequest;
use crate::application::dto::response::{GuestListResponse, MessageResponse};
use crate::application::services::{RsvpError, RsvpService, RsvpServiceImpl, Submission};
use crate::infrastructure::repositories::PgRsvpRepository;
use crate::presentation::http::extractors::AppJson;
use crate::shared::error::AppError;
use crate::shared::validation::validation_error;
use crate::startup::AppState;

/// Accept an OSA submission
///
/// Validates the submission as a unit before any side effect; on
/// success one party plus all its guests are stored atomically while
/// confirmation mail goes out per guest.
pub async fn submit(
    State(state): State<AppState>,
    AppJson(body): AppJson<SubmitRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    // Validate request
    body.validate().map_err(validation_error)?;
    let submission = Submission::from(body);

    // Create service
    let repo = Arc::new(PgRsvpRepository::new(state.db.clone()));
    let service = RsvpServiceImpl::new(repo, state.notifier.clone());

    // Persist and notify
    service.submit(submission).await.map_err(map_rsvp_error)?;

    Ok(Json(MessageResponse {
        message: "Tack för din OSA!".to_string(),
    }))
}

/// Admin guest listing (requires bearer token)
pub async fn list_guests(
    State(state): State<AppState>,
) -> Result<Json<GuestListResponse>, AppError> {
    let repo = Arc::new(PgRsvpRepository::new(state.db.clone()));
    let service = RsvpServiceImpl::new(repo, state.notifier.clone());

    let guests = service.list_guests().await.map_err(map_rsvp_error)?;

    Ok(Json(GuestListResponse::from_guests(guests)))
}

fn map_rsvp_error(e: RsvpError) -> AppError {
    match e {
        RsvpError::Persistence(err) => err,
        RsvpError::Notification { failed, total } => AppError::Internal(format!(
            "Failed to send {} of {} confirmation emails",
            failed, total
        )),
    }
}
