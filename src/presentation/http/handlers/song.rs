//! Song Suggestion Handlers

use std::sync::Arc;

use axum::{extract::State, Json};

use crate::application::dto::request::SongRequest;
use crate::application::dto::response::{MessageResponse, SongListResponse};
use crate::infrastructure::repositories::{PgSongRepository, SongRepository};
use crate::presentation::http::extractors::AppJson;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Accept a song suggestion
///
/// Best effort: a failed insert is logged and the caller still gets a
/// 200, matching the public form's fire-and-forget behavior.
pub async fn suggest_song(
    State(state): State<AppState>,
    AppJson(body): AppJson<SongRequest>,
) -> Json<MessageResponse> {
    let repo = PgSongRepository::new(state.db.clone());

    if let Err(e) = repo.add_song(&body.data.song).await {
        tracing::warn!("Failed to store song suggestion: {}", e);
    }

    Json(MessageResponse {
        message: "Tack för ditt låtförslag!".to_string(),
    })
}

/// Admin song listing (requires bearer token)
pub async fn list_songs(State(state): State<AppState>) -> Result<Json<SongListResponse>, AppError> {
    let repo = Arc::new(PgSongRepository::new(state.db.clone()));

    let songs = repo.list_songs().await?;

    Ok(Json(SongListResponse {
        songs: songs.into_iter().map(Into::into).collect(),
    }))
}
