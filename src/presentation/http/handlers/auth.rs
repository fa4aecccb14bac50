//! Authentication Handlers

use axum::{extract::State, Json};

use crate::application::dto::request::LoginRequest;
use crate::application::dto::response::TokenResponse;
use crate::application::services::{AuthError, AuthService};
use crate::presentation::http::extractors::AppJson;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Exchange the admin password for a bearer token
pub async fn login(
    State(state): State<AppState>,
    AppJson(body): AppJson<LoginRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    let auth_service = AuthService::new(
        state.settings.admin.password.clone(),
        state.settings.jwt.clone(),
    );

    let token = auth_service.login(&body.password).map_err(|e| match e {
        AuthError::InvalidPassword => AppError::Unauthorized("Invalid password".into()),
        e => AppError::Internal(e.to_string()),
    })?;

    Ok(Json(TokenResponse {
        token: token.token,
        expires_in: token.expires_in,
        token_type: "Bearer".to_string(),
    }))
}
