//! Authentication Middleware
//!
//! JWT validation middleware for the admin routes.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::application::services::auth_service::{decode_admin_token, AuthError};
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Authenticated admin extension
#[derive(Debug, Clone)]
pub struct AdminUser;

/// Authentication middleware that validates admin bearer tokens
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    // Extract Authorization header
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("Missing authorization header".into()))?;

    // Check for Bearer token
    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::Unauthorized("Invalid authorization header format".into()))?;

    // Decode and validate JWT
    decode_admin_token(token, &state.settings.jwt.secret).map_err(|e| match e {
        AuthError::TokenExpired => AppError::Unauthorized("Token expired".into()),
        _ => AppError::Unauthorized("Invalid token".into()),
    })?;

    // Mark the request as admin-authenticated
    request.extensions_mut().insert(AdminUser);

    // Continue to the next handler
    Ok(next.run(request).await)
}
