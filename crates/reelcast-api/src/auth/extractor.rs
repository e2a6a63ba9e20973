//! Authenticated-user request extractor.

use crate::auth::jwt::bearer_token;
use crate::error::HttpAppError;
use crate::state::AppState;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use std::sync::Arc;
use uuid::Uuid;

/// The authenticated caller, resolved from the bearer token.
///
/// Works as an extractor alongside `Multipart` because it only touches
/// request parts, never the body.
#[derive(Debug, Clone, Copy)]
pub struct UserContext {
    pub user_id: Uuid,
}

impl FromRequestParts<Arc<AppState>> for UserContext {
    type Rejection = HttpAppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers)?;
        let claims = state.jwt.validate_token(token)?;
        Ok(UserContext {
            user_id: claims.sub,
        })
    }
}
