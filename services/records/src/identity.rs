//! Bearer-token identity extractor.
//!
//! Resolves `Authorization: Bearer <jwt>` to an active physician before any
//! handler logic runs. Every patient-scoped handler takes [`AuthPhysician`]
//! as its first argument, so an unauthenticated request fails with 401
//! before the authorization policy is even consulted.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use crate::domain::repository::PhysicianRepository as _;
use crate::domain::types::Physician;
use crate::error::RecordsServiceError;
use crate::state::AppState;
use crate::usecase::token::validate_access_token;

/// The authenticated physician making the request.
#[derive(Debug, Clone)]
pub struct AuthPhysician(pub Physician);

fn bearer_token(parts: &Parts) -> Option<String> {
    let value = parts.headers.get(AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?;
    if token.is_empty() {
        return None;
    }
    Some(token.to_owned())
}

impl FromRequestParts<AppState> for AuthPhysician {
    type Rejection = RecordsServiceError;

    // axum-core 0.5 defines this as `fn -> impl Future + Send` (not `async fn`).
    // In Rust 1.82+ precise capturing, `async fn` captures lifetimes differently,
    // causing E0195. Fix: extract values synchronously, return a 'static async move block.
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let token = bearer_token(parts);
        let state = state.clone();

        async move {
            let token = token.ok_or(RecordsServiceError::InvalidToken)?;
            let physician_id = validate_access_token(&token, &state.jwt_secret)?;

            // A token for a deleted or deactivated account authenticates nothing.
            let physician = state
                .physician_repo()
                .find_by_id(physician_id)
                .await?
                .filter(|p| p.is_active)
                .ok_or(RecordsServiceError::InvalidToken)?;

            Ok(Self(physician))
        }
    }
}
