use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use crate::error::RecordsServiceError;
use crate::identity::AuthPhysician;
use crate::state::AppState;
use crate::usecase::auth::{LoginInput, LoginUseCase, SignUpInput, SignUpUseCase};
use crate::usecase::token::RefreshTokenUseCase;

// ── POST /signup ─────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct SignUpRequest {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct TokenPairResponse {
    pub refresh: String,
    pub access: String,
}

pub async fn signup(
    State(state): State<AppState>,
    Json(body): Json<SignUpRequest>,
) -> Result<(StatusCode, Json<TokenPairResponse>), RecordsServiceError> {
    let usecase = SignUpUseCase {
        repo: state.physician_repo(),
        jwt_secret: state.jwt_secret.clone(),
        access_token_ttl_secs: state.access_token_ttl_secs,
        refresh_token_ttl_secs: state.refresh_token_ttl_secs,
    };

    let out = usecase
        .execute(SignUpInput {
            email: body.email,
            first_name: body.first_name,
            last_name: body.last_name,
            password: body.password,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(TokenPairResponse {
            refresh: out.tokens.refresh_token,
            access: out.tokens.access_token,
        }),
    ))
}

// ── POST /login ──────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub refresh: String,
    pub access: String,
    pub message: String,
}

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, RecordsServiceError> {
    let usecase = LoginUseCase {
        repo: state.physician_repo(),
        jwt_secret: state.jwt_secret.clone(),
        access_token_ttl_secs: state.access_token_ttl_secs,
        refresh_token_ttl_secs: state.refresh_token_ttl_secs,
    };

    let out = usecase
        .execute(LoginInput {
            email: body.email,
            password: body.password,
        })
        .await?;

    Ok(Json(LoginResponse {
        refresh: out.tokens.refresh_token,
        access: out.tokens.access_token,
        message: "Login Successful".to_owned(),
    }))
}

// ── GET /physician/info ──────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct PhysicianInfoResponse {
    pub first_name: String,
    pub last_name: String,
}

pub async fn physician_info(
    AuthPhysician(physician): AuthPhysician,
) -> Json<PhysicianInfoResponse> {
    Json(PhysicianInfoResponse {
        first_name: physician.first_name,
        last_name: physician.last_name,
    })
}

// ── POST /api/token/refresh ──────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct RefreshRequest {
    pub refresh: String,
}

#[derive(Serialize)]
pub struct RefreshResponse {
    pub access: String,
}

pub async fn refresh_token(
    State(state): State<AppState>,
    Json(body): Json<RefreshRequest>,
) -> Result<Json<RefreshResponse>, RecordsServiceError> {
    let usecase = RefreshTokenUseCase {
        repo: state.physician_repo(),
        jwt_secret: state.jwt_secret.clone(),
        access_token_ttl_secs: state.access_token_ttl_secs,
    };

    let out = usecase.execute(&body.refresh).await?;

    Ok(Json(RefreshResponse {
        access: out.access_token,
    }))
}
