use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Records service domain error variants.
///
/// Four terminal kinds are distinguishable to callers: validation (400),
/// authentication (401), ownership (403), and missing record (404).
/// Persistence failures surface as `Internal` with nothing leaked in the body.
#[derive(Debug, thiserror::Error)]
pub enum RecordsServiceError {
    #[error("patient not found")]
    PatientNotFound,
    #[error("invalid email")]
    InvalidEmail,
    #[error("missing data")]
    MissingData,
    #[error("email already in use")]
    EmailTaken,
    #[error("date of birth is in the future")]
    DobInFuture,
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("invalid token")]
    InvalidToken,
    #[error("invalid refresh token")]
    InvalidRefreshToken,
    #[error("not the owning physician")]
    NotOwner,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl RecordsServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::PatientNotFound => "PATIENT_NOT_FOUND",
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::MissingData => "MISSING_DATA",
            Self::EmailTaken => "EMAIL_TAKEN",
            Self::DobInFuture => "DOB_IN_FUTURE",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::InvalidToken => "INVALID_TOKEN",
            Self::InvalidRefreshToken => "INVALID_REFRESH_TOKEN",
            Self::NotOwner => "NOT_OWNER",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for RecordsServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::InvalidEmail | Self::MissingData | Self::EmailTaken | Self::DobInFuture => {
                StatusCode::BAD_REQUEST
            }
            Self::InvalidCredentials | Self::InvalidToken | Self::InvalidRefreshToken => {
                StatusCode::UNAUTHORIZED
            }
            Self::NotOwner => StatusCode::FORBIDDEN,
            Self::PatientNotFound => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // Log 500s only — the tower-http TraceLayer already records
        // method/uri/status for all requests. 4xx are expected client errors;
        // logging them here would be noise. Internal errors need the anyhow
        // chain logged so the root cause is traceable.
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %e, kind = "INTERNAL", "internal error");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
