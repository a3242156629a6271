use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

use carelog_domain::id::PhysicianId;

use crate::domain::repository::PhysicianRepository;
use crate::error::RecordsServiceError;

/// `typ` claim value for access tokens.
pub const TOKEN_TYPE_ACCESS: &str = "access";

/// `typ` claim value for refresh tokens.
pub const TOKEN_TYPE_REFRESH: &str = "refresh";

/// JWT claims for both access and refresh tokens. The `typ` claim keeps a
/// refresh token from ever being accepted where an access token is required.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String,
    pub typ: String,
    pub exp: u64,
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock before UNIX epoch")
        .as_secs()
}

fn issue_token(
    physician_id: PhysicianId,
    typ: &str,
    ttl_secs: u64,
    secret: &str,
) -> Result<(String, u64), RecordsServiceError> {
    let exp = now_secs() + ttl_secs;
    let claims = TokenClaims {
        sub: physician_id.to_string(),
        typ: typ.to_owned(),
        exp,
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| RecordsServiceError::Internal(e.into()))?;
    Ok((token, exp))
}

pub fn issue_access_token(
    physician_id: PhysicianId,
    ttl_secs: u64,
    secret: &str,
) -> Result<(String, u64), RecordsServiceError> {
    issue_token(physician_id, TOKEN_TYPE_ACCESS, ttl_secs, secret)
}

pub fn issue_refresh_token(
    physician_id: PhysicianId,
    ttl_secs: u64,
    secret: &str,
) -> Result<String, RecordsServiceError> {
    issue_token(physician_id, TOKEN_TYPE_REFRESH, ttl_secs, secret).map(|(token, _)| token)
}

/// Access + refresh pair handed out by sign-up and login.
#[derive(Debug)]
pub struct TokenPair {
    pub access_token: String,
    pub access_token_exp: u64,
    pub refresh_token: String,
}

pub fn issue_token_pair(
    physician_id: PhysicianId,
    access_ttl_secs: u64,
    refresh_ttl_secs: u64,
    secret: &str,
) -> Result<TokenPair, RecordsServiceError> {
    let (access_token, access_token_exp) =
        issue_access_token(physician_id, access_ttl_secs, secret)?;
    let refresh_token = issue_refresh_token(physician_id, refresh_ttl_secs, secret)?;
    Ok(TokenPair {
        access_token,
        access_token_exp,
        refresh_token,
    })
}

/// Decode and validate signature + expiry, returning raw claims.
/// HS256, exp checked, required claims: `exp` + `sub`.
fn decode_token(token: &str, secret: &str) -> Result<TokenClaims, ()> {
    let mut validation = Validation::new(jsonwebtoken::Algorithm::HS256);
    validation.validate_exp = true;
    validation.required_spec_claims.clear();
    validation.set_required_spec_claims(&["exp", "sub"]);

    decode::<TokenClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|_| ())
}

fn subject(claims: &TokenClaims, expected_typ: &str) -> Result<PhysicianId, ()> {
    if claims.typ != expected_typ {
        return Err(());
    }
    claims.sub.parse::<PhysicianId>().map_err(|_| ())
}

/// Validate an access token and return the physician it encodes.
/// Rejects refresh tokens presented as access tokens.
pub fn validate_access_token(
    token: &str,
    secret: &str,
) -> Result<PhysicianId, RecordsServiceError> {
    decode_token(token, secret)
        .and_then(|claims| subject(&claims, TOKEN_TYPE_ACCESS))
        .map_err(|_| RecordsServiceError::InvalidToken)
}

/// Validate a refresh token and return the physician it encodes.
pub fn validate_refresh_token(
    token: &str,
    secret: &str,
) -> Result<PhysicianId, RecordsServiceError> {
    decode_token(token, secret)
        .and_then(|claims| subject(&claims, TOKEN_TYPE_REFRESH))
        .map_err(|_| RecordsServiceError::InvalidRefreshToken)
}

// ── RefreshToken ─────────────────────────────────────────────────────────────

#[derive(Debug)]
pub struct RefreshTokenOutput {
    pub access_token: String,
    pub access_token_exp: u64,
}

pub struct RefreshTokenUseCase<R: PhysicianRepository> {
    pub repo: R,
    pub jwt_secret: String,
    pub access_token_ttl_secs: u64,
}

impl<R: PhysicianRepository> RefreshTokenUseCase<R> {
    pub async fn execute(
        &self,
        refresh_token_value: &str,
    ) -> Result<RefreshTokenOutput, RecordsServiceError> {
        let physician_id = validate_refresh_token(refresh_token_value, &self.jwt_secret)?;

        // The subject must still resolve to an active account — a deactivated
        // physician cannot mint fresh access tokens.
        let physician = self
            .repo
            .find_by_id(physician_id)
            .await?
            .filter(|p| p.is_active)
            .ok_or(RecordsServiceError::InvalidRefreshToken)?;

        let (access_token, access_token_exp) =
            issue_access_token(physician.id, self.access_token_ttl_secs, &self.jwt_secret)?;

        Ok(RefreshTokenOutput {
            access_token,
            access_token_exp,
        })
    }
}
