use chrono::Utc;

use crate::domain::repository::PhysicianRepository;
use crate::domain::types::{NewPhysician, Physician, normalize_email, validate_email};
use crate::error::RecordsServiceError;
use crate::password::{hash_password, verify_password};
use crate::usecase::token::{TokenPair, issue_token_pair};

// ── SignUp ───────────────────────────────────────────────────────────────────

pub struct SignUpInput {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
}

#[derive(Debug)]
pub struct SignUpOutput {
    pub physician: Physician,
    pub tokens: TokenPair,
}

pub struct SignUpUseCase<R: PhysicianRepository> {
    pub repo: R,
    pub jwt_secret: String,
    pub access_token_ttl_secs: u64,
    pub refresh_token_ttl_secs: u64,
}

impl<R: PhysicianRepository> SignUpUseCase<R> {
    pub async fn execute(&self, input: SignUpInput) -> Result<SignUpOutput, RecordsServiceError> {
        let email = normalize_email(&input.email);
        if email.is_empty()
            || input.first_name.trim().is_empty()
            || input.last_name.trim().is_empty()
            || input.password.is_empty()
        {
            return Err(RecordsServiceError::MissingData);
        }
        if !validate_email(&email) {
            return Err(RecordsServiceError::InvalidEmail);
        }
        // Pre-check so a duplicate fails as validation; the unique constraint
        // behind `create` still catches a concurrent registration.
        if self.repo.find_by_email(&email).await?.is_some() {
            return Err(RecordsServiceError::EmailTaken);
        }

        let password_hash = hash_password(&input.password)?;
        let physician = self
            .repo
            .create(&NewPhysician {
                email,
                password_hash,
                first_name: input.first_name,
                last_name: input.last_name,
            })
            .await?;

        tracing::info!(physician = %physician.id, "new physician signed up");

        let tokens = issue_token_pair(
            physician.id,
            self.access_token_ttl_secs,
            self.refresh_token_ttl_secs,
            &self.jwt_secret,
        )?;

        Ok(SignUpOutput { physician, tokens })
    }
}

// ── Login ────────────────────────────────────────────────────────────────────

pub struct LoginInput {
    pub email: String,
    pub password: String,
}

#[derive(Debug)]
pub struct LoginOutput {
    pub physician: Physician,
    pub tokens: TokenPair,
}

pub struct LoginUseCase<R: PhysicianRepository> {
    pub repo: R,
    pub jwt_secret: String,
    pub access_token_ttl_secs: u64,
    pub refresh_token_ttl_secs: u64,
}

impl<R: PhysicianRepository> LoginUseCase<R> {
    /// Unknown email, deactivated account, and wrong password all collapse to
    /// `InvalidCredentials` — the caller cannot probe which emails exist.
    pub async fn execute(&self, input: LoginInput) -> Result<LoginOutput, RecordsServiceError> {
        let email = normalize_email(&input.email);

        let physician = self
            .repo
            .find_by_email(&email)
            .await?
            .filter(|p| p.is_active)
            .ok_or(RecordsServiceError::InvalidCredentials)?;

        if !verify_password(&input.password, &physician.password_hash)? {
            return Err(RecordsServiceError::InvalidCredentials);
        }

        self.repo.record_login(physician.id, Utc::now()).await?;

        let tokens = issue_token_pair(
            physician.id,
            self.access_token_ttl_secs,
            self.refresh_token_ttl_secs,
            &self.jwt_secret,
        )?;

        Ok(LoginOutput { physician, tokens })
    }
}
