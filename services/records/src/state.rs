use sea_orm::DatabaseConnection;

use crate::infra::db::{DbPatientRepository, DbPhysicianRepository};
use crate::infra::mailer::LogMailer;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub jwt_secret: String,
    pub access_token_ttl_secs: u64,
    pub refresh_token_ttl_secs: u64,
    pub mailer: LogMailer,
}

impl AppState {
    pub fn physician_repo(&self) -> DbPhysicianRepository {
        DbPhysicianRepository {
            db: self.db.clone(),
        }
    }

    pub fn patient_repo(&self) -> DbPatientRepository {
        DbPatientRepository {
            db: self.db.clone(),
        }
    }
}
