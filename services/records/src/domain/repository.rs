#![allow(async_fn_in_trait)]

use chrono::{DateTime, Utc};

use carelog_domain::id::{PatientId, PhysicianId};

use crate::domain::types::{NewPhysician, Patient, PatientDraft, PatientPatch, Physician};
use crate::error::RecordsServiceError;

/// Repository for physician accounts.
pub trait PhysicianRepository: Send + Sync {
    async fn find_by_id(&self, id: PhysicianId) -> Result<Option<Physician>, RecordsServiceError>;

    /// Look up by normalized email.
    async fn find_by_email(&self, email: &str) -> Result<Option<Physician>, RecordsServiceError>;

    /// Insert a new account (active, non-admin). Surfaces `EmailTaken` when
    /// the unique email constraint trips.
    async fn create(&self, new: &NewPhysician) -> Result<Physician, RecordsServiceError>;

    /// Stamp the last successful login.
    async fn record_login(
        &self,
        id: PhysicianId,
        at: DateTime<Utc>,
    ) -> Result<(), RecordsServiceError>;
}

/// Repository for patient records. Every mutation is scoped by the owning
/// physician in the statement itself, so an ownership check can never be
/// separated from the write it guards.
pub trait PatientRepository: Send + Sync {
    /// Unscoped lookup — callers distinguish "no such record" from
    /// "owned by someone else" before running the policy check.
    async fn find_by_id(&self, id: PatientId) -> Result<Option<Patient>, RecordsServiceError>;

    /// All records owned by `owner`, in insertion order.
    async fn list_by_physician(
        &self,
        owner: PhysicianId,
    ) -> Result<Vec<Patient>, RecordsServiceError>;

    /// Persist a draft with `physician_id = owner`. Surfaces `EmailTaken` on
    /// a duplicate patient email.
    async fn create(
        &self,
        owner: PhysicianId,
        draft: &PatientDraft,
    ) -> Result<Patient, RecordsServiceError>;

    /// Owner-scoped partial update, applied atomically. `Ok(None)` when no
    /// row matched both id and owner (deleted concurrently).
    async fn update_scoped(
        &self,
        id: PatientId,
        owner: PhysicianId,
        patch: &PatientPatch,
    ) -> Result<Option<Patient>, RecordsServiceError>;

    /// Owner-scoped delete. Returns `true` when a row was deleted.
    async fn delete_scoped(
        &self,
        id: PatientId,
        owner: PhysicianId,
    ) -> Result<bool, RecordsServiceError>;
}

/// Port for outbound patient-info mail. Implementations must be cheap to
/// clone; sends are spawned off the request path, hence the `Send` bound on
/// the returned future.
pub trait PatientMailer: Send + Sync {
    fn send_patient_info(
        &self,
        patient: Patient,
    ) -> impl std::future::Future<Output = Result<(), anyhow::Error>> + Send;
}
