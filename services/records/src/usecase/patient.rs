use chrono::Utc;

use carelog_domain::id::{PatientId, PhysicianId};
use carelog_domain::policy::{PatientAction, authorize};

use crate::domain::repository::{PatientMailer, PatientRepository};
use crate::domain::types::{Patient, PatientDraft, PatientPatch, normalize_email, validate_email};
use crate::error::RecordsServiceError;

fn check_name(name: &str) -> Result<(), RecordsServiceError> {
    if name.trim().is_empty() {
        return Err(RecordsServiceError::MissingData);
    }
    Ok(())
}

fn check_email(email: &str) -> Result<(), RecordsServiceError> {
    if !validate_email(email) {
        return Err(RecordsServiceError::InvalidEmail);
    }
    Ok(())
}

fn check_dob(dob: chrono::NaiveDate) -> Result<(), RecordsServiceError> {
    if dob > Utc::now().date_naive() {
        return Err(RecordsServiceError::DobInFuture);
    }
    Ok(())
}

// ── CreatePatient ────────────────────────────────────────────────────────────

pub struct CreatePatientUseCase<R: PatientRepository> {
    pub repo: R,
}

impl<R: PatientRepository> CreatePatientUseCase<R> {
    /// The persisted owner is always `owner` — [`PatientDraft`] cannot carry
    /// one, and any owner field a client sent was dropped at deserialization.
    pub async fn execute(
        &self,
        owner: PhysicianId,
        mut draft: PatientDraft,
    ) -> Result<Patient, RecordsServiceError> {
        check_name(&draft.first_name)?;
        check_name(&draft.last_name)?;
        draft.email = normalize_email(&draft.email);
        check_email(&draft.email)?;
        check_dob(draft.dob)?;

        let patient = self.repo.create(owner, &draft).await?;
        tracing::info!(patient = %patient.id, physician = %owner, "new patient created");
        Ok(patient)
    }
}

// ── ListPatients ─────────────────────────────────────────────────────────────

pub struct ListPatientsUseCase<R: PatientRepository> {
    pub repo: R,
}

impl<R: PatientRepository> ListPatientsUseCase<R> {
    pub async fn execute(&self, owner: PhysicianId) -> Result<Vec<Patient>, RecordsServiceError> {
        self.repo.list_by_physician(owner).await
    }
}

// ── GetPatient ───────────────────────────────────────────────────────────────

pub struct GetPatientUseCase<R: PatientRepository> {
    pub repo: R,
}

impl<R: PatientRepository> GetPatientUseCase<R> {
    pub async fn execute(
        &self,
        requester: PhysicianId,
        id: PatientId,
    ) -> Result<Patient, RecordsServiceError> {
        let patient = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(RecordsServiceError::PatientNotFound)?;
        authorize(requester, patient.physician_id, PatientAction::Read)
            .map_err(|_| RecordsServiceError::NotOwner)?;
        Ok(patient)
    }
}

// ── UpdatePatient ────────────────────────────────────────────────────────────

pub struct UpdatePatientUseCase<R: PatientRepository> {
    pub repo: R,
}

impl<R: PatientRepository> UpdatePatientUseCase<R> {
    pub async fn execute(
        &self,
        requester: PhysicianId,
        id: PatientId,
        mut patch: PatientPatch,
    ) -> Result<Patient, RecordsServiceError> {
        if patch.is_empty() {
            return Err(RecordsServiceError::MissingData);
        }
        if let Some(ref first_name) = patch.first_name {
            check_name(first_name)?;
        }
        if let Some(ref last_name) = patch.last_name {
            check_name(last_name)?;
        }
        if let Some(email) = patch.email.take() {
            let email = normalize_email(&email);
            check_email(&email)?;
            patch.email = Some(email);
        }
        if let Some(dob) = patch.dob {
            check_dob(dob)?;
        }

        let patient = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(RecordsServiceError::PatientNotFound)?;
        authorize(requester, patient.physician_id, PatientAction::Update)
            .map_err(|_| RecordsServiceError::NotOwner)?;

        // The scoped update re-checks ownership in its WHERE clause; a record
        // deleted between the lookup and the write surfaces as not found.
        self.repo
            .update_scoped(id, requester, &patch)
            .await?
            .ok_or(RecordsServiceError::PatientNotFound)
    }
}

// ── DeletePatient ────────────────────────────────────────────────────────────

pub struct DeletePatientUseCase<R: PatientRepository> {
    pub repo: R,
}

impl<R: PatientRepository> DeletePatientUseCase<R> {
    pub async fn execute(
        &self,
        requester: PhysicianId,
        id: PatientId,
    ) -> Result<(), RecordsServiceError> {
        let patient = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(RecordsServiceError::PatientNotFound)?;
        authorize(requester, patient.physician_id, PatientAction::Delete)
            .map_err(|_| RecordsServiceError::NotOwner)?;

        let deleted = self.repo.delete_scoped(id, requester).await?;
        if !deleted {
            return Err(RecordsServiceError::PatientNotFound);
        }
        tracing::info!(patient = %id, physician = %requester, "patient deleted");
        Ok(())
    }
}

// ── SendPatientInfo ──────────────────────────────────────────────────────────

pub struct SendPatientInfoUseCase<R: PatientRepository, M: PatientMailer> {
    pub repo: R,
    pub mailer: M,
}

impl<R, M> SendPatientInfoUseCase<R, M>
where
    R: PatientRepository,
    M: PatientMailer + Clone + 'static,
{
    /// Dispatches the patient-info email off the request path once ownership
    /// is established. A mailer failure is logged and never reaches the
    /// caller.
    pub async fn execute(
        &self,
        requester: PhysicianId,
        id: PatientId,
    ) -> Result<(), RecordsServiceError> {
        let patient = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(RecordsServiceError::PatientNotFound)?;
        authorize(requester, patient.physician_id, PatientAction::Read)
            .map_err(|_| RecordsServiceError::NotOwner)?;

        let mailer = self.mailer.clone();
        let patient_id = patient.id;
        tokio::spawn(async move {
            if let Err(e) = mailer.send_patient_info(patient).await {
                tracing::warn!(patient = %patient_id, error = %e, "patient info mail failed");
            }
        });
        Ok(())
    }
}
