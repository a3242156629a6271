use std::sync::{Arc, Mutex};

use chrono::{DateTime, NaiveDate, Utc};

use carelog_domain::id::{PatientId, PhysicianId};
use carelog_records::domain::repository::{PatientMailer, PatientRepository, PhysicianRepository};
use carelog_records::domain::types::{NewPhysician, Patient, PatientDraft, PatientPatch, Physician};
use carelog_records::error::RecordsServiceError;
use carelog_records::password::hash_password;

pub const TEST_JWT_SECRET: &str = "test-secret-key-for-integration-tests";
pub const TEST_ACCESS_TTL: u64 = 900;
pub const TEST_REFRESH_TTL: u64 = 604_800;

/// Password used by every fixture physician.
pub const TEST_PASSWORD: &str = "Testpass123";

pub fn test_physician(id: i64, email: &str) -> Physician {
    Physician {
        id: PhysicianId(id),
        email: email.to_owned(),
        password_hash: hash_password(TEST_PASSWORD).unwrap(),
        first_name: "Physician".to_owned(),
        last_name: format!("Number{id}"),
        is_active: true,
        is_admin: false,
        last_login: None,
        created_at: Utc::now(),
    }
}

pub fn test_patient(id: i64, owner: PhysicianId, email: &str) -> Patient {
    Patient {
        id: PatientId(id),
        first_name: "John".to_owned(),
        last_name: "Doe".to_owned(),
        email: email.to_owned(),
        dob: NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
        mri_file: None,
        physician_id: owner,
        created_at: Utc::now(),
    }
}

// ── MockPhysicianRepo ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct MockPhysicianRepo {
    pub physicians: Arc<Mutex<Vec<Physician>>>,
}

impl MockPhysicianRepo {
    pub fn new(physicians: Vec<Physician>) -> Self {
        Self {
            physicians: Arc::new(Mutex::new(physicians)),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    /// Shared handle to the stored accounts for post-execution inspection.
    pub fn handle(&self) -> Arc<Mutex<Vec<Physician>>> {
        Arc::clone(&self.physicians)
    }
}

impl PhysicianRepository for MockPhysicianRepo {
    async fn find_by_id(&self, id: PhysicianId) -> Result<Option<Physician>, RecordsServiceError> {
        Ok(self
            .physicians
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Physician>, RecordsServiceError> {
        Ok(self
            .physicians
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.email == email)
            .cloned())
    }

    async fn create(&self, new: &NewPhysician) -> Result<Physician, RecordsServiceError> {
        let mut physicians = self.physicians.lock().unwrap();
        if physicians.iter().any(|p| p.email == new.email) {
            return Err(RecordsServiceError::EmailTaken);
        }
        let id = physicians.iter().map(|p| p.id.0).max().unwrap_or(0) + 1;
        let physician = Physician {
            id: PhysicianId(id),
            email: new.email.clone(),
            password_hash: new.password_hash.clone(),
            first_name: new.first_name.clone(),
            last_name: new.last_name.clone(),
            is_active: true,
            is_admin: false,
            last_login: None,
            created_at: Utc::now(),
        };
        physicians.push(physician.clone());
        Ok(physician)
    }

    async fn record_login(
        &self,
        id: PhysicianId,
        at: DateTime<Utc>,
    ) -> Result<(), RecordsServiceError> {
        let mut physicians = self.physicians.lock().unwrap();
        if let Some(p) = physicians.iter_mut().find(|p| p.id == id) {
            p.last_login = Some(at);
        }
        Ok(())
    }
}

// ── MockPatientRepo ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct MockPatientRepo {
    pub patients: Arc<Mutex<Vec<Patient>>>,
}

impl MockPatientRepo {
    pub fn new(patients: Vec<Patient>) -> Self {
        Self {
            patients: Arc::new(Mutex::new(patients)),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    pub fn handle(&self) -> Arc<Mutex<Vec<Patient>>> {
        Arc::clone(&self.patients)
    }
}

impl PatientRepository for MockPatientRepo {
    async fn find_by_id(&self, id: PatientId) -> Result<Option<Patient>, RecordsServiceError> {
        Ok(self
            .patients
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }

    async fn list_by_physician(
        &self,
        owner: PhysicianId,
    ) -> Result<Vec<Patient>, RecordsServiceError> {
        let mut owned: Vec<Patient> = self
            .patients
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.physician_id == owner)
            .cloned()
            .collect();
        owned.sort_by_key(|p| p.id.0);
        Ok(owned)
    }

    async fn create(
        &self,
        owner: PhysicianId,
        draft: &PatientDraft,
    ) -> Result<Patient, RecordsServiceError> {
        let mut patients = self.patients.lock().unwrap();
        // Same contract as the unique constraint on patients.email.
        if patients.iter().any(|p| p.email == draft.email) {
            return Err(RecordsServiceError::EmailTaken);
        }
        let id = patients.iter().map(|p| p.id.0).max().unwrap_or(0) + 1;
        let patient = Patient {
            id: PatientId(id),
            first_name: draft.first_name.clone(),
            last_name: draft.last_name.clone(),
            email: draft.email.clone(),
            dob: draft.dob,
            mri_file: draft.mri_file.clone(),
            physician_id: owner,
            created_at: Utc::now(),
        };
        patients.push(patient.clone());
        Ok(patient)
    }

    async fn update_scoped(
        &self,
        id: PatientId,
        owner: PhysicianId,
        patch: &PatientPatch,
    ) -> Result<Option<Patient>, RecordsServiceError> {
        let mut patients = self.patients.lock().unwrap();
        if let Some(ref email) = patch.email {
            if patients.iter().any(|p| p.id != id && p.email == *email) {
                return Err(RecordsServiceError::EmailTaken);
            }
        }
        let Some(patient) = patients
            .iter_mut()
            .find(|p| p.id == id && p.physician_id == owner)
        else {
            return Ok(None);
        };
        if let Some(ref first_name) = patch.first_name {
            patient.first_name = first_name.clone();
        }
        if let Some(ref last_name) = patch.last_name {
            patient.last_name = last_name.clone();
        }
        if let Some(ref email) = patch.email {
            patient.email = email.clone();
        }
        if let Some(dob) = patch.dob {
            patient.dob = dob;
        }
        if let Some(ref mri_file) = patch.mri_file {
            patient.mri_file = Some(mri_file.clone());
        }
        Ok(Some(patient.clone()))
    }

    async fn delete_scoped(
        &self,
        id: PatientId,
        owner: PhysicianId,
    ) -> Result<bool, RecordsServiceError> {
        let mut patients = self.patients.lock().unwrap();
        let before = patients.len();
        patients.retain(|p| !(p.id == id && p.physician_id == owner));
        Ok(patients.len() < before)
    }
}

// ── MockMailer ───────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct MockMailer {
    pub sent: Arc<Mutex<Vec<Patient>>>,
}

impl MockMailer {
    pub fn new() -> Self {
        Self {
            sent: Arc::new(Mutex::new(vec![])),
        }
    }
}

impl PatientMailer for MockMailer {
    async fn send_patient_info(&self, patient: Patient) -> Result<(), anyhow::Error> {
        self.sent.lock().unwrap().push(patient);
        Ok(())
    }
}
