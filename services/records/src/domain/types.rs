use chrono::{DateTime, NaiveDate, Utc};

use carelog_domain::id::{PatientId, PhysicianId};

/// Physician account as seen by use cases. `password_hash` never leaves the
/// service boundary.
#[derive(Debug, Clone)]
pub struct Physician {
    pub id: PhysicianId,
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub is_active: bool,
    pub is_admin: bool,
    pub last_login: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Fields supplied at sign-up. Activity and admin flags are not listed —
/// every account starts active and non-admin.
#[derive(Debug, Clone)]
pub struct NewPhysician {
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
}

/// Patient record owned by exactly one physician.
#[derive(Debug, Clone)]
pub struct Patient {
    pub id: PatientId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub dob: NaiveDate,
    pub mri_file: Option<String>,
    pub physician_id: PhysicianId,
    pub created_at: DateTime<Utc>,
}

/// Creation input for a patient record. The owner field is absent on purpose:
/// ownership comes from the authenticated caller, never from the request.
#[derive(Debug, Clone)]
pub struct PatientDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub dob: NaiveDate,
    pub mri_file: Option<String>,
}

/// Partial update for a patient record. Like [`PatientDraft`], cannot express
/// an ownership change.
#[derive(Debug, Clone, Default)]
pub struct PatientPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub dob: Option<NaiveDate>,
    pub mri_file: Option<String>,
}

impl PatientPatch {
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.email.is_none()
            && self.dob.is_none()
            && self.mri_file.is_none()
    }
}

/// Lower-case and trim an email address. Applied before every lookup and
/// store so the same mailbox never registers twice with different casing.
pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_ascii_lowercase()
}

/// Validate an email address: one `@`, non-empty local part, domain with a
/// dot not at either edge, no whitespace, at most 254 chars.
pub fn validate_email(email: &str) -> bool {
    if email.is_empty() || email.len() > 254 {
        return false;
    }
    if email.chars().any(|c| c.is_whitespace()) {
        return false;
    }
    let mut parts = email.splitn(2, '@');
    let local = parts.next().unwrap_or_default();
    let Some(domain) = parts.next() else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}
