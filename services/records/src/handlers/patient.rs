use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use carelog_domain::id::PatientId;

use crate::domain::types::{Patient, PatientDraft, PatientPatch};
use crate::error::RecordsServiceError;
use crate::identity::AuthPhysician;
use crate::state::AppState;
use crate::usecase::patient::{
    CreatePatientUseCase, DeletePatientUseCase, GetPatientUseCase, ListPatientsUseCase,
    SendPatientInfoUseCase, UpdatePatientUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct PatientResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub dob: NaiveDate,
    pub mri_file: Option<String>,
}

impl From<Patient> for PatientResponse {
    fn from(patient: Patient) -> Self {
        Self {
            id: patient.id.0,
            first_name: patient.first_name,
            last_name: patient.last_name,
            email: patient.email,
            dob: patient.dob,
            mri_file: patient.mri_file,
        }
    }
}

// ── GET /patients ────────────────────────────────────────────────────────────

pub async fn list_patients(
    AuthPhysician(physician): AuthPhysician,
    State(state): State<AppState>,
) -> Result<Json<Vec<PatientResponse>>, RecordsServiceError> {
    let usecase = ListPatientsUseCase {
        repo: state.patient_repo(),
    };
    let patients = usecase.execute(physician.id).await?;
    Ok(Json(patients.into_iter().map(Into::into).collect()))
}

// ── POST /patients ───────────────────────────────────────────────────────────

/// Creation body. There is no owner field to send — a `physician` key in the
/// request JSON is dropped at deserialization and ownership comes from the
/// bearer token.
#[derive(Deserialize)]
pub struct CreatePatientRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub dob: NaiveDate,
    pub mri_file: Option<String>,
}

pub async fn create_patient(
    AuthPhysician(physician): AuthPhysician,
    State(state): State<AppState>,
    Json(body): Json<CreatePatientRequest>,
) -> Result<(StatusCode, Json<PatientResponse>), RecordsServiceError> {
    let usecase = CreatePatientUseCase {
        repo: state.patient_repo(),
    };
    let patient = usecase
        .execute(
            physician.id,
            PatientDraft {
                first_name: body.first_name,
                last_name: body.last_name,
                email: body.email,
                dob: body.dob,
                mri_file: body.mri_file,
            },
        )
        .await?;
    Ok((StatusCode::CREATED, Json(patient.into())))
}

// ── GET /patients/{id} ───────────────────────────────────────────────────────

pub async fn get_patient(
    AuthPhysician(physician): AuthPhysician,
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<PatientResponse>, RecordsServiceError> {
    let usecase = GetPatientUseCase {
        repo: state.patient_repo(),
    };
    let patient = usecase.execute(physician.id, PatientId(id)).await?;
    Ok(Json(patient.into()))
}

// ── PATCH /patients/{id} ─────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdatePatientRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub dob: Option<NaiveDate>,
    pub mri_file: Option<String>,
}

pub async fn update_patient(
    AuthPhysician(physician): AuthPhysician,
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<UpdatePatientRequest>,
) -> Result<Json<PatientResponse>, RecordsServiceError> {
    let usecase = UpdatePatientUseCase {
        repo: state.patient_repo(),
    };
    let patient = usecase
        .execute(
            physician.id,
            PatientId(id),
            PatientPatch {
                first_name: body.first_name,
                last_name: body.last_name,
                email: body.email,
                dob: body.dob,
                mri_file: body.mri_file,
            },
        )
        .await?;
    Ok(Json(patient.into()))
}

// ── DELETE /patients/{id} ────────────────────────────────────────────────────

pub async fn delete_patient(
    AuthPhysician(physician): AuthPhysician,
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, RecordsServiceError> {
    let usecase = DeletePatientUseCase {
        repo: state.patient_repo(),
    };
    usecase.execute(physician.id, PatientId(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── POST /api/send-patient-info/{id} ─────────────────────────────────────────

#[derive(Serialize)]
pub struct SendPatientInfoResponse {
    pub message: String,
}

pub async fn send_patient_info(
    AuthPhysician(physician): AuthPhysician,
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<SendPatientInfoResponse>, RecordsServiceError> {
    let usecase = SendPatientInfoUseCase {
        repo: state.patient_repo(),
        mailer: state.mailer.clone(),
    };
    usecase.execute(physician.id, PatientId(id)).await?;
    Ok(Json(SendPatientInfoResponse {
        message: "Patient info sent".to_owned(),
    }))
}
