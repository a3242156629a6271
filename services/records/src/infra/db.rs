use anyhow::Context as _;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, TransactionTrait,
};

use carelog_domain::id::{PatientId, PhysicianId};
use carelog_records_schema::{patients, physicians};

use crate::domain::repository::{PatientRepository, PhysicianRepository};
use crate::domain::types::{NewPhysician, Patient, PatientDraft, PatientPatch, Physician};
use crate::error::RecordsServiceError;

fn is_unique_violation(err: &sea_orm::DbErr) -> bool {
    matches!(
        err.sql_err(),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
    )
}

// ── Physician repository ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbPhysicianRepository {
    pub db: DatabaseConnection,
}

impl PhysicianRepository for DbPhysicianRepository {
    async fn find_by_id(&self, id: PhysicianId) -> Result<Option<Physician>, RecordsServiceError> {
        let model = physicians::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .context("find physician by id")?;
        Ok(model.map(physician_from_model))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Physician>, RecordsServiceError> {
        let model = physicians::Entity::find()
            .filter(physicians::Column::Email.eq(email))
            .one(&self.db)
            .await
            .context("find physician by email")?;
        Ok(model.map(physician_from_model))
    }

    async fn create(&self, new: &NewPhysician) -> Result<Physician, RecordsServiceError> {
        let result = physicians::ActiveModel {
            email: Set(new.email.clone()),
            password_hash: Set(new.password_hash.clone()),
            first_name: Set(new.first_name.clone()),
            last_name: Set(new.last_name.clone()),
            is_active: Set(true),
            is_admin: Set(false),
            last_login: Set(None),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&self.db)
        .await;

        match result {
            Ok(model) => Ok(physician_from_model(model)),
            Err(e) if is_unique_violation(&e) => Err(RecordsServiceError::EmailTaken),
            Err(e) => Err(anyhow::Error::new(e).context("create physician").into()),
        }
    }

    async fn record_login(
        &self,
        id: PhysicianId,
        at: DateTime<Utc>,
    ) -> Result<(), RecordsServiceError> {
        physicians::ActiveModel {
            id: Set(id.0),
            last_login: Set(Some(at)),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .context("record physician login")?;
        Ok(())
    }
}

fn physician_from_model(model: physicians::Model) -> Physician {
    Physician {
        id: PhysicianId(model.id),
        email: model.email,
        password_hash: model.password_hash,
        first_name: model.first_name,
        last_name: model.last_name,
        is_active: model.is_active,
        is_admin: model.is_admin,
        last_login: model.last_login,
        created_at: model.created_at,
    }
}

// ── Patient repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbPatientRepository {
    pub db: DatabaseConnection,
}

impl PatientRepository for DbPatientRepository {
    async fn find_by_id(&self, id: PatientId) -> Result<Option<Patient>, RecordsServiceError> {
        let model = patients::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .context("find patient by id")?;
        Ok(model.map(patient_from_model))
    }

    async fn list_by_physician(
        &self,
        owner: PhysicianId,
    ) -> Result<Vec<Patient>, RecordsServiceError> {
        let models = patients::Entity::find()
            .filter(patients::Column::PhysicianId.eq(owner.0))
            .order_by_asc(patients::Column::Id)
            .all(&self.db)
            .await
            .context("list patients by physician")?;
        Ok(models.into_iter().map(patient_from_model).collect())
    }

    async fn create(
        &self,
        owner: PhysicianId,
        draft: &PatientDraft,
    ) -> Result<Patient, RecordsServiceError> {
        let result = patients::ActiveModel {
            first_name: Set(draft.first_name.clone()),
            last_name: Set(draft.last_name.clone()),
            email: Set(draft.email.clone()),
            dob: Set(draft.dob),
            mri_file: Set(draft.mri_file.clone()),
            physician_id: Set(owner.0),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&self.db)
        .await;

        match result {
            Ok(model) => Ok(patient_from_model(model)),
            Err(e) if is_unique_violation(&e) => Err(RecordsServiceError::EmailTaken),
            Err(e) => Err(anyhow::Error::new(e).context("create patient").into()),
        }
    }

    async fn update_scoped(
        &self,
        id: PatientId,
        owner: PhysicianId,
        patch: &PatientPatch,
    ) -> Result<Option<Patient>, RecordsServiceError> {
        let txn = self
            .db
            .begin()
            .await
            .context("begin patient update transaction")?;

        let mut am = <patients::ActiveModel as std::default::Default>::default();
        if let Some(ref first_name) = patch.first_name {
            am.first_name = Set(first_name.clone());
        }
        if let Some(ref last_name) = patch.last_name {
            am.last_name = Set(last_name.clone());
        }
        if let Some(ref email) = patch.email {
            am.email = Set(email.clone());
        }
        if let Some(dob) = patch.dob {
            am.dob = Set(dob);
        }
        if let Some(ref mri_file) = patch.mri_file {
            am.mri_file = Set(Some(mri_file.clone()));
        }

        // Ownership lives in the WHERE clause: the write cannot land on a row
        // the owner does not hold, whatever happened since the caller's check.
        let result = patients::Entity::update_many()
            .set(am)
            .filter(patients::Column::Id.eq(id.0))
            .filter(patients::Column::PhysicianId.eq(owner.0))
            .exec(&txn)
            .await;

        let result = match result {
            Ok(r) => r,
            Err(e) if is_unique_violation(&e) => return Err(RecordsServiceError::EmailTaken),
            Err(e) => return Err(anyhow::Error::new(e).context("update patient").into()),
        };

        if result.rows_affected == 0 {
            txn.rollback()
                .await
                .context("roll back empty patient update")?;
            return Ok(None);
        }

        let model = patients::Entity::find_by_id(id.0)
            .one(&txn)
            .await
            .context("reload updated patient")?;
        txn.commit()
            .await
            .context("commit patient update transaction")?;
        Ok(model.map(patient_from_model))
    }

    async fn delete_scoped(
        &self,
        id: PatientId,
        owner: PhysicianId,
    ) -> Result<bool, RecordsServiceError> {
        let result = patients::Entity::delete_many()
            .filter(patients::Column::Id.eq(id.0))
            .filter(patients::Column::PhysicianId.eq(owner.0))
            .exec(&self.db)
            .await
            .context("delete patient")?;
        Ok(result.rows_affected > 0)
    }
}

fn patient_from_model(model: patients::Model) -> Patient {
    Patient {
        id: PatientId(model.id),
        first_name: model.first_name,
        last_name: model.last_name,
        email: model.email,
        dob: model.dob,
        mri_file: model.mri_file,
        physician_id: PhysicianId(model.physician_id),
        created_at: model.created_at,
    }
}
