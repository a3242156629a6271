use sea_orm::entity::prelude::*;

/// Patient record. `physician_id` is the owning physician, assigned at
/// creation from the authenticated caller and never changed afterwards.
/// `mri_file` is an opaque reference into attachment storage.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "patients")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub dob: Date,
    pub mri_file: Option<String>,
    pub physician_id: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::physicians::Entity",
        from = "Column::PhysicianId",
        to = "super::physicians::Column::Id",
        on_delete = "Cascade"
    )]
    Physician,
}

impl Related<super::physicians::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Physician.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
