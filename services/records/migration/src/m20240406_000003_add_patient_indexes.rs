use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Every list/detail query filters on the owning physician.
        manager
            .create_index(
                Index::create()
                    .table(Patients::Table)
                    .col(Patients::PhysicianId)
                    .name("idx_patients_physician_id")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_patients_physician_id").to_owned())
            .await
    }
}

#[derive(Iden)]
enum Patients {
    Table,
    PhysicianId,
}
