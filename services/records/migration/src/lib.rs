use sea_orm_migration::prelude::*;

mod m20240406_000001_create_physicians;
mod m20240406_000002_create_patients;
mod m20240406_000003_add_patient_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240406_000001_create_physicians::Migration),
            Box::new(m20240406_000002_create_patients::Migration),
            Box::new(m20240406_000003_add_patient_indexes::Migration),
        ]
    }
}
