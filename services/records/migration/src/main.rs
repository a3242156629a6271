use sea_orm_migration::prelude::*;

use carelog_records_migration::Migrator;

#[tokio::main]
async fn main() {
    cli::run_cli(Migrator).await;
}
