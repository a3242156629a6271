use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Physicians::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Physicians::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Physicians::Email)
                            .string_len(255)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Physicians::PasswordHash)
                            .string_len(128)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Physicians::FirstName)
                            .string_len(30)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Physicians::LastName)
                            .string_len(30)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Physicians::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Physicians::IsAdmin)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Physicians::LastLogin).timestamp_with_time_zone())
                    .col(
                        ColumnDef::new(Physicians::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Physicians::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Physicians {
    Table,
    Id,
    Email,
    PasswordHash,
    FirstName,
    LastName,
    IsActive,
    IsAdmin,
    LastLogin,
    CreatedAt,
}
