//! Migration to create the users table.
//!
//! Users are both drivers and passengers; `is_driver` distinguishes them.
//! Emails are unique, which also makes reseeding an already seeded database fail.

use sea_orm_migration::prelude::*;

use crate::columns::{pk_auto, timestamp_now};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(pk_auto(Users::Id))
                    .col(ColumnDef::new(Users::Email).text().not_null())
                    .col(ColumnDef::new(Users::EncryptedPassword).text().not_null())
                    .col(
                        ColumnDef::new(Users::IsDriver)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(timestamp_now(Users::CreatedAt))
                    .col(timestamp_now(Users::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_users_email")
                    .table(Users::Table)
                    .col(Users::Email)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Email,
    EncryptedPassword,
    IsDriver,
    CreatedAt,
    UpdatedAt,
}
