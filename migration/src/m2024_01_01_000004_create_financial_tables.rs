//! Migration to create the financial tables.

use sea_orm_migration::prelude::*;

use crate::columns::{cascade_fk, pk_auto, timestamp_now};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Invoices::Table)
                    .if_not_exists()
                    .col(pk_auto(Invoices::Id))
                    .col(ColumnDef::new(Invoices::UserId).integer().not_null())
                    .col(ColumnDef::new(Invoices::TripId).integer().not_null())
                    .col(ColumnDef::new(Invoices::Amount).integer().not_null())
                    .col(timestamp_now(Invoices::CreatedAt))
                    .col(timestamp_now(Invoices::UpdatedAt))
                    .foreign_key(&mut cascade_fk(
                        "fk_invoices_user_id",
                        Invoices::Table,
                        Invoices::UserId,
                        Users::Table,
                        Users::Id,
                    ))
                    .foreign_key(&mut cascade_fk(
                        "fk_invoices_trip_id",
                        Invoices::Table,
                        Invoices::TripId,
                        Trips::Table,
                        Trips::Id,
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Payments::Table)
                    .if_not_exists()
                    .col(pk_auto(Payments::Id))
                    .col(ColumnDef::new(Payments::InvoiceId).integer().not_null())
                    .col(ColumnDef::new(Payments::Amount).integer().not_null())
                    .col(timestamp_now(Payments::CreatedAt))
                    .col(timestamp_now(Payments::UpdatedAt))
                    .foreign_key(&mut cascade_fk(
                        "fk_payments_invoice_id",
                        Payments::Table,
                        Payments::InvoiceId,
                        Invoices::Table,
                        Invoices::Id,
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(InflationAdjustments::Table)
                    .if_not_exists()
                    .col(pk_auto(InflationAdjustments::Id))
                    .col(
                        ColumnDef::new(InflationAdjustments::PercentChange)
                            .double()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(InflationAdjustments::Date)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(timestamp_now(InflationAdjustments::CreatedAt))
                    .col(timestamp_now(InflationAdjustments::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(InflationAdjustments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Payments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Invoices::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Invoices {
    Table,
    Id,
    UserId,
    TripId,
    Amount,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Payments {
    Table,
    Id,
    InvoiceId,
    Amount,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum InflationAdjustments {
    Table,
    Id,
    PercentChange,
    Date,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Trips {
    Table,
    Id,
}
