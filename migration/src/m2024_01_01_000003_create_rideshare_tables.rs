//! Migration to create the rideshare tables.
//!
//! Service tiers price a vehicle type; trips pair a driver with an optional
//! passenger under a tier. A trip may belong to a trip pool, or deliver a food
//! order instead of carrying a passenger.

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
                    .table(VehicleTypes::Table)
                    .if_not_exists()
                    .col(pk_auto(VehicleTypes::Id))
                    .col(ColumnDef::new(VehicleTypes::Name).text().not_null())
                    .col(timestamp_now(VehicleTypes::CreatedAt))
                    .col(timestamp_now(VehicleTypes::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_vehicle_types_name")
                    .table(VehicleTypes::Table)
                    .col(VehicleTypes::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ServiceTiers::Table)
                    .if_not_exists()
                    .col(pk_auto(ServiceTiers::Id))
                    .col(ColumnDef::new(ServiceTiers::Rate).integer().not_null())
                    .col(
                        ColumnDef::new(ServiceTiers::VehicleTypeId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ServiceTiers::IsEligibleForTripPooling)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(timestamp_now(ServiceTiers::CreatedAt))
                    .col(timestamp_now(ServiceTiers::UpdatedAt))
                    .foreign_key(&mut cascade_fk(
                        "fk_service_tiers_vehicle_type_id",
                        ServiceTiers::Table,
                        ServiceTiers::VehicleTypeId,
                        VehicleTypes::Table,
                        VehicleTypes::Id,
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Vehicles::Table)
                    .if_not_exists()
                    .col(pk_auto(Vehicles::Id))
                    .col(ColumnDef::new(Vehicles::UserId).integer().not_null())
                    .col(ColumnDef::new(Vehicles::VehicleTypeId).integer().not_null())
                    .col(
                        ColumnDef::new(Vehicles::GigawattOutputRating)
                            .double()
                            .not_null(),
                    )
                    .col(timestamp_now(Vehicles::CreatedAt))
                    .col(timestamp_now(Vehicles::UpdatedAt))
                    .foreign_key(&mut cascade_fk(
                        "fk_vehicles_user_id",
                        Vehicles::Table,
                        Vehicles::UserId,
                        Users::Table,
                        Users::Id,
                    ))
                    .foreign_key(&mut cascade_fk(
                        "fk_vehicles_vehicle_type_id",
                        Vehicles::Table,
                        Vehicles::VehicleTypeId,
                        VehicleTypes::Table,
                        VehicleTypes::Id,
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TripPools::Table)
                    .if_not_exists()
                    .col(pk_auto(TripPools::Id))
                    .col(timestamp_now(TripPools::CreatedAt))
                    .col(timestamp_now(TripPools::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Trips::Table)
                    .if_not_exists()
                    .col(pk_auto(Trips::Id))
                    .col(
                        ColumnDef::new(Trips::OriginDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Trips::DestinationDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Trips::DriverId).integer().not_null())
                    .col(ColumnDef::new(Trips::PassengerId).integer().null())
                    .col(ColumnDef::new(Trips::ServiceTierId).integer().not_null())
                    .col(ColumnDef::new(Trips::TripPoolId).integer().null())
                    .col(ColumnDef::new(Trips::OrderId).integer().null())
                    .col(timestamp_now(Trips::CreatedAt))
                    .col(timestamp_now(Trips::UpdatedAt))
                    .foreign_key(&mut cascade_fk(
                        "fk_trips_driver_id",
                        Trips::Table,
                        Trips::DriverId,
                        Users::Table,
                        Users::Id,
                    ))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_trips_passenger_id")
                            .from(Trips::Table, Trips::PassengerId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(&mut cascade_fk(
                        "fk_trips_service_tier_id",
                        Trips::Table,
                        Trips::ServiceTierId,
                        ServiceTiers::Table,
                        ServiceTiers::Id,
                    ))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_trips_trip_pool_id")
                            .from(Trips::Table, Trips::TripPoolId)
                            .to(TripPools::Table, TripPools::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_trips_order_id")
                            .from(Trips::Table, Trips::OrderId)
                            .to(Orders::Table, Orders::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Trips::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TripPools::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Vehicles::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ServiceTiers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(VehicleTypes::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum VehicleTypes {
    Table,
    Id,
    Name,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum ServiceTiers {
    Table,
    Id,
    Rate,
    VehicleTypeId,
    IsEligibleForTripPooling,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Vehicles {
    Table,
    Id,
    UserId,
    VehicleTypeId,
    GigawattOutputRating,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum TripPools {
    Table,
    Id,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Trips {
    Table,
    Id,
    OriginDate,
    DestinationDate,
    DriverId,
    PassengerId,
    ServiceTierId,
    TripPoolId,
    OrderId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Orders {
    Table,
    Id,
}
