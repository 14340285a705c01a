//! Trip entity model
//!
//! This module contains the SeaORM entity model for the trips table. A trip
//! always has a driver and a service tier. Passenger trips set `passenger_id`;
//! food delivery trips leave it empty and set `order_id` instead.

use sea_orm::ActiveModelBehavior;
use sea_orm::entity::prelude::*;
use sea_orm::prelude::DateTimeWithTimeZone;

/// Trip entity
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "trips")]
pub struct Model {
    /// Unique identifier for the trip (primary key)
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Moment the trip departs from
    pub origin_date: DateTimeWithTimeZone,

    /// Moment the trip arrives at, which may precede the origin
    pub destination_date: DateTimeWithTimeZone,

    /// Driving user
    pub driver_id: i32,

    /// Riding user, absent for delivery trips
    pub passenger_id: Option<i32>,

    /// Tier the trip is priced under
    pub service_tier_id: i32,

    /// Pool the trip shares, if any
    pub trip_pool_id: Option<i32>,

    /// Food order delivered by this trip, if any
    pub order_id: Option<i32>,

    /// Timestamp when the trip was created
    pub created_at: DateTimeWithTimeZone,

    /// Timestamp when the trip was last updated
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::DriverId",
        to = "super::user::Column::Id"
    )]
    Driver,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::PassengerId",
        to = "super::user::Column::Id"
    )]
    Passenger,
    #[sea_orm(
        belongs_to = "super::service_tier::Entity",
        from = "Column::ServiceTierId",
        to = "super::service_tier::Column::Id"
    )]
    ServiceTier,
    #[sea_orm(
        belongs_to = "super::trip_pool::Entity",
        from = "Column::TripPoolId",
        to = "super::trip_pool::Column::Id"
    )]
    TripPool,
    #[sea_orm(
        belongs_to = "super::order::Entity",
        from = "Column::OrderId",
        to = "super::order::Column::Id"
    )]
    Order,
    #[sea_orm(has_many = "super::invoice::Entity")]
    Invoice,
}

impl Related<super::service_tier::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ServiceTier.def()
    }
}

impl Related<super::trip_pool::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TripPool.def()
    }
}

impl Related<super::order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Order.def()
    }
}

impl Related<super::invoice::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Invoice.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
