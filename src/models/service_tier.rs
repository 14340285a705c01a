//! Service tier entity model
//!
//! A service tier prices trips made with a given vehicle type. Pool-eligible
//! tiers allow their trips to be grouped into a trip pool.

use sea_orm::ActiveModelBehavior;
use sea_orm::entity::prelude::*;
use sea_orm::prelude::DateTimeWithTimeZone;

/// Service tier entity
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "service_tiers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Rate charged for trips in this tier
    pub rate: i32,

    /// Vehicle type serving this tier
    pub vehicle_type_id: i32,

    /// Whether trips in this tier may share a trip pool
    pub is_eligible_for_trip_pooling: bool,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::vehicle_type::Entity",
        from = "Column::VehicleTypeId",
        to = "super::vehicle_type::Column::Id"
    )]
    VehicleType,
    #[sea_orm(has_many = "super::trip::Entity")]
    Trip,
}

impl Related<super::vehicle_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VehicleType.def()
    }
}

impl Related<super::trip::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Trip.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
