//! User entity model
//!
//! This module contains the SeaORM entity model for the users table. A user
//! is a driver when `is_driver` is set and a passenger otherwise.

use sea_orm::ActiveModelBehavior;
use sea_orm::entity::prelude::*;
use sea_orm::prelude::DateTimeWithTimeZone;

/// User entity shared by drivers and passengers
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    /// Unique identifier for the user (primary key)
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Sign-in email, unique across users
    #[sea_orm(unique)]
    pub email: String,

    /// Argon2id PHC string of the user's password
    pub encrypted_password: String,

    /// Whether the user drives for the platform
    pub is_driver: bool,

    /// Timestamp when the user was created
    pub created_at: DateTimeWithTimeZone,

    /// Timestamp when the user was last updated
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::vehicle::Entity")]
    Vehicle,
    #[sea_orm(has_many = "super::order::Entity")]
    Order,
}

impl Related<super::vehicle::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Vehicle.def()
    }
}

impl Related<super::order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Order.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
