//! Order entity model
//!
//! This module contains the SeaORM entity model for food delivery orders.
//! Ordered menu items are linked through the `order_items` join table, and
//! the delivering trip points back at the order.

use sea_orm::ActiveModelBehavior;
use sea_orm::entity::prelude::*;
use sea_orm::prelude::DateTimeWithTimeZone;

/// Food delivery order placed by a user
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    /// Unique identifier for the order (primary key)
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Ordering user
    pub user_id: i32,

    /// Timestamp when the order was created
    pub created_at: DateTimeWithTimeZone,

    /// Timestamp when the order was last updated
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
    #[sea_orm(has_many = "super::order_item::Entity")]
    OrderItem,
    #[sea_orm(has_many = "super::trip::Entity")]
    Trip,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::order_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderItem.def()
    }
}

impl Related<super::trip::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Trip.def()
    }
}

impl Related<super::menu_item::Entity> for Entity {
    fn to() -> RelationDef {
        super::order_item::Relation::MenuItem.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::order_item::Relation::Order.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
