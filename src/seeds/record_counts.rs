//! Per-table row counts for the seeded tables.

use sea_orm::{ConnectionTrait, DbErr, EntityTrait, PaginatorTrait};
use serde::Serialize;

use crate::models::{
    InflationAdjustment, Invoice, Menu, MenuItem, Order, OrderItem, Payment, Restaurant,
    ServiceTier, Trip, TripPool, User, Vehicle, VehicleType,
};

/// Number of rows in each table the sample data touches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RecordCounts {
    pub users: u64,
    pub vehicle_types: u64,
    pub service_tiers: u64,
    pub vehicles: u64,
    pub trips: u64,
    pub trip_pools: u64,
    pub invoices: u64,
    pub payments: u64,
    pub restaurants: u64,
    pub menus: u64,
    pub menu_items: u64,
    pub inflation_adjustments: u64,
    pub orders: u64,
    pub order_items: u64,
}

impl RecordCounts {
    /// Counts produced by one successful seed run against an empty schema.
    pub const fn expected() -> Self {
        Self {
            users: 4,
            vehicle_types: 2,
            service_tiers: 4,
            vehicles: 1,
            trips: 4,
            trip_pools: 1,
            invoices: 3,
            payments: 3,
            restaurants: 2,
            menus: 3,
            menu_items: 3,
            inflation_adjustments: 4,
            orders: 1,
            order_items: 1,
        }
    }

    /// Sum over all tables.
    pub fn total(&self) -> u64 {
        self.users
            + self.vehicle_types
            + self.service_tiers
            + self.vehicles
            + self.trips
            + self.trip_pools
            + self.invoices
            + self.payments
            + self.restaurants
            + self.menus
            + self.menu_items
            + self.inflation_adjustments
            + self.orders
            + self.order_items
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Counts the rows currently stored in every seeded table.
pub async fn count_records<C>(db: &C) -> Result<RecordCounts, DbErr>
where
    C: ConnectionTrait,
{
    Ok(RecordCounts {
        users: User::find().count(db).await?,
        vehicle_types: VehicleType::find().count(db).await?,
        service_tiers: ServiceTier::find().count(db).await?,
        vehicles: Vehicle::find().count(db).await?,
        trips: Trip::find().count(db).await?,
        trip_pools: TripPool::find().count(db).await?,
        invoices: Invoice::find().count(db).await?,
        payments: Payment::find().count(db).await?,
        restaurants: Restaurant::find().count(db).await?,
        menus: Menu::find().count(db).await?,
        menu_items: MenuItem::find().count(db).await?,
        inflation_adjustments: InflationAdjustment::find().count(db).await?,
        orders: Order::find().count(db).await?,
        order_items: OrderItem::find().count(db).await?,
    })
}
