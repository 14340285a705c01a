//! # Data Models
//!
//! SeaORM entities for the sample application schema, grouped by domain:
//! identity (`user`), rideshare, financial and food delivery.

pub mod inflation_adjustment;
pub mod invoice;
pub mod menu;
pub mod menu_item;
pub mod order;
pub mod order_item;
pub mod payment;
pub mod restaurant;
pub mod service_tier;
pub mod trip;
pub mod trip_pool;
pub mod user;
pub mod vehicle;
pub mod vehicle_type;

pub use inflation_adjustment::Entity as InflationAdjustment;
pub use invoice::Entity as Invoice;
pub use menu::Entity as Menu;
pub use menu_item::Entity as MenuItem;
pub use order::Entity as Order;
pub use order_item::Entity as OrderItem;
pub use payment::Entity as Payment;
pub use restaurant::Entity as Restaurant;
pub use service_tier::Entity as ServiceTier;
pub use trip::Entity as Trip;
pub use trip_pool::Entity as TripPool;
pub use user::Entity as User;
pub use vehicle::Entity as Vehicle;
pub use vehicle_type::Entity as VehicleType;
