//! Database migrations for the rideshare sample application.
//!
//! The schema is grouped by domain: identity, food delivery, rideshare and
//! financial. Later groups reference tables created by earlier ones.

pub use sea_orm_migration::prelude::*;

mod columns;

mod m2024_01_01_000001_create_users;
mod m2024_01_01_000002_create_food_delivery_tables;
mod m2024_01_01_000003_create_rideshare_tables;
mod m2024_01_01_000004_create_financial_tables;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m2024_01_01_000001_create_users::Migration),
            Box::new(m2024_01_01_000002_create_food_delivery_tables::Migration),
            Box::new(m2024_01_01_000003_create_rideshare_tables::Migration),
            Box::new(m2024_01_01_000004_create_financial_tables::Migration),
        ]
    }
}
