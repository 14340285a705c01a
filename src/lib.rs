//! # Rideshare Sample Data
//!
//! Populates the rideshare/food delivery sample application's database with a
//! small, fixed set of records for local development and demos.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod password;
pub mod seeds;
pub mod telemetry;
pub use migration;
