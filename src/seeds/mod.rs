//! Database seeding functionality
//!
//! This module populates a freshly migrated database with a small, fixed set
//! of realistic sample data so that developers and designers can use the
//! application without creating records by hand or pulling production data.
//!
//! Reference data needed in every environment does not belong here.

pub mod record_counts;
pub mod sample_data;

pub use record_counts::{RecordCounts, count_records};
pub use sample_data::{SAMPLE_PASSWORD, SampleDataSummary, seed_sample_data};
