//! Storage layer for persisted depth charts
//!
//! - `schema`: Database connection and schema management
//! - `queries`: Load/save of whole-chart snapshots

pub mod queries;
pub mod schema;


pub use schema::ChartDatabase;
