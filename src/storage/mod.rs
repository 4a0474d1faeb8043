//! Storage layer for the league recap tool
//!
//! This module provides a clean abstraction over the SQLite store,
//! organized into logical components:
//! - `models`: Data structures
//! - `schema`: Connection and schema management
//! - `queries`: Inserts, table readers and the consistency check
//! - `analysis`: Season recap queries
//! - `snapshot`: Pipe-delimited export and import

pub mod analysis;
pub mod models;
pub mod queries;
pub mod schema;
pub mod snapshot;


// Re-export the main types and database struct for easy access
pub use analysis::LeagueReport;
pub use models::*;
pub use schema::LeagueDatabase;
pub use snapshot::{export_snapshot, import_snapshot};
