//! `db` crate — pure persistence layer.
//!
//! Provides a connection pool, typed row structs, schema management, and
//! repository functions for every table in the workforce schema.  No business
//! logic lives here.

pub mod error;
pub mod models;
pub mod pool;
pub mod repository;
pub mod schema;

pub use error::DbError;
pub use pool::DbPool;
