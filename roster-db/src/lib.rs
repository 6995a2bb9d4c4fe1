//! Roster DB - SQLite persistence for the roster
//!
//! This crate implements the `roster_core` store traits on top of sqlx and
//! SQLite:
//! - Teams with their members
//! - Users and their active flag
//! - Pull requests with full reviewer assignment history
//! - Review statistics
//!
//! Multi-statement writes run inside a [`UnitOfWork`] so they commit or roll
//! back as one.

pub mod db;
pub mod error;
pub mod repos;
pub mod rows;
pub mod store;
pub mod unit_of_work;

pub use db::{Database, DatabaseConfig};
pub use error::{DbError, Result};
pub use store::SqliteStore;
pub use unit_of_work::UnitOfWork;
