//! This module contains all the sqlx structs for the database tables.

/// sqlx structs for grid table.
pub mod grid;
