//! Route table and navigation guard.

pub mod guard;
pub mod routes;
