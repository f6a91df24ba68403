//! Networking modules for the library backend's REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `gateway` is the single choke point for HTTP, `transport` is the byte
//! mover beneath it, `api` and `resource` describe the endpoints, `types`
//! defines the wire schema and `error` the failure taxonomy.

pub mod api;
pub mod error;
pub mod gateway;
pub mod resource;
pub mod transport;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;
