//! Network layer: wire types and HTTP operations against the identity service.

pub mod api;
pub mod types;
