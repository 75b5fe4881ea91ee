//! Network layer: wire types, the error taxonomy, and the REST API client.

pub mod api;
pub mod error;
pub mod types;
