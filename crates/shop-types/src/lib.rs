//! shop-types: domain entities and the repository ports the adapters implement.

pub mod domain;
pub mod ports;
