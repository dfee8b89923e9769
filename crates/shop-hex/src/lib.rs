//! shop-hex: users & orders API library (core + inbound HTTP)

pub mod config;
pub mod errors;

pub mod application;

pub use shop_types::{domain, ports};

pub mod inbound; // HTTP adapter (router, handlers, request validation)
