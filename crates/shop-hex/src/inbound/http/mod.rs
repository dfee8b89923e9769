mod orders;
pub mod requests;
mod server;
mod users;

pub use server::{AppState, HttpServer, HttpServerConfig};
