pub mod order_service;
pub mod user_service;
