pub mod order_repository;
pub mod user_repository;

pub use order_repository::OrderRepository;
pub use user_repository::UserRepository;

#[derive(thiserror::Error, Debug)]
pub enum RepoError {
    /// A uniqueness or foreign-key rule rejected the write.
    #[error("constraint violation: {0}")]
    Constraint(String),
    #[error("db error: {0}")]
    DbError(String),
}

/// Everything the HTTP layer needs from a storage backend.
pub trait ShopRepository: UserRepository + OrderRepository {}

impl<T> ShopRepository for T where T: UserRepository + OrderRepository {}
