use async_trait::async_trait;

use super::RepoError;
use crate::domain::order::{NewOrder, Order, OrderId};

#[async_trait]
pub trait OrderRepository: Send + Sync + 'static {
    /// Persists the order and returns it with its assigned id.
    ///
    /// Fails with [`RepoError::Constraint`] when `user_id` does not reference
    /// an existing user.
    async fn create_order(&self, order: NewOrder) -> Result<Order, RepoError>;
    async fn get_order(&self, id: OrderId) -> Result<Option<Order>, RepoError>;
    /// All orders, in id order.
    async fn list_orders(&self) -> Result<Vec<Order>, RepoError>;
}
