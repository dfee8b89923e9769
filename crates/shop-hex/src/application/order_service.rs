use crate::errors::AppError;
use shop_types::domain::order::{NewOrder, Order, OrderId};
use shop_types::domain::user::UserId;
use shop_types::ports::{OrderRepository, UserRepository};

pub struct OrderService<R: OrderRepository + UserRepository> {
    repo: R,
}

impl<R: OrderRepository + UserRepository> OrderService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Checks that `user_id` names an existing user before inserting, so the
    /// reference holds whether or not the store enforces foreign keys.
    pub async fn create_order(
        &self,
        user_id: UserId,
        product_name: String,
        quantity: i64,
        total_price: f64,
    ) -> Result<Order, AppError> {
        let order = NewOrder::new(user_id, product_name, quantity, total_price)
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        if self.repo.get_user(user_id).await?.is_none() {
            return Err(AppError::BadRequest(format!(
                "user {} does not exist",
                user_id
            )));
        }
        let order = self.repo.create_order(order).await?;
        tracing::info!(order_id = order.id, user_id, "order created");
        Ok(order)
    }

    pub async fn get_order(&self, id: OrderId) -> Result<Order, AppError> {
        match self.repo.get_order(id).await? {
            Some(o) => Ok(o),
            None => Err(AppError::NotFound(format!("order {}", id))),
        }
    }

    pub async fn list_orders(&self) -> Result<Vec<Order>, AppError> {
        Ok(self.repo.list_orders().await?)
    }
}
