use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::user::UserId;

pub type OrderId = i64;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    pub product_name: String,
    pub quantity: i64,
    pub total_price: f64,
    pub created_at: DateTime<Utc>,
}

/// An order that has passed validation but has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub user_id: UserId,
    pub product_name: String,
    pub quantity: i64,
    pub total_price: f64,
    pub created_at: DateTime<Utc>,
}

impl NewOrder {
    pub fn new(
        user_id: UserId,
        product_name: String,
        quantity: i64,
        total_price: f64,
    ) -> anyhow::Result<Self> {
        if product_name.trim().is_empty() {
            anyhow::bail!("product_name empty");
        }
        Ok(Self {
            user_id,
            product_name,
            quantity,
            total_price,
            created_at: Utc::now(),
        })
    }

    pub fn into_order(self, id: OrderId) -> Order {
        Order {
            id,
            user_id: self.user_id,
            product_name: self.product_name,
            quantity: self.quantity,
            total_price: self.total_price,
            created_at: self.created_at,
        }
    }
}
