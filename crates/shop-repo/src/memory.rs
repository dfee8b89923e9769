use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use shop_types::domain::order::{NewOrder, Order, OrderId};
use shop_types::domain::user::{NewUser, User, UserId};
use shop_types::ports::{OrderRepository, RepoError, UserRepository};
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

/// Process-local store with the same rules as the SQLite schema: ids start
/// at 1 and never repeat, emails are unique, orders must point at a user.
#[derive(Clone)]
pub struct InMemoryRepo {
    users: Arc<DashMap<UserId, User>>,
    emails: Arc<DashMap<String, UserId>>,
    orders: Arc<DashMap<OrderId, Order>>,
    next_user_id: Arc<AtomicI64>,
    next_order_id: Arc<AtomicI64>,
}

impl InMemoryRepo {
    pub fn new() -> Self {
        Self {
            users: Arc::new(DashMap::new()),
            emails: Arc::new(DashMap::new()),
            orders: Arc::new(DashMap::new()),
            next_user_id: Arc::new(AtomicI64::new(1)),
            next_order_id: Arc::new(AtomicI64::new(1)),
        }
    }
}

impl Default for InMemoryRepo {
    fn default() -> Self {
        Self::new()
    }
}

fn sorted_by_id<T: Clone, F: Fn(&T) -> i64>(map: &DashMap<i64, T>, key: F) -> Vec<T> {
    let mut rows: Vec<T> = map.iter().map(|kv| kv.value().clone()).collect();
    rows.sort_by_key(key);
    rows
}

#[async_trait]
impl UserRepository for InMemoryRepo {
    async fn create_user(&self, user: NewUser) -> Result<User, RepoError> {
        // The email slot is claimed under the shard lock so racing inserts
        // cannot both succeed.
        match self.emails.entry(user.email.clone()) {
            Entry::Occupied(_) => Err(RepoError::Constraint(format!(
                "email {} already registered",
                user.email
            ))),
            Entry::Vacant(slot) => {
                let id = self.next_user_id.fetch_add(1, Ordering::SeqCst);
                slot.insert(id);
                let user = user.into_user(id);
                self.users.insert(id, user.clone());
                Ok(user)
            }
        }
    }

    async fn get_user(&self, id: UserId) -> Result<Option<User>, RepoError> {
        Ok(self.users.get(&id).map(|r| r.clone()))
    }

    async fn list_users(&self) -> Result<Vec<User>, RepoError> {
        Ok(sorted_by_id(&self.users, |u| u.id))
    }
}

#[async_trait]
impl OrderRepository for InMemoryRepo {
    async fn create_order(&self, order: NewOrder) -> Result<Order, RepoError> {
        if !self.users.contains_key(&order.user_id) {
            return Err(RepoError::Constraint(format!(
                "user {} does not exist",
                order.user_id
            )));
        }
        let id = self.next_order_id.fetch_add(1, Ordering::SeqCst);
        let order = order.into_order(id);
        self.orders.insert(id, order.clone());
        Ok(order)
    }

    async fn get_order(&self, id: OrderId) -> Result<Option<Order>, RepoError> {
        Ok(self.orders.get(&id).map(|r| r.clone()))
    }

    async fn list_orders(&self) -> Result<Vec<Order>, RepoError> {
        Ok(sorted_by_id(&self.orders, |o| o.id))
    }
}
