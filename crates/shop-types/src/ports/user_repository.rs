use async_trait::async_trait;

use super::RepoError;
use crate::domain::user::{NewUser, User, UserId};

#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persists the user and returns it with its assigned id.
    ///
    /// A second user with an email that is already taken fails with
    /// [`RepoError::Constraint`].
    async fn create_user(&self, user: NewUser) -> Result<User, RepoError>;
    async fn get_user(&self, id: UserId) -> Result<Option<User>, RepoError>;
    /// All users, in id order.
    async fn list_users(&self) -> Result<Vec<User>, RepoError>;
}
