use crate::errors::AppError;
use shop_types::domain::user::{NewUser, User, UserId};
use shop_types::ports::UserRepository;

pub struct UserService<R: UserRepository> {
    repo: R,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub async fn create_user(&self, name: String, email: String) -> Result<User, AppError> {
        let user = NewUser::new(name, email).map_err(|e| AppError::BadRequest(e.to_string()))?;
        let user = self.repo.create_user(user).await?;
        tracing::info!(user_id = user.id, "user created");
        Ok(user)
    }

    pub async fn get_user(&self, id: UserId) -> Result<User, AppError> {
        match self.repo.get_user(id).await? {
            Some(u) => Ok(u),
            None => Err(AppError::NotFound(format!("user {}", id))),
        }
    }

    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        Ok(self.repo.list_users().await?)
    }
}
