#[cfg(not(any(feature = "memory", feature = "sqlite")))]
compile_error!("Enable a repo feature: `memory` or `sqlite`.");

use shop_types::domain::order::{NewOrder, Order, OrderId};
use shop_types::domain::user::{NewUser, User, UserId};
use shop_types::ports::{OrderRepository, RepoError, UserRepository};

#[cfg(feature = "memory")]
pub mod memory;
#[cfg(feature = "sqlite")]
pub mod sqlite;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://shop.db";

/// Storage backend picked at build time. SQLite wins when both features are on.
#[derive(Clone)]
pub struct Repo {
    backend: Backend,
}

#[derive(Clone)]
enum Backend {
    #[cfg(feature = "memory")]
    #[cfg_attr(feature = "sqlite", allow(dead_code))]
    Memory(memory::InMemoryRepo),
    #[cfg(feature = "sqlite")]
    Sqlite(sqlite::SqliteRepo),
}

pub async fn build_repo(url: Option<&str>) -> anyhow::Result<Repo> {
    Repo::build_repo(url).await
}

impl Repo {
    #[cfg(not(feature = "sqlite"))]
    pub async fn build_repo(_: Option<&str>) -> anyhow::Result<Self> {
        tracing::info!("using in-memory repo");
        Ok(Self {
            backend: Backend::Memory(memory::InMemoryRepo::new()),
        })
    }

    #[cfg(feature = "sqlite")]
    pub async fn build_repo(database_url: Option<&str>) -> anyhow::Result<Self> {
        let url = database_url.unwrap_or(DEFAULT_DATABASE_URL);
        tracing::info!(url, "using sqlite repo");
        let sqlite = sqlite::SqliteRepo::new(url).await?;
        Ok(Self {
            backend: Backend::Sqlite(sqlite),
        })
    }
}

macro_rules! dispatch {
    ($self:ident, $repo:ident => $call:expr) => {
        match &$self.backend {
            #[cfg(feature = "memory")]
            Backend::Memory($repo) => $call,
            #[cfg(feature = "sqlite")]
            Backend::Sqlite($repo) => $call,
        }
    };
}

#[async_trait::async_trait]
impl UserRepository for Repo {
    async fn create_user(&self, user: NewUser) -> Result<User, RepoError> {
        dispatch!(self, repo => repo.create_user(user).await)
    }

    async fn get_user(&self, id: UserId) -> Result<Option<User>, RepoError> {
        dispatch!(self, repo => repo.get_user(id).await)
    }

    async fn list_users(&self) -> Result<Vec<User>, RepoError> {
        dispatch!(self, repo => repo.list_users().await)
    }
}

#[async_trait::async_trait]
impl OrderRepository for Repo {
    async fn create_order(&self, order: NewOrder) -> Result<Order, RepoError> {
        dispatch!(self, repo => repo.create_order(order).await)
    }

    async fn get_order(&self, id: OrderId) -> Result<Option<Order>, RepoError> {
        dispatch!(self, repo => repo.get_order(id).await)
    }

    async fn list_orders(&self) -> Result<Vec<Order>, RepoError> {
        dispatch!(self, repo => repo.list_orders().await)
    }
}
