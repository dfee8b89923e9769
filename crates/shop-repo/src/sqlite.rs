use async_trait::async_trait;
use chrono::{DateTime, Utc};
use shop_types::domain::order::{NewOrder, Order, OrderId};
use shop_types::domain::user::{NewUser, User, UserId};
use shop_types::ports::{OrderRepository, RepoError, UserRepository};
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::{FromRow, SqlitePool};
use std::str::FromStr;

#[derive(Clone)]
pub struct SqliteRepo {
    pool: SqlitePool,
}

#[derive(FromRow)]
struct DbUser {
    id: i64,
    name: String,
    email: String,
    created_at: String,
}

#[derive(FromRow)]
struct DbOrder {
    id: i64,
    user_id: i64,
    product_name: String,
    quantity: i64,
    total_price: f64,
    created_at: String,
}

fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, RepoError> {
    Ok(DateTime::parse_from_rfc3339(raw)
        .map_err(|e| RepoError::DbError(e.to_string()))?
        .with_timezone(&Utc))
}

impl DbUser {
    fn into_user(self) -> Result<User, RepoError> {
        Ok(User {
            id: self.id,
            name: self.name,
            email: self.email,
            created_at: parse_timestamp(&self.created_at)?,
        })
    }
}

impl DbOrder {
    fn into_order(self) -> Result<Order, RepoError> {
        Ok(Order {
            id: self.id,
            user_id: self.user_id,
            product_name: self.product_name,
            quantity: self.quantity,
            total_price: self.total_price,
            created_at: parse_timestamp(&self.created_at)?,
        })
    }
}

/// Unique and foreign-key failures become [`RepoError::Constraint`]; anything
/// else is a plain db error.
fn map_db_err(err: sqlx::Error) -> RepoError {
    if let sqlx::Error::Database(db) = &err {
        if db.is_unique_violation() || db.is_foreign_key_violation() {
            return RepoError::Constraint(db.message().to_string());
        }
    }
    RepoError::DbError(err.to_string())
}

impl SqliteRepo {
    pub async fn new(database_url: &str) -> anyhow::Result<Self> {
        // Ensure on-disk SQLite target directory exists (no-op for in-memory).
        if let Some(path) = database_url.strip_prefix("sqlite://") {
            if path != ":memory:" {
                let p = std::path::Path::new(path);
                if let Some(parent) = p.parent() {
                    if !parent.as_os_str().is_empty() {
                        tokio::fs::create_dir_all(parent).await?;
                    }
                }
            }
        }

        let options = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePool::connect_with(options).await?;

        // Tracked in `_sqlx_migrations`, so a restart applies nothing new.
        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::info!(database_url, "schema migrations up to date");

        Ok(Self { pool })
    }
}

#[async_trait]
impl UserRepository for SqliteRepo {
    async fn create_user(&self, user: NewUser) -> Result<User, RepoError> {
        let res = sqlx::query(r#"INSERT INTO "user" (name, email, created_at) VALUES (?, ?, ?)"#)
            .bind(&user.name)
            .bind(&user.email)
            .bind(user.created_at.to_rfc3339())
            .execute(&self.pool)
            .await
            .map_err(map_db_err)?;
        Ok(user.into_user(res.last_insert_rowid()))
    }

    async fn get_user(&self, id: UserId) -> Result<Option<User>, RepoError> {
        let row: Option<DbUser> =
            sqlx::query_as(r#"SELECT id, name, email, created_at FROM "user" WHERE id = ?"#)
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(map_db_err)?;
        row.map(|r| r.into_user()).transpose()
    }

    async fn list_users(&self) -> Result<Vec<User>, RepoError> {
        let rows: Vec<DbUser> =
            sqlx::query_as(r#"SELECT id, name, email, created_at FROM "user" ORDER BY id"#)
                .fetch_all(&self.pool)
                .await
                .map_err(map_db_err)?;

        rows.into_iter()
            .map(|r| r.into_user())
            .collect::<Result<Vec<_>, _>>()
    }
}

#[async_trait]
impl OrderRepository for SqliteRepo {
    async fn create_order(&self, order: NewOrder) -> Result<Order, RepoError> {
        let res = sqlx::query(
            r#"INSERT INTO "order" (user_id, product_name, quantity, total_price, created_at)
             VALUES (?, ?, ?, ?, ?)"#,
        )
        .bind(order.user_id)
        .bind(&order.product_name)
        .bind(order.quantity)
        .bind(order.total_price)
        .bind(order.created_at.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(map_db_err)?;
        Ok(order.into_order(res.last_insert_rowid()))
    }

    async fn get_order(&self, id: OrderId) -> Result<Option<Order>, RepoError> {
        let row: Option<DbOrder> = sqlx::query_as(
            r#"SELECT id, user_id, product_name, quantity, total_price, created_at FROM "order" WHERE id = ?"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_err)?;
        row.map(|r| r.into_order()).transpose()
    }

    async fn list_orders(&self) -> Result<Vec<Order>, RepoError> {
        let rows: Vec<DbOrder> = sqlx::query_as(
            r#"SELECT id, user_id, product_name, quantity, total_price, created_at FROM "order" ORDER BY id"#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_err)?;

        rows.into_iter()
            .map(|r| r.into_order())
            .collect::<Result<Vec<_>, _>>()
    }
}
