#![cfg(feature = "sqlite")]

use shop_repo::sqlite::SqliteRepo;
use shop_types::domain::order::NewOrder;
use shop_types::domain::user::NewUser;
use shop_types::ports::{OrderRepository, RepoError, UserRepository};

fn temp_db_url() -> (tempfile::TempDir, String) {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("nested").join("shop.db");
    let url = format!("sqlite://{}", path.display());
    (dir, url)
}

#[tokio::test]
async fn sqlite_repo_user_and_order_flow() {
    let (_dir, url) = temp_db_url();
    let repo = SqliteRepo::new(&url).await.unwrap();
    assert!(repo.list_users().await.unwrap().is_empty());
    assert!(repo.list_orders().await.unwrap().is_empty());

    let ana = repo
        .create_user(NewUser::new("Ana".into(), "ana@example.com".into()).unwrap())
        .await
        .unwrap();
    assert_eq!(ana.id, 1);

    let fetched = repo.get_user(ana.id).await.unwrap().unwrap();
    assert_eq!(fetched.name, "Ana");
    assert_eq!(fetched.email, "ana@example.com");
    assert_eq!(fetched.created_at, ana.created_at);

    let order = repo
        .create_order(NewOrder::new(ana.id, "Widget".into(), 3, 29.97).unwrap())
        .await
        .unwrap();
    let fetched = repo.get_order(order.id).await.unwrap().unwrap();
    assert_eq!(fetched.user_id, ana.id);
    assert_eq!(fetched.product_name, "Widget");
    assert_eq!(fetched.quantity, 3);
    assert_eq!(fetched.total_price, 29.97);

    let listed = repo.list_orders().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, order.id);
}

#[tokio::test]
async fn sqlite_repo_enforces_unique_email() {
    let (_dir, url) = temp_db_url();
    let repo = SqliteRepo::new(&url).await.unwrap();
    repo.create_user(NewUser::new("Ana".into(), "ana@example.com".into()).unwrap())
        .await
        .unwrap();
    let dup = repo
        .create_user(NewUser::new("Ana 2".into(), "ana@example.com".into()).unwrap())
        .await;
    assert!(matches!(dup, Err(RepoError::Constraint(_))));
    assert_eq!(repo.list_users().await.unwrap().len(), 1);
}

#[tokio::test]
async fn sqlite_repo_enforces_foreign_key() {
    let (_dir, url) = temp_db_url();
    let repo = SqliteRepo::new(&url).await.unwrap();
    let res = repo
        .create_order(NewOrder::new(42, "Widget".into(), 1, 1.0).unwrap())
        .await;
    assert!(matches!(res, Err(RepoError::Constraint(_))));
    assert!(repo.list_orders().await.unwrap().is_empty());
}

#[tokio::test]
async fn sqlite_repo_reopens_existing_file() {
    let (_dir, url) = temp_db_url();
    {
        let repo = SqliteRepo::new(&url).await.unwrap();
        repo.create_user(NewUser::new("Ana".into(), "ana@example.com".into()).unwrap())
            .await
            .unwrap();
    }
    // Migrations are already recorded; data survives.
    let repo = SqliteRepo::new(&url).await.unwrap();
    let users = repo.list_users().await.unwrap();
    assert_eq!(users.len(), 1);
    let next = repo
        .create_user(NewUser::new("Bob".into(), "bob@example.com".into()).unwrap())
        .await
        .unwrap();
    assert_eq!(next.id, 2);
}

#[tokio::test]
async fn sqlite_repo_handles_missing_rows() {
    let (_dir, url) = temp_db_url();
    let repo = SqliteRepo::new(&url).await.unwrap();
    assert!(repo.get_user(7).await.unwrap().is_none());
    assert!(repo.get_order(7).await.unwrap().is_none());
}
