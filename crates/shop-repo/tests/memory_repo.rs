#![cfg(feature = "memory")]

use shop_repo::memory::InMemoryRepo;
use shop_types::domain::order::NewOrder;
use shop_types::domain::user::NewUser;
use shop_types::ports::{OrderRepository, RepoError, UserRepository};

fn new_user(name: &str, email: &str) -> NewUser {
    NewUser::new(name.into(), email.into()).unwrap()
}

#[tokio::test]
async fn memory_repo_user_and_order_flow() {
    let repo = InMemoryRepo::new();
    assert!(repo.list_users().await.unwrap().is_empty());
    assert!(repo.list_orders().await.unwrap().is_empty());

    let ana = repo
        .create_user(new_user("Ana", "ana@example.com"))
        .await
        .unwrap();
    assert_eq!(ana.id, 1);

    let fetched = repo.get_user(ana.id).await.unwrap().unwrap();
    assert_eq!(fetched, ana);

    let order = repo
        .create_order(NewOrder::new(ana.id, "Widget".into(), 2, 9.5).unwrap())
        .await
        .unwrap();
    assert_eq!(order.id, 1);
    assert_eq!(order.user_id, ana.id);

    let fetched = repo.get_order(order.id).await.unwrap().unwrap();
    assert_eq!(fetched, order);
    assert_eq!(repo.list_orders().await.unwrap().len(), 1);
}

#[tokio::test]
async fn memory_repo_lists_in_insertion_order() {
    let repo = InMemoryRepo::new();
    for i in 0..20 {
        repo.create_user(new_user("User", &format!("u{i}@example.com")))
            .await
            .unwrap();
    }
    let ids: Vec<i64> = repo
        .list_users()
        .await
        .unwrap()
        .into_iter()
        .map(|u| u.id)
        .collect();
    assert_eq!(ids, (1..=20).collect::<Vec<_>>());
}

#[tokio::test]
async fn memory_repo_rejects_duplicate_email() {
    let repo = InMemoryRepo::new();
    repo.create_user(new_user("Ana", "ana@example.com"))
        .await
        .unwrap();
    let dup = repo
        .create_user(new_user("Other Ana", "ana@example.com"))
        .await;
    assert!(matches!(dup, Err(RepoError::Constraint(_))));
    assert_eq!(repo.list_users().await.unwrap().len(), 1);
}

#[tokio::test]
async fn memory_repo_rejects_order_for_missing_user() {
    let repo = InMemoryRepo::new();
    let res = repo
        .create_order(NewOrder::new(99, "Widget".into(), 1, 1.0).unwrap())
        .await;
    assert!(matches!(res, Err(RepoError::Constraint(_))));
    assert!(repo.list_orders().await.unwrap().is_empty());
}

#[tokio::test]
async fn memory_repo_handles_missing_rows() {
    let repo = InMemoryRepo::new();
    assert!(repo.get_user(1).await.unwrap().is_none());
    assert!(repo.get_order(1).await.unwrap().is_none());
}
