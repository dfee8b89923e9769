///  To run :
///  cargo r --example client_example
use shop_client::{CreateOrderRequest, CreateUserRequest, ShopClient};
use shop_hex::inbound::http::{AppState, HttpServer, HttpServerConfig};
use shop_repo::build_repo;
use reqwest::StatusCode;
use tempfile::tempdir;

fn find_free_port() -> u16 {
    std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Start server on an ephemeral port.
    let port = find_free_port();
    let addr = format!("http://127.0.0.1:{port}/");

    // Use a temp file-backed SQLite DB so multiple connections see the same data.
    let tmp = tempdir()?;
    let db_path = tmp.path().join("shop.db");
    let db_url = format!("sqlite://{}", db_path.display());

    let repo = build_repo(Some(&db_url)).await?;
    let server = HttpServer::new(
        AppState::new(repo),
        HttpServerConfig {
            port: port.to_string(),
        },
    )
    .await?;

    let handle = tokio::spawn(async move {
        server.run().await.expect("server run");
    });
    tokio::time::sleep(std::time::Duration::from_millis(50)).await;

    // Use client against the running server.
    let client = ShopClient::new(&addr)?;
    let created = client
        .create_user(CreateUserRequest {
            name: "Example".into(),
            email: "example@example.com".into(),
        })
        .await?;
    println!("{} ({:?})", created.message, created.location);

    let users = client.list_users().await?;
    let user = users.last().expect("user just created");
    println!("Fetched user id={} created_at={}", user.id, user.created_at);

    let created = client
        .create_order(CreateOrderRequest {
            user_id: user.id,
            product_name: "Widget".into(),
            quantity: 2,
            total_price: 19.98,
        })
        .await?;
    println!("{} ({:?})", created.message, created.location);

    for order in client.list_orders().await? {
        println!(
            "Order id={} user={} {}x {} = {}",
            order.id, order.user_id, order.quantity, order.product_name, order.total_price
        );
    }

    // Registering the same email twice is refused by the store.
    let dup = client
        .create_user(CreateUserRequest {
            name: "Example again".into(),
            email: "example@example.com".into(),
        })
        .await;
    match dup {
        Ok(_) => println!("Duplicate email unexpectedly accepted"),
        Err(err) => {
            let status = err.downcast_ref::<reqwest::Error>().and_then(|e| e.status());
            if status == Some(StatusCode::INTERNAL_SERVER_ERROR) {
                println!("Duplicate email rejected");
            } else {
                return Err(err);
            }
        }
    }

    handle.abort();
    Ok(())
}
