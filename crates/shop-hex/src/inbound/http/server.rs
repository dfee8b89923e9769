use axum::{http::Uri, routing::get, serve, Json, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use super::{orders, users};
use crate::application::order_service::OrderService;
use crate::application::user_service::UserService;
use crate::errors::AppError;
use shop_types::ports::ShopRepository;

#[derive(Clone)]
pub struct HttpServerConfig {
    pub port: String,
}

/// Services shared by every handler; cloning only bumps the `Arc`s.
pub struct AppState<R: ShopRepository> {
    pub users: Arc<UserService<R>>,
    pub orders: Arc<OrderService<R>>,
}

impl<R: ShopRepository> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            users: self.users.clone(),
            orders: self.orders.clone(),
        }
    }
}

impl<R: ShopRepository + Clone> AppState<R> {
    pub fn new(repo: R) -> Self {
        Self {
            users: Arc::new(UserService::new(repo.clone())),
            orders: Arc::new(OrderService::new(repo)),
        }
    }
}

#[derive(Clone)]
pub struct HttpServer<R>
where
    R: ShopRepository,
{
    pub state: AppState<R>,
    pub config: HttpServerConfig,
}

impl<R> HttpServer<R>
where
    R: ShopRepository,
{
    pub async fn new(state: AppState<R>, config: HttpServerConfig) -> anyhow::Result<Self> {
        Ok(Self { state, config })
    }

    pub fn router(&self) -> Router {
        let trace_layer = TraceLayer::new_for_http()
            .make_span_with(|request: &axum::extract::Request<_>| {
                let uri = request.uri().to_string();
                let request_id = Uuid::new_v4();
                tracing::info_span!(
                    "http_request",
                    %request_id,
                    method = %request.method(),
                    uri
                )
            })
            .on_request(
                |request: &axum::extract::Request<_>, span: &tracing::Span| {
                    tracing::info!(
                        parent: span,
                        method = %request.method(),
                        uri = %request.uri(),
                        "request"
                    );
                },
            )
            .on_response(
                |response: &axum::response::Response, latency: Duration, span: &tracing::Span| {
                    tracing::info!(
                        parent: span,
                        status = %response.status(),
                        latency_ms = %latency.as_millis(),
                        "response"
                    );
                },
            );

        Router::new()
            .route("/health", get(health))
            .route(
                "/users",
                get(users::list_users::<R>).post(users::create_user::<R>),
            )
            .route("/users/{id}", get(users::get_user::<R>))
            .route(
                "/orders",
                get(orders::list_orders::<R>).post(orders::create_order::<R>),
            )
            .route("/orders/{id}", get(orders::get_order::<R>))
            .fallback(not_found)
            .layer(trace_layer)
            .with_state(self.state.clone())
    }

    pub async fn run(self) -> anyhow::Result<()> {
        let app = self.router();
        let addr: SocketAddr = format!("0.0.0.0:{}", self.config.port).parse()?;
        tracing::info!("starting server on {}", addr);
        let listener = tokio::net::TcpListener::bind(addr).await?;
        serve(listener, app.into_make_service()).await?;
        Ok(())
    }
}

async fn health() -> (axum::http::StatusCode, Json<serde_json::Value>) {
    (
        axum::http::StatusCode::OK,
        Json(serde_json::json!({ "status": "ok" })),
    )
}

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("no route for {}", uri.path()))
}

