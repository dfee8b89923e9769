use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::Json;
use shop_types::domain::order::Order;
use shop_types::ports::ShopRepository;

use super::requests::{CreateOrderRequest, EntityId, MessageResponse, ValidatedJson};
use super::AppState;
use crate::errors::AppError;

pub(super) async fn list_orders<R: ShopRepository>(
    State(state): State<AppState<R>>,
) -> Result<Json<Vec<Order>>, AppError> {
    let list = state.orders.list_orders().await?;
    Ok(Json(list))
}

pub(super) async fn get_order<R: ShopRepository>(
    State(state): State<AppState<R>>,
    EntityId(id): EntityId,
) -> Result<Json<Order>, AppError> {
    let order = state.orders.get_order(id).await?;
    Ok(Json(order))
}

pub(super) async fn create_order<R: ShopRepository>(
    State(state): State<AppState<R>>,
    ValidatedJson(payload): ValidatedJson<CreateOrderRequest>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<MessageResponse>), AppError> {
    let order = state
        .orders
        .create_order(
            payload.user_id,
            payload.product_name,
            payload.quantity,
            payload.total_price,
        )
        .await?;
    Ok((
        StatusCode::OK,
        [(header::LOCATION, format!("/orders/{}", order.id))],
        Json(MessageResponse {
            message: "Order created successfully!",
        }),
    ))
}
