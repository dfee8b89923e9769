use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::Json;
use shop_types::domain::user::User;
use shop_types::ports::ShopRepository;

use super::requests::{CreateUserRequest, EntityId, MessageResponse, ValidatedJson};
use super::AppState;
use crate::errors::AppError;

pub(super) async fn list_users<R: ShopRepository>(
    State(state): State<AppState<R>>,
) -> Result<Json<Vec<User>>, AppError> {
    let list = state.users.list_users().await?;
    Ok(Json(list))
}

pub(super) async fn get_user<R: ShopRepository>(
    State(state): State<AppState<R>>,
    EntityId(id): EntityId,
) -> Result<Json<User>, AppError> {
    let user = state.users.get_user(id).await?;
    Ok(Json(user))
}

pub(super) async fn create_user<R: ShopRepository>(
    State(state): State<AppState<R>>,
    ValidatedJson(payload): ValidatedJson<CreateUserRequest>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<MessageResponse>), AppError> {
    let user = state
        .users
        .create_user(payload.name, payload.email)
        .await?;
    Ok((
        StatusCode::OK,
        [(header::LOCATION, format!("/users/{}", user.id))],
        Json(MessageResponse {
            message: "User created successfully!",
        }),
    ))
}
