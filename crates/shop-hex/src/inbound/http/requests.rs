//! Typed request bodies and the extractors that turn bad input into 400s.
//!
//! Each create endpoint declares its required fields as a struct; a missing
//! field, a `null`, or a value of the wrong JSON type fails deserialization
//! and the request never reaches a service. Unknown fields are ignored.

use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateOrderRequest {
    pub user_id: i64,
    pub product_name: String,
    pub quantity: i64,
    pub total_price: f64,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// JSON body whose rejection is a 400 with the deserializer's message.
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        Ok(Self(value))
    }
}

/// Integer `{id}` path segment. Anything else is treated as an unmatched
/// route (404), not a bad request.
pub struct EntityId(pub i64);

impl<S> FromRequestParts<S> for EntityId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<i64>::from_request_parts(parts, state).await {
            Ok(Path(id)) => Ok(Self(id)),
            Err(_) => Err(AppError::NotFound(format!(
                "no route for {}",
                parts.uri.path()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_request_ignores_unknown_fields() {
        let req: CreateOrderRequest = serde_json::from_value(serde_json::json!({
            "user_id": 1,
            "product_name": "Widget",
            "quantity": 2,
            "total_price": 5,
            "coupon": "FREE"
        }))
        .unwrap();
        assert_eq!(req.user_id, 1);
        assert_eq!(req.total_price, 5.0);
    }

    #[test]
    fn order_request_fails_closed_on_type_mismatch() {
        let fractional_qty = serde_json::from_value::<CreateOrderRequest>(serde_json::json!({
            "user_id": 1,
            "product_name": "Widget",
            "quantity": 2.5,
            "total_price": 5.0
        }));
        assert!(fractional_qty.is_err());

        let string_user = serde_json::from_value::<CreateOrderRequest>(serde_json::json!({
            "user_id": "one",
            "product_name": "Widget",
            "quantity": 2,
            "total_price": 5.0
        }));
        assert!(string_user.is_err());
    }

    #[test]
    fn user_request_requires_both_fields() {
        let missing_email =
            serde_json::from_value::<CreateUserRequest>(serde_json::json!({ "name": "Ana" }));
        assert!(missing_email.is_err());

        let null_name = serde_json::from_value::<CreateUserRequest>(
            serde_json::json!({ "name": null, "email": "ana@example.com" }),
        );
        assert!(null_name.is_err());
    }
}
