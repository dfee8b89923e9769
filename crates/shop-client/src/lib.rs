use std::time::Duration;

use anyhow::Context;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use shop_types::domain::order::{Order, OrderId};
use shop_types::domain::user::{User, UserId};

#[derive(Clone)]
pub struct ShopClientBuilder {
    base: Url,
    headers: HeaderMap,
    timeout: Option<Duration>,
    client: Option<reqwest::Client>,
}

#[derive(Clone)]
pub struct ShopClient {
    base: Url,
    client: reqwest::Client,
}

impl ShopClient {
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        Self::builder(base_url)?.build()
    }

    pub fn builder(base_url: &str) -> anyhow::Result<ShopClientBuilder> {
        let base = Url::parse(base_url).context("invalid base url")?;
        Ok(ShopClientBuilder {
            base,
            headers: HeaderMap::new(),
            timeout: None,
            client: None,
        })
    }

    fn url(&self, path: &str) -> anyhow::Result<Url> {
        self.base.join(path).context("failed to join url")
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> anyhow::Result<T> {
        let res = self
            .client
            .get(self.url(path)?)
            .send()
            .await?
            .error_for_status()?;
        Ok(res.json().await?)
    }

    async fn post_json<B: Serialize>(&self, path: &str, body: &B) -> anyhow::Result<Created> {
        let res = self
            .client
            .post(self.url(path)?)
            .json(body)
            .send()
            .await?
            .error_for_status()?;
        let location = res
            .headers()
            .get(reqwest::header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        let body: MessageResponse = res.json().await?;
        tracing::debug!(?location, message = %body.message, "created");
        Ok(Created {
            message: body.message,
            location,
        })
    }

    pub async fn create_user(&self, req: CreateUserRequest) -> anyhow::Result<Created> {
        self.post_json("users", &req).await
    }

    pub async fn get_user(&self, id: UserId) -> anyhow::Result<User> {
        self.get_json(&format!("users/{id}")).await
    }

    pub async fn list_users(&self) -> anyhow::Result<Vec<User>> {
        self.get_json("users").await
    }

    pub async fn create_order(&self, req: CreateOrderRequest) -> anyhow::Result<Created> {
        self.post_json("orders", &req).await
    }

    pub async fn get_order(&self, id: OrderId) -> anyhow::Result<Order> {
        self.get_json(&format!("orders/{id}")).await
    }

    pub async fn list_orders(&self) -> anyhow::Result<Vec<Order>> {
        self.get_json("orders").await
    }
}

impl ShopClientBuilder {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_header(
        mut self,
        key: impl AsRef<str>,
        value: impl AsRef<str>,
    ) -> anyhow::Result<Self> {
        let header_name =
            HeaderName::from_bytes(key.as_ref().as_bytes()).context("invalid header name")?;
        let header_value = HeaderValue::from_str(value.as_ref()).context("invalid header value")?;
        self.headers.insert(header_name, header_value);
        Ok(self)
    }

    pub fn with_reqwest_client(mut self, client: reqwest::Client) -> Self {
        self.client = Some(client);
        self
    }

    pub fn build(self) -> anyhow::Result<ShopClient> {
        if let Some(client) = self.client {
            return Ok(ShopClient {
                base: self.base,
                client,
            });
        }

        let mut builder = reqwest::Client::builder();
        if !self.headers.is_empty() {
            builder = builder.default_headers(self.headers);
        }
        if let Some(t) = self.timeout {
            builder = builder.timeout(t);
        }
        let client = builder.build()?;
        Ok(ShopClient {
            base: self.base,
            client,
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CreateOrderRequest {
    pub user_id: UserId,
    pub product_name: String,
    pub quantity: i64,
    pub total_price: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
struct MessageResponse {
    message: String,
}

/// Outcome of a successful create: the server's message and, when sent,
/// the path of the new resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Created {
    pub message: String,
    pub location: Option<String>,
}
