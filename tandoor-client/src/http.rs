//! HTTP client for the ordering API
//!
//! The session cookie set by `/api/login` lives in the reqwest cookie
//! store, so one client instance serves both the public storefront
//! calls and the admin dashboard calls after login.

use crate::{ClientConfig, ClientError, ClientResult};
use reqwest::{Client, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::models::{
    Category, CategoryCreate, CategoryUpdate, LoginRequest, MenuItem, MenuItemCreate,
    MenuItemUpdate, MessageResponse, Order, OrderCreate, Reservation, ReservationCreate, Status,
    StatusUpdateRequest, UserInfo,
};

/// HTTP client for the ordering API
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .cookie_store(true)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.client.get(self.url(path)).send().await?;
        Self::handle_response(response).await
    }

    async fn post<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> ClientResult<T> {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        Self::handle_response(response).await
    }

    async fn put<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> ClientResult<T> {
        let response = self.client.put(self.url(path)).json(body).send().await?;
        Self::handle_response(response).await
    }

    async fn patch<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self.client.patch(self.url(path)).json(body).send().await?;
        Self::handle_response(response).await
    }

    async fn delete(&self, path: &str) -> ClientResult<()> {
        let response = self.client.delete(self.url(path)).send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        Err(Self::error_for(status, response).await)
    }

    async fn handle_response<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
        let status = response.status();
        if !status.is_success() {
            return Err(Self::error_for(status, response).await);
        }
        response.json().await.map_err(Into::into)
    }

    /// Map a non-2xx response onto a client error, pulling the
    /// `{ "message": ... }` body out when it parses
    async fn error_for(status: StatusCode, response: Response) -> ClientError {
        let text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<MessageResponse>(&text)
            .map(|m| m.message)
            .unwrap_or(text);
        tracing::debug!(%status, %message, "request failed");

        match status {
            StatusCode::UNAUTHORIZED => ClientError::Unauthorized,
            StatusCode::NOT_FOUND => ClientError::NotFound(message),
            StatusCode::BAD_REQUEST | StatusCode::CONFLICT => ClientError::Validation(message),
            _ => ClientError::Internal(message),
        }
    }

    // ========== Auth ==========

    /// Login; on success the session cookie is retained by the client
    pub async fn login(&self, username: &str, password: &str) -> ClientResult<UserInfo> {
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        self.post("/api/login", &request).await
    }

    /// Logout; the server expires the session cookie
    pub async fn logout(&self) -> ClientResult<MessageResponse> {
        let response = self.client.post(self.url("/api/logout")).send().await?;
        Self::handle_response(response).await
    }

    /// Current operator identity, or `Unauthorized` without a session
    pub async fn current_user(&self) -> ClientResult<UserInfo> {
        self.get("/api/user").await
    }

    // ========== Storefront ==========

    /// The full menu: categories in display order with nested items
    pub async fn categories(&self) -> ClientResult<Vec<Category>> {
        self.get("/api/categories").await
    }

    /// Flat menu item list
    pub async fn menu_items(&self) -> ClientResult<Vec<MenuItem>> {
        self.get("/api/menu-items").await
    }

    /// Submit a checkout; the order comes back in `pending` status
    pub async fn create_order(&self, order: &OrderCreate) -> ClientResult<Order> {
        self.post("/api/orders", order).await
    }

    /// Book a table
    pub async fn create_reservation(
        &self,
        reservation: &ReservationCreate,
    ) -> ClientResult<Reservation> {
        self.post("/api/reservations", reservation).await
    }

    // ========== Dashboard ==========

    pub async fn admin_orders(&self) -> ClientResult<Vec<Order>> {
        self.get("/api/admin/orders").await
    }

    pub async fn admin_reservations(&self) -> ClientResult<Vec<Reservation>> {
        self.get("/api/admin/reservations").await
    }

    pub async fn update_order_status(&self, id: &str, status: Status) -> ClientResult<Order> {
        let body = StatusUpdateRequest {
            status: status.to_string(),
        };
        self.patch(&format!("/api/admin/orders/{}/status", id), &body)
            .await
    }

    pub async fn update_reservation_status(
        &self,
        id: &str,
        status: Status,
    ) -> ClientResult<Reservation> {
        let body = StatusUpdateRequest {
            status: status.to_string(),
        };
        self.patch(&format!("/api/admin/reservations/{}/status", id), &body)
            .await
    }

    // ========== Catalog management ==========

    pub async fn create_category(&self, category: &CategoryCreate) -> ClientResult<Category> {
        self.post("/api/admin/categories", category).await
    }

    pub async fn update_category(
        &self,
        id: &str,
        update: &CategoryUpdate,
    ) -> ClientResult<Category> {
        self.put(&format!("/api/admin/categories/{}", id), update)
            .await
    }

    /// Delete a category; its menu items are deleted with it
    pub async fn delete_category(&self, id: &str) -> ClientResult<()> {
        self.delete(&format!("/api/admin/categories/{}", id)).await
    }

    pub async fn create_menu_item(&self, item: &MenuItemCreate) -> ClientResult<MenuItem> {
        self.post("/api/admin/menu-items", item).await
    }

    pub async fn update_menu_item(
        &self,
        id: &str,
        update: &MenuItemUpdate,
    ) -> ClientResult<MenuItem> {
        self.put(&format!("/api/admin/menu-items/{}", id), update)
            .await
    }

    pub async fn delete_menu_item(&self, id: &str) -> ClientResult<()> {
        self.delete(&format!("/api/admin/menu-items/{}", id)).await
    }
}
