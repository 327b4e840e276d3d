//! Order API handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use shared::models::{Order as SharedOrder, OrderCreate, OrderType, Status, StatusUpdateRequest};

use crate::core::ServerState;
use crate::db::repository::OrderRepository;
use crate::utils::validation::{
    MAX_ADDRESS_LEN, MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_optional_text,
    validate_required_text,
};
use crate::utils::{AppError, AppResult};

/// POST /api/orders
///
/// Storefront checkout. The payload carries the cart snapshot; the
/// submitted total must match the sum of line totals.
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<OrderCreate>,
) -> AppResult<(StatusCode, Json<SharedOrder>)> {
    validate_order(&payload)?;

    let order = OrderRepository::new(state.db.clone())
        .create(payload)
        .await?;
    tracing::info!(
        order_id = %order.id.as_ref().map(|id| id.to_string()).unwrap_or_default(),
        total = order.total_amount,
        "order placed"
    );
    Ok((StatusCode::CREATED, Json(order.into())))
}

/// GET /api/admin/orders
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<SharedOrder>>> {
    let orders = OrderRepository::new(state.db.clone()).find_all().await?;
    Ok(Json(orders.into_iter().map(Into::into).collect()))
}

/// PATCH /api/admin/orders/{id}/status
pub async fn update_status(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<StatusUpdateRequest>,
) -> AppResult<Json<SharedOrder>> {
    let next: Status = payload
        .status
        .parse()
        .map_err(|e: shared::models::TransitionError| AppError::validation(e.to_string()))?;

    let order = OrderRepository::new(state.db.clone())
        .update_status(&id, next)
        .await?;
    tracing::info!(order_id = %id, status = %next, "order status updated");
    Ok(Json(order.into()))
}

fn validate_order(payload: &OrderCreate) -> Result<(), AppError> {
    validate_required_text(&payload.customer_name, "customerName", MAX_NAME_LEN)?;
    validate_required_text(&payload.customer_phone, "customerPhone", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.customer_address, "customerAddress", MAX_ADDRESS_LEN)?;

    if payload.order_type == OrderType::Delivery {
        let has_address = payload
            .customer_address
            .as_deref()
            .is_some_and(|a| !a.trim().is_empty());
        if !has_address {
            return Err(AppError::validation(
                "customerAddress is required for delivery orders",
            ));
        }
    }

    if payload.items.is_empty() {
        return Err(AppError::validation("Order must contain at least one item"));
    }
    for line in &payload.items {
        validate_required_text(&line.name, "item name", MAX_NAME_LEN)?;
        if line.quantity == 0 {
            return Err(AppError::validation(format!(
                "Quantity for '{}' must be at least 1",
                line.name
            )));
        }
        if line.price == 0 {
            return Err(AppError::validation(format!(
                "Price for '{}' must be positive",
                line.name
            )));
        }
    }

    let computed = payload
        .computed_total()
        .ok_or_else(|| AppError::validation("Order total exceeds the maximum amount"))?;
    if payload.total_amount != computed {
        return Err(AppError::validation(format!(
            "totalAmount {} does not match line totals {}",
            payload.total_amount, computed
        )));
    }

    Ok(())
}
