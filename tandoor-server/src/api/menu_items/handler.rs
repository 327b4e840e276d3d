//! Menu item API handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use shared::models::{MenuItem as SharedMenuItem, MenuItemCreate, MenuItemUpdate};

use crate::core::ServerState;
use crate::db::repository::{CategoryRepository, MenuItemRepository};
use crate::utils::validation::{
    MAX_DESCRIPTION_LEN, MAX_NAME_LEN, MAX_URL_LEN, validate_optional_text, validate_required_text,
};
use crate::utils::{AppError, AppResult};

/// GET /api/menu-items
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<SharedMenuItem>>> {
    let items = MenuItemRepository::new(state.db.clone()).find_all().await?;
    Ok(Json(items.into_iter().map(Into::into).collect()))
}

/// POST /api/admin/menu-items
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<MenuItemCreate>,
) -> AppResult<(StatusCode, Json<SharedMenuItem>)> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_optional_text(&payload.description, "description", MAX_DESCRIPTION_LEN)?;
    validate_optional_text(&payload.image_url, "imageUrl", MAX_URL_LEN)?;

    // The category must exist so the storefront menu can place the item
    let categories = CategoryRepository::new(state.db.clone());
    if categories.find_by_id(&payload.category_id).await?.is_none() {
        return Err(AppError::validation(format!(
            "Category {} not found",
            payload.category_id
        )));
    }

    let item = MenuItemRepository::new(state.db.clone())
        .create(payload)
        .await?;
    Ok((StatusCode::CREATED, Json(item.into())))
}

/// PUT /api/admin/menu-items/{id}
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<MenuItemUpdate>,
) -> AppResult<Json<SharedMenuItem>> {
    if let Some(ref name) = payload.name {
        validate_required_text(name, "name", MAX_NAME_LEN)?;
    }
    validate_optional_text(&payload.description, "description", MAX_DESCRIPTION_LEN)?;
    validate_optional_text(&payload.image_url, "imageUrl", MAX_URL_LEN)?;

    if let Some(ref category_id) = payload.category_id {
        let categories = CategoryRepository::new(state.db.clone());
        if categories.find_by_id(category_id).await?.is_none() {
            return Err(AppError::validation(format!(
                "Category {} not found",
                category_id
            )));
        }
    }

    let item = MenuItemRepository::new(state.db.clone())
        .update(&id, payload)
        .await?;
    Ok(Json(item.into()))
}

/// DELETE /api/admin/menu-items/{id}
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    MenuItemRepository::new(state.db.clone()).delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
