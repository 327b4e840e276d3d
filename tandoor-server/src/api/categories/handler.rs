//! Category API handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use shared::models::{Category as SharedCategory, CategoryCreate, CategoryUpdate};

use crate::core::ServerState;
use crate::db::repository::{CategoryRepository, MenuItemRepository};
use crate::utils::validation::{MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_required_text};
use crate::utils::{AppError, AppResult};

/// GET /api/categories
///
/// The storefront menu page: every category in display order with its
/// menu items nested inside.
pub async fn list_with_items(
    State(state): State<ServerState>,
) -> AppResult<Json<Vec<SharedCategory>>> {
    let categories = CategoryRepository::new(state.db.clone()).find_all().await?;
    let items = MenuItemRepository::new(state.db.clone()).find_all().await?;

    let mut result: Vec<SharedCategory> = categories.into_iter().map(Into::into).collect();
    for item in items {
        let shared_item: shared::models::MenuItem = item.into();
        if let Some(category) = result.iter_mut().find(|c| c.id == shared_item.category_id) {
            category.items.push(shared_item);
        }
    }

    Ok(Json(result))
}

/// POST /api/admin/categories
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<CategoryCreate>,
) -> AppResult<(StatusCode, Json<SharedCategory>)> {
    validate_payload(&payload.name, &payload.slug)?;

    let category = CategoryRepository::new(state.db.clone())
        .create(payload)
        .await?;
    Ok((StatusCode::CREATED, Json(category.into())))
}

/// PUT /api/admin/categories/{id}
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<CategoryUpdate>,
) -> AppResult<Json<SharedCategory>> {
    if let Some(ref name) = payload.name {
        validate_required_text(name, "name", MAX_NAME_LEN)?;
    }
    if let Some(ref slug) = payload.slug {
        validate_required_text(slug, "slug", MAX_SHORT_TEXT_LEN)?;
    }

    let category = CategoryRepository::new(state.db.clone())
        .update(&id, payload)
        .await?;
    Ok(Json(category.into()))
}

/// DELETE /api/admin/categories/{id}
///
/// Menu items in the category are deleted with it.
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    CategoryRepository::new(state.db.clone()).delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

fn validate_payload(name: &str, slug: &str) -> Result<(), AppError> {
    validate_required_text(name, "name", MAX_NAME_LEN)?;
    validate_required_text(slug, "slug", MAX_SHORT_TEXT_LEN)?;
    Ok(())
}
