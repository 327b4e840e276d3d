//! Menu item row

use super::{api_id, serde_helpers};
use serde::{Deserialize, Serialize};
use shared::models::{ItemPrices, MenuItem as SharedMenuItem};
use surrealdb::RecordId;

pub type MenuItemId = RecordId;

/// Menu item row; `prices` is stored as an embedded structured value
/// and shape-checked on every write
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<MenuItemId>,
    /// Record link to the owning category
    #[serde(with = "serde_helpers::record_id")]
    pub category: RecordId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(
        default = "default_true",
        deserialize_with = "serde_helpers::bool_true"
    )]
    pub is_vegetarian: bool,
    #[serde(
        default = "default_true",
        deserialize_with = "serde_helpers::bool_true"
    )]
    pub is_available: bool,
    pub prices: ItemPrices,
}

fn default_true() -> bool {
    true
}

impl From<MenuItem> for SharedMenuItem {
    fn from(row: MenuItem) -> Self {
        SharedMenuItem {
            id: api_id(&row.id),
            category_id: row.category.to_string(),
            name: row.name,
            description: row.description,
            image_url: row.image_url,
            is_vegetarian: row.is_vegetarian,
            is_available: row.is_available,
            prices: row.prices,
        }
    }
}
