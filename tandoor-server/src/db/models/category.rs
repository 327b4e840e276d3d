//! Category row

use super::{api_id, serde_helpers};
use serde::{Deserialize, Serialize};
use shared::models::Category as SharedCategory;
use surrealdb::RecordId;

pub type CategoryId = RecordId;

/// Category row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<CategoryId>,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub sort_order: i32,
}

impl From<Category> for SharedCategory {
    fn from(row: Category) -> Self {
        SharedCategory {
            id: api_id(&row.id),
            name: row.name,
            slug: row.slug,
            sort_order: row.sort_order,
            items: Vec::new(),
        }
    }
}
