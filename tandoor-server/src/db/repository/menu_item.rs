//! Menu item repository

use super::{BaseRepository, RepoError, RepoResult, record_id, record_key};
use crate::db::models::MenuItem;
use serde::Serialize;
use shared::models::{ItemPrices, MenuItemCreate, MenuItemUpdate};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "menu_items";
const CATEGORY_TABLE: &str = "categories";

#[derive(Clone)]
pub struct MenuItemRepository {
    base: BaseRepository,
}

impl MenuItemRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Flat list of all menu items
    pub async fn find_all(&self) -> RepoResult<Vec<MenuItem>> {
        let items: Vec<MenuItem> = self
            .base
            .db()
            .query("SELECT * FROM menu_items ORDER BY name")
            .await?
            .take(0)?;
        Ok(items)
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<MenuItem>> {
        let key = record_key(TABLE, id);
        let item: Option<MenuItem> = self.base.db().select((TABLE, key)).await?;
        Ok(item)
    }

    /// Create a menu item; the prices shape is validated before the write
    pub async fn create(&self, data: MenuItemCreate) -> RepoResult<MenuItem> {
        data.prices
            .validate()
            .map_err(|e| RepoError::Validation(e.to_string()))?;

        let category = record_id(CATEGORY_TABLE, &data.category_id);

        let item = MenuItem {
            id: None,
            category,
            name: data.name,
            description: data.description,
            image_url: data.image_url,
            is_vegetarian: data.is_vegetarian.unwrap_or(true),
            is_available: data.is_available.unwrap_or(true),
            prices: data.prices,
        };

        let created: Option<MenuItem> = self.base.db().create(TABLE).content(item).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create menu item".to_string()))
    }

    pub async fn update(&self, id: &str, data: MenuItemUpdate) -> RepoResult<MenuItem> {
        let key = record_key(TABLE, id);
        if self.find_by_id(key).await?.is_none() {
            return Err(RepoError::NotFound(format!("Menu item {} not found", id)));
        }

        if let Some(ref prices) = data.prices {
            prices
                .validate()
                .map_err(|e| RepoError::Validation(e.to_string()))?;
        }

        #[derive(Serialize)]
        struct MenuItemUpdateDb {
            // Stored in string form, matching the create path
            #[serde(skip_serializing_if = "Option::is_none")]
            category: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            name: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            description: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            image_url: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            is_vegetarian: Option<bool>,
            #[serde(skip_serializing_if = "Option::is_none")]
            is_available: Option<bool>,
            #[serde(skip_serializing_if = "Option::is_none")]
            prices: Option<ItemPrices>,
        }

        let update_data = MenuItemUpdateDb {
            category: data
                .category_id
                .as_deref()
                .map(|id| record_id(CATEGORY_TABLE, id).to_string()),
            name: data.name,
            description: data.description,
            image_url: data.image_url,
            is_vegetarian: data.is_vegetarian,
            is_available: data.is_available,
            prices: data.prices,
        };

        let thing = record_id(TABLE, key);
        self.base
            .db()
            .query("UPDATE $thing MERGE $data")
            .bind(("thing", thing))
            .bind(("data", update_data))
            .await?;

        self.find_by_id(key)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Menu item {} not found", id)))
    }

    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let key = record_key(TABLE, id);
        if self.find_by_id(key).await?.is_none() {
            return Err(RepoError::NotFound(format!("Menu item {} not found", id)));
        }

        let thing = record_id(TABLE, key);
        self.base
            .db()
            .query("DELETE $thing")
            .bind(("thing", thing))
            .await?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;
    use crate::db::repository::CategoryRepository;
    use shared::models::CategoryCreate;

    async fn seeded_category(db: &Surreal<Db>) -> String {
        let repo = CategoryRepository::new(db.clone());
        let cat = repo
            .create(CategoryCreate {
                name: "Starters".to_string(),
                slug: "starters".to_string(),
                sort_order: Some(1),
            })
            .await
            .unwrap();
        cat.id.as_ref().unwrap().to_string()
    }

    fn paneer_tikka(category_id: &str) -> MenuItemCreate {
        MenuItemCreate {
            category_id: category_id.to_string(),
            name: "Paneer Tikka".to_string(),
            description: Some("Char-grilled cottage cheese".to_string()),
            image_url: None,
            is_vegetarian: None,
            is_available: None,
            prices: ItemPrices {
                full: 280,
                half: Some(160),
                quarter: None,
            },
        }
    }

    #[tokio::test]
    async fn create_defaults_and_portion_prices() {
        let db = db::connect_memory().await.unwrap();
        let cat_id = seeded_category(&db).await;
        let repo = MenuItemRepository::new(db);

        let item = repo.create(paneer_tikka(&cat_id)).await.unwrap();
        assert!(item.is_vegetarian);
        assert!(item.is_available);
        assert_eq!(item.prices.half, Some(160));

        let fetched = repo
            .find_by_id(&item.id.as_ref().unwrap().to_string())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(fetched.name, "Paneer Tikka");
        assert_eq!(fetched.category.to_string(), cat_id);
    }

    #[tokio::test]
    async fn zero_price_is_rejected_on_write() {
        let db = db::connect_memory().await.unwrap();
        let cat_id = seeded_category(&db).await;
        let repo = MenuItemRepository::new(db);

        let mut create = paneer_tikka(&cat_id);
        create.prices = ItemPrices::full_only(0);
        assert!(matches!(
            repo.create(create).await,
            Err(RepoError::Validation(_))
        ));

        let item = repo.create(paneer_tikka(&cat_id)).await.unwrap();
        let update = MenuItemUpdate {
            prices: Some(ItemPrices {
                full: 280,
                half: Some(0),
                quarter: None,
            }),
            ..Default::default()
        };
        assert!(matches!(
            repo.update(&item.id.as_ref().unwrap().to_string(), update)
                .await,
            Err(RepoError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn update_missing_item_is_not_found() {
        let db = db::connect_memory().await.unwrap();
        let repo = MenuItemRepository::new(db);
        let err = repo
            .update("menu_items:nope", MenuItemUpdate::default())
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::NotFound(_)));
    }
}
