//! Category repository

use super::{BaseRepository, RepoError, RepoResult, record_id, record_key};
use crate::db::models::Category;
use serde::Serialize;
use shared::models::{CategoryCreate, CategoryUpdate};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "categories";

#[derive(Clone)]
pub struct CategoryRepository {
    base: BaseRepository,
}

impl CategoryRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// All categories in display order
    pub async fn find_all(&self) -> RepoResult<Vec<Category>> {
        let categories: Vec<Category> = self
            .base
            .db()
            .query("SELECT * FROM categories ORDER BY sort_order")
            .await?
            .take(0)?;
        Ok(categories)
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Category>> {
        let key = record_key(TABLE, id);
        let category: Option<Category> = self.base.db().select((TABLE, key)).await?;
        Ok(category)
    }

    pub async fn find_by_slug(&self, slug: &str) -> RepoResult<Option<Category>> {
        let slug_owned = slug.to_string();
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM categories WHERE slug = $slug LIMIT 1")
            .bind(("slug", slug_owned))
            .await?;
        let categories: Vec<Category> = result.take(0)?;
        Ok(categories.into_iter().next())
    }

    /// Create a category; slugs are unique
    pub async fn create(&self, data: CategoryCreate) -> RepoResult<Category> {
        if self.find_by_slug(&data.slug).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Category '{}' already exists",
                data.slug
            )));
        }

        let category = Category {
            id: None,
            name: data.name,
            slug: data.slug,
            sort_order: data.sort_order.unwrap_or(0),
        };

        let created: Option<Category> = self.base.db().create(TABLE).content(category).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create category".to_string()))
    }

    pub async fn update(&self, id: &str, data: CategoryUpdate) -> RepoResult<Category> {
        let key = record_key(TABLE, id);
        let existing = self
            .find_by_id(key)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Category {} not found", id)))?;

        // Check slug uniqueness when changing
        if let Some(ref new_slug) = data.slug
            && new_slug != &existing.slug
            && self.find_by_slug(new_slug).await?.is_some()
        {
            return Err(RepoError::Duplicate(format!(
                "Category '{}' already exists",
                new_slug
            )));
        }

        #[derive(Serialize)]
        struct CategoryUpdateDb {
            #[serde(skip_serializing_if = "Option::is_none")]
            name: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            slug: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            sort_order: Option<i32>,
        }

        let update_data = CategoryUpdateDb {
            name: data.name,
            slug: data.slug,
            sort_order: data.sort_order,
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
            .ok_or_else(|| RepoError::NotFound(format!("Category {} not found", id)))
    }

    /// Delete a category and cascade-delete its menu items
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let key = record_key(TABLE, id);
        if self.find_by_id(key).await?.is_none() {
            return Err(RepoError::NotFound(format!("Category {} not found", id)));
        }

        let thing = record_id(TABLE, key);
        // Rows store the category link in its string form
        self.base
            .db()
            .query("DELETE menu_items WHERE category = $cat")
            .bind(("cat", thing.to_string()))
            .await?;
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
    use crate::db::repository::MenuItemRepository;
    use shared::models::{ItemPrices, MenuItemCreate};

    fn category(name: &str, slug: &str, sort_order: i32) -> CategoryCreate {
        CategoryCreate {
            name: name.to_string(),
            slug: slug.to_string(),
            sort_order: Some(sort_order),
        }
    }

    #[tokio::test]
    async fn create_list_ordered_by_sort_order() {
        let db = db::connect_memory().await.unwrap();
        let repo = CategoryRepository::new(db);

        repo.create(category("Main Course", "main-course", 2))
            .await
            .unwrap();
        repo.create(category("Starters", "starters", 1))
            .await
            .unwrap();

        let all = repo.find_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].slug, "starters");
        assert_eq!(all[1].slug, "main-course");
    }

    #[tokio::test]
    async fn duplicate_slug_is_rejected() {
        let db = db::connect_memory().await.unwrap();
        let repo = CategoryRepository::new(db);

        repo.create(category("Starters", "starters", 1))
            .await
            .unwrap();
        let err = repo
            .create(category("Also Starters", "starters", 2))
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::Duplicate(_)));
    }

    #[tokio::test]
    async fn delete_cascades_to_menu_items() {
        let db = db::connect_memory().await.unwrap();
        let categories = CategoryRepository::new(db.clone());
        let items = MenuItemRepository::new(db);

        let starters = categories
            .create(category("Starters", "starters", 1))
            .await
            .unwrap();
        let cat_id = starters.id.as_ref().unwrap().to_string();

        items
            .create(MenuItemCreate {
                category_id: cat_id.clone(),
                name: "Paneer Tikka".to_string(),
                description: None,
                image_url: None,
                is_vegetarian: None,
                is_available: None,
                prices: ItemPrices::full_only(280),
            })
            .await
            .unwrap();
        assert_eq!(items.find_all().await.unwrap().len(), 1);

        categories.delete(&cat_id).await.unwrap();
        assert!(categories.find_by_id(&cat_id).await.unwrap().is_none());
        assert!(items.find_all().await.unwrap().is_empty());
    }
}
