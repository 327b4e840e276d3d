//! First-run seed data
//!
//! On an empty database this creates the default operator account and a
//! small starter catalog so the storefront is browsable immediately.

use crate::db::repository::{
    CategoryRepository, MenuItemRepository, RepoResult, UserRepository,
};
use shared::models::{CategoryCreate, ItemPrices, MenuItemCreate};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const DEFAULT_USERNAME: &str = "admin";
const DEFAULT_PASSWORD: &str = "admin123";

/// Seed the operator account and starter catalog if the database is empty
pub async fn seed_if_empty(db: &Surreal<Db>) -> RepoResult<()> {
    seed_admin(db).await?;
    seed_catalog(db).await?;
    Ok(())
}

async fn seed_admin(db: &Surreal<Db>) -> RepoResult<()> {
    let users = UserRepository::new(db.clone());
    if users.count().await? > 0 {
        return Ok(());
    }

    users.create(DEFAULT_USERNAME, DEFAULT_PASSWORD).await?;
    tracing::info!("Admin user created");
    Ok(())
}

async fn seed_catalog(db: &Surreal<Db>) -> RepoResult<()> {
    let categories = CategoryRepository::new(db.clone());
    if !categories.find_all().await?.is_empty() {
        return Ok(());
    }

    let items = MenuItemRepository::new(db.clone());

    let starters = categories
        .create(CategoryCreate {
            name: "Starters".to_string(),
            slug: "starters".to_string(),
            sort_order: Some(1),
        })
        .await?;
    let starters_id = starters
        .id
        .as_ref()
        .map(|id| id.to_string())
        .unwrap_or_default();

    let mains = categories
        .create(CategoryCreate {
            name: "Main Course".to_string(),
            slug: "main-course".to_string(),
            sort_order: Some(2),
        })
        .await?;
    let mains_id = mains
        .id
        .as_ref()
        .map(|id| id.to_string())
        .unwrap_or_default();

    items
        .create(MenuItemCreate {
            category_id: starters_id.clone(),
            name: "Paneer Tikka".to_string(),
            description: Some("Char-grilled cottage cheese marinated in spiced yogurt".to_string()),
            image_url: None,
            is_vegetarian: Some(true),
            is_available: Some(true),
            prices: ItemPrices {
                full: 280,
                half: Some(160),
                quarter: None,
            },
        })
        .await?;

    items
        .create(MenuItemCreate {
            category_id: starters_id,
            name: "Hara Bara Kabab".to_string(),
            description: Some("Spinach and green pea patties, shallow fried".to_string()),
            image_url: None,
            is_vegetarian: Some(true),
            is_available: Some(true),
            prices: ItemPrices::full_only(220),
        })
        .await?;

    items
        .create(MenuItemCreate {
            category_id: mains_id.clone(),
            name: "Dal Makhani".to_string(),
            description: Some("Black lentils simmered overnight with butter and cream".to_string()),
            image_url: None,
            is_vegetarian: Some(true),
            is_available: Some(true),
            prices: ItemPrices {
                full: 260,
                half: Some(150),
                quarter: None,
            },
        })
        .await?;

    items
        .create(MenuItemCreate {
            category_id: mains_id,
            name: "Butter Chicken".to_string(),
            description: Some("Tandoori chicken in a tomato and cashew gravy".to_string()),
            image_url: None,
            is_vegetarian: Some(false),
            is_available: Some(true),
            prices: ItemPrices {
                full: 380,
                half: Some(220),
                quarter: None,
            },
        })
        .await?;

    tracing::info!("Starter catalog seeded");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;
    use crate::db::repository::UserRepository;

    #[tokio::test]
    async fn seed_is_idempotent() {
        let db = db::connect_memory().await.unwrap();
        seed_if_empty(&db).await.unwrap();
        seed_if_empty(&db).await.unwrap();

        let users = UserRepository::new(db.clone());
        assert_eq!(users.count().await.unwrap(), 1);

        let categories = CategoryRepository::new(db.clone());
        assert_eq!(categories.find_all().await.unwrap().len(), 2);

        let items = MenuItemRepository::new(db);
        assert_eq!(items.find_all().await.unwrap().len(), 4);
    }
}
