//! User repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::User;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "users";

#[derive(Clone)]
pub struct UserRepository {
    base: BaseRepository,
}

impl UserRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>> {
        let username_owned = username.to_string();
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM users WHERE username = $username LIMIT 1")
            .bind(("username", username_owned))
            .await?;
        let users: Vec<User> = result.take(0)?;
        Ok(users.into_iter().next())
    }

    pub async fn count(&self) -> RepoResult<usize> {
        let users: Vec<User> = self.base.db().select(TABLE).await?;
        Ok(users.len())
    }

    /// Create an account; `password` is hashed before the write
    pub async fn create(&self, username: &str, password: &str) -> RepoResult<User> {
        if self.find_by_username(username).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "User '{}' already exists",
                username
            )));
        }

        let hash = User::hash_password(password)
            .map_err(|e| RepoError::Database(format!("Password hashing failed: {}", e)))?;

        let user = User {
            id: None,
            username: username.to_string(),
            password: hash,
        };

        let created: Option<User> = self.base.db().create(TABLE).content(user).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create user".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;

    #[tokio::test]
    async fn create_and_authenticate() {
        let db = db::connect_memory().await.unwrap();
        let repo = UserRepository::new(db);

        repo.create("admin", "admin123").await.unwrap();
        let user = repo.find_by_username("admin").await.unwrap().unwrap();
        assert!(user.verify_password("admin123").unwrap());
        assert!(!user.verify_password("wrong").unwrap());
    }

    #[tokio::test]
    async fn duplicate_username_is_rejected() {
        let db = db::connect_memory().await.unwrap();
        let repo = UserRepository::new(db);

        repo.create("admin", "admin123").await.unwrap();
        let err = repo.create("admin", "other").await.unwrap_err();
        assert!(matches!(err, RepoError::Duplicate(_)));
    }
}
