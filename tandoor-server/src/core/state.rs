use std::sync::Arc;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::auth::SessionService;
use crate::core::Config;
use crate::db;

/// Shared server state, cloned cheaply into every handler
///
/// | Field | Purpose |
/// |-------|---------|
/// | config | Immutable configuration |
/// | db | Embedded SurrealDB handle |
/// | sessions | Session token issue/verify service |
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub db: Surreal<Db>,
    pub sessions: Arc<SessionService>,
}

impl ServerState {
    /// Open the database, apply seed data and build the session service
    pub async fn initialize(config: &Config) -> anyhow::Result<Self> {
        let db = db::connect(&config.work_dir).await?;
        db::seed::seed_if_empty(&db).await?;

        let sessions = Arc::new(SessionService::with_config(config.session.clone()));

        Ok(Self {
            config: config.clone(),
            db,
            sessions,
        })
    }

    /// In-memory state for tests: throwaway database, seeded, fixed secret
    pub async fn initialize_in_memory(config: &Config) -> anyhow::Result<Self> {
        let db = db::connect_memory().await?;
        db::seed::seed_if_empty(&db).await?;

        let sessions = Arc::new(SessionService::with_config(config.session.clone()));

        Ok(Self {
            config: config.clone(),
            db,
            sessions,
        })
    }
}
