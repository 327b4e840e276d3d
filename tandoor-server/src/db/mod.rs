//! Database module
//!
//! Embedded SurrealDB: RocksDB-backed on disk in normal operation, pure
//! in-memory for tests.

pub mod models;
pub mod repository;
pub mod seed;

use std::path::Path;

use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem, RocksDb};

const NAMESPACE: &str = "tandoor";
const DATABASE: &str = "main";

/// Open (or create) the on-disk database under `{work_dir}/data`
pub async fn connect(work_dir: &str) -> Result<Surreal<Db>, surrealdb::Error> {
    let path = Path::new(work_dir).join("data");
    let db = Surreal::new::<RocksDb>(path).await?;
    db.use_ns(NAMESPACE).use_db(DATABASE).await?;
    tracing::info!("Database opened at {}/data", work_dir);
    Ok(db)
}

/// Throwaway in-memory database for tests
pub async fn connect_memory() -> Result<Surreal<Db>, surrealdb::Error> {
    let db = Surreal::new::<Mem>(()).await?;
    db.use_ns(NAMESPACE).use_db(DATABASE).await?;
    Ok(db)
}
