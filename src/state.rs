use sqlx::PgPool;
use std::sync::Arc;

use crate::config::AppConfig;
use crate::database::{DatabaseError, DatabaseManager, JobRepository};

/// Shared, read-only state handed to every handler and middleware
#[derive(Debug, Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(pool: PgPool, config: AppConfig) -> Self {
        Self {
            pool,
            config: Arc::new(config),
        }
    }

    /// State whose pool connects on first query
    pub fn lazy(config: AppConfig) -> Result<Self, DatabaseError> {
        let pool = DatabaseManager::connect_lazy(&config.database)?;
        Ok(Self::new(pool, config))
    }

    pub fn jobs(&self) -> JobRepository {
        JobRepository::new(self.pool.clone())
    }
}
