#![allow(dead_code)]

use std::sync::{Mutex, MutexGuard};

use anyhow::{Context, Result};
use axum::Router;
use sqlx::PgPool;

use jobly_api::auth::create_token;
use jobly_api::config::{test_database_url, AppConfig};
use jobly_api::database::{schema, DatabaseManager};
use jobly_api::AppState;

// Database-backed tests share one database; run them one at a time
static DB_LOCK: Mutex<()> = Mutex::new(());

pub struct TestServer {
    pub port: u16,
    pub base_url: String,
}

/// Serve `router` on a free local port for the rest of the test
pub async fn spawn_router(router: Router) -> Result<TestServer> {
    let port = portpicker::pick_unused_port().context("failed to pick free port")?;
    let base_url = format!("http://127.0.0.1:{}", port);

    let listener = tokio::net::TcpListener::bind(("127.0.0.1", port))
        .await
        .context("failed to bind test listener")?;
    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });

    Ok(TestServer { port, base_url })
}

/// Serve the real application with the given state
pub async fn spawn_app(state: AppState) -> Result<TestServer> {
    spawn_router(jobly_api::app(state)).await
}

/// Test configuration. `TEST_DATABASE_URL` is used verbatim; otherwise
/// `DATABASE_URL` is pointed at the `jobly_test` database.
pub fn test_config() -> AppConfig {
    let mut config = AppConfig::test();
    if let Ok(url) = std::env::var("TEST_DATABASE_URL") {
        config.database.url = url;
    } else if let Ok(url) = std::env::var("DATABASE_URL") {
        config.database.url = test_database_url(&url);
    }
    config
}

/// State whose pool is never opened unless a handler queries
pub fn lazy_state() -> AppState {
    AppState::lazy(test_config()).expect("test database URL should parse")
}

pub fn user_token(config: &AppConfig) -> String {
    create_token("u1", false, &config.security).expect("sign user token")
}

pub fn admin_token(config: &AppConfig) -> String {
    create_token("u2", true, &config.security).expect("sign admin token")
}

/// A seeded test database, held exclusively until dropped
pub struct TestDb {
    pub pool: PgPool,
    pub config: AppConfig,
    _guard: MutexGuard<'static, ()>,
}

impl TestDb {
    pub fn state(&self) -> AppState {
        AppState::new(self.pool.clone(), self.config.clone())
    }
}

/// Connect to the test database and reset it to the standard fixtures.
///
/// Tests calling this are `#[ignore]`d by default; run them with
/// `cargo test -- --ignored` against a reachable Postgres.
pub async fn test_db() -> Result<TestDb> {
    let guard = DB_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let config = test_config();

    let pool = DatabaseManager::connect(&config.database)
        .await
        .with_context(|| format!("test database unreachable at {}", config.database.url))?;
    seed(&pool).await.context("failed to seed test fixtures")?;

    Ok(TestDb { pool, config, _guard: guard })
}

async fn seed(pool: &PgPool) -> Result<()> {
    schema::apply(pool).await?;

    sqlx::query("DELETE FROM jobs").execute(pool).await?;
    sqlx::query("DELETE FROM companies").execute(pool).await?;

    sqlx::query(
        "INSERT INTO companies (handle, name, num_employees, description, logo_url)
         VALUES ('c1', 'C1', 1, 'Desc1', 'http://c1.img'),
                ('c2', 'C2', 2, 'Desc2', 'http://c2.img'),
                ('c3', 'C3', 3, 'Desc3', 'http://c3.img')",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "INSERT INTO jobs (title, salary, equity, company_handle)
         VALUES ('junior software engineer', 80000, '0', 'c1'),
                ('senior software engineer', 130000, '0.1', 'c3'),
                ('director of technology', 200000, '0.5', 'c3')",
    )
    .execute(pool)
    .await?;

    Ok(())
}
