use sqlx::PgPool;
use tracing::info;

use crate::database::manager::DatabaseError;

/// Tables owned by the API. `companies` exists because every job belongs to one.
pub const SCHEMA_SQL: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS companies (
        handle VARCHAR(25) PRIMARY KEY CHECK (handle = lower(handle)),
        name TEXT UNIQUE NOT NULL,
        num_employees INTEGER CHECK (num_employees >= 0),
        description TEXT NOT NULL,
        logo_url TEXT
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS jobs (
        id SERIAL PRIMARY KEY,
        title TEXT NOT NULL,
        salary INTEGER CHECK (salary >= 0),
        equity NUMERIC CHECK (equity <= 1.0),
        company_handle VARCHAR(25) NOT NULL
            REFERENCES companies ON DELETE CASCADE
    )
    "#,
];

/// Create any missing tables. Safe to run repeatedly.
pub async fn apply(pool: &PgPool) -> Result<(), DatabaseError> {
    for statement in SCHEMA_SQL {
        sqlx::query(statement).execute(pool).await?;
    }
    info!("Schema applied ({} statements)", SCHEMA_SQL.len());
    Ok(())
}
