use serde_json::json;

use crate::cli::OutputFormat;
use crate::config::AppConfig;
use crate::database::{schema, DatabaseManager};

pub async fn handle(config: AppConfig, output_format: OutputFormat) -> anyhow::Result<()> {
    let pool = DatabaseManager::connect(&config.database).await?;
    schema::apply(&pool).await?;
    DatabaseManager::close(&pool).await;

    match output_format {
        OutputFormat::Json => println!("{}", json!({ "initialized": true })),
        OutputFormat::Text => println!("Database schema is up to date"),
    }
    Ok(())
}
