use jobly_api::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL, SECRET_KEY, etc.
    let _ = dotenvy::dotenv();

    jobly_api::app::init_tracing();

    let config = AppConfig::from_env();
    tracing::info!("Starting Jobly API in {:?} mode", config.environment);

    jobly_api::app::serve(config).await
}
