use clap::Parser;
use jobly_api::cli::Cli;
use jobly_api::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    jobly_api::app::init_tracing();

    let cli = Cli::parse();

    if let Err(e) = jobly_api::cli::run(cli, AppConfig::from_env()).await {
        match std::env::var("CLI_VERBOSE").as_deref() {
            Ok("true") | Ok("1") => eprintln!("Error: {e:?}"),
            _ => eprintln!("Error: {e}"),
        }
        std::process::exit(1);
    }

    Ok(())
}
