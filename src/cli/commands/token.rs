use serde_json::json;

use crate::auth::create_token;
use crate::cli::OutputFormat;
use crate::config::AppConfig;

pub fn handle(
    config: &AppConfig,
    username: &str,
    is_admin: bool,
    output_format: OutputFormat,
) -> anyhow::Result<()> {
    let token = create_token(username, is_admin, &config.security)?;

    match output_format {
        OutputFormat::Json => println!(
            "{}",
            json!({ "username": username, "isAdmin": is_admin, "token": token })
        ),
        OutputFormat::Text => println!("{}", token),
    }
    Ok(())
}
