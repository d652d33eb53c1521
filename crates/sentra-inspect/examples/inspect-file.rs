//! Example: Inspect a local file against the configured inspection endpoint.
//!
//! Usage: `cargo run --example inspect-file -- projects/my-project path/to/file [IMAGE|TEXT_UTF8]`

use sentra_core::AppConfig;
use sentra_inspect::{inspect_file, write_report, HttpInspectionService, InspectConfig};
use std::path::Path;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 {
        eprintln!("usage: inspect-file <parent> <path> [IMAGE|TEXT_UTF8]");
        return Err("missing arguments".into());
    }
    let parent = &args[1];
    let path = Path::new(&args[2]);
    let kind = args.get(3).map_or("TEXT_UTF8", String::as_str);

    let config = AppConfig::load_with_env()?;
    let token = config
        .service
        .auth_token()
        .ok_or_else(|| format!("set {} to authenticate", config.service.auth_token_env))?;

    let service = Arc::new(HttpInspectionService::from_config(&config.service, token)?);
    let inspect_config = InspectConfig::from_settings(&config.inspection)?;

    let result = inspect_file(service, parent, path, kind, &inspect_config).await?;
    write_report(&mut std::io::stdout().lock(), &result)?;

    Ok(())
}
