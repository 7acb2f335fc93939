// src/main.rs
use clap::Parser;
use team_schedule::cli::{Args, is_config_operation};
use team_schedule::commands::{
    apply_cli_overrides, handle_config_update_command, handle_list_config_command, run_viewer,
};
use team_schedule::config::Config;
use team_schedule::error::AppError;
use team_schedule::logging::setup_logging;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Config is loaded before logging so a custom log path can be honored
    let loaded = Config::load().await;

    // The guard must be kept alive for the duration of the program
    let (log_file_path, _guard) = setup_logging(&args, loaded.as_ref().ok()).await?;
    info!("Logs are being written to: {log_file_path}");

    if args.list_config {
        return handle_list_config_command().await;
    }

    if is_config_operation(&args) {
        return handle_config_update_command(&args).await;
    }

    let mut config = loaded.inspect_err(|e| error!("Failed to load config: {e}"))?;
    apply_cli_overrides(&mut config, &args)?;

    run_viewer(&args, &config).await
}
