use crate::cli::Args;
use crate::config::Config;
use crate::data_fetcher::api::{create_http_client, load_teams, resolve_schedule};
use crate::display::Renderer;
use crate::error::AppError;
use crate::state::{LoadState, ScheduleSession, TeamDirectory};
use crossterm::{execute, terminal::SetTitle};
use std::io::{Write, stdout};
use std::path::Path;
use tracing::{info, warn};

/// Handles the --list-config command.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    Config::display().await
}

/// Handles configuration update commands (--set-api-url, --set-log-file, --clear-log-file).
pub async fn handle_config_update_command(args: &Args) -> Result<(), AppError> {
    update_config_at(&Config::get_config_path(), args).await?;
    println!("Config updated successfully!");
    Ok(())
}

/// Applies the update flags to the config file at `path`.
///
/// A missing file starts from the defaults. A file that can't be read or
/// parsed is reported and left untouched.
pub async fn update_config_at(path: &str, args: &Args) -> Result<Config, AppError> {
    let mut config = if Path::new(path).exists() {
        Config::load_from_path(path)
            .await
            .inspect_err(|e| warn!("Not updating unreadable config {path}: {e}"))?
    } else {
        Config::default()
    };

    if let Some(new_url) = &args.new_api_url {
        config.api_base_url = new_url.trim().to_string();
    }

    if let Some(new_log_path) = &args.new_log_file_path {
        config.log_file_path = Some(new_log_path.clone());
    } else if args.clear_log_file_path {
        config.log_file_path = None;
        println!("Custom log file path cleared. Using default location.");
    }

    config.validate()?;
    config.save_to_path(path).await?;
    Ok(config)
}

/// Applies the per-run --sport/--league overrides.
pub fn apply_cli_overrides(config: &mut Config, args: &Args) -> Result<(), AppError> {
    if let Some(sport) = &args.sport {
        config.sport = sport.trim().to_string();
    }
    if let Some(league) = &args.league {
        config.league = league.trim().to_string();
    }
    config.validate()
}

/// Loads the team directory and prints either the table or the selected team's schedule.
///
/// Fetch failures are rendered as error panels; they are not returned as errors.
pub async fn run_viewer(args: &Args, config: &Config) -> Result<(), AppError> {
    let renderer = Renderer::new(args.plain);
    let mut out = stdout();

    if !args.plain {
        execute!(
            out,
            SetTitle(format!("{} SCHEDULE", config.league.to_uppercase()))
        )?;
    }

    let client = create_http_client(config)?;

    let mut directory = TeamDirectory::new();
    directory.start_loading();
    directory.finish(load_teams(&client, config).await);

    let Some(team_query) = args.team.as_deref() else {
        write!(out, "{}", renderer.render_directory(directory.state()))?;
        return Ok(());
    };

    if directory.state().error_message().is_some() {
        write!(out, "{}", renderer.render_directory(directory.state()))?;
        return Ok(());
    }

    let Some(team) = directory.find(team_query).cloned() else {
        let message = AppError::team_not_found(team_query).user_message();
        write!(
            out,
            "{}",
            renderer.render_directory(&LoadState::Failed(message))
        )?;
        return Ok(());
    };

    let mut session = ScheduleSession::new();
    let ticket = session.select(team.id.clone());
    let result = resolve_schedule(&client, config, ticket.team_id()).await;
    if session.complete(&ticket, result) {
        info!("Schedule for {} ready", team.display_name);
    }

    write!(out, "{}", renderer.render_schedule(&team, session.state()))?;
    out.flush()?;
    Ok(())
}
