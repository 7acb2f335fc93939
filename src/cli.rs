use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Returns true when the arguments only touch the persisted configuration.
pub fn is_config_operation(args: &Args) -> bool {
    args.list_config
        || args.new_api_url.is_some()
        || args.new_log_file_path.is_some()
        || args.clear_log_file_path
}

/// Team schedule viewer
///
/// Lists the teams of a league and shows a team's last three results and
/// next three games, using the public ESPN sports API.
///
/// Without --team the team directory is printed. With --team, the team is
/// looked up by id or abbreviation and its schedule is shown.
#[derive(Parser, Debug, Default)]
#[command(version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// Show recent and upcoming games for a team (id or abbreviation, e.g. 13 or LAL).
    #[arg(short = 't', long = "team", value_name = "TEAM")]
    pub team: Option<String>,

    /// Sport to query for this run (e.g. basketball, football, hockey).
    #[arg(long = "sport", help_heading = "League")]
    pub sport: Option<String>,

    /// League to query for this run (e.g. nba, nfl, nhl).
    #[arg(long = "league", help_heading = "League")]
    pub league: Option<String>,

    /// Disable colors in the output.
    #[arg(long = "plain", short = 'p', help_heading = "Display Options")]
    pub plain: bool,

    /// Update the API base URL in config.
    #[arg(long = "set-api-url", value_name = "URL", help_heading = "Configuration")]
    pub new_api_url: Option<String>,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Also write logs to the terminal.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_team_and_league() {
        let args = Args::parse_from(["team_schedule", "-t", "LAL", "--league", "wnba", "-p"]);
        assert_eq!(args.team.as_deref(), Some("LAL"));
        assert_eq!(args.league.as_deref(), Some("wnba"));
        assert!(args.plain);
        assert!(!is_config_operation(&args));
    }

    #[test]
    fn test_config_operations_detected() {
        let args = Args::parse_from(["team_schedule", "--list-config"]);
        assert!(is_config_operation(&args));

        let args = Args::parse_from(["team_schedule", "--set-api-url", "http://localhost:8080"]);
        assert!(is_config_operation(&args));

        let args = Args::parse_from(["team_schedule", "--clear-log-file"]);
        assert!(is_config_operation(&args));
    }
}
