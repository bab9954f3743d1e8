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

/// Determines if the invocation only manages configuration and therefore
/// needs neither a team key nor a credential.
pub fn is_config_mode(args: &Args) -> bool {
    args.new_api_base_url.is_some()
        || args.new_log_file_path.is_some()
        || args.clear_log_file_path
        || args.list_config
}

/// Fantasy Hockey Lineup Optimizer
///
/// Fetches a fantasy team's roster, player statistics, league settings and the
/// day's game schedule, merges them into per-player records, and prints a JSON
/// report with the original lineup and a score-optimized lineup per ranking
/// criterion (total and average fan points).
///
/// The stdout output is the JSON report only; all logs go to a file (and to
/// stderr with --debug).
#[derive(Parser, Debug)]
#[command(author = "Niko Salonen", about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// Fantasy team key, e.g. nhl.l.12345.t.3. The league and game keys are
    /// derived from its leading components.
    #[arg(short = 't', long = "team-key", help_heading = "Query")]
    pub team_key: Option<String>,

    /// Fetch the roster for a specific date in YYYY-MM-DD format.
    /// If not provided, uses the current date in the reference time zone.
    #[arg(long = "date", short = 'd', help_heading = "Query")]
    pub date: Option<String>,

    /// Path to the credential file (JSON with accessToken, refreshToken,
    /// idToken, expiresAt). Falls back to BENCHBOSS_CREDENTIAL_FILE.
    #[arg(long = "credential", help_heading = "Query")]
    pub credential: Option<String>,

    /// Pretty-print the JSON report.
    #[arg(long = "pretty", help_heading = "Output")]
    pub pretty: bool,

    /// Update fantasy API base URL in config.
    #[arg(
        long = "config",
        help_heading = "Configuration",
        value_name = "API_BASE_URL"
    )]
    pub new_api_base_url: Option<String>,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Enable debug mode: log verbosely to stderr in addition to the log file.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}
