// src/main.rs
use benchboss::auth::Credential;
use benchboss::cli::{Args, is_config_mode};
use benchboss::config::Config;
use benchboss::constants::env_vars;
use benchboss::error::AppError;
use benchboss::fetcher::api::{
    PlatformClient, create_http_client_with_timeout, fetch_roster_report,
};
use benchboss::logging::setup_logging;
use clap::Parser;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Configuration management needs neither a credential nor a team key
    if is_config_mode(&args) {
        if args.list_config {
            Config::display().await?;
            return Ok(());
        }

        let mut config = Config::load().await.unwrap_or_default();

        if let Some(new_url) = args.new_api_base_url {
            config.api_base_url = new_url;
        }

        if let Some(new_log_path) = args.new_log_file_path {
            config.log_file_path = Some(new_log_path);
        } else if args.clear_log_file_path {
            config.log_file_path = None;
            println!("Custom log file path cleared. Using default location.");
        }

        config.save().await?;
        println!("Config updated successfully!");
        return Ok(());
    }

    let (log_file_path, _guard) = setup_logging(&args).await?;
    info!("Logs are being written to: {log_file_path}");

    let team_key = args
        .team_key
        .clone()
        .ok_or_else(|| AppError::config_error("--team-key is required"))?;
    let credential_path = args
        .credential
        .clone()
        .or_else(|| std::env::var(env_vars::CREDENTIAL_FILE).ok())
        .ok_or_else(|| {
            AppError::config_error("--credential or BENCHBOSS_CREDENTIAL_FILE is required")
        })?;

    let config = Config::load().await?;
    let credential = Credential::load(&credential_path).await?;

    let http = create_http_client_with_timeout(config.http_timeout_seconds)?;
    let client = PlatformClient::with_http(http.clone(), &config.api_base_url);

    match fetch_roster_report(&client, &http, &config, credential, &team_key, args.date).await {
        Ok(report) => {
            let json = if args.pretty {
                serde_json::to_string_pretty(&report)?
            } else {
                serde_json::to_string(&report)?
            };
            println!("{json}");
            Ok(())
        }
        Err(e) => {
            // Stage-level diagnostics are already in the log; the
            // user-visible failure stays uniform regardless of which stage
            // failed.
            error!("Roster pipeline failed: {e}");
            if e.is_credential_failure() {
                error!("Credential failure, re-authentication is required");
            }
            eprintln!("benchboss: pipeline failed; see log for details");
            std::process::exit(1);
        }
    }
}
