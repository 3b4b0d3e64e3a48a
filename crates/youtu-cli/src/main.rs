/*
[INPUT]:  CLI arguments, YAML configuration file, environment overrides
[OUTPUT]: One youtu API call rendered as JSON on stdout
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags, startup flow, or exit codes
*/

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use youtu_adapter::YoutuClient;
use youtu_cli::{Command, YoutuConfig, run};

/// Exit status when the service answered with a non-zero errorcode
const SERVICE_ERROR_EXIT: u8 = 2;

#[derive(Parser, Debug)]
#[command(name = "youtu", version, about = "Command-line client for the youtu face API")]
struct Cli {
    #[arg(long = "config", value_name = "PATH")]
    config_path: PathBuf,
    /// Override the API host from the config file
    #[arg(long = "host", value_name = "HOST")]
    host: Option<String>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    log_level: String,
    #[arg(long = "dry-run")]
    dry_run: bool,
    #[command(subcommand)]
    command: Command,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = Cli::parse();
    init_tracing(&args.log_level)?;

    info!(
        config_path = %args.config_path.display(),
        dry_run = args.dry_run,
        "starting youtu"
    );

    let mut config = load_config(&args.config_path)?;
    config.apply_env_overrides();
    if let Some(host) = args.host {
        config.host = host;
    }

    let credential = config.credential()?;
    let client = YoutuClient::with_config(credential, config.client_config()?)
        .context("build youtu client")?;
    info!(host = %client.host(), app_id = client.credential().app_id(), "configuration loaded");

    if args.dry_run {
        info!("dry-run requested; configuration validated");
        return Ok(ExitCode::SUCCESS);
    }

    let outcome = run(&client, args.command).await?;
    let rendered = serde_json::to_string_pretty(&outcome.body).context("render output")?;
    println!("{rendered}");

    if outcome.is_success() {
        Ok(ExitCode::SUCCESS)
    } else {
        warn!(
            error_code = outcome.error_code,
            error_msg = %outcome.error_msg,
            "service returned an error"
        );
        Ok(ExitCode::from(SERVICE_ERROR_EXIT))
    }
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}

fn load_config(path: &PathBuf) -> Result<YoutuConfig> {
    let path_str = path.to_str().context("config path must be valid utf-8")?;
    YoutuConfig::from_file(path_str).context("load config")
}
