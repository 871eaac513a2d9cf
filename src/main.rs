use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Result};
use clap::Parser;
use flexible_select::{
    util, App, CreateFlow, HttpCreateClient, SelectConfig, SelectControl, SelectOption,
};

/// Terminal select control with an inline create-new flow
#[derive(Debug, Parser)]
#[command(name = "flexible-select", version, about)]
struct Cli {
    /// Create endpoint the control submits to
    endpoint: String,

    /// Title shown above the control
    #[arg(long, default_value = "Select")]
    title: String,

    /// Initial option as `value=text`; repeatable, defaults to one
    /// empty-valued "Choose one" entry
    #[arg(long = "option", value_name = "VALUE=TEXT")]
    options: Vec<String>,

    /// Path to a TOML file with config overrides
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn parse_options(raw: &[String]) -> Result<Vec<SelectOption>> {
    if raw.is_empty() {
        return Ok(vec![SelectOption::original("", "Choose one")]);
    }
    raw.iter()
        .map(|entry| match entry.split_once('=') {
            Some((value, text)) => Ok(SelectOption::original(value, text)),
            None => bail!("invalid --option {entry:?}, expected VALUE=TEXT"),
        })
        .collect()
}

#[tokio::main]
async fn main() -> Result<()> {
    // Log to a file; the terminal belongs to the TUI
    fs::create_dir_all(util::logs_dir())?;
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(util::log_file_path())?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(log_file)
        .with_ansi(false)
        .init();

    let cli = Cli::parse();

    let config_file = cli.config.unwrap_or_else(util::config_path);
    let config = SelectConfig::load(&config_file)?;

    let mut control = SelectControl::new(cli.endpoint, parse_options(&cli.options)?)?;
    let flow = CreateFlow::attach(&mut control, config);

    let mut app = App::new(
        cli.title,
        control,
        flow,
        Arc::new(HttpCreateClient::new()),
    );
    app.run().await
}
