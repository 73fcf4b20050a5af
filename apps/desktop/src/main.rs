use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::{Context, Result};
use clap::Parser;
use client_core::{
    bind,
    config::{load_settings_from, ClientSettings, DEFAULT_CONFIG_FILE},
    HttpGenerateClient, SubmitHandler, TracingLog,
};
use tokio::io::{stdin, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod terminal;

use terminal::{LineControl, PrintAlerts, TerminalField};

/// Sends floorplan descriptions to a generate server.
///
/// Without `--input`, every line read from stdin is submitted as its own
/// request until stdin closes.
#[derive(Parser, Debug)]
struct Args {
    /// Base URL of the generate server, e.g. http://127.0.0.1:5000
    #[arg(long)]
    server_url: Option<String>,
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,
    /// Submit one description and exit
    #[arg(long)]
    input: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();
    let args = Args::parse();

    let settings = resolve_settings(args.server_url, &args.config);
    let transport = Arc::new(HttpGenerateClient::new(settings.generate_endpoint()?));
    info!(endpoint = %transport.endpoint(), "using generate endpoint");

    if let Some(description) = args.input {
        let handler = SubmitHandler::new(
            Arc::new(description),
            transport,
            Arc::new(PrintAlerts),
            Arc::new(TracingLog),
        );
        handler
            .handle()
            .await
            .context("floorplan description was not submitted")?;
        return Ok(());
    }

    let field = Arc::new(TerminalField::default());
    let control = LineControl::new(BufReader::new(stdin()), field.clone());
    let handled = bind(
        control,
        field,
        transport,
        Arc::new(PrintAlerts),
        Arc::new(TracingLog),
    )
    .run()
    .await;
    info!(handled, "input closed");

    Ok(())
}

/// `--server-url` replaces whatever the settings file and environment say.
fn resolve_settings(server_url: Option<String>, config: &Path) -> ClientSettings {
    match server_url {
        Some(base_url) => ClientSettings { base_url },
        None => load_settings_from(config),
    }
}
