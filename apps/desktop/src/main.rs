//! Headless runner: one transform against a running engine, result echoed to
//! the observable store and stdout.

use std::{process::ExitCode, sync::Arc};

use anyhow::Result;
use clap::Parser;
use engine_client::{HttpEngineTransport, ResultStore, TransformClient};
use tracing::{error, info};

mod config;

use config::load_settings;

#[derive(Parser, Debug)]
struct Args {
    /// Spreadsheet to read.
    #[arg(long)]
    src_path: String,
    /// Where the converted file is written.
    #[arg(long)]
    dest_path: String,
    /// Engine base URL; overrides config file and environment.
    #[arg(long)]
    engine_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt().with_env_filter("info").init();
    let args = Args::parse();

    let settings = load_settings();
    let engine_url = args.engine_url.unwrap_or(settings.engine_url);
    info!(%engine_url, "using engine");

    let transport = HttpEngineTransport::new(&engine_url)?;
    let client = TransformClient::new(Arc::new(transport));

    let store = Arc::new(ResultStore::new());
    let _subscription = store.subscribe(|result| {
        info!(
            success = result.is_success(),
            num_rows = result.num_rows,
            errors = result.error.len(),
            warnings = result.warning.len(),
            "result updated"
        );
    });

    // A transport failure propagates out without touching the store; only a
    // delivered engine reply becomes the current result.
    let result = client.transform(&args.src_path, &args.dest_path).await?;
    store.write(result.clone());

    println!("{}", serde_json::to_string_pretty(&result)?);

    for message in &result.warning {
        info!(%message, "transform warning");
    }

    if result.is_success() {
        Ok(ExitCode::SUCCESS)
    } else {
        for message in &result.error {
            error!(%message, "transform failed");
        }
        Ok(ExitCode::FAILURE)
    }
}
