//! risk-dashboard: serves the interactive loan risk dashboard.
//!
//! Loads and transforms the dataset once at startup; every filter
//! interaction then works against the cached in-memory table.
//!
//! Usage:
//!   risk-dashboard --input data/loan_data.csv --bind 127.0.0.1:8050

use anyhow::Result;
use loanrisk_core::{config::RiskConfig, dashboard, extract, transform};
use std::env;
use std::path::PathBuf;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let mut config = match string_arg(&args, "--config") {
        Some(path) => RiskConfig::load(&path)?,
        None => RiskConfig::default(),
    };
    if let Some(input) = string_arg(&args, "--input") {
        config.input_path = PathBuf::from(input);
    }
    if let Some(bind) = string_arg(&args, "--bind") {
        config.bind_addr = bind;
    }

    // An unreadable or malformed source leaves the dashboard up with
    // placeholder charts rather than failing the page.
    let records = match extract::extract_data(&config.input_path)
        .and_then(|rows| transform::transform_data(&rows, config.score_bounds))
    {
        Ok(records) => records,
        Err(e) => {
            log::warn!("no data available, serving placeholders: {e}");
            Vec::new()
        }
    };

    println!("risk-dashboard");
    println!("  input:   {}", config.input_path.display());
    println!("  records: {}", records.len());
    println!("  listen:  http://{}", config.bind_addr);

    let app = dashboard::create_app(records);
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn string_arg(args: &[String], flag: &str) -> Option<String> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].clone())
}
