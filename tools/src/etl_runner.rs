//! etl-runner: headless batch pipeline for the loan warehouse.
//!
//! Usage:
//!   etl-runner --input data/loan_data.csv --db loan_warehouse.db --out-dir outputs
//!   etl-runner --gen 500 --seed 42 --input data/loan_data.csv
//!   etl-runner --config config.json
//!   etl-runner --bounds 0.1:0.9

use anyhow::Result;
use loanrisk_core::{
    config::RiskConfig,
    pipeline,
    synth::{self, SynthConfig},
    transform::ScoreBounds,
};
use std::env;
use std::path::PathBuf;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let mut config = match string_arg(&args, "--config") {
        Some(path) => RiskConfig::load(&path)?,
        None => RiskConfig::default(),
    };
    if let Some(input) = string_arg(&args, "--input") {
        config.input_path = PathBuf::from(input);
    }
    if let Some(db) = string_arg(&args, "--db") {
        config.db_path = db;
    }
    if let Some(out_dir) = string_arg(&args, "--out-dir") {
        config.output_dir = PathBuf::from(out_dir);
    }
    if let Some(bounds) = string_arg(&args, "--bounds") {
        config.score_bounds = parse_bounds(&bounds)?;
    }

    // Optional synthesis step before the pipeline proper.
    if let Some(rows) = string_arg(&args, "--gen") {
        let rows: usize = rows.parse()?;
        let seed = parse_arg(&args, "--seed", 42u64);
        let synth_config = SynthConfig { rows, ..SynthConfig::default() };
        let generated = synth::generate(seed, &synth_config);
        synth::write_csv(&config.input_path, &generated)?;
        println!("generated {rows} rows (seed {seed}) -> {}", config.input_path.display());
    }

    let outcome = pipeline::run(&config);

    println!("=== PIPELINE SUMMARY ===");
    println!("  input:       {}", config.input_path.display());
    match outcome.rows_extracted {
        Some(n) => println!("  extracted:   {n} rows"),
        None => println!("  extracted:   FAILED (see log)"),
    }
    match &outcome.records {
        Some(records) => println!("  transformed: {} rows", records.len()),
        None => println!("  transformed: skipped"),
    }
    match &outcome.load_run {
        Some(run_id) => println!("  loaded:      {} (run {run_id})", config.db_path),
        None => println!("  loaded:      skipped"),
    }
    match &outcome.artifacts {
        Some(paths) => {
            println!("  summary:     {}", paths.summary_csv.display());
            println!("  charts:      {}", paths.dashboard_png.display());
        }
        None => println!("  report:      skipped"),
    }

    Ok(())
}

/// Parse "lo:hi" into fixed score bounds.
fn parse_bounds(raw: &str) -> Result<ScoreBounds> {
    let (lo, hi) = raw
        .split_once(':')
        .ok_or_else(|| anyhow::anyhow!("--bounds expects lo:hi, got '{raw}'"))?;
    Ok(ScoreBounds::Fixed {
        lo: lo.trim().parse()?,
        hi: hi.trim().parse()?,
    })
}

fn string_arg(args: &[String], flag: &str) -> Option<String> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].clone())
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
