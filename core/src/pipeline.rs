//! The batch pipeline: extract → transform → load → report.
//!
//! RULES:
//!   - Stages run in a fixed order, one sequential pass, no checkpointing.
//!   - Every stage catches its own failure, logs it, and the pipeline
//!     continues with degraded input.
//!   - A stage with absent input no-ops; only this module converts a
//!     stage error into absence for the stages after it.

use crate::{
    config::RiskConfig,
    extract::extract_data,
    record::LoanRecord,
    report::{generate_report, ReportPaths},
    store::LoanStore,
    transform::transform_data,
    types::RunId,
};

/// What each stage produced. A None means the stage (or one before it)
/// failed and was skipped; details are in the log.
#[derive(Debug, Default)]
pub struct PipelineOutcome {
    pub rows_extracted: Option<usize>,
    pub records: Option<Vec<LoanRecord>>,
    pub load_run: Option<RunId>,
    pub artifacts: Option<ReportPaths>,
}

/// Run the full batch pipeline under `config`.
pub fn run(config: &RiskConfig) -> PipelineOutcome {
    let mut outcome = PipelineOutcome::default();

    let raw = match extract_data(&config.input_path) {
        Ok(rows) => {
            outcome.rows_extracted = Some(rows.len());
            Some(rows)
        }
        Err(e) => {
            log::error!("extraction failed: {e}");
            None
        }
    };

    let records = match &raw {
        Some(rows) => match transform_data(rows, config.score_bounds) {
            Ok(records) => Some(records),
            Err(e) => {
                log::error!("transformation failed: {e}");
                None
            }
        },
        None => None,
    };

    if let Some(records) = &records {
        match load_stage(config, records) {
            Ok(run_id) => outcome.load_run = Some(run_id),
            Err(e) => log::error!("load failed, destination keeps prior run: {e}"),
        }

        match generate_report(records, &config.output_dir) {
            Ok(paths) => outcome.artifacts = Some(paths),
            Err(e) => log::error!("report failed: {e}"),
        }
    }

    outcome.records = records;
    outcome
}

fn load_stage(config: &RiskConfig, records: &[LoanRecord]) -> crate::error::EtlResult<RunId> {
    let mut store = if config.db_path == ":memory:" {
        LoanStore::in_memory()?
    } else {
        LoanStore::open(&config.db_path)?
    };
    store.migrate()?;
    store.replace_loans(&config.input_path.display().to_string(), records)
}
