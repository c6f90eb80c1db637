//! The risk-score transform: imputation, derivation, scoring, normalization.
//!
//! RULES:
//!   - Imputation statistics come from each column's RAW values.
//!     No fill ever feeds another column's statistic.
//!   - Weights and the credit scale are fixed constants, not configuration.
//!   - The transform is deterministic: identical input and bounds
//!     always produce identical scores.

use crate::{
    error::{EtlError, EtlResult},
    record::{LoanRecord, RawLoanRow},
    stats,
};
use serde::{Deserialize, Serialize};

/// Weight of credit quality in the raw score.
pub const CREDIT_WEIGHT: f64 = 0.4;
/// Weight of leverage (loan-to-income) in the raw score.
pub const LEVERAGE_WEIGHT: f64 = 0.3;
/// Weight of prior default history in the raw score.
pub const HISTORY_WEIGHT: f64 = 0.3;
/// Upper end of the credit score scale.
pub const CREDIT_SCALE: f64 = 850.0;
/// Division and normalization guard.
pub const EPSILON: f64 = 1e-6;

/// How raw scores map onto the [0, 100] range.
///
/// `Batch` reproduces the historical behavior: min/max are taken from the
/// batch itself, so a score is only comparable within the batch it was
/// computed with. `Fixed` pins the bounds so scores are stable across
/// batches; out-of-bounds raw scores clamp to the range ends.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ScoreBounds {
    Batch,
    Fixed { lo: f64, hi: f64 },
}

impl Default for ScoreBounds {
    fn default() -> Self {
        ScoreBounds::Batch
    }
}

/// Transform raw rows into fully populated, scored records.
///
/// Fails with `EmptyTable` on no rows and `DegenerateColumn` when a
/// numeric column has no present values at all.
pub fn transform_data(rows: &[RawLoanRow], bounds: ScoreBounds) -> EtlResult<Vec<LoanRecord>> {
    if rows.is_empty() {
        return Err(EtlError::EmptyTable);
    }

    let income_median = column_stat(rows, "income", stats::median, |r| r.income)?;
    let credit_mean = column_stat(rows, "credit_score", stats::mean, |r| r.credit_score)?;
    let amount_median = column_stat(rows, "loan_amount", stats::median, |r| r.loan_amount)?;

    let mut records: Vec<LoanRecord> = rows
        .iter()
        .map(|row| {
            let income = row.income.unwrap_or(income_median);
            let credit_score = row.credit_score.unwrap_or(credit_mean);
            let loan_amount = row.loan_amount.unwrap_or(amount_median);
            let default_status = row.default_status.clone().unwrap_or_else(|| "No".into());
            let default_history = u8::from(default_status == "Yes");

            LoanRecord {
                loan_id: row.loan_id.clone(),
                income,
                credit_score,
                loan_amount,
                default_status,
                default_history,
                // raw score for now; normalized below once bounds are known
                risk_score: raw_score(credit_score, loan_amount, income, default_history),
            }
        })
        .collect();

    let (lo, hi) = match bounds {
        ScoreBounds::Batch => {
            let raws: Vec<f64> = records.iter().map(|r| r.risk_score).collect();
            (
                raws.iter().cloned().fold(f64::INFINITY, f64::min),
                raws.iter().cloned().fold(f64::NEG_INFINITY, f64::max),
            )
        }
        ScoreBounds::Fixed { lo, hi } => (lo, hi),
    };

    for record in &mut records {
        let scaled = 100.0 * (record.risk_score - lo) / (hi - lo + EPSILON);
        record.risk_score = match bounds {
            ScoreBounds::Batch => scaled,
            ScoreBounds::Fixed { .. } => scaled.clamp(0.0, 100.0),
        };
    }

    log::info!(
        "transformed {} rows (bounds {:?}, credit mean {:.2})",
        records.len(),
        bounds,
        credit_mean
    );
    Ok(records)
}

/// The fixed weighted combination of credit quality, leverage, and history.
pub fn raw_score(credit_score: f64, loan_amount: f64, income: f64, default_history: u8) -> f64 {
    CREDIT_WEIGHT * (1.0 - credit_score / CREDIT_SCALE)
        + LEVERAGE_WEIGHT * (loan_amount / (income + EPSILON))
        + HISTORY_WEIGHT * f64::from(default_history)
}

fn column_stat(
    rows: &[RawLoanRow],
    column: &'static str,
    stat: impl Fn(&[f64]) -> Option<f64>,
    field: impl Fn(&RawLoanRow) -> Option<f64>,
) -> EtlResult<f64> {
    let present: Vec<f64> = rows.iter().filter_map(field).collect();
    stat(&present).ok_or(EtlError::DegenerateColumn { column })
}
