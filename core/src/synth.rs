//! Deterministic synthetic loan datasets for demos and tests.
//!
//! RULE: Nothing here may call any platform RNG. All randomness flows
//! through one PCG stream seeded by the caller — same seed, same CSV.

use crate::{error::EtlResult, record::RawLoanRow};
use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;
use std::path::Path;

/// A seeded, deterministic RNG for dataset generation.
struct DataRng {
    inner: Pcg64Mcg,
}

impl DataRng {
    fn new(seed: u64) -> Self {
        Self {
            inner: Pcg64Mcg::seed_from_u64(seed),
        }
    }

    /// Roll a float in [0.0, 1.0).
    fn next_f64(&mut self) -> f64 {
        use rand::RngCore;
        let bits = self.inner.next_u64();
        (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Roll a float in [lo, hi).
    fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + self.next_f64() * (hi - lo)
    }

    /// Bernoulli trial: returns true with probability p.
    fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }
}

/// Shape of the generated dataset.
#[derive(Debug, Clone)]
pub struct SynthConfig {
    pub rows: usize,
    /// Probability a given numeric cell is left empty.
    pub missing_rate: f64,
    /// Probability a row is a defaulted loan ("Yes").
    pub default_rate: f64,
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self {
            rows: 200,
            missing_rate: 0.05,
            default_rate: 0.15,
        }
    }
}

/// Generate `config.rows` raw rows from `seed`.
pub fn generate(seed: u64, config: &SynthConfig) -> Vec<RawLoanRow> {
    let mut rng = DataRng::new(seed);
    (0..config.rows)
        .map(|i| {
            let income = (!rng.chance(config.missing_rate))
                .then(|| rng.range(18_000.0, 150_000.0).round());
            let credit_score =
                (!rng.chance(config.missing_rate)).then(|| rng.range(300.0, 850.0).round());
            let loan_amount = (!rng.chance(config.missing_rate))
                .then(|| rng.range(1_000.0, 60_000.0).round());
            let default_status = (!rng.chance(config.missing_rate)).then(|| {
                if rng.chance(config.default_rate) {
                    "Yes".into()
                } else {
                    "No".into()
                }
            });

            RawLoanRow {
                loan_id: format!("L{:06}", i + 1),
                income,
                credit_score,
                loan_amount,
                default_status,
            }
        })
        .collect()
}

/// Write rows as a loan CSV with the required header.
pub fn write_csv(path: &Path, rows: &[RawLoanRow]) -> EtlResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(crate::record::REQUIRED_COLUMNS)?;
    for row in rows {
        writer.write_record([
            row.loan_id.clone(),
            row.income.map(|v| v.to_string()).unwrap_or_default(),
            row.credit_score.map(|v| v.to_string()).unwrap_or_default(),
            row.loan_amount.map(|v| v.to_string()).unwrap_or_default(),
            row.default_status.clone().unwrap_or_default(),
        ])?;
    }
    writer.flush()?;
    log::info!("wrote {} synthetic rows to {}", rows.len(), path.display());
    Ok(())
}
