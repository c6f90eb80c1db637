//! Loan row types: raw as extracted, and fully populated after transform.

use crate::types::LoanId;
use serde::{Deserialize, Serialize};

/// Column names the input file must carry. Extra columns are ignored.
pub const REQUIRED_COLUMNS: [&str; 5] = [
    "loan_id",
    "income",
    "credit_score",
    "loan_amount",
    "default_status",
];

/// One row as it comes off the CSV. Numeric fields and the status
/// field may be absent; the transformer fills them.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawLoanRow {
    pub loan_id: LoanId,
    pub income: Option<f64>,
    pub credit_score: Option<f64>,
    pub loan_amount: Option<f64>,
    pub default_status: Option<String>,
}

/// One fully populated row after imputation, derivation, and scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanRecord {
    pub loan_id: LoanId,
    pub income: f64,
    pub credit_score: f64,
    pub loan_amount: f64,
    pub default_status: String,
    pub default_history: u8,
    pub risk_score: f64,
}
