//! Interactive dashboard — axum application over the transformed dataset.
//!
//! RULES:
//!   - The dataset is loaded ONCE at startup and shared immutably.
//!     Handlers never touch the filesystem or the database.
//!   - The filtered view is a pure function of (dataset, range),
//!     evaluated synchronously per request.
//!   - An empty dataset is a placeholder, not an error: every endpoint
//!     returns empty series and the page still renders.

use crate::{record::LoanRecord, stats};
use axum::{
    extract::{Query, State},
    response::{Html, Json},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

const HISTOGRAM_BINS: usize = 20;

/// Shared immutable dashboard state.
#[derive(Clone)]
pub struct DashboardState {
    records: Arc<Vec<LoanRecord>>,
}

impl DashboardState {
    pub fn new(records: Vec<LoanRecord>) -> Self {
        Self {
            records: Arc::new(records),
        }
    }
}

/// Risk-score range selected on the page. Fixed control bounds
/// [0, 100], step 1; both ends inclusive.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RiskRange {
    #[serde(default = "range_min")]
    pub min: f64,
    #[serde(default = "range_max")]
    pub max: f64,
}

fn range_min() -> f64 {
    0.0
}

fn range_max() -> f64 {
    100.0
}

impl Default for RiskRange {
    fn default() -> Self {
        Self { min: range_min(), max: range_max() }
    }
}

#[derive(Debug, Serialize)]
pub struct HistogramResponse {
    pub bins: Vec<stats::Bin>,
}

#[derive(Debug, Serialize)]
pub struct ScatterResponse {
    pub loan_ids: Vec<String>,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

/// Build the dashboard application with the dataset injected.
pub fn create_app(records: Vec<LoanRecord>) -> Router {
    let state = DashboardState::new(records);
    Router::new()
        .route("/", get(index))
        .route("/api/histogram", get(histogram))
        .route("/api/loan-scatter", get(loan_scatter))
        .route("/api/credit-scatter", get(credit_scatter))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Records whose risk score falls inside the range, both ends inclusive.
pub fn filter_by_risk(records: &[LoanRecord], range: RiskRange) -> Vec<&LoanRecord> {
    records
        .iter()
        .filter(|r| r.risk_score >= range.min && r.risk_score <= range.max)
        .collect()
}

async fn index() -> Html<&'static str> {
    Html(include_str!("dashboard.html"))
}

/// GET /api/histogram — 20-bin distribution of risk_score.
pub async fn histogram(State(state): State<DashboardState>) -> Json<HistogramResponse> {
    let scores: Vec<f64> = state.records.iter().map(|r| r.risk_score).collect();
    Json(HistogramResponse {
        bins: stats::histogram(&scores, HISTOGRAM_BINS),
    })
}

/// GET /api/loan-scatter — loan_amount vs risk_score, full dataset.
pub async fn loan_scatter(State(state): State<DashboardState>) -> Json<ScatterResponse> {
    Json(scatter(&state.records, |r| r.loan_amount))
}

/// GET /api/credit-scatter?min=&max= — credit_score vs risk_score,
/// restricted to the selected risk range.
pub async fn credit_scatter(
    State(state): State<DashboardState>,
    Query(range): Query<RiskRange>,
) -> Json<ScatterResponse> {
    let filtered = filter_by_risk(&state.records, range);
    Json(ScatterResponse {
        loan_ids: filtered.iter().map(|r| r.loan_id.clone()).collect(),
        x: filtered.iter().map(|r| r.credit_score).collect(),
        y: filtered.iter().map(|r| r.risk_score).collect(),
    })
}

fn scatter(records: &[LoanRecord], x: impl Fn(&LoanRecord) -> f64) -> ScatterResponse {
    ScatterResponse {
        loan_ids: records.iter().map(|r| r.loan_id.clone()).collect(),
        x: records.iter().map(x).collect(),
        y: records.iter().map(|r| r.risk_score).collect(),
    }
}
