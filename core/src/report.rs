//! Summary statistics and static chart rendering.
//!
//! Two artifacts per run, both fully overwritten:
//!   - loan_summary.csv   — describe() of the four numeric columns
//!   - loan_dashboard.png — histogram + two scatters in one image
//!
//! No atomicity: a failure mid-render leaves whatever was written.

use crate::{
    error::{EtlError, EtlResult},
    record::LoanRecord,
    stats::{self, Describe},
};
use plotters::prelude::*;
use std::path::{Path, PathBuf};

pub const SUMMARY_FILE: &str = "loan_summary.csv";
pub const DASHBOARD_FILE: &str = "loan_dashboard.png";

const HISTOGRAM_BINS: usize = 20;
const SKY_BLUE: RGBColor = RGBColor(135, 206, 235);
const CORAL: RGBColor = RGBColor(255, 127, 80);

/// Paths of the two artifacts written by a successful report.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportPaths {
    pub summary_csv: PathBuf,
    pub dashboard_png: PathBuf,
}

/// Write both artifacts into `out_dir`, creating it if needed.
pub fn generate_report(records: &[LoanRecord], out_dir: &Path) -> EtlResult<ReportPaths> {
    std::fs::create_dir_all(out_dir)?;
    let paths = ReportPaths {
        summary_csv: out_dir.join(SUMMARY_FILE),
        dashboard_png: out_dir.join(DASHBOARD_FILE),
    };

    write_summary(records, &paths.summary_csv)?;
    render_charts(records, &paths.dashboard_png)?;

    log::info!(
        "report written: {} and {}",
        paths.summary_csv.display(),
        paths.dashboard_png.display()
    );
    Ok(paths)
}

/// Descriptive statistics for risk_score, loan_amount, credit_score,
/// income — one CSV row per statistic.
pub fn write_summary(records: &[LoanRecord], path: &Path) -> EtlResult<()> {
    let columns: [(&str, Vec<f64>); 4] = [
        ("risk_score", records.iter().map(|r| r.risk_score).collect()),
        ("loan_amount", records.iter().map(|r| r.loan_amount).collect()),
        ("credit_score", records.iter().map(|r| r.credit_score).collect()),
        ("income", records.iter().map(|r| r.income).collect()),
    ];
    let summaries: Vec<Describe> = columns
        .iter()
        .map(|(_, values)| Describe::of(values).ok_or(EtlError::EmptyTable))
        .collect::<EtlResult<_>>()?;

    let mut writer = csv::Writer::from_path(path)?;
    let mut header = vec![String::new()];
    header.extend(columns.iter().map(|(name, _)| name.to_string()));
    writer.write_record(&header)?;

    let rows: [(&str, fn(&Describe) -> f64); 8] = [
        ("count", |d| d.count as f64),
        ("mean", |d| d.mean),
        ("std", |d| d.std),
        ("min", |d| d.min),
        ("25%", |d| d.q25),
        ("50%", |d| d.q50),
        ("75%", |d| d.q75),
        ("max", |d| d.max),
    ];
    for (label, pick) in rows {
        let mut record = vec![label.to_string()];
        record.extend(summaries.iter().map(|d| pick(d).to_string()));
        writer.write_record(&record)?;
    }
    writer.flush()?;
    Ok(())
}

/// Render the three-panel composite PNG (1500x500).
pub fn render_charts(records: &[LoanRecord], path: &Path) -> EtlResult<()> {
    let scores: Vec<f64> = records.iter().map(|r| r.risk_score).collect();
    let amounts: Vec<f64> = records.iter().map(|r| r.loan_amount).collect();
    let credits: Vec<f64> = records.iter().map(|r| r.credit_score).collect();

    let root = BitMapBackend::new(path, (1500, 500)).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;
    let panels = root.split_evenly((1, 3));

    draw_histogram(&panels[0], &scores)?;
    draw_scatter(
        &panels[1],
        "Loan Amount vs Risk Score",
        "Loan Amount",
        &amounts,
        &scores,
        CORAL,
    )?;
    draw_scatter(
        &panels[2],
        "Credit Score vs Risk Score",
        "Credit Score",
        &credits,
        &scores,
        GREEN,
    )?;

    root.present().map_err(render_err)?;
    Ok(())
}

fn draw_histogram(
    area: &DrawingArea<BitMapBackend, plotters::coord::Shift>,
    scores: &[f64],
) -> EtlResult<()> {
    let bins = stats::histogram(scores, HISTOGRAM_BINS);
    let (x_lo, x_hi) = padded_range(scores);
    let y_hi = bins.iter().map(|b| b.count).max().unwrap_or(1).max(1);

    let mut chart = ChartBuilder::on(area)
        .caption("Risk Score Distribution", ("sans-serif", 22))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(x_lo..x_hi, 0usize..y_hi + 1)
        .map_err(render_err)?;
    chart
        .configure_mesh()
        .x_desc("Risk Score")
        .y_desc("Frequency")
        .draw()
        .map_err(render_err)?;
    chart
        .draw_series(bins.iter().map(|bin| {
            Rectangle::new(
                [(bin.lo, 0), (bin.hi, bin.count)],
                SKY_BLUE.filled().stroke_width(1),
            )
        }))
        .map_err(render_err)?;
    Ok(())
}

fn draw_scatter(
    area: &DrawingArea<BitMapBackend, plotters::coord::Shift>,
    title: &str,
    x_desc: &str,
    xs: &[f64],
    ys: &[f64],
    color: RGBColor,
) -> EtlResult<()> {
    let (x_lo, x_hi) = padded_range(xs);
    let (y_lo, y_hi) = padded_range(ys);

    let mut chart = ChartBuilder::on(area)
        .caption(title, ("sans-serif", 22))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(x_lo..x_hi, y_lo..y_hi)
        .map_err(render_err)?;
    chart
        .configure_mesh()
        .x_desc(x_desc)
        .y_desc("Risk Score")
        .draw()
        .map_err(render_err)?;
    chart
        .draw_series(
            xs.iter()
                .zip(ys)
                .map(|(&x, &y)| Circle::new((x, y), 4, color.mix(0.5).filled())),
        )
        .map_err(render_err)?;
    Ok(())
}

/// Axis range with 5% padding; widened by 1.0 when degenerate so
/// single-value data still gets a drawable axis.
fn padded_range(values: &[f64]) -> (f64, f64) {
    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }
    let pad = if max > min { (max - min) * 0.05 } else { 1.0 };
    (min - pad, max + pad)
}

fn render_err(e: impl std::fmt::Display) -> EtlError {
    EtlError::Render(e.to_string())
}
