//! Shared primitive types used across the pipeline.

/// A stable, opaque identifier for a loan record.
pub type LoanId = String;

/// The canonical identifier of one warehouse load.
pub type RunId = String;
