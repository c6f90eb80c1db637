//! SQLite warehouse layer.
//!
//! RULE: Only store.rs talks to the database.
//! Pipeline stages call store methods — they never execute SQL directly.

use crate::{
    error::EtlResult,
    record::LoanRecord,
    types::RunId,
};
use rusqlite::{params, Connection};

pub struct LoanStore {
    conn: Connection,
}

impl LoanStore {
    /// Open (or create) the warehouse database at `path`.
    pub fn open(path: &str) -> EtlResult<Self> {
        let conn = Connection::open(path)?;
        // WAL mode: better concurrent read performance.
        conn.execute_batch("PRAGMA journal_mode=WAL;")?;
        Ok(Self { conn })
    }

    /// Open an in-memory database (used in tests).
    pub fn in_memory() -> EtlResult<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self { conn })
    }

    /// Apply all schema migrations in order.
    pub fn migrate(&self) -> EtlResult<()> {
        self.conn
            .execute_batch(include_str!("../../migrations/001_loans.sql"))?;
        Ok(())
    }

    // ── Full-replace load ──────────────────────────────────────

    /// Replace the entire `loans` table with `records` and record the
    /// load in `load_run`. One transaction: on failure the destination
    /// keeps the prior run's rows.
    ///
    /// Returns the run id of the completed load.
    pub fn replace_loans(&mut self, source: &str, records: &[LoanRecord]) -> EtlResult<RunId> {
        let run_id = uuid::Uuid::new_v4().to_string();
        let loaded_at = chrono::Utc::now().to_rfc3339();

        let tx = self.conn.transaction()?;
        tx.execute("DELETE FROM loans", [])?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO loans
                   (loan_id, income, credit_score, loan_amount,
                    default_status, default_history, risk_score)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            )?;
            for record in records {
                stmt.execute(params![
                    record.loan_id,
                    record.income,
                    record.credit_score,
                    record.loan_amount,
                    record.default_status,
                    record.default_history as i64,
                    record.risk_score,
                ])?;
            }
        }
        tx.execute(
            "INSERT INTO load_run (run_id, source, row_count, loaded_at)
             VALUES (?1, ?2, ?3, ?4)",
            params![run_id, source, records.len() as i64, loaded_at],
        )?;
        tx.commit()?;

        log::info!("loaded {} rows into 'loans' (run {run_id})", records.len());
        Ok(run_id)
    }

    // ── Queries ────────────────────────────────────────────────

    pub fn loan_count(&self) -> EtlResult<i64> {
        let count = self
            .conn
            .query_row("SELECT COUNT(*) FROM loans", [], |row| row.get(0))?;
        Ok(count)
    }

    pub fn load_run_count(&self) -> EtlResult<i64> {
        let count = self
            .conn
            .query_row("SELECT COUNT(*) FROM load_run", [], |row| row.get(0))?;
        Ok(count)
    }

    pub fn get_loan(&self, loan_id: &str) -> EtlResult<Option<LoanRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT loan_id, income, credit_score, loan_amount,
                    default_status, default_history, risk_score
             FROM loans WHERE loan_id = ?1",
        )?;
        let record = stmt
            .query_row(params![loan_id], |row| {
                Ok(LoanRecord {
                    loan_id: row.get(0)?,
                    income: row.get(1)?,
                    credit_score: row.get(2)?,
                    loan_amount: row.get(3)?,
                    default_status: row.get(4)?,
                    default_history: row.get::<_, i64>(5)? as u8,
                    risk_score: row.get(6)?,
                })
            })
            .ok();
        Ok(record)
    }

    pub fn all_loans(&self) -> EtlResult<Vec<LoanRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT loan_id, income, credit_score, loan_amount,
                    default_status, default_history, risk_score
             FROM loans ORDER BY loan_id ASC",
        )?;
        let records = stmt
            .query_map([], |row| {
                Ok(LoanRecord {
                    loan_id: row.get(0)?,
                    income: row.get(1)?,
                    credit_score: row.get(2)?,
                    loan_amount: row.get(3)?,
                    default_status: row.get(4)?,
                    default_history: row.get::<_, i64>(5)? as u8,
                    risk_score: row.get(6)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(records)
    }
}
