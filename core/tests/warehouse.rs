//! Warehouse tests: full-replace semantics and the load audit trail.

use loanrisk_core::record::LoanRecord;
use loanrisk_core::store::LoanStore;

fn record(loan_id: &str, risk_score: f64) -> LoanRecord {
    LoanRecord {
        loan_id: loan_id.into(),
        income: 50000.0,
        credit_score: 700.0,
        loan_amount: 10000.0,
        default_status: "No".into(),
        default_history: 0,
        risk_score,
    }
}

/// Loading twice leaves exactly the second batch's rows.
#[test]
fn replace_is_full_not_incremental() {
    let mut store = LoanStore::in_memory().unwrap();
    store.migrate().unwrap();

    let first: Vec<LoanRecord> = (0..5).map(|i| record(&format!("A{i}"), i as f64)).collect();
    store.replace_loans("batch-a.csv", &first).unwrap();
    assert_eq!(store.loan_count().unwrap(), 5);

    let second: Vec<LoanRecord> = (0..3).map(|i| record(&format!("B{i}"), i as f64)).collect();
    store.replace_loans("batch-b.csv", &second).unwrap();
    assert_eq!(store.loan_count().unwrap(), 3, "prior batch must be gone");
    assert!(store.get_loan("A0").unwrap().is_none());
    assert!(store.get_loan("B0").unwrap().is_some());
}

/// Every load appends one audit row with its own run id.
#[test]
fn each_load_is_audited() {
    let mut store = LoanStore::in_memory().unwrap();
    store.migrate().unwrap();

    let rows = vec![record("L1", 42.0)];
    let run_a = store.replace_loans("loans.csv", &rows).unwrap();
    let run_b = store.replace_loans("loans.csv", &rows).unwrap();

    assert_ne!(run_a, run_b);
    assert_eq!(store.load_run_count().unwrap(), 2);
    assert_eq!(store.loan_count().unwrap(), 1);
}

/// A record survives the round trip through SQLite unchanged.
#[test]
fn loan_round_trips() {
    let mut store = LoanStore::in_memory().unwrap();
    store.migrate().unwrap();

    let original = LoanRecord {
        loan_id: "L42".into(),
        income: 31000.0,
        credit_score: 598.0,
        loan_amount: 15500.0,
        default_status: "Yes".into(),
        default_history: 1,
        risk_score: 87.25,
    };
    store.replace_loans("loans.csv", &[original.clone()]).unwrap();

    let fetched = store.get_loan("L42").unwrap().expect("row should exist");
    assert_eq!(fetched, original);
}

/// all_loans returns every row, ordered by loan_id.
#[test]
fn all_loans_ordered() {
    let mut store = LoanStore::in_memory().unwrap();
    store.migrate().unwrap();

    let rows = vec![record("C", 3.0), record("A", 1.0), record("B", 2.0)];
    store.replace_loans("loans.csv", &rows).unwrap();

    let fetched = store.all_loans().unwrap();
    let ids: Vec<&str> = fetched.iter().map(|r| r.loan_id.as_str()).collect();
    assert_eq!(ids, vec!["A", "B", "C"]);
}
