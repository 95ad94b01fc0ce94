//! Record validator: splits a company's history into the rows that feed the
//! aggregates and the rows that are only displayed.

use super::entities::{Company, HistoryRow, Snapshot};
use super::value_objects::HIT_TOLERANCE_PCT;
use std::collections::HashSet;

/// Two views over the same history. Rows are borrowed, never copied.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HistoryPartition<'a> {
    /// Rows with a finite error and a predicted price, in chronological order.
    pub evaluable: Vec<&'a HistoryRow>,
    /// Every row, in chronological order.
    pub all: Vec<&'a HistoryRow>,
}

impl HistoryPartition<'_> {
    pub fn evaluated_count(&self) -> usize {
        self.evaluable.len()
    }

    pub fn display_only_count(&self) -> usize {
        self.all.len() - self.evaluable.len()
    }
}

/// Total and pure: empty input gives two empty views.
pub fn partition(history: &[HistoryRow]) -> HistoryPartition<'_> {
    HistoryPartition {
        evaluable: history.iter().filter(|row| row.is_evaluable()).collect(),
        all: history.iter().collect(),
    }
}

/// Inconsistency found in producer data. Reported, never repaired.
#[derive(Debug, Clone, PartialEq)]
pub enum DataIssue {
    /// `acierto` disagrees with `|error_pct| <= 2`.
    HitFlagMismatch { ticker: String, date: String, error_pct: f64, is_hit: Option<bool> },
    /// A prediction exists for the day but no error was computed.
    MissingError { ticker: String, date: String },
    DuplicateTicker { ticker: String },
}

impl DataIssue {
    /// `TICKER DATE`, or just the ticker for document-level issues.
    pub fn location(&self) -> String {
        match self {
            DataIssue::HitFlagMismatch { ticker, date, .. } | DataIssue::MissingError { ticker, date } => {
                format!("{ticker} {date}")
            }
            DataIssue::DuplicateTicker { ticker } => ticker.clone(),
        }
    }
}

impl std::fmt::Display for DataIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataIssue::HitFlagMismatch { error_pct, is_hit, .. } => {
                write!(f, "hit flag {is_hit:?} disagrees with error {error_pct:.2}%")
            }
            DataIssue::MissingError { .. } => write!(f, "predicted price without error value"),
            DataIssue::DuplicateTicker { .. } => write!(f, "duplicate ticker"),
        }
    }
}

/// Consistency checks for one company's history.
pub fn diagnose(company: &Company) -> Vec<DataIssue> {
    let ticker = company.ticker.value();
    let mut issues = Vec::new();

    for row in &company.history {
        if row.predicted_price.is_some() && row.error_pct.is_none() {
            issues.push(DataIssue::MissingError { ticker: ticker.to_string(), date: row.date.clone() });
        }
        if !row.is_evaluable() {
            continue;
        }
        if let Some(error) = row.abs_error_pct() {
            let expected = error <= HIT_TOLERANCE_PCT;
            if row.is_hit != Some(expected) {
                issues.push(DataIssue::HitFlagMismatch {
                    ticker: ticker.to_string(),
                    date: row.date.clone(),
                    error_pct: error,
                    is_hit: row.is_hit,
                });
            }
        }
    }

    issues
}

/// Consistency checks across the whole document.
pub fn diagnose_snapshot(snapshot: &Snapshot) -> Vec<DataIssue> {
    let mut seen = HashSet::new();
    let mut issues = Vec::new();

    for company in &snapshot.companies {
        if !seen.insert(company.ticker.value()) {
            issues.push(DataIssue::DuplicateTicker { ticker: company.ticker.to_string() });
        }
        issues.extend(diagnose(company));
    }

    issues
}
