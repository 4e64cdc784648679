use log::info;
use std::fmt;

use crate::models::{ReconciledRecord, SecurityRecord, SymbolIndex};
use crate::types::TickerSymbol;

/// How a record's `new_symbol` was decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resolution {
    /// Symbol was empty and the name index supplied one.
    Filled,
    /// Symbol disagreed with the name index; `new_symbol` is blank.
    Conflict,
    /// Symbol matched the name index.
    Confirmed,
    /// Symbol was present and the name has no index entry.
    Unindexed,
    /// Symbol was empty and the name has no index entry.
    Unresolved,
}

/// Per-resolution totals for one reconciliation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconciliationSummary {
    pub total: usize,
    pub filled: usize,
    pub conflicts: usize,
    pub confirmed: usize,
    pub unindexed: usize,
    pub unresolved: usize,
}

impl ReconciliationSummary {
    pub fn record(&mut self, resolution: Resolution) {
        self.total += 1;
        match resolution {
            Resolution::Filled => self.filled += 1,
            Resolution::Conflict => self.conflicts += 1,
            Resolution::Confirmed => self.confirmed += 1,
            Resolution::Unindexed => self.unindexed += 1,
            Resolution::Unresolved => self.unresolved += 1,
        }
    }
}

impl fmt::Display for ReconciliationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} records: {} filled, {} conflicts, {} confirmed, {} unindexed, {} unresolved",
            self.total, self.filled, self.conflicts, self.confirmed, self.unindexed, self.unresolved
        )
    }
}

/// Decides the `new_symbol` for a single record against a fully built index.
///
/// ### Rules:
/// - Empty symbol, name indexed: take the indexed symbol.
/// - Non-empty symbol, name indexed to a different symbol: conflict, blank.
/// - Anything else: keep the record's own symbol (which may itself be empty).
///
/// ### Example:
/// ```rust
/// use symbol_reconciler::{resolve_symbol, Resolution, SecurityRecord, SymbolIndex};
///
/// let records = vec![
///     SecurityRecord::new("A1", "Acme Corp", "", "5"),
///     SecurityRecord::new("A2", "Acme Corp", "ACM", "3"),
/// ];
/// let index = SymbolIndex::build(&records);
///
/// assert_eq!(
///     resolve_symbol(&records[0], &index),
///     ("ACM".to_string(), Resolution::Filled)
/// );
/// ```
pub fn resolve_symbol(record: &SecurityRecord, index: &SymbolIndex) -> (TickerSymbol, Resolution) {
    let indexed_symbol = index.symbol_for_name(&record.security_name);

    match (record.symbol.is_empty(), indexed_symbol) {
        (true, Some(indexed_symbol)) => (indexed_symbol.clone(), Resolution::Filled),
        (true, None) => (record.symbol.clone(), Resolution::Unresolved),
        (false, Some(indexed_symbol)) if *indexed_symbol != record.symbol => {
            (TickerSymbol::new(), Resolution::Conflict)
        }
        (false, Some(_)) => (record.symbol.clone(), Resolution::Confirmed),
        (false, None) => (record.symbol.clone(), Resolution::Unindexed),
    }
}

/// Resolves every record in input order. Output position `i` always corresponds to input
/// position `i`; nothing is reordered or deduplicated.
pub fn reconcile_records(
    records: Vec<SecurityRecord>,
    index: &SymbolIndex,
) -> (Vec<ReconciledRecord>, ReconciliationSummary) {
    let mut summary = ReconciliationSummary::default();

    let reconciled: Vec<ReconciledRecord> = records
        .into_iter()
        .map(|record| {
            let (new_symbol, resolution) = resolve_symbol(&record, index);
            summary.record(resolution);

            ReconciledRecord {
                record,
                new_symbol,
                resolution,
            }
        })
        .collect();

    info!("Reconciled {}", summary);

    (reconciled, summary)
}
