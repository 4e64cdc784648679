use crate::models::Resolution;
use crate::types::{Cusip, SecurityCount, SecurityName, TickerSymbol};

/// One row of the source table.
///
/// Every field is kept as raw text. A column that is missing from the header, or a row that is
/// too short to reach it, yields an empty string rather than an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SecurityRecord {
    pub cusip: Cusip,
    pub security_name: SecurityName,
    pub symbol: TickerSymbol,
    pub count: SecurityCount,
}

impl SecurityRecord {
    pub fn new(cusip: &str, security_name: &str, symbol: &str, count: &str) -> Self {
        SecurityRecord {
            cusip: cusip.to_string(),
            security_name: security_name.to_string(),
            symbol: symbol.to_string(),
            count: count.to_string(),
        }
    }

    /// Returns `true` when the row carries both a name and a symbol and may seed the indexes.
    pub fn is_indexable(&self) -> bool {
        !self.security_name.is_empty() && !self.symbol.is_empty()
    }
}

/// A source row augmented with its resolved symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconciledRecord {
    pub record: SecurityRecord,
    /// Value written to the `new_symbol` column. Empty on conflict or when nothing was found.
    pub new_symbol: TickerSymbol,
    pub resolution: Resolution,
}

impl ReconciledRecord {
    /// Fields in output column order: `cusip, securityName, symbol, count, new_symbol`.
    pub fn as_output_row(&self) -> [&str; 5] {
        [
            &self.record.cusip,
            &self.record.security_name,
            &self.record.symbol,
            &self.record.count,
            &self.new_symbol,
        ]
    }
}
