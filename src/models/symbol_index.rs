use log::debug;
use std::collections::HashMap;

use crate::models::SecurityRecord;
use crate::types::{CusipSymbolMap, NameSymbolMap, TickerSymbol};
use crate::utils::normalize_security_name;

/// Lookup tables derived from the rows that already carry both a name and a symbol.
///
/// Both maps are last-write-wins: when several rows share a key, the row that appears latest in
/// the input decides the stored symbol. No conflict detection happens here; disagreement only
/// surfaces per row in the reconciler.
///
/// The CUSIP map is populated alongside the name map but the reconciler never consults it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolIndex {
    name_symbol_map: NameSymbolMap,
    cusip_symbol_map: CusipSymbolMap,
}

impl SymbolIndex {
    /// Builds the index from the full, ordered record set.
    pub fn build(records: &[SecurityRecord]) -> Self {
        let mut index = SymbolIndex {
            name_symbol_map: HashMap::with_capacity(records.len()),
            cusip_symbol_map: HashMap::with_capacity(records.len()),
        };

        for record in records {
            index.insert(record);
        }

        debug!(
            "Built symbol index with {} names and {} CUSIPs from {} records",
            index.name_count(),
            index.cusip_count(),
            records.len()
        );

        index
    }

    /// Adds a single record, overwriting any earlier entry for the same name or CUSIP.
    /// Records missing either a name or a symbol are skipped.
    pub fn insert(&mut self, record: &SecurityRecord) {
        if !record.is_indexable() {
            return;
        }

        self.name_symbol_map.insert(
            normalize_security_name(&record.security_name),
            record.symbol.clone(),
        );
        self.cusip_symbol_map
            .insert(record.cusip.clone(), record.symbol.clone());
    }

    /// Looks up the indexed symbol for a security name, ignoring case.
    pub fn symbol_for_name(&self, security_name: &str) -> Option<&TickerSymbol> {
        self.name_symbol_map
            .get(&normalize_security_name(security_name))
    }

    pub fn symbol_for_cusip(&self, cusip: &str) -> Option<&TickerSymbol> {
        self.cusip_symbol_map.get(cusip)
    }

    pub fn name_count(&self) -> usize {
        self.name_symbol_map.len()
    }

    pub fn cusip_count(&self) -> usize {
        self.cusip_symbol_map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.name_symbol_map.is_empty()
    }
}
