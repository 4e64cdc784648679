use log::{error, info, warn};
use std::path::Path;

pub mod constants;
pub use constants::DEFAULT_RECONCILER_CONFIG;
pub mod models;
pub use models::{
    reconcile_records, resolve_symbol, Error, ProcessResponse, ReconciledRecord,
    ReconcilerConfig, ReconciliationSummary, Resolution, ResponseStatus, SecurityRecord,
    SecurityTableReader, SecurityTableWriter, SymbolIndex,
};
pub mod types;
mod utils;
pub use types::{Cusip, NameKey, SecurityCount, SecurityName, TickerSymbol};
pub use utils::normalize_security_name;

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

/// Builds the name index over `records` and resolves every row against it.
///
/// The index is fully built before the first row is resolved, so a row may be filled from a
/// row that appears after it.
pub fn reconcile_security_records(
    records: Vec<SecurityRecord>,
) -> (Vec<ReconciledRecord>, ReconciliationSummary) {
    let symbol_index = SymbolIndex::build(&records);
    if symbol_index.is_empty() && !records.is_empty() {
        warn!("No record carries both a security name and a symbol; nothing can be filled");
    }

    reconcile_records(records, &symbol_index)
}

/// Runs load, index, reconcile and write for the configured files.
///
/// Any load or write failure aborts the run. The output file is only replaced once every row has
/// been written.
pub fn try_process_security_table(
    config: &ReconcilerConfig,
) -> Result<ReconciliationSummary, Error> {
    let records = SecurityTableReader::read_security_records_from_path(
        Path::new(config.input_path),
        config.delimiter,
        config.progress_log_interval,
    )?;

    let (reconciled, summary) = reconcile_security_records(records);

    SecurityTableWriter::write_reconciled_records_to_path(
        Path::new(config.output_path),
        &reconciled,
        config.delimiter,
    )?;

    info!("Processing complete. Output saved to {}", config.output_path);

    Ok(summary)
}

/// Same as [`try_process_security_table`], collapsed into the `ok` / `nok` response. The
/// underlying error is logged, not returned.
pub fn process_security_table(config: &ReconcilerConfig) -> ProcessResponse {
    match try_process_security_table(config) {
        Ok(_) => ProcessResponse::ok(),
        Err(e) => {
            error!(
                "Error processing the CUSIP data from {}: {}",
                config.input_path, e
            );
            ProcessResponse::not_ok()
        }
    }
}
