pub mod config;
pub use config::ReconcilerConfig;

pub mod error;
pub use error::Error;

pub mod process_response;
pub use process_response::{ProcessResponse, ResponseStatus};

pub mod security_record;
pub use security_record::{ReconciledRecord, SecurityRecord};

pub mod security_table_reader;
pub use security_table_reader::SecurityTableReader;

pub mod security_table_writer;
pub use security_table_writer::SecurityTableWriter;

pub mod symbol_index;
pub use symbol_index::SymbolIndex;

pub mod symbol_reconciler;
pub use symbol_reconciler::{
    reconcile_records, resolve_symbol, ReconciliationSummary, Resolution,
};
