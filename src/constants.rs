use crate::models::ReconcilerConfig;

pub const CUSIP_COLUMN: &str = "cusip";
pub const SECURITY_NAME_COLUMN: &str = "securityName";
pub const SYMBOL_COLUMN: &str = "symbol";
pub const COUNT_COLUMN: &str = "count";
pub const NEW_SYMBOL_COLUMN: &str = "new_symbol";

/// Column order of every output table.
pub const OUTPUT_HEADERS: [&str; 5] = [
    CUSIP_COLUMN,
    SECURITY_NAME_COLUMN,
    SYMBOL_COLUMN,
    COUNT_COLUMN,
    NEW_SYMBOL_COLUMN,
];

pub const DEFAULT_INPUT_FILE_PATH: &str = "cusip_name_symbol_map_assignment.csv";
pub const DEFAULT_OUTPUT_FILE_PATH: &str = "processed_cusip_data.csv";

pub const DEFAULT_PROGRESS_LOG_INTERVAL: usize = 100_000;

pub const GZIP_FILE_EXTENSION: &str = "gz";

pub const SUCCESS_MESSAGE: &str = "Processing complete.";
pub const FAILURE_MESSAGE: &str = "Error processing the CUSIP data.";

pub const DEFAULT_RECONCILER_CONFIG: ReconcilerConfig<'static> = ReconcilerConfig {
    input_path: DEFAULT_INPUT_FILE_PATH,
    output_path: DEFAULT_OUTPUT_FILE_PATH,
    delimiter: b',',
    progress_log_interval: DEFAULT_PROGRESS_LOG_INTERVAL,
};
