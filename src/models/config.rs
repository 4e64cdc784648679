/// Runtime settings for a single reconciliation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReconcilerConfig<'a> {
    /// Source table. A `.gz` suffix enables transparent decompression.
    pub input_path: &'a str,
    /// Destination table. A `.gz` suffix enables compression.
    pub output_path: &'a str,
    /// Field delimiter used for both input and output.
    pub delimiter: u8,
    /// Emit a progress line every this many loaded records. `0` disables progress lines.
    pub progress_log_interval: usize,
}
