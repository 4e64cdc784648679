use clap::Parser;
use symbol_reconciler::constants::{DEFAULT_INPUT_FILE_PATH, DEFAULT_OUTPUT_FILE_PATH};
use symbol_reconciler::{process_security_table, ReconcilerConfig, DEFAULT_RECONCILER_CONFIG};

#[derive(Parser)]
#[command(name = "symbol-reconciler-cli")]
#[command(about = "Fill in and flag conflicting ticker symbols in a CUSIP / security name table")]
struct Args {
    /// Input table with cusip, securityName, symbol and count columns
    #[arg(default_value = DEFAULT_INPUT_FILE_PATH)]
    input: String,

    /// Output table; the same columns plus new_symbol
    #[arg(default_value = DEFAULT_OUTPUT_FILE_PATH)]
    output: String,

    /// Single-byte field delimiter for both tables
    #[arg(long, default_value_t = ',')]
    delimiter: char,
}

fn main() {
    // Initialize the logger (`info` unless RUST_LOG says otherwise)
    #[cfg(feature = "logger-support")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if !args.delimiter.is_ascii() {
        eprintln!("Delimiter must be a single ASCII character");
        std::process::exit(2);
    }

    let config = ReconcilerConfig {
        input_path: &args.input,
        output_path: &args.output,
        delimiter: args.delimiter as u8,
        ..DEFAULT_RECONCILER_CONFIG
    };

    let response = process_security_table(&config);
    println!("{}", response);

    if !response.is_ok() {
        std::process::exit(1);
    }
}
