use csv::Reader;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::error::Error;
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

/// One row of a processed output table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRow {
    pub cusip: String,
    pub security_name: String,
    pub symbol: String,
    pub count: String,
    pub new_symbol: String,
}

/// Writes a CSV fixture with the standard input header followed by `rows`.
pub fn write_input_fixture(
    path: &Path,
    rows: &[(&str, &str, &str, &str)],
) -> Result<(), Box<dyn Error>> {
    fs::write(path, render_input_fixture(rows)?)?;
    Ok(())
}

/// Same as `write_input_fixture`, gzip-compressed.
pub fn write_gzip_input_fixture(
    path: &Path,
    rows: &[(&str, &str, &str, &str)],
) -> Result<(), Box<dyn Error>> {
    let mut encoder = GzEncoder::new(File::create(path)?, Compression::default());
    encoder.write_all(&render_input_fixture(rows)?)?;
    encoder.finish()?;
    Ok(())
}

fn render_input_fixture(rows: &[(&str, &str, &str, &str)]) -> Result<Vec<u8>, Box<dyn Error>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["cusip", "securityName", "symbol", "count"])?;
    for (cusip, name, symbol, count) in rows {
        writer.write_record([cusip, name, symbol, count])?;
    }
    Ok(writer.into_inner().map_err(|e| e.error().to_string())?)
}

/// Loads an output table, returning its header and rows. `.gz` paths are decompressed.
pub fn load_output_rows(path: &Path) -> Result<(Vec<String>, Vec<OutputRow>), Box<dyn Error>> {
    let mut content = String::new();
    let mut file = File::open(path)?;
    if path.extension().map(|ext| ext == "gz").unwrap_or(false) {
        GzDecoder::new(file).read_to_string(&mut content)?;
    } else {
        file.read_to_string(&mut content)?;
    }

    let mut reader = Reader::from_reader(content.as_bytes());
    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let field = |i: usize| record.get(i).unwrap_or("").to_string();
        rows.push(OutputRow {
            cusip: field(0),
            security_name: field(1),
            symbol: field(2),
            count: field(3),
            new_symbol: field(4),
        });
    }

    Ok((headers, rows))
}

/// Collects the `new_symbol` column.
pub fn new_symbols(rows: &[OutputRow]) -> Vec<&str> {
    rows.iter().map(|row| row.new_symbol.as_str()).collect()
}
