use csv::{ByteRecord, ReaderBuilder};
use flate2::read::GzDecoder;
use log::{info, warn};
use std::fs::File;
use std::io::{BufReader, Cursor, Read};
use std::path::Path;

use crate::constants::{COUNT_COLUMN, CUSIP_COLUMN, SECURITY_NAME_COLUMN, SYMBOL_COLUMN};
use crate::models::SecurityRecord;
use crate::utils::is_gzip_path;
use crate::Error;

/// Header positions of the four input columns. `None` when the header lacks the column.
struct ColumnPositions {
    cusip: Option<usize>,
    security_name: Option<usize>,
    symbol: Option<usize>,
    count: Option<usize>,
}

impl ColumnPositions {
    /// When a column name repeats in the header, the last occurrence wins.
    fn from_headers(headers: &[String]) -> Self {
        let locate = |column: &str| {
            let matches = headers.iter().filter(|h| *h == column).count();
            if matches == 0 {
                warn!("Input header has no '{}' column; treating it as blank", column);
            } else if matches > 1 {
                warn!(
                    "Input header repeats '{}' {} times; using the last one",
                    column, matches
                );
            }
            headers.iter().rposition(|h| h == column)
        };

        ColumnPositions {
            cusip: locate(CUSIP_COLUMN),
            security_name: locate(SECURITY_NAME_COLUMN),
            symbol: locate(SYMBOL_COLUMN),
            count: locate(COUNT_COLUMN),
        }
    }

    fn to_security_record(&self, row: &ByteRecord) -> SecurityRecord {
        let field = |position: Option<usize>| {
            position
                .and_then(|i| row.get(i))
                .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
                .unwrap_or_default()
        };

        SecurityRecord {
            cusip: field(self.cusip),
            security_name: field(self.security_name),
            symbol: field(self.symbol),
            count: field(self.count),
        }
    }
}

pub struct SecurityTableReader {}

impl SecurityTableReader {
    /// Loads every row of the table at `path`, in file order.
    ///
    /// Paths ending in `.gz` are decompressed on the fly. The file handle is closed before this
    /// returns, on both the success and the error path.
    pub fn read_security_records_from_path(
        path: &Path,
        delimiter: u8,
        progress_log_interval: usize,
    ) -> Result<Vec<SecurityRecord>, Error> {
        let file = BufReader::new(File::open(path)?);

        if is_gzip_path(path) {
            Self::read_security_records(GzDecoder::new(file), delimiter, progress_log_interval)
        } else {
            Self::read_security_records(file, delimiter, progress_log_interval)
        }
    }

    pub fn read_security_records_from_string(
        csv: &str,
        delimiter: u8,
    ) -> Result<Vec<SecurityRecord>, Error> {
        Self::read_security_records(Cursor::new(csv), delimiter, 0)
    }

    /// Parses a header-led delimited table. Rows may be shorter or longer than the header; missing
    /// fields become empty strings and extra fields are ignored.
    ///
    /// Bytes that are not valid UTF-8 are replaced with U+FFFD and the row is kept.
    pub fn read_security_records<R: Read>(
        source: R,
        delimiter: u8,
        progress_log_interval: usize,
    ) -> Result<Vec<SecurityRecord>, Error> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .delimiter(delimiter)
            .from_reader(source);

        let headers: Vec<String> = reader
            .byte_headers()
            .map_err(|e| Error::ParserError(format!("Failed to read headers: {}", e)))?
            .iter()
            .map(|h| String::from_utf8_lossy(h).into_owned())
            .collect();
        let columns = ColumnPositions::from_headers(&headers);

        let mut records = Vec::new();
        let mut row = ByteRecord::new();

        while reader
            .read_byte_record(&mut row)
            .map_err(|e| Error::ParserError(format!("Failed to read record: {}", e)))?
        {
            if std::str::from_utf8(row.as_slice()).is_err() {
                warn!(
                    "Record {} contains invalid UTF-8; replacing the bad bytes",
                    records.len() + 1
                );
            }

            records.push(columns.to_security_record(&row));

            if progress_log_interval > 0 && records.len() % progress_log_interval == 0 {
                info!("Processed {} records...", records.len());
            }
        }

        info!("Loaded {} records.", records.len());

        Ok(records)
    }
}
