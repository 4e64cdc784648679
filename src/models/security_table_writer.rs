use csv::WriterBuilder;
use flate2::write::GzEncoder;
use flate2::Compression;
use log::{debug, warn};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::constants::OUTPUT_HEADERS;
use crate::models::ReconciledRecord;
use crate::utils::is_gzip_path;
use crate::Error;

pub struct SecurityTableWriter {}

impl SecurityTableWriter {
    /// Writes the header and all records to `path`, all or nothing.
    ///
    /// Output goes to a hidden sibling file that is renamed over `path` only after every row has
    /// been written and synced. On failure the sibling is removed and `path` is left as it was.
    /// Paths ending in `.gz` are gzip-compressed.
    pub fn write_reconciled_records_to_path(
        path: &Path,
        records: &[ReconciledRecord],
        delimiter: u8,
    ) -> Result<(), Error> {
        let temporary_path = Self::temporary_path_for(path)?;
        debug!("Writing {} records to {:?}", records.len(), temporary_path);

        let result = Self::write_file(&temporary_path, records, delimiter, is_gzip_path(path))
            .and_then(|_| fs::rename(&temporary_path, path).map_err(Error::from));

        if result.is_err() && temporary_path.exists() {
            if let Err(e) = fs::remove_file(&temporary_path) {
                warn!("Failed to remove {:?}: {}", temporary_path, e);
            }
        }

        result
    }

    /// Serializes the fixed header followed by one row per record and hands back the sink.
    pub fn write_reconciled_records<W: Write>(
        sink: W,
        records: &[ReconciledRecord],
        delimiter: u8,
    ) -> Result<W, Error> {
        let mut writer = WriterBuilder::new().delimiter(delimiter).from_writer(sink);

        writer
            .write_record(OUTPUT_HEADERS)
            .map_err(|e| Error::WriterError(format!("Failed to write headers: {}", e)))?;

        for record in records {
            writer
                .write_record(record.as_output_row())
                .map_err(|e| Error::WriterError(format!("Failed to write record: {}", e)))?;
        }

        writer.flush()?;

        writer
            .into_inner()
            .map_err(|e| Error::WriterError(format!("Failed to flush output: {}", e.error())))
    }

    fn write_file(
        path: &Path,
        records: &[ReconciledRecord],
        delimiter: u8,
        gzip: bool,
    ) -> Result<(), Error> {
        let file = BufWriter::new(File::create(path)?);

        let file = if gzip {
            let encoder = Self::write_reconciled_records(
                GzEncoder::new(file, Compression::default()),
                records,
                delimiter,
            )?;
            encoder.finish()?
        } else {
            Self::write_reconciled_records(file, records, delimiter)?
        };

        let file = file
            .into_inner()
            .map_err(|e| Error::IoError(e.into_error()))?;
        file.sync_all()?;

        Ok(())
    }

    fn temporary_path_for(path: &Path) -> Result<PathBuf, Error> {
        let file_name = path.file_name().ok_or_else(|| {
            Error::WriterError(format!("Output path {:?} has no file name", path))
        })?;

        Ok(path.with_file_name(format!(".{}.tmp", file_name.to_string_lossy())))
    }
}
