use std::fs;
use symbol_reconciler::{
    constants::OUTPUT_HEADERS, process_security_table, try_process_security_table, Error,
    ReconcilerConfig, ResponseStatus, DEFAULT_RECONCILER_CONFIG,
};
use tempfile::tempdir;
use test_utils::{load_output_rows, new_symbols, write_gzip_input_fixture, write_input_fixture};

const SAMPLE_FILE_PATH: &str = "tests/test_files/cusip_name_symbol_map_sample.csv";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_processes_sample_file() {
        let dir = tempdir().unwrap();
        let output_path = dir.path().join("processed_cusip_data.csv");

        let config = ReconcilerConfig {
            input_path: SAMPLE_FILE_PATH,
            output_path: output_path.to_str().unwrap(),
            ..DEFAULT_RECONCILER_CONFIG
        };

        let response = process_security_table(&config);
        assert_eq!(response.result, ResponseStatus::Ok);
        assert_eq!(response.message, "Processing complete.");

        let (headers, rows) = load_output_rows(&output_path).expect("Failed to read output");
        assert_eq!(headers, OUTPUT_HEADERS.to_vec());
        assert_eq!(
            new_symbols(&rows),
            vec!["AAPL", "AAPL", "", "MSF", "MSF", "TSLA", "", "", "GOOG", ""]
        );
        assert_eq!(rows[8].security_name, "Alphabet Inc, Class C");
        assert_eq!(rows[2].symbol, "MSFT");
        assert_eq!(rows[0].count, "120");
    }

    #[test]
    fn test_missing_input_reports_not_ok_and_writes_nothing() {
        let dir = tempdir().unwrap();
        let input_path = dir.path().join("missing.csv");
        let output_path = dir.path().join("out.csv");

        let config = ReconcilerConfig {
            input_path: input_path.to_str().unwrap(),
            output_path: output_path.to_str().unwrap(),
            ..DEFAULT_RECONCILER_CONFIG
        };

        let response = process_security_table(&config);
        assert_eq!(response.result, ResponseStatus::NotOk);
        assert_eq!(response.message, "Error processing the CUSIP data.");
        assert!(!output_path.exists());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_unwritable_output_reports_not_ok() {
        let dir = tempdir().unwrap();
        let output_path = dir.path().join("no_such_dir").join("out.csv");

        let config = ReconcilerConfig {
            input_path: SAMPLE_FILE_PATH,
            output_path: output_path.to_str().unwrap(),
            ..DEFAULT_RECONCILER_CONFIG
        };

        assert!(matches!(
            try_process_security_table(&config),
            Err(Error::IoError(_))
        ));
        assert!(!process_security_table(&config).is_ok());
    }

    #[test]
    fn test_failed_run_keeps_previous_output() {
        let dir = tempdir().unwrap();
        let input_path = dir.path().join("missing.csv");
        let output_path = dir.path().join("out.csv");
        fs::write(&output_path, "previous run\n").unwrap();

        let config = ReconcilerConfig {
            input_path: input_path.to_str().unwrap(),
            output_path: output_path.to_str().unwrap(),
            ..DEFAULT_RECONCILER_CONFIG
        };

        assert!(matches!(
            try_process_security_table(&config),
            Err(Error::IoError(_))
        ));
        assert_eq!(fs::read_to_string(&output_path).unwrap(), "previous run\n");
    }

    #[test]
    fn test_latin1_names_still_reconcile() {
        let dir = tempdir().unwrap();
        let input_path = dir.path().join("input.csv");
        let output_path = dir.path().join("out.csv");

        fs::write(
            &input_path,
            b"cusip,securityName,symbol,count\n\
              A1,Acme Corp,ACM,1\n\
              A2,Caf\xe9 SA,CAF,2\n\
              A3,CAF\xc9 SA,,3\n\
              A4,Caf\xe9 SA,,4\n",
        )
        .unwrap();

        let config = ReconcilerConfig {
            input_path: input_path.to_str().unwrap(),
            output_path: output_path.to_str().unwrap(),
            ..DEFAULT_RECONCILER_CONFIG
        };

        let response = process_security_table(&config);
        assert_eq!(response.result, ResponseStatus::Ok);

        let (_, rows) = load_output_rows(&output_path).unwrap();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[1].security_name, "Caf\u{FFFD} SA");
        assert_eq!(new_symbols(&rows), vec!["ACM", "CAF", "CAF", "CAF"]);
    }

    #[test]
    fn test_overwrites_existing_output() {
        let dir = tempdir().unwrap();
        let input_path = dir.path().join("input.csv");
        let output_path = dir.path().join("out.csv");
        fs::write(&output_path, "stale\n").unwrap();

        write_input_fixture(
            &input_path,
            &[("A1", "Acme Corp", "", "5"), ("A2", "Acme Corp", "ACM", "3")],
        )
        .unwrap();

        let config = ReconcilerConfig {
            input_path: input_path.to_str().unwrap(),
            output_path: output_path.to_str().unwrap(),
            ..DEFAULT_RECONCILER_CONFIG
        };

        let summary = try_process_security_table(&config).unwrap();
        assert_eq!(summary.filled, 1);

        let (_, rows) = load_output_rows(&output_path).unwrap();
        assert_eq!(new_symbols(&rows), vec!["ACM", "ACM"]);

        let leftovers: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .filter(|name| name.to_string_lossy().ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[test]
    fn test_gzip_round_trip() {
        let dir = tempdir().unwrap();
        let input_path = dir.path().join("input.csv.gz");
        let output_path = dir.path().join("out.csv.gz");

        write_gzip_input_fixture(
            &input_path,
            &[("B1", "Beta Inc", "BTA", "1"), ("B2", "Beta Inc", "BET", "2")],
        )
        .unwrap();

        let config = ReconcilerConfig {
            input_path: input_path.to_str().unwrap(),
            output_path: output_path.to_str().unwrap(),
            ..DEFAULT_RECONCILER_CONFIG
        };

        assert!(process_security_table(&config).is_ok());

        let (_, rows) = load_output_rows(&output_path).unwrap();
        assert_eq!(new_symbols(&rows), vec!["", "BET"]);
    }

    #[test]
    fn test_tab_delimited_tables() {
        let dir = tempdir().unwrap();
        let input_path = dir.path().join("input.tsv");
        let output_path = dir.path().join("out.tsv");
        fs::write(
            &input_path,
            "cusip\tsecurityName\tsymbol\tcount\nA1\tAcme, Corp\t\t5\nA2\tacme, corp\tACM\t3\n",
        )
        .unwrap();

        let config = ReconcilerConfig {
            input_path: input_path.to_str().unwrap(),
            output_path: output_path.to_str().unwrap(),
            delimiter: b'\t',
            ..DEFAULT_RECONCILER_CONFIG
        };

        assert!(process_security_table(&config).is_ok());
        assert_eq!(
            fs::read_to_string(&output_path).unwrap(),
            "cusip\tsecurityName\tsymbol\tcount\tnew_symbol\n\
             A1\tAcme, Corp\t\t5\tACM\n\
             A2\tacme, corp\tACM\t3\tACM\n"
        );
    }
}
