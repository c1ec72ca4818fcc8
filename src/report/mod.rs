use std::fs;
use std::io::Write;
use std::path::Path;

use prettytable::{Cell, Row, Table};

use crate::benchmark::{BenchmarkRow, DatasetReport};
use crate::error::BenchmarkError;

/// Compression ratio of a representation.
///
/// The one place a division by zero can happen: a zero-byte representation
/// reports `NaN` instead of raising.
pub fn ratio(uncompressed_bytes: u64, representation_bytes: u64) -> f64 {
    if representation_bytes == 0 {
        f64::NAN
    } else {
        uncompressed_bytes as f64 / representation_bytes as f64
    }
}

/// Column headers in artifact order: filename, uncompressed size, one size
/// column per probe, then one ratio column per probe.
fn header(report: &DatasetReport) -> Vec<String> {
    let mut columns = vec!["Filename".to_string(), "Uncompressed (bytes)".to_string()];
    for name in &report.probe_names {
        columns.push(format!("{} (bytes)", name));
    }
    for name in &report.probe_names {
        columns.push(format!("{} Ratio", name));
    }
    columns
}

fn row_cells(row: &BenchmarkRow) -> Vec<String> {
    let mut cells = vec![row.filename.clone(), row.uncompressed_bytes.to_string()];
    for probe in &row.probe_sizes {
        cells.push(probe.bytes.to_string());
    }
    for probe in &row.probe_sizes {
        cells.push(format!("{:.6}", ratio(row.uncompressed_bytes, probe.bytes)));
    }
    cells
}

/// Writes the report as a CSV artifact, overwriting any existing file.
pub fn write_csv(report: &DatasetReport, destination: &Path) -> Result<(), BenchmarkError> {
    let mut content = String::new();
    content.push_str(&header(report).join(","));
    content.push('\n');
    for row in &report.rows {
        content.push_str(&row_cells(row).join(","));
        content.push('\n');
    }

    let mut file = fs::File::create(destination).map_err(|e| BenchmarkError::Write {
        path: destination.to_path_buf(),
        source: e,
    })?;
    file.write_all(content.as_bytes())
        .map_err(|e| BenchmarkError::Write {
            path: destination.to_path_buf(),
            source: e,
        })
}

/// Appends the report to a combined JSON results file, creating it on
/// first use.
pub fn append_json(report: &DatasetReport, path: &Path) -> Result<(), BenchmarkError> {
    let mut reports: Vec<DatasetReport> = if path.exists() {
        let content = fs::read_to_string(path).map_err(|e| BenchmarkError::Write {
            path: path.to_path_buf(),
            source: e,
        })?;
        serde_json::from_str(&content).unwrap_or_else(|e| {
            log::warn!("could not parse '{}' ({}), starting fresh", path.display(), e);
            Vec::new()
        })
    } else {
        Vec::new()
    };

    reports.push(report.clone());

    let json = serde_json::to_string_pretty(&reports).map_err(|e| BenchmarkError::Write {
        path: path.to_path_buf(),
        source: std::io::Error::new(std::io::ErrorKind::InvalidData, e),
    })?;
    fs::write(path, json).map_err(|e| BenchmarkError::Write {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Prints the report to stdout as a table, same column order as the CSV.
pub fn print_summary(report: &DatasetReport) {
    let mut table = Table::new();
    table.add_row(Row::new(
        header(report).iter().map(|c| Cell::new(c)).collect(),
    ));
    for row in &report.rows {
        table.add_row(Row::new(
            row_cells(row).iter().map(|c| Cell::new(c)).collect(),
        ));
    }

    println!("\nResults for dataset: {}", report.dataset_name);
    table.printstd();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::benchmark::{BenchmarkRow, ProbeSize};
    use tempfile::tempdir;

    fn sample_report() -> DatasetReport {
        DatasetReport {
            dataset_name: "sample".to_string(),
            probe_names: vec!["Roaring".to_string(), "Splinter".to_string()],
            rows: vec![BenchmarkRow {
                filename: "a.txt".to_string(),
                uncompressed_bytes: 16,
                probe_sizes: vec![
                    ProbeSize {
                        name: "Roaring".to_string(),
                        bytes: 8,
                    },
                    ProbeSize {
                        name: "Splinter".to_string(),
                        bytes: 4,
                    },
                ],
            }],
        }
    }

    #[test]
    fn ratio_is_exact_for_non_zero_sizes() {
        assert_eq!(ratio(16, 8), 2.0);
        assert_eq!(ratio(0, 8), 0.0);
    }

    #[test]
    fn zero_size_ratio_is_nan() {
        assert!(ratio(16, 0).is_nan());
        assert!(ratio(0, 0).is_nan());
    }

    #[test]
    fn csv_columns_follow_registration_order() {
        let dir = tempdir().unwrap();
        let destination = dir.path().join("results_sample.csv");

        write_csv(&sample_report(), &destination).unwrap();

        let content = fs::read_to_string(&destination).unwrap();
        let mut lines = content.lines();
        assert_eq!(
            lines.next().unwrap(),
            "Filename,Uncompressed (bytes),Roaring (bytes),Splinter (bytes),Roaring Ratio,Splinter Ratio"
        );
        assert_eq!(lines.next().unwrap(), "a.txt,16,8,4,2.000000,4.000000");
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn csv_overwrites_previous_artifact() {
        let dir = tempdir().unwrap();
        let destination = dir.path().join("results_sample.csv");
        fs::write(&destination, "stale contents").unwrap();

        write_csv(&sample_report(), &destination).unwrap();

        let content = fs::read_to_string(&destination).unwrap();
        assert!(content.starts_with("Filename,"));
        assert!(!content.contains("stale"));
    }

    #[test]
    fn zero_byte_probe_writes_nan_sentinel() {
        let mut report = sample_report();
        report.rows[0].probe_sizes[1].bytes = 0;

        let dir = tempdir().unwrap();
        let destination = dir.path().join("results_sample.csv");
        write_csv(&report, &destination).unwrap();

        let content = fs::read_to_string(&destination).unwrap();
        assert!(content.lines().nth(1).unwrap().ends_with("NaN"));
    }

    #[test]
    fn json_results_accumulate_and_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("benchmark_results.json");

        append_json(&sample_report(), &path).unwrap();
        append_json(&sample_report(), &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let reports: Vec<DatasetReport> = serde_json::from_str(&content).unwrap();
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].rows[0].filename, "a.txt");
    }

    #[test]
    fn write_failure_is_a_write_error() {
        let dir = tempdir().unwrap();
        let destination = dir.path().join("missing").join("results.csv");

        assert!(matches!(
            write_csv(&sample_report(), &destination),
            Err(BenchmarkError::Write { .. })
        ));
    }
}
