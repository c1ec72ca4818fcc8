use std::fs;
use std::path::{Path, PathBuf};

use crate::benchmark;
use crate::error::BenchmarkError;
use crate::probe;
use crate::report;

/// Name of the combined machine-readable results file kept alongside the
/// per-dataset CSVs.
pub const COMBINED_RESULTS_FILE: &str = "benchmark_results.json";

/// Runs the benchmark over every dataset subdirectory of `top_level`,
/// persisting one CSV per non-empty dataset into `output_dir`.
///
/// A missing `top_level` directory (or a failure to create `output_dir`)
/// aborts the run; anything that goes wrong inside a single dataset is
/// logged and the remaining datasets are still processed.
pub fn run_suite(top_level: &Path, output_dir: &Path) -> Result<(), BenchmarkError> {
    if !top_level.is_dir() {
        return Err(BenchmarkError::DirectoryNotFound(top_level.to_path_buf()));
    }

    fs::create_dir_all(output_dir).map_err(|e| BenchmarkError::Io {
        path: output_dir.to_path_buf(),
        source: e,
    })?;
    log::info!("results will be saved in '{}'", output_dir.display());

    // Stale combined results from a previous run would otherwise
    // accumulate across runs.
    let combined_path = output_dir.join(COMBINED_RESULTS_FILE);
    if combined_path.exists() {
        fs::remove_file(&combined_path).map_err(|e| BenchmarkError::Io {
            path: combined_path.clone(),
            source: e,
        })?;
    }

    for subdir in dataset_directories(top_level)? {
        let name = subdir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        log::info!("processing dataset '{}'", name);

        let mut probes = probe::default_probes();
        let report = match benchmark::benchmark_directory(&subdir, &mut probes) {
            Ok(report) => report,
            Err(e) => {
                log::error!("benchmark failed for dataset '{}': {}", name, e);
                continue;
            }
        };

        if report.is_empty() {
            log::info!("no data files found in '{}', skipping", name);
            continue;
        }

        let destination = output_dir.join(format!("results_{}.csv", name));
        match report::write_csv(&report, &destination) {
            Ok(()) => log::info!("saved results to '{}'", destination.display()),
            Err(e) => {
                log::error!("failed to save results for '{}': {}", name, e);
                continue;
            }
        }

        if let Err(e) = report::append_json(&report, &combined_path) {
            log::error!("failed to update '{}': {}", combined_path.display(), e);
        }

        report::print_summary(&report);
    }

    Ok(())
}

/// Immediate subdirectories of `top_level`, sorted by directory name.
fn dataset_directories(top_level: &Path) -> Result<Vec<PathBuf>, BenchmarkError> {
    let entries = fs::read_dir(top_level).map_err(|e| BenchmarkError::Io {
        path: top_level.to_path_buf(),
        source: e,
    })?;

    let mut dirs = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| BenchmarkError::Io {
            path: top_level.to_path_buf(),
            source: e,
        })?;
        let path = entry.path();
        if path.is_dir() {
            dirs.push(path);
        }
    }

    dirs.sort_by_key(|p| p.file_name().map(|n| n.to_os_string()));
    Ok(dirs)
}
