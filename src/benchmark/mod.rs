use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::dataset;
use crate::error::BenchmarkError;
use crate::probe::SizeProbe;

/// Extension a file must carry to be picked up as benchmark input.
pub const DATA_FILE_EXTENSION: &str = "txt";

/// One representation's measured size for one input file.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ProbeSize {
    pub name: String,
    pub bytes: u64,
}

/// Size measurements for a single input file.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct BenchmarkRow {
    pub filename: String,
    pub uncompressed_bytes: u64,
    pub probe_sizes: Vec<ProbeSize>,
}

/// The ordered results for one dataset subdirectory.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct DatasetReport {
    pub dataset_name: String,
    pub probe_names: Vec<String>,
    pub rows: Vec<BenchmarkRow>,
}

impl DatasetReport {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Benchmarks every data file directly inside `dir`, producing one row per
/// file that loads successfully.
///
/// Files are processed in lexicographic filename order so that row order
/// is reproducible. A file that fails to load is logged and skipped; a
/// directory with no qualifying files (or a missing directory) yields an
/// empty report.
pub fn benchmark_directory(
    dir: &Path,
    probes: &mut [Box<dyn SizeProbe>],
) -> Result<DatasetReport, BenchmarkError> {
    let dataset_name = directory_name(dir);
    let probe_names: Vec<String> = probes.iter().map(|p| p.name().to_string()).collect();

    let mut report = DatasetReport {
        dataset_name,
        probe_names,
        rows: Vec::new(),
    };

    if !dir.is_dir() {
        log::warn!("directory not found: '{}'", dir.display());
        return Ok(report);
    }

    for path in data_files(dir)? {
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let values = match dataset::load_values(&path) {
            Ok(values) => values,
            Err(e) => {
                log::warn!("skipping '{}': {}", path.display(), e);
                continue;
            }
        };

        // Fixed-width 32-bit encoding: 4 bytes per parsed element.
        let uncompressed_bytes = values.len() as u64 * 4;

        let probe_sizes = probes
            .iter_mut()
            .map(|probe| {
                probe.build(&values);
                ProbeSize {
                    name: probe.name().to_string(),
                    bytes: probe.size_in_bytes(),
                }
            })
            .collect();

        log::info!(
            "processed '{}': {} values, {} bytes uncompressed",
            filename,
            values.len(),
            uncompressed_bytes
        );

        report.rows.push(BenchmarkRow {
            filename,
            uncompressed_bytes,
            probe_sizes,
        });
    }

    Ok(report)
}

/// Regular files in `dir` with the data extension, sorted by file name.
fn data_files(dir: &Path) -> Result<Vec<PathBuf>, BenchmarkError> {
    let entries = fs::read_dir(dir).map_err(|e| BenchmarkError::Io {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| BenchmarkError::Io {
            path: dir.to_path_buf(),
            source: e,
        })?;
        let path = entry.path();
        if path.is_file()
            && path
                .extension()
                .map(|ext| ext == DATA_FILE_EXTENSION)
                .unwrap_or(false)
        {
            files.push(path);
        }
    }

    files.sort_by_key(|p| p.file_name().map(|n| n.to_os_string()));
    Ok(files)
}

fn directory_name(dir: &Path) -> String {
    dir.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| dir.display().to_string())
}
