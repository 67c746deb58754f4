// ============================================================
// Layer 4 — Dataset Loader
// ============================================================
// Reads comma-separated numeric tables from a directory using
// the csv crate.
//
// File format:
//   - one row per line, fields separated by commas
//   - every field must parse as a floating point number
//   - an optional header row is allowed: if the FIRST row does
//     not parse as numbers it is dropped without an error
//   - blank lines are skipped
//
// After parsing, the rows are shuffled once (Fisher-Yates via
// the splitter module) so every training run sees a randomized
// order without paying for a reshuffle on each request.
//
// Reference: csv crate documentation
//            Rust Book §9 (Error Handling)
//            Rust Book §12 (I/O and File Handling)

use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, Trim};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::data::splitter::shuffle_rows;
use crate::domain::dataset::{Dataset, Row};
use crate::domain::error::{CoreError, CoreResult};
use crate::domain::traits::DatasetSource;

/// Loads datasets from CSV files in a single directory.
/// Implements the DatasetSource trait from Layer 3.
pub struct FsDatasetSource {
    /// Directory holding one file per dataset
    dir: PathBuf,

    /// Fixed shuffle seed; None means a fresh random order per load
    seed: Option<u64>,
}

impl FsDatasetSource {
    pub fn new(dir: impl Into<PathBuf>, seed: Option<u64>) -> Self {
        Self { dir: dir.into(), seed }
    }

    /// Map a dataset name to its file, refusing anything that is
    /// not a plain file name inside the directory.
    fn resolve(&self, name: &str) -> Option<PathBuf> {
        let plain = !name.is_empty()
            && name != "."
            && name != ".."
            && !name.contains(['/', '\\']);
        plain.then(|| self.dir.join(name))
    }
}

impl DatasetSource for FsDatasetSource {
    fn list(&self) -> CoreResult<BTreeSet<String>> {
        if !self.dir.exists() {
            tracing::warn!(
                "Data set directory '{}' does not exist, no data sets available",
                self.dir.display()
            );
            return Ok(BTreeSet::new());
        }

        let storage = |e: io::Error| CoreError::Storage {
            name:    self.dir.display().to_string(),
            message: e.to_string(),
        };

        let mut names = BTreeSet::new();
        for entry in fs::read_dir(&self.dir).map_err(storage)? {
            let entry = entry.map_err(storage)?;
            if !entry.file_type().map_err(storage)?.is_file() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                names.insert(name.to_string());
            }
        }
        Ok(names)
    }

    fn load(&self, name: &str) -> CoreResult<Dataset> {
        let path = self
            .resolve(name)
            .filter(|p| p.is_file())
            .ok_or_else(|| CoreError::DatasetNotFound(name.to_string()))?;

        let mut rows = read_rows(name, &path)?;

        match self.seed {
            Some(seed) => shuffle_rows(&mut rows, &mut StdRng::seed_from_u64(seed)),
            None => shuffle_rows(&mut rows, &mut rand::thread_rng()),
        }

        tracing::info!("Loaded data set '{}' ({} rows)", name, rows.len());
        Ok(Dataset::new(name, rows))
    }
}

/// Parse every record of the file into a numeric row.
fn read_rows(name: &str, path: &Path) -> CoreResult<Vec<Row>> {
    let storage = |e: csv::Error| CoreError::Storage {
        name:    name.to_string(),
        message: e.to_string(),
    };

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_path(path)
        .map_err(storage)?;

    let mut rows = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record.map_err(storage)?;
        if record.iter().all(str::is_empty) {
            continue;
        }

        match parse_record(&record) {
            Ok(row) => rows.push(row),
            // A first row that is not numeric is a header
            Err(_) if index == 0 => {
                tracing::debug!("Discarding header row of '{}': {:?}", name, record);
            }
            Err(field) => {
                let line = record.position().map_or(index as u64 + 1, |p| p.line());
                return Err(CoreError::parse(format!(
                    "data set '{name}' line {line}: '{field}' is not a number"
                )));
            }
        }
    }
    Ok(rows)
}

/// Parse all fields as f64, returning the first offending field on failure.
fn parse_record(record: &StringRecord) -> Result<Row, String> {
    record
        .iter()
        .map(|field| field.parse::<f64>().map_err(|_| field.to_string()))
        .collect()
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn source_with(files: &[(&str, &str)]) -> (tempfile::TempDir, FsDatasetSource) {
        let dir = tempfile::tempdir().unwrap();
        for (name, body) in files {
            fs::write(dir.path().join(name), body).unwrap();
        }
        let source = FsDatasetSource::new(dir.path(), Some(7));
        (dir, source)
    }

    fn sorted(mut rows: Vec<Row>) -> Vec<Row> {
        rows.sort_by(|a, b| a.partial_cmp(b).unwrap());
        rows
    }

    #[test]
    fn test_header_row_is_discarded() {
        let (_dir, source) = source_with(&[("xor.csv", "a,b,out\n0,0,0\n0,1,1\n1,0,1\n1,1,0\n")]);
        let ds = source.load("xor.csv").unwrap();
        assert_eq!(ds.len(), 4);
        assert_eq!(
            sorted(ds.rows().to_vec()),
            vec![vec![0.0, 0.0, 0.0], vec![0.0, 1.0, 1.0], vec![1.0, 0.0, 1.0], vec![1.0, 1.0, 0.0]]
        );
    }

    #[test]
    fn test_numeric_first_row_is_kept() {
        let (_dir, source) = source_with(&[("d.csv", "1.5, 2\n3,4\n\n")]);
        let ds = source.load("d.csv").unwrap();
        assert_eq!(sorted(ds.rows().to_vec()), vec![vec![1.5, 2.0], vec![3.0, 4.0]]);
    }

    #[test]
    fn test_bad_later_row_is_a_parse_error() {
        let (_dir, source) = source_with(&[("bad.csv", "1,2\n3,x\n")]);
        let err = source.load("bad.csv").unwrap_err();
        assert!(matches!(err, CoreError::Parse(ref m) if m.contains("'x'")));
    }

    #[test]
    fn test_missing_or_unsafe_names_are_not_found() {
        let (_dir, source) = source_with(&[("a.csv", "1\n")]);
        for name in ["nope.csv", "../a.csv", "..", ""] {
            assert!(matches!(source.load(name), Err(CoreError::DatasetNotFound(_))));
        }
    }

    #[test]
    fn test_list_returns_only_files() {
        let (dir, source) = source_with(&[("a.csv", "1\n"), ("b.csv", "2\n")]);
        fs::create_dir(dir.path().join("nested")).unwrap();
        let names: Vec<String> = source.list().unwrap().into_iter().collect();
        assert_eq!(names, ["a.csv", "b.csv"]);
    }

    #[test]
    fn test_list_of_missing_directory_is_empty() {
        let source = FsDatasetSource::new("/definitely/not/here", None);
        assert!(source.list().unwrap().is_empty());
    }

    #[test]
    fn test_load_shuffles_rows_once() {
        let file_order: Vec<Row> = (0..50).map(|i| vec![i as f64, (i * 2) as f64]).collect();
        let body: String = file_order.iter().map(|r| format!("{},{}\n", r[0], r[1])).collect();
        let (_dir, source) = source_with(&[("n.csv", body.as_str())]);

        let ds = source.load("n.csv").unwrap();
        assert_ne!(ds.rows(), file_order.as_slice());
        assert_eq!(sorted(ds.rows().to_vec()), file_order);
    }

    #[test]
    fn test_same_seed_gives_same_order() {
        let body: String = (0..50).map(|i| format!("{i},{}\n", i * 2)).collect();
        let (_dir, source) = source_with(&[("n.csv", body.as_str())]);
        assert_eq!(source.load("n.csv").unwrap(), source.load("n.csv").unwrap());
    }
}
