use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Options for a generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateOptions {
    /// Directory where table files and the run report are written.
    pub out_dir: PathBuf,
    /// Base row count every table's target derives from.
    pub base_rows: u64,
    /// Run seed; per-table streams are derived from it.
    pub seed: u64,
    /// Optional subset of tables to generate. Pools still cover the full
    /// catalog so references in the subset stay valid.
    pub only: Vec<String>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("out"),
            base_rows: 10_000,
            seed: 42,
            only: Vec::new(),
        }
    }
}

/// Summary of one generated table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableReport {
    pub table: String,
    pub rows: u64,
    pub columns: u64,
    pub bytes_written: u64,
    pub duration_ms: u64,
}

/// A table the run could not produce.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableFailure {
    pub table: String,
    pub error: String,
}

/// Machine-readable summary of a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    pub seed: u64,
    pub base_rows: u64,
    pub tables: Vec<TableReport>,
    pub failures: Vec<TableFailure>,
    pub bytes_written: u64,
    pub duration_ms: u64,
}

impl GenerationReport {
    pub fn new(seed: u64, base_rows: u64) -> Self {
        Self {
            seed,
            base_rows,
            tables: Vec::new(),
            failures: Vec::new(),
            bytes_written: 0,
            duration_ms: 0,
        }
    }
}
