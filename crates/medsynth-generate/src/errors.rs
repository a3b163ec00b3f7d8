use thiserror::Error;

use medsynth_core::{ConfigError, EntityKind, LookupError};

/// Errors raised while assembling a single table.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error(transparent)]
    Lookup(#[from] LookupError),
    /// A reference column points at a pool the catalog never allocated.
    #[error("no pool allocated for entity {0:?}")]
    MissingPool(EntityKind),
    /// A referenced pool holds no identifiers.
    #[error("pool for entity {0:?} is empty")]
    EmptyPool(EntityKind),
    /// A table requested more own-pool ids than were allocated.
    #[error("pool for entity {entity:?} exhausted at row {row}")]
    PoolExhausted { entity: EntityKind, row: usize },
    /// A derived column names a sibling that does not exist or carries no
    /// numeric value.
    #[error("derived column '{column}' in '{table}' needs numeric input '{input}'")]
    MissingInput {
        table: String,
        column: String,
        input: String,
    },
    /// Location columns used without a sampled location batch.
    #[error("table '{0}' uses location columns but no locations were sampled")]
    MissingLocations(String),
    /// Invariant breach inside the assembler.
    #[error("assembly invariant broken for '{column}' in '{table}': {detail}")]
    Internal {
        table: String,
        column: String,
        detail: &'static str,
    },
}

/// Errors raised by the tabular sink.
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

/// Failure of one table: either its assembly or its write.
#[derive(Debug, Error)]
pub enum TableError {
    #[error(transparent)]
    Generation(#[from] GenerationError),
    #[error(transparent)]
    Sink(#[from] SinkError),
}

/// Run-level failures that abort the whole run.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Pool sizing misconfiguration; no table output is attempted.
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("unknown table '{0}' in table filter")]
    UnknownTable(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("report serialization failed: {0}")]
    Report(#[from] serde_json::Error),
}
