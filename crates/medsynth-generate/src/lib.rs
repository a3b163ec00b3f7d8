//! Referential-consistency generation engine for the medsynth dataset.
//!
//! Pools of entity identifiers are materialized once per run, before any
//! table is assembled, so cross-table references are resolvable regardless
//! of generation order. Location columns always come from one dependent
//! country → state → city draw. Output is one CSV file per table plus a
//! JSON run report.

pub mod assembly;
pub mod catalog;
pub mod engine;
pub mod errors;
pub mod geography;
pub mod locations;
pub mod model;
pub mod output;
pub mod pools;
pub mod values;

pub use engine::{GenerationEngine, GenerationResult};
pub use errors::{EngineError, GenerationError, SinkError, TableError};
pub use model::{GenerateOptions, GenerationReport, TableFailure, TableReport};
