//! resumen - Tabular Cleaning and Summary Reports in Pure Rust
//!
//! Reads a delimited tabular file, cleans one numeric column, computes
//! summary statistics, and emits a JSON report. A single-pass batch
//! transform: one process, one input, one report, no state left behind.
//!
//! # Design Principles
//!
//! 1. **Single pass** - load, clean, aggregate, serialize; strictly
//!    linear control flow
//! 2. **Pure Rust** - no Python, no FFI
//! 3. **Arrow-native** - `RecordBatch` throughout, ecosystem aligned
//!    (Arrow 53)
//! 4. **Best-effort output** - readable input always yields a report;
//!    irregularities degrade fields to null instead of failing the run
//!
//! # Quick Start
//!
//! ```
//! use resumen::{Dataset, Summarizer};
//!
//! let dataset = Dataset::from_csv_str("value,category\n10,a\nbad,b\n20,a\n").unwrap();
//! let analysis = Summarizer::new().summarize(&dataset).unwrap();
//!
//! let summary = analysis.report.as_summary().unwrap();
//! assert_eq!(summary.total_rows, 2);
//! assert_eq!(summary.mean_value, Some(15.0));
//! assert_eq!(summary.unique_categories, Some(1));
//! ```

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
// Allow common test patterns
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::cast_precision_loss,
        clippy::float_cmp,
        clippy::unreadable_literal
    )
)]
// Allow some pedantic lints for cleaner code
#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]

pub mod cli;
pub mod dataset;
pub mod error;
pub mod report;
pub mod summary;

// Re-exports for convenience
// Re-export arrow types commonly needed
pub use arrow::{
    array::RecordBatch,
    datatypes::{Schema, SchemaRef},
};
pub use dataset::{CsvOptions, Dataset};
pub use error::{Error, Result};
pub use report::{Report, Summary, NO_VALID_DATA_MESSAGE};
pub use summary::{coerce_numeric, Analysis, Summarizer, Warning};
