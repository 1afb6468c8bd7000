//! Cleaning and aggregation for one numeric column.
//!
//! [`Summarizer`] drives the whole pipeline: coerce the designated value
//! column, drop rows that fail coercion, then aggregate the survivors
//! into a [`Report`]. Irregularities that do not abort the run come back
//! as [`Warning`]s alongside the report instead of being raised.

use std::{collections::HashSet, fmt};

use arrow::{array::BooleanArray, compute::filter_record_batch};

use crate::{
    dataset::Dataset,
    error::Result,
    report::{Report, Summary},
};

/// Default name of the numeric column.
pub const DEFAULT_VALUE_COLUMN: &str = "value";

/// Default name of the category column.
pub const DEFAULT_CATEGORY_COLUMN: &str = "category";

/// Attempts to coerce a raw cell into a finite numeric value.
///
/// Standard float literal rules apply: optional sign, decimal point,
/// exponent. Surrounding whitespace is trimmed first, so blank cells are
/// missing rather than malformed. Spellings that parse to a non-finite
/// number (`inf`, `NaN`, overflowing exponents) are rejected.
///
/// # Example
///
/// ```
/// use resumen::summary::coerce_numeric;
///
/// assert_eq!(coerce_numeric("10"), Some(10.0));
/// assert_eq!(coerce_numeric("-2.5e2"), Some(-250.0));
/// assert_eq!(coerce_numeric("bad"), None);
/// assert_eq!(coerce_numeric(""), None);
/// assert_eq!(coerce_numeric("inf"), None);
/// ```
pub fn coerce_numeric(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Non-fatal irregularities detected while summarizing.
///
/// Warnings belong on the error stream; they never contaminate the JSON
/// report and never fail the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// The numeric column is absent from the input schema. All value
    /// statistics degrade to null and no row is dropped.
    MissingColumn {
        /// Name of the missing column.
        column: String,
    },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingColumn { column } => write!(
                f,
                "column '{}' not found in input; value statistics will be null",
                column
            ),
        }
    }
}

/// Outcome of one summarization run.
#[derive(Debug, Clone)]
pub struct Analysis {
    /// The report to serialize.
    pub report: Report,
    /// Non-fatal irregularities, in detection order.
    pub warnings: Vec<Warning>,
}

/// Rows surviving numeric coercion, with original columns untouched.
///
/// `values` holds the coerced numbers in row order when the value column
/// exists; it is `None` when the column is absent (in which case no row
/// was dropped either).
struct Cleaned {
    dataset: Dataset,
    values: Option<Vec<f64>>,
}

/// Cleans one numeric column and aggregates summary statistics.
///
/// # Example
///
/// ```
/// use resumen::{Dataset, Summarizer};
///
/// let dataset = Dataset::from_csv_str("value,category\n10,a\nbad,b\n20,a\n").unwrap();
/// let analysis = Summarizer::new().summarize(&dataset).unwrap();
///
/// let summary = analysis.report.as_summary().unwrap();
/// assert_eq!(summary.total_rows, 2);
/// assert_eq!(summary.sum_value, Some(30.0));
/// assert_eq!(summary.unique_categories, Some(1));
/// ```
#[derive(Debug, Clone)]
pub struct Summarizer {
    value_column: String,
    category_column: String,
}

impl Default for Summarizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Summarizer {
    /// Creates a summarizer over the default `value` and `category`
    /// columns.
    pub fn new() -> Self {
        Self {
            value_column: DEFAULT_VALUE_COLUMN.to_string(),
            category_column: DEFAULT_CATEGORY_COLUMN.to_string(),
        }
    }

    /// Sets the name of the numeric column.
    #[must_use]
    pub fn value_column(mut self, name: impl Into<String>) -> Self {
        self.value_column = name.into();
        self
    }

    /// Sets the name of the category column.
    #[must_use]
    pub fn category_column(mut self, name: impl Into<String>) -> Self {
        self.category_column = name.into();
        self
    }

    /// Runs the clean-then-aggregate pipeline over a dataset.
    ///
    /// Fatal conditions were already handled at load time; everything
    /// here degrades gracefully. A missing value column produces one
    /// warning and null statistics. An empty cleaned set produces the
    /// degenerate report.
    ///
    /// # Errors
    ///
    /// Returns an error if the Arrow filter kernel fails.
    pub fn summarize(&self, dataset: &Dataset) -> Result<Analysis> {
        let mut warnings = Vec::new();
        if !dataset.has_column(&self.value_column) {
            warnings.push(Warning::MissingColumn {
                column: self.value_column.clone(),
            });
        }

        let cleaned = self.clean(dataset)?;
        let report = self.build_report(&cleaned);

        Ok(Analysis { report, warnings })
    }

    /// Drops every row whose value cell fails numeric coercion.
    ///
    /// Pure filter: surviving rows keep all their columns and their
    /// relative order. Without a value column there is nothing to judge
    /// rows by, so the dataset passes through whole.
    fn clean(&self, dataset: &Dataset) -> Result<Cleaned> {
        let Some(cells) = dataset.column_text(&self.value_column) else {
            return Ok(Cleaned {
                dataset: dataset.clone(),
                values: None,
            });
        };

        let coerced: Vec<Option<f64>> = cells
            .iter()
            .map(|cell| cell.as_deref().and_then(coerce_numeric))
            .collect();
        let values: Vec<f64> = coerced.iter().copied().flatten().collect();

        let mut batches = Vec::with_capacity(dataset.num_batches());
        let mut offset = 0;
        for batch in dataset.batches() {
            let rows = batch.num_rows();
            let mask = BooleanArray::from(
                coerced[offset..offset + rows]
                    .iter()
                    .map(|v| v.is_some())
                    .collect::<Vec<bool>>(),
            );
            batches.push(filter_record_batch(batch, &mask)?);
            offset += rows;
        }

        Ok(Cleaned {
            dataset: Dataset::from_parts(dataset.schema(), batches),
            values: Some(values),
        })
    }

    /// Aggregates a cleaned dataset into its report shape.
    fn build_report(&self, cleaned: &Cleaned) -> Report {
        if cleaned.dataset.is_empty() {
            return Report::no_valid_data();
        }

        let stats = cleaned.values.as_deref().map(value_stats);
        let unique_categories = cleaned
            .dataset
            .column_text(&self.category_column)
            .map(|cells| distinct_count(&cells));

        Report::Summary(Summary {
            total_rows: cleaned.dataset.len(),
            mean_value: stats.as_ref().map(|s| s.mean),
            sum_value: stats.as_ref().map(|s| s.sum),
            min_value: stats.as_ref().map(|s| s.min),
            max_value: stats.as_ref().map(|s| s.max),
            unique_categories,
        })
    }
}

struct ValueStats {
    mean: f64,
    sum: f64,
    min: f64,
    max: f64,
}

/// Folds summary statistics over a non-empty value slice.
#[allow(clippy::cast_precision_loss)]
fn value_stats(values: &[f64]) -> ValueStats {
    let sum: f64 = values.iter().sum();
    let mean = sum / values.len() as f64;
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    ValueStats {
        mean,
        sum,
        min,
        max,
    }
}

/// Counts distinct non-missing labels; exact match, case-sensitive.
fn distinct_count(cells: &[Option<String>]) -> usize {
    let labels: HashSet<&str> = cells
        .iter()
        .filter_map(|cell| cell.as_deref())
        .filter(|label| !label.is_empty())
        .collect();
    labels.len()
}
