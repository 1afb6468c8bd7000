//! Report shapes and JSON rendering.
//!
//! A run produces exactly one [`Report`], in one of two shapes: summary
//! statistics over the cleaned rows, or a degenerate message when no row
//! survived cleaning. The duality is an explicit enum so consumers match
//! exhaustively instead of probing null-vs-absent fields.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Message carried by the degenerate report when cleaning leaves no rows.
pub const NO_VALID_DATA_MESSAGE: &str = "No valid data after processing.";

/// Summary statistics over the cleaned rows.
///
/// Field declaration order fixes the JSON key order. The four value
/// statistics are `None` (serialized as `null`) when the numeric column
/// was absent from the input; `unique_categories` is `None` when the
/// category column was absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Number of rows that survived cleaning.
    pub total_rows: usize,
    /// Arithmetic mean of the numeric column.
    pub mean_value: Option<f64>,
    /// Sum of the numeric column.
    pub sum_value: Option<f64>,
    /// Minimum of the numeric column.
    pub min_value: Option<f64>,
    /// Maximum of the numeric column.
    pub max_value: Option<f64>,
    /// Count of distinct labels in the category column.
    pub unique_categories: Option<usize>,
}

/// A finished report in one of its two shapes.
///
/// Serialization is untagged: the normal shape is the flat statistics
/// object, the degenerate shape is `{"message": ...}`. Consumers detect
/// the degenerate case by the presence of the `message` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Report {
    /// Statistics over at least one cleaned row.
    Summary(Summary),
    /// No rows survived cleaning.
    NoValidData {
        /// Human-readable explanation of the empty result.
        message: String,
    },
}

impl Report {
    /// Builds the degenerate report.
    pub fn no_valid_data() -> Self {
        Self::NoValidData {
            message: NO_VALID_DATA_MESSAGE.to_string(),
        }
    }

    /// Returns the statistics of a normal-shape report.
    pub fn as_summary(&self) -> Option<&Summary> {
        match self {
            Self::Summary(summary) => Some(summary),
            Self::NoValidData { .. } => None,
        }
    }

    /// Returns true when the report is the degenerate shape.
    pub fn is_degenerate(&self) -> bool {
        matches!(self, Self::NoValidData { .. })
    }

    /// Renders the report as indented JSON with stable key order.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
