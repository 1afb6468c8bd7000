//! Dataset types for resumen.
//!
//! Provides the [`Dataset`] type for delimited tabular data loaded into
//! Arrow record batches, and [`CsvOptions`] for controlling the parse.

use std::{
    io::{BufReader, Cursor, Seek, SeekFrom},
    path::Path,
    sync::Arc,
};

use arrow::{
    array::{Array, RecordBatch, StringArray},
    datatypes::{DataType, Field, Schema, SchemaRef},
};
use arrow_csv::{reader::Format, ReaderBuilder};

use crate::error::{Error, Result};

/// An in-memory tabular dataset backed by Arrow record batches.
///
/// Every column is loaded as nullable text regardless of what the cells
/// look like, so the raw input survives loading untouched and numeric
/// interpretation stays a single explicit step in the summarizer. A
/// dataset may hold zero rows: a header-only file loads fine, and
/// emptiness becomes a reporting decision rather than a loading error.
///
/// # Example
///
/// ```no_run
/// use resumen::Dataset;
///
/// let dataset = Dataset::from_csv("data.csv").unwrap();
/// println!("Dataset has {} rows", dataset.len());
/// ```
#[derive(Debug, Clone)]
pub struct Dataset {
    batches: Vec<RecordBatch>,
    schema: SchemaRef,
    row_count: usize,
}

impl Dataset {
    /// Loads a dataset from a delimited text file with default options.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file does not exist (`InputNotFound`)
    /// - The file cannot be read (`Io`)
    /// - The file cannot be parsed as delimited text (`Malformed`)
    /// - The file yields no columns at all (`NoColumns`)
    pub fn from_csv(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_csv_with_options(path, CsvOptions::default())
    }

    /// Loads a dataset from a delimited text file with options.
    ///
    /// Schema inference is used only to discover column names; every
    /// field is forced to nullable text before reading.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Dataset::from_csv`].
    pub fn from_csv_with_options(path: impl AsRef<Path>, options: CsvOptions) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => Error::not_found(path),
            _ => Error::io(e, path),
        })?;
        let mut buf_reader = BufReader::new(file);

        let mut format = Format::default().with_header(options.has_header);
        if let Some(delim) = options.delimiter {
            format = format.with_delimiter(delim);
        }
        let (inferred, _) = format
            .infer_schema(&mut buf_reader, Some(1000))
            .map_err(|e| Error::malformed(e, path))?;

        if inferred.fields().is_empty() {
            return Err(Error::no_columns(path));
        }
        let schema = text_schema(&inferred);

        // Reset file position after inference
        buf_reader
            .seek(SeekFrom::Start(0))
            .map_err(|e| Error::io(e, path))?;

        let mut builder = ReaderBuilder::new(Arc::clone(&schema))
            .with_batch_size(options.batch_size)
            .with_header(options.has_header);
        if let Some(delim) = options.delimiter {
            builder = builder.with_delimiter(delim);
        }

        let reader = builder
            .build(buf_reader)
            .map_err(|e| Error::malformed(e, path))?;

        let batches: Vec<RecordBatch> = reader
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| Error::malformed(e, path))?;

        Ok(Self::from_parts(schema, batches))
    }

    /// Loads a dataset from a delimited string (comma-separated, with a
    /// header row).
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not valid delimited text.
    pub fn from_csv_str(data: &str) -> Result<Self> {
        let mut cursor = Cursor::new(data.as_bytes());
        let format = Format::default().with_header(true);
        let (inferred, _) = format
            .infer_schema(&mut cursor, Some(1000))
            .map_err(Error::Arrow)?;

        let schema = text_schema(&inferred);
        let cursor = Cursor::new(data.as_bytes());

        let reader = ReaderBuilder::new(Arc::clone(&schema))
            .with_batch_size(8192)
            .with_header(true)
            .build(cursor)
            .map_err(Error::Arrow)?;

        let batches: Vec<RecordBatch> = reader
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(Error::Arrow)?;

        Ok(Self::from_parts(schema, batches))
    }

    /// Builds a dataset from batches that all share `schema`.
    pub(crate) fn from_parts(schema: SchemaRef, batches: Vec<RecordBatch>) -> Self {
        let row_count = batches.iter().map(|b| b.num_rows()).sum();
        Self {
            batches,
            schema,
            row_count,
        }
    }

    /// Returns the total number of rows in the dataset.
    pub fn len(&self) -> usize {
        self.row_count
    }

    /// Returns true if the dataset contains no rows.
    pub fn is_empty(&self) -> bool {
        self.row_count == 0
    }

    /// Returns the schema of the dataset.
    pub fn schema(&self) -> SchemaRef {
        Arc::clone(&self.schema)
    }

    /// Returns the underlying batches.
    pub fn batches(&self) -> &[RecordBatch] {
        &self.batches
    }

    /// Returns the number of batches in the dataset.
    pub fn num_batches(&self) -> usize {
        self.batches.len()
    }

    /// Returns true if the schema contains a column with the given name.
    pub fn has_column(&self, name: &str) -> bool {
        self.schema.index_of(name).is_ok()
    }

    /// Extracts the raw text of a named column, one entry per row.
    ///
    /// Returns `None` when the column is absent from the schema. Cell
    /// text comes back exactly as it appeared in the input; missing
    /// cells are `None`.
    pub fn column_text(&self, name: &str) -> Option<Vec<Option<String>>> {
        let index = self.schema.index_of(name).ok()?;
        let mut cells = Vec::with_capacity(self.row_count);

        for batch in &self.batches {
            let array = batch.column(index);
            // Loading forces Utf8, so every column downcasts to StringArray.
            let strings = array.as_any().downcast_ref::<StringArray>();
            for i in 0..array.len() {
                match strings {
                    Some(arr) if !arr.is_null(i) => cells.push(Some(arr.value(i).to_string())),
                    _ => cells.push(None),
                }
            }
        }

        Some(cells)
    }
}

/// Rebuilds an inferred schema with every column as nullable text.
fn text_schema(inferred: &Schema) -> SchemaRef {
    let fields: Vec<Field> = inferred
        .fields()
        .iter()
        .map(|field| Field::new(field.name(), DataType::Utf8, true))
        .collect();
    Arc::new(Schema::new(fields))
}

/// Options for CSV parsing.
#[derive(Debug, Clone)]
pub struct CsvOptions {
    /// Whether the file has a header row.
    pub has_header: bool,
    /// Delimiter character (default is comma).
    pub delimiter: Option<u8>,
    /// Batch size for reading.
    pub batch_size: usize,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            has_header: true,
            delimiter: None, // Use default comma
            batch_size: 8192,
        }
    }
}

impl CsvOptions {
    /// Creates new CSV options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether the file has a header row.
    #[must_use]
    pub fn with_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }

    /// Sets the delimiter character.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = Some(delimiter);
        self
    }

    /// Sets the batch size for reading.
    #[must_use]
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }
}
