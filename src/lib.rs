//! Spreadsheet to JSON-LD conversion
//!
//! This library converts tabular data (CSV, Excel, OpenDocument) into JSON-LD
//! documents that describe each row as a `schema:Product`.
//!
//! # Overview
//!
//! Conversion of one table happens in three steps:
//!
//! 1. A [`TableLoader`] reads the file into a [`Table`], inferring a typed
//!    [`CellValue`] for every cell
//! 2. [`transform`] builds a [`Document`]: non-blank rows become nodes,
//!    column headers are normalized and mapped to schema.org properties
//!    (unknown headers land under the `ex:` base-URI prefix)
//! 3. The batch driver writes the document as `<name>_complete.jsonld`
//!
//! Progress and skipped rows are reported through a [`DiagnosticSink`].
//!
//! # Usage
//!
//! ## Transform an in-memory table
//!
//! ```
//! use sheet_jsonld::{transform, CellValue, NoOpSink, Table};
//!
//! let table = Table::new(["Nama Barang", "Harga Barang"])
//!     .with_row([CellValue::from("Kopi Gayo"), CellValue::Integer(85000)]);
//!
//! let doc = transform(&table, "http://example.org/data/", &NoOpSink);
//! assert_eq!(doc.graph.len(), 1);
//! ```
//!
//! ## Convert files
//!
//! ```ignore
//! use sheet_jsonld::{convert_batch, BatchOptions, FileLoader, TracingSink};
//!
//! let summary = convert_batch(&inputs, &FileLoader, &BatchOptions::default(), &TracingSink);
//! println!("{}/{} converted", summary.success_count(), summary.total);
//! ```

pub mod batch;
pub mod diagnostics;
pub mod document;
pub mod error;
pub mod loader;
pub mod logging;
pub mod mapping;
pub mod table;
pub mod transform;
pub mod value;
pub mod vocab;

// Re-export main types for convenience
pub use crate::batch::{
    convert_batch, convert_file, discover_inputs, output_file_name, BatchOptions, BatchSummary,
    ConvertedFile, FailedFile,
};
pub use crate::diagnostics::{CollectingSink, DiagnosticSink, NoOpSink, TracingSink};
pub use crate::document::{to_json_string, to_jsonld, Document, Node};
pub use crate::error::{ConvertError, RowError};
pub use crate::loader::{FileLoader, TableLoader, TableSource};
pub use crate::table::{Row, Table};
pub use crate::transform::transform;
pub use crate::value::{CellValue, Datatype, LiteralValue, TypedValue};
pub use crate::vocab::{Context, DEFAULT_BASE_URI, PRODUCT_TYPE};
