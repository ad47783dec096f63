//! Record transformation
//!
//! Turns a [`Table`] into a JSON-LD [`Document`]: one `schema:Product` node
//! per non-blank row, with property URIs derived from the column headers.

use crate::diagnostics::DiagnosticSink;
use crate::document::{Document, Node};
use crate::error::RowError;
use crate::mapping::property_for_column;
use crate::table::{Row, Table};
use crate::value::{encode_value, EncodeError};

/// Transform a table into a JSON-LD document
///
/// Blank rows and rows that fail to load or encode are skipped and do not
/// consume a position, so positions in the output always run 1..N.
/// Failures are reported through `sink`; they never abort the table.
pub fn transform(table: &Table, base_uri: &str, sink: &dyn DiagnosticSink) -> Document {
    let mut document = Document::new(base_uri);

    // Property URIs depend only on the header, resolve them once
    let properties: Vec<String> = table
        .columns()
        .iter()
        .map(|c| property_for_column(c))
        .collect();

    for (index, row) in table.rows().iter().enumerate() {
        let row = match row {
            Ok(row) => row,
            Err(e) => {
                sink.emit_error(&format!("Skipping row {}: {}", index, e));
                continue;
            }
        };

        if row.is_blank() {
            continue;
        }

        match build_node(index, row, table.columns(), &properties, document.len() + 1) {
            Ok(node) => document.graph.push(node),
            Err(e) => sink.emit_error(&format!("Skipping row {}: {}", index, e)),
        }
    }

    document
}

/// Build the node for one non-blank row
fn build_node(
    index: usize,
    row: &Row,
    columns: &[String],
    properties: &[String],
    position: usize,
) -> Result<Node, RowError> {
    let mut node = Node::new(position);

    for ((column, property), cell) in columns.iter().zip(properties).zip(&row.values) {
        let encoded = encode_value(cell).map_err(|e| match e {
            EncodeError::NonFinite => RowError::NonFiniteNumber {
                row: index,
                column: column.clone(),
            },
        })?;

        if let Some(value) = encoded {
            // A later column resolving to the same property wins
            node.set(property.clone(), value);
        }
    }

    Ok(node)
}
