//! In-memory table handed from a loader to the transformer

use crate::error::RowError;
use crate::value::CellValue;

/// One data row, values in column order
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub values: Vec<CellValue>,
}

impl Row {
    pub fn new(values: Vec<CellValue>) -> Self {
        Self { values }
    }

    /// True if every cell is empty (also true for a row with no cells)
    pub fn is_blank(&self) -> bool {
        self.values.iter().all(CellValue::is_empty)
    }
}

/// A table: header row plus data rows
///
/// Rows the loader could not read are kept as `Err` so the transformer can
/// report and skip them without losing their place.
#[derive(Debug, Clone, Default)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Result<Row, RowError>>,
}

impl Table {
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a row; short rows are padded with `Empty`, extra values dropped
    pub fn push_row(&mut self, mut values: Vec<CellValue>) {
        values.resize(self.columns.len(), CellValue::Empty);
        self.rows.push(Ok(Row::new(values)));
    }

    /// Append a row that failed to load
    pub fn push_error(&mut self, error: RowError) {
        self.rows.push(Err(error));
    }

    /// Builder form of [`Table::push_row`]
    pub fn with_row<V: Into<CellValue>>(mut self, values: impl IntoIterator<Item = V>) -> Self {
        self.push_row(values.into_iter().map(Into::into).collect());
        self
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Result<Row, RowError>] {
        &self.rows
    }

    /// Number of data rows, including unreadable ones
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_row_pads_and_truncates() {
        let mut table = Table::new(["a", "b", "c"]);
        table.push_row(vec![CellValue::Integer(1)]);
        table.push_row(vec![
            CellValue::Integer(1),
            CellValue::Integer(2),
            CellValue::Integer(3),
            CellValue::Integer(4),
        ]);

        let first = table.rows()[0].as_ref().unwrap();
        assert_eq!(
            first.values,
            vec![CellValue::Integer(1), CellValue::Empty, CellValue::Empty]
        );
        let second = table.rows()[1].as_ref().unwrap();
        assert_eq!(second.values.len(), 3);
    }

    #[test]
    fn test_blank_row() {
        assert!(Row::new(vec![CellValue::Empty, CellValue::Empty]).is_blank());
        assert!(!Row::new(vec![CellValue::Empty, CellValue::from("x")]).is_blank());
    }

    #[test]
    fn test_errors_are_kept_in_order() {
        let mut table = Table::new(["a"]).with_row([1i64]);
        table.push_error(RowError::Malformed {
            row: 1,
            reason: "bad".to_string(),
        });
        let table = table.with_row([2i64]);

        assert_eq!(table.len(), 3);
        assert!(table.rows()[1].is_err());
        assert_eq!(table.columns(), ["a".to_string()]);
    }
}
