use std::collections::HashMap;

use tracing::warn;

/// An in-memory table: header names plus row-major string cells.
///
/// Cells stay as the raw strings the loader produced; an empty (or
/// all-whitespace) cell is the missing-value representation. Numeric access
/// parses on demand and returns `None` for anything that does not parse, so
/// null handling lives in one place.
#[derive(Debug, Clone)]
pub struct Frame {
    columns: Vec<String>,
    index: HashMap<String, usize>,
    rows: Vec<Vec<String>>,
}

impl Frame {
    /// Build a frame from header names and row-major cells.
    ///
    /// Rows shorter than the header are tolerated (missing cells read as
    /// empty). Rows longer than the header are tolerated too, with a single
    /// warning, since the extra cells are unreachable by name.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let columns: Vec<String> = columns.into_iter().map(|c| c.trim().to_string()).collect();
        if rows.iter().any(|r| r.len() > columns.len()) {
            warn!(
                headers = columns.len(),
                "some rows have more cells than headers"
            );
        }
        let index = columns
            .iter()
            .enumerate()
            .map(|(i, c)| (c.clone(), i))
            .collect();
        Self {
            columns,
            index,
            rows,
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The cell at (row, column index), trimmed; `None` if absent or empty.
    pub fn cell_at(&self, row: usize, col: usize) -> Option<&str> {
        let raw = self.rows.get(row)?.get(col)?.trim();
        if raw.is_empty() {
            None
        } else {
            Some(raw)
        }
    }

    /// The cell at (row, named column); `None` if the column is unknown,
    /// the row is short, or the cell is empty.
    pub fn cell(&self, row: usize, column: &str) -> Option<&str> {
        self.cell_at(row, self.column_index(column)?)
    }

    pub fn number_at(&self, row: usize, col: usize) -> Option<f64> {
        self.cell_at(row, col)?.parse().ok()
    }

    pub fn number(&self, row: usize, column: &str) -> Option<f64> {
        self.cell(row, column)?.parse().ok()
    }

    /// Integer view of a cell. Accepts a plain integer or a float
    /// rendering with no fractional part, which is how spreadsheet exports
    /// often write year columns ("2020.0").
    pub fn integer(&self, row: usize, column: &str) -> Option<i64> {
        let raw = self.cell(row, column)?;
        if let Ok(v) = raw.parse::<i64>() {
            return Some(v);
        }
        match raw.parse::<f64>() {
            Ok(v) if v.fract() == 0.0 => Some(v as i64),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn cell_access_by_name() {
        let frame = Frame::new(
            row(&["entity_id", "period", "q1"]),
            vec![row(&["Kenya", "2020", "3.5"]), row(&["Ghana", "2021", ""])],
        );
        assert_eq!(frame.len(), 2);
        assert_eq!(frame.cell(0, "entity_id"), Some("Kenya"));
        assert_eq!(frame.cell(1, "q1"), None);
        assert_eq!(frame.cell(0, "no_such_column"), None);
        assert_eq!(frame.number(0, "q1"), Some(3.5));
        assert_eq!(frame.number(1, "q1"), None);
    }

    #[test]
    fn short_rows_read_as_empty() {
        let frame = Frame::new(
            row(&["entity_id", "period", "q1"]),
            vec![row(&["Kenya"])],
        );
        assert_eq!(frame.cell(0, "entity_id"), Some("Kenya"));
        assert_eq!(frame.cell(0, "period"), None);
        assert_eq!(frame.cell(0, "q1"), None);
    }

    #[test]
    fn headers_are_trimmed() {
        let frame = Frame::new(
            row(&[" entity_id ", "period"]),
            vec![row(&["Kenya", "2020"])],
        );
        assert_eq!(frame.column_index("entity_id"), Some(0));
    }

    #[test]
    fn integer_accepts_float_renderings() {
        let frame = Frame::new(
            row(&["period"]),
            vec![
                row(&["2020"]),
                row(&["2021.0"]),
                row(&["2021.5"]),
                row(&["n/a"]),
            ],
        );
        assert_eq!(frame.integer(0, "period"), Some(2020));
        assert_eq!(frame.integer(1, "period"), Some(2021));
        assert_eq!(frame.integer(2, "period"), None);
        assert_eq!(frame.integer(3, "period"), None);
    }

    #[test]
    fn cells_are_trimmed() {
        let frame = Frame::new(row(&["q1"]), vec![row(&["  3.5  "]), row(&["   "])]);
        assert_eq!(frame.cell(0, "q1"), Some("3.5"));
        assert_eq!(frame.number(0, "q1"), Some(3.5));
        assert_eq!(frame.cell(1, "q1"), None);
    }
}
