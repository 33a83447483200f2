use serde::{Deserialize, Serialize};

/// One cell of a sheet row: the (already trimmed) column name paired with the
/// raw cell value. A cell that was absent in the source is normalized to an
/// empty string at fetch time, so downstream code only ever sees strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub column: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetRow {
    pub cells: Vec<Cell>,
}

impl SheetRow {
    pub fn new(cells: Vec<Cell>) -> Self {
        SheetRow { cells }
    }

    /// Builds a row from (column, value) pairs; handy for fixtures.
    pub fn from_pairs<I, C, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (C, V)>,
        C: Into<String>,
        V: Into<String>,
    {
        SheetRow {
            cells: pairs
                .into_iter()
                .map(|(column, value)| Cell {
                    column: column.into(),
                    value: value.into(),
                })
                .collect(),
        }
    }

    /// Value of the first cell with an exactly matching column name.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells
            .iter()
            .find(|c| c.column == column)
            .map(|c| c.value.as_str())
    }
}

/// The full current state of one sheet at fetch time. Fetched fresh on every
/// processing attempt, never cached across calls.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SheetSnapshot {
    pub columns: Vec<String>,
    pub rows: Vec<SheetRow>,
}

impl SheetSnapshot {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}
