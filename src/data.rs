// src/data.rs
//
// In-memory stats table.
//
// - Built from scraped header + rows, every column starting out as text.
// - `coerce_numeric` turns whole columns into numbers where every cell parses;
//   anything else stays text (player names, team codes, position summaries).
// - Read-only once built: filtering returns a new Table.

use crate::config::consts::LEADING_META_COLUMNS;

#[derive(Clone, Debug, PartialEq)]
pub enum ColumnData {
    Text(Vec<String>),
    /// Empty source cells are NaN.
    Number(Vec<f64>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Column {
    name: String,
    data: ColumnData,
}

impl Column {
    pub fn name(&self) -> &str { &self.name }
    pub fn data(&self) -> &ColumnData { &self.data }

    pub fn is_numeric(&self) -> bool {
        matches!(self.data, ColumnData::Number(_))
    }

    pub fn numbers(&self) -> Option<&[f64]> {
        match &self.data {
            ColumnData::Number(v) => Some(v),
            ColumnData::Text(_) => None,
        }
    }

    pub fn number(&self, row: usize) -> Option<f64> {
        self.numbers().and_then(|v| v.get(row).copied())
    }

    /// Cell as display text.
    pub fn text(&self, row: usize) -> String {
        match &self.data {
            ColumnData::Text(v) => v.get(row).cloned().unwrap_or_default(),
            ColumnData::Number(v) => v.get(row).map(|&x| format_number(x)).unwrap_or_default(),
        }
    }

    fn pick(&self, rows: &[usize]) -> Column {
        let data = match &self.data {
            ColumnData::Text(v) => ColumnData::Text(rows.iter().map(|&r| v[r].clone()).collect()),
            ColumnData::Number(v) => ColumnData::Number(rows.iter().map(|&r| v[r]).collect()),
        };
        Column { name: self.name.clone(), data }
    }

    fn coerce(self) -> Column {
        match self.data {
            ColumnData::Text(cells) => {
                let parsed: Option<Vec<f64>> = cells.iter().map(|c| parse_number(c)).collect();
                let data = match parsed {
                    Some(values) => ColumnData::Number(values),
                    None => ColumnData::Text(cells),
                };
                Column { name: self.name, data }
            }
            data => Column { name: self.name, data },
        }
    }
}

/// `""` → NaN, otherwise a plain float parse.
fn parse_number(cell: &str) -> Option<f64> {
    let t = cell.trim();
    if t.is_empty() {
        return Some(f64::NAN);
    }
    t.parse::<f64>().ok()
}

/// Whole numbers without a fraction, NaN as an empty cell.
pub fn format_number(x: f64) -> String {
    if x.is_nan() {
        s!()
    } else if x.fract() == 0.0 && x.abs() < 1e15 {
        format!("{}", x as i64)
    } else {
        format!("{}", x)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Table {
    columns: Vec<Column>,
    nrows: usize,
}

impl Table {
    /// Text table from a header and rectangular rows. Short rows pad with "".
    pub fn from_rows(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let nrows = rows.len();
        let columns = headers
            .into_iter()
            .enumerate()
            .map(|(ci, name)| {
                let cells = rows
                    .iter()
                    .map(|r| r.get(ci).cloned().unwrap_or_default())
                    .collect();
                Column { name, data: ColumnData::Text(cells) }
            })
            .collect();
        Self { columns, nrows }
    }

    pub fn nrows(&self) -> usize { self.nrows }
    pub fn ncols(&self) -> usize { self.columns.len() }
    pub fn is_empty(&self) -> bool { self.nrows == 0 }

    pub fn columns(&self) -> &[Column] { &self.columns }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name()).collect()
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// One row as display text, in column order.
    pub fn row_texts(&self, row: usize) -> Vec<String> {
        self.columns.iter().map(|c| c.text(row)).collect()
    }

    /// Selectable metrics: everything after the identity columns
    /// (rank, name, age, team, league) and before the trailing notes column.
    pub fn metric_columns(&self) -> Vec<String> {
        let n = self.columns.len();
        if n <= LEADING_META_COLUMNS + 1 {
            return Vec::new();
        }
        self.columns[LEADING_META_COLUMNS..n - 1]
            .iter()
            .map(|c| c.name.clone())
            .collect()
    }

    /// Drop the final row (the site's league-total line).
    pub fn drop_last_row(self) -> Self {
        let keep: Vec<usize> = (0..self.nrows.saturating_sub(1)).collect();
        self.select_rows(&keep)
    }

    /// Best-effort numeric conversion, column by column.
    pub fn coerce_numeric(self) -> Self {
        let columns = self.columns.into_iter().map(Column::coerce).collect();
        Self { columns, nrows: self.nrows }
    }

    /// Rows for which `keep(row_index)` holds, re-indexed from 0.
    pub fn filter_rows<F>(&self, keep: F) -> Self
    where
        F: Fn(usize) -> bool,
    {
        let rows: Vec<usize> = (0..self.nrows).filter(|&r| keep(r)).collect();
        self.select_rows(&rows)
    }

    fn select_rows(&self, rows: &[usize]) -> Self {
        Self {
            columns: self.columns.iter().map(|c| c.pick(rows)).collect(),
            nrows: rows.len(),
        }
    }
}
