// src/chart.rs
//
// Leaderboard bar chart model. Frontends only render it: the GUI paints
// horizontal bars, the CLI prints numbered lines.

use crate::{
    config::consts::{NAME_COLUMN, TOP_N},
    data::Table,
    error::ChartError,
};

#[derive(Clone, Debug, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: f64,
}

impl Bar {
    /// Annotation drawn at the end of the bar.
    pub fn value_text(&self) -> String {
        format_value(self.value)
    }
}

/// Bars ordered top to bottom, highest value first.
#[derive(Clone, Debug, PartialEq)]
pub struct BarChart {
    pub title: String,
    pub bars: Vec<Bar>,
}

impl BarChart {
    /// Top `TOP_N` rows of `table` by `metric`, descending.
    /// Rows without a value sort after every number and are charted as empty
    /// bars; ties keep table order.
    pub fn build(table: &Table, metric: &str) -> Result<Self, ChartError> {
        let col = table
            .column(metric)
            .ok_or_else(|| ChartError::UnknownColumn(s!(metric)))?;
        let values = col
            .numbers()
            .ok_or_else(|| ChartError::NotNumeric(s!(metric)))?;
        let names = table.column(NAME_COLUMN).ok_or(ChartError::MissingNameColumn)?;

        let mut order: Vec<usize> = (0..table.nrows()).collect();
        order.sort_by(|&a, &b| {
            let (x, y) = (values[a], values[b]);
            x.is_nan().cmp(&y.is_nan()).then_with(|| y.total_cmp(&x))
        });
        order.truncate(TOP_N);

        let bars = order
            .into_iter()
            .map(|r| Bar { label: names.text(r), value: values[r] })
            .collect();

        Ok(Self { title: s!(metric), bars })
    }

    pub fn len(&self) -> usize { self.bars.len() }
    pub fn is_empty(&self) -> bool { self.bars.is_empty() }

    /// Axis extent, always including zero. Missing values are ignored.
    pub fn value_range(&self) -> (f64, f64) {
        self.bars.iter().fold((0.0_f64, 0.0_f64), |(lo, hi), b| (lo.min(b.value), hi.max(b.value)))
    }
}

/// Value rounded to 3 decimals; whole numbers keep one decimal (`12.0`).
/// A missing value prints as nothing.
pub fn format_value(v: f64) -> String {
    if v.is_nan() {
        return s!();
    }
    let r = (v * 1000.0).round() / 1000.0;
    if r.is_finite() && r.fract() == 0.0 {
        format!("{r:.1}")
    } else {
        format!("{r}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(n: usize) -> Table {
        let headers = ["Rk", "Name", "HR", "Team"].iter().map(|s| s!(*s)).collect();
        let rows = (0..n)
            .map(|i| vec![format!("{}", i + 1), format!("P{i}"), format!("{}", (i * 7) % 53), s!("NYY")])
            .collect();
        Table::from_rows(headers, rows).coerce_numeric()
    }

    fn is_descending(c: &BarChart) -> bool {
        c.bars.windows(2).all(|w| w[0].value >= w[1].value)
    }

    #[test]
    fn caps_at_top_n_sorted_descending() {
        let c = BarChart::build(&table(400), "HR").unwrap();
        assert_eq!(c.len(), 25);
        assert_eq!(c.title, "HR");
        assert!(is_descending(&c));
        assert_eq!(c.bars[0].value, 52.0);

        let c = BarChart::build(&table(10), "HR").unwrap();
        assert_eq!(c.len(), 10);
        assert!(is_descending(&c));
    }

    #[test]
    fn ties_keep_table_order_and_blanks_go_last() {
        let headers = vec![s!("Name"), s!("ERA")];
        let rows = vec![
            vec![s!("a"), s!("2.5")],
            vec![s!("b"), s!("")],
            vec![s!("c"), s!("3.1")],
            vec![s!("d"), s!("2.5")],
        ];
        let t = Table::from_rows(headers, rows).coerce_numeric();
        let c = BarChart::build(&t, "ERA").unwrap();
        let labels: Vec<&str> = c.bars.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["c", "a", "d", "b"]);
        assert!(c.bars[3].value.is_nan());
        assert_eq!(c.bars[3].value_text(), "");
        assert_eq!(c.value_range(), (0.0, 3.1));
    }

    #[test]
    fn blank_cells_still_count_toward_small_tables() {
        let headers = vec![s!("Name"), s!("SB")];
        let rows = (0..10)
            .map(|i| vec![format!("P{i}"), if i % 3 == 0 { s!() } else { format!("{i}") }])
            .collect();
        let t = Table::from_rows(headers, rows).coerce_numeric();
        let c = BarChart::build(&t, "SB").unwrap();
        assert_eq!(c.len(), 10);
        assert_eq!(c.bars[0].label, "P8");
        assert!(c.bars[6..].iter().all(|b| b.value.is_nan()));
    }

    #[test]
    fn bad_metric_is_reported() {
        let t = table(5);
        assert_eq!(BarChart::build(&t, "SB"), Err(ChartError::UnknownColumn(s!("SB"))));
        assert_eq!(BarChart::build(&t, "Team"), Err(ChartError::NotNumeric(s!("Team"))));

        let no_names = Table::from_rows(vec![s!("HR")], vec![vec![s!("3")]]).coerce_numeric();
        assert_eq!(BarChart::build(&no_names, "HR"), Err(ChartError::MissingNameColumn));
    }

    #[test]
    fn value_labels_round_to_three_places() {
        assert_eq!(format_value(0.34567), "0.346");
        assert_eq!(format_value(12.0), "12.0");
        assert_eq!(format_value(0.1 + 0.2), "0.3");
        assert_eq!(format_value(-1.23449), "-1.234");
    }

    #[test]
    fn value_range_includes_zero() {
        let c = BarChart {
            title: s!("x"),
            bars: vec![Bar { label: s!("a"), value: 3.0 }, Bar { label: s!("b"), value: 1.0 }],
        };
        assert_eq!(c.value_range(), (0.0, 3.0));
    }
}
