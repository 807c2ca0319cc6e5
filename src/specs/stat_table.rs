// src/specs/stat_table.rs
//
// Standard stats tables (batting / pitching / fielding).
//
// The site hides secondary tables inside `<!-- … -->` and repeats the header
// row inside the body every few dozen rows. Shape:
//
//   <table id="players_standard_batting">
//     <thead><tr><th>Rk</th><th>Name</th>…</tr></thead>
//     <tbody>
//       <tr><th>1</th><td>Jose Abreu</td>…</tr>
//       <tr class="thead"><th>Rk</th><th>Name</th>…</tr>   ← divider, dropped
//       …

use crate::{
    core::{html::{self, Markup}, net},
    data::Table,
    error::ScrapeError,
};

/// Fetch `url` and extract the table with element id `table_id`.
pub fn pull_table(url: &str, table_id: &str) -> Result<Table, ScrapeError> {
    let doc = net::http_get(url)?;
    let table = parse_table(&doc, table_id)?;
    logf!("Scrape: {} → {} rows × {} cols", table_id, table.nrows(), table.ncols());
    Ok(table)
}

/// Offline half of `pull_table`.
pub fn parse_table(doc: &str, table_id: &str) -> Result<Table, ScrapeError> {
    let cleaned = html::strip_comment_markers(doc);
    let m = Markup::new(&cleaned);

    let (t_start, t_end) = m
        .find_block_by_id("table", table_id)
        .ok_or_else(|| ScrapeError::parse(format!("no table with id `{table_id}`")))?;

    let header = read_header(&m, t_start, t_end)
        .ok_or_else(|| ScrapeError::parse(format!("table `{table_id}` has no <thead> header row")))?;
    let rows = read_rows(&m, t_start, t_end);

    assemble(table_id, header, rows)
}

/// `<th>` texts of the first `<tr>` inside `<thead>`.
fn read_header(m: &Markup, from: usize, to: usize) -> Option<Vec<String>> {
    let (th_s, th_e) = m.next_block("thead", from, to)?;
    let (tr_s, tr_e) = m.next_block("tr", th_s, th_e)?;

    let mut out = Vec::new();
    let mut pos = tr_s;
    while let Some((s, e)) = m.next_block("th", pos, tr_e) {
        out.push(html::cell_text(&m.as_str()[s..e]));
        pos = e;
    }
    if out.is_empty() { None } else { Some(out) }
}

/// Every `<tr>` of the table, header rows included; spacer rows skipped.
fn read_rows(m: &Markup, from: usize, to: usize) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut pos = from;
    while let Some((s, e)) = m.next_block("tr", pos, to) {
        let cells = m.cell_texts(s, e);
        if !cells.is_empty() {
            rows.push(cells);
        }
        pos = e;
    }
    rows
}

fn assemble(
    table_id: &str,
    mut header: Vec<String>,
    rows: Vec<Vec<String>>,
) -> Result<Table, ScrapeError> {
    let width = rows.iter().map(|r| r.len()).max().unwrap_or(0);
    if width == 0 {
        return Err(ScrapeError::parse(format!("table `{table_id}` has no rows")));
    }
    if header.len() < width {
        return Err(ScrapeError::parse(format!(
            "table `{table_id}`: header has {} cells but rows have up to {width}",
            header.len()
        )));
    }
    // Only as many names as there are data columns
    header.truncate(width);

    let first = header[0].clone();
    let mut kept = Vec::with_capacity(rows.len());
    for row in rows {
        if row[0] == first {
            continue;
        }
        if row.len() != width {
            return Err(ScrapeError::parse(format!(
                "table `{table_id}`: row {} has {} cells, expected {width}",
                kept.len(),
                row.len()
            )));
        }
        kept.push(row);
    }
    if kept.is_empty() {
        return Err(ScrapeError::parse(format!("table `{table_id}` has no data rows")));
    }

    Ok(Table::from_rows(header, kept))
}
