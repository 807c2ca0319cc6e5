// tests/season_pipeline.rs
//
// Offline run of the startup pipeline: fixture pages shaped like the site's
// (tables inside comments, header rows repeated in the body, a league-total
// row at the end) → parse → post-process → qualified subsets.

use mlb_dash::config::options::{Category, SeasonOptions, StatPage};
use mlb_dash::scrape::SeasonTables;
use mlb_dash::specs::stat_table::parse_table;

/// A page with `rows` players plus a trailing "LgAvg" row, header repeated every 25.
fn page(table_id: &str, headers: &[&str], rows: usize, cell: impl Fn(usize, usize) -> String) -> String {
    let th: String = headers.iter().map(|h| format!("<th>{h}</th>")).collect();
    let mut body = String::new();
    for r in 0..rows {
        if r > 0 && r % 25 == 0 {
            body.push_str(&format!("<tr class=\"thead\">{th}</tr>\n"));
        }
        let mut tr = format!("<tr><th>{}</th>", r + 1);
        for c in 1..headers.len() {
            tr.push_str(&format!("<td>{}</td>", cell(r, c)));
        }
        tr.push_str("</tr>\n");
        body.push_str(&tr);
    }
    let mut total = String::from("<tr><th></th><td>LgAvg per 600 PA</td>");
    for _ in 2..headers.len() {
        total.push_str("<td>1</td>");
    }
    total.push_str("</tr>");

    format!(
        "<html><body><div class=\"table_wrapper\"><!--\n\
         <table class=\"sortable stats_table\" id=\"{table_id}\">\n\
         <thead><tr>{th}</tr></thead>\n<tbody>\n{body}</tbody>\n<tfoot>{total}</tfoot>\n</table>\n\
         --></div></body></html>"
    )
}

const BATTING: &[&str] = &["Rk", "Name", "Age", "Tm", "Lg", "G", "PA", "HR", "BA", "Pos Summary"];
const PITCHING: &[&str] = &["Rk", "Name", "Age", "Tm", "Lg", "W", "ERA", "IP", "SO", "SO/W"];
const FIELDING: &[&str] = &["Rk", "Name", "Age", "Tm", "Lg", "G", "Inn", "PO", "E", "Fld%", "Pos Summary"];

fn batting_page(rows: usize) -> String {
    page(StatPage::Batting.table_id(), BATTING, rows, |r, c| match c {
        1 => format!("Batter {r}"),
        3 => String::from("NYY"),
        4 => String::from("AL"),
        // PA: 180..=200 cycles through the 186 boundary
        6 => format!("{}", 180 + (r % 21)),
        8 => format!(".{:03}", 200 + (r * 13) % 150),
        9 => String::from("*9/D"),
        _ => format!("{}", (r * 7) % 40),
    })
}

fn pitching_page(rows: usize) -> String {
    page(StatPage::Pitching.table_id(), PITCHING, rows, |r, c| match c {
        1 => format!("Pitcher {r}"),
        3 => String::from("LAD"),
        4 => String::from("NL"),
        // IP: whole innings 55..=64
        7 => format!("{}", 55 + (r % 10)),
        6 => if r == 3 { String::new() } else { format!("{}.{:02}", 1 + r % 6, r % 100) },
        _ => format!("{}", (r * 3) % 17),
    })
}

fn fielding_page(rows: usize) -> String {
    page(StatPage::Fielding.table_id(), FIELDING, rows, |r, c| match c {
        1 => format!("Fielder {r}"),
        3 => String::from("BOS"),
        4 => String::from("AL"),
        10 => String::from("SS"),
        _ => format!("{}", (r * 11) % 90),
    })
}

fn season() -> SeasonTables {
    let batting = parse_table(&batting_page(84), StatPage::Batting.table_id()).unwrap();
    let pitching = parse_table(&pitching_page(50), StatPage::Pitching.table_id()).unwrap();
    let fielding = parse_table(&fielding_page(400), StatPage::Fielding.table_id()).unwrap();
    SeasonTables::assemble(batting, pitching, fielding, &SeasonOptions::default()).unwrap()
}

#[test]
fn header_dividers_are_dropped_and_rows_reindexed() {
    let t = parse_table(&fielding_page(400), StatPage::Fielding.table_id()).unwrap();
    // 400 players + league-total row; the 15 body header rows are gone
    assert_eq!(t.nrows(), 401);
    let rk = t.column("Rk").unwrap();
    for r in 0..400 {
        assert_eq!(rk.text(r), format!("{}", r + 1));
    }
}

#[test]
fn repeated_extraction_is_identical() {
    let doc = batting_page(60);
    let a = parse_table(&doc, StatPage::Batting.table_id()).unwrap();
    let b = parse_table(&doc, StatPage::Batting.table_id()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn post_processing_drops_total_and_coerces() {
    let s = season();
    assert_eq!(s.fielding.nrows(), 399);
    assert_eq!(s.batting.nrows(), 84);

    assert!(s.batting.column("PA").unwrap().is_numeric());
    assert!(s.batting.column("BA").unwrap().is_numeric());
    assert!(!s.batting.column("Name").unwrap().is_numeric());
    assert!(!s.batting.column("Pos Summary").unwrap().is_numeric());

    // One empty ERA cell still leaves the column numeric
    let era = s.pitching.column("ERA").unwrap();
    assert!(era.is_numeric());
    assert!(era.number(3).unwrap().is_nan());
}

#[test]
fn qualified_subsets_follow_rate_thresholds() {
    let s = season();

    let pa = s.batting.column("PA").unwrap();
    let expected: Vec<String> = (0..s.batting.nrows())
        .filter(|&r| pa.number(r).unwrap() >= 186.0)
        .map(|r| s.batting.column("Name").unwrap().text(r))
        .collect();
    let got: Vec<String> = (0..s.qual_batting.nrows())
        .map(|r| s.qual_batting.column("Name").unwrap().text(r))
        .collect();
    assert_eq!(got, expected);
    // Batter 6 has PA == 186 exactly
    assert!(got.contains(&String::from("Batter 6")));
    assert!(!got.contains(&String::from("Batter 5")));

    let ip = s.qual_pitching.column("IP").unwrap();
    assert!((0..s.qual_pitching.nrows()).all(|r| ip.number(r).unwrap() >= 60.0));
    // IP 55..=64 cycling: 60..=64 qualify, half of 50 rows
    assert_eq!(s.qual_pitching.nrows(), 25);
}

#[test]
fn tables_by_category() {
    let s = season();
    assert_eq!(s.get(Category::Fielding).nrows(), 399);
    assert_eq!(s.get(Category::QualPitching).nrows(), s.qual_pitching.nrows());
    assert_eq!(
        s.get(Category::Batting).metric_columns(),
        vec!["G", "PA", "HR", "BA"]
    );
}

#[test]
fn missing_table_is_reported() {
    let err = parse_table(&batting_page(5), StatPage::Pitching.table_id()).unwrap_err();
    assert!(err.to_string().contains("players_standard_pitching"));
}
