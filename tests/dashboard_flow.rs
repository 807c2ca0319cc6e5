// tests/dashboard_flow.rs
//
// Drives the dashboard state the way the GUI does (category click, metric
// click) without opening a window.

use mlb_dash::config::options::{Category, SeasonOptions};
use mlb_dash::data::Table;
use mlb_dash::gui::dashboard::Dashboard;
use mlb_dash::scrape::SeasonTables;

fn table(headers: &[&str], n: usize, cell: impl Fn(usize, usize) -> String) -> Table {
    let rows = (0..n)
        .map(|r| (0..headers.len()).map(|c| cell(r, c)).collect())
        .collect();
    Table::from_rows(headers.iter().map(|h| h.to_string()).collect(), rows)
}

/// Raw (text) tables with a trailing total row, as parsed off the pages.
fn season(batters: usize, pitchers: usize, fielders: usize) -> SeasonTables {
    let batting = table(
        &["Rk", "Name", "Age", "Tm", "Lg", "PA", "HR", "OPS", "Pos Summary"],
        batters + 1,
        |r, c| match c {
            0 => format!("{}", r + 1),
            1 => format!("Batter {r}"),
            3 => "SEA".into(),
            4 => "AL".into(),
            5 => format!("{}", 150 + r % 80),
            6 => format!("{}", (r * 17) % 23),
            7 => format!("{:.3}", 0.5 + (r % 40) as f64 / 100.0),
            8 => "*5".into(),
            _ => "27".into(),
        },
    );
    let pitching = table(
        &["Rk", "Name", "Age", "Tm", "Lg", "W", "IP", "SO", "SO/W"],
        pitchers + 1,
        |r, c| match c {
            0 => format!("{}", r + 1),
            1 => format!("Pitcher {r}"),
            3 => "HOU".into(),
            4 => "AL".into(),
            // first pitcher has 61 IP, the rest are relievers
            6 => if r == 0 { "61".into() } else { format!("{}", 10 + r % 40) },
            _ => format!("{}", r % 9),
        },
    );
    let fielding = table(
        &["Rk", "Name", "Age", "Tm", "Lg", "G", "PO", "A", "E", "Pos Summary"],
        fielders + 1,
        |r, c| match c {
            0 => format!("{}", r + 1),
            1 => format!("Fielder {r}"),
            3 => "MIL".into(),
            4 => "NL".into(),
            9 => "2B".into(),
            _ => format!("{}", (r * 31) % 97),
        },
    );
    SeasonTables::assemble(batting, pitching, fielding, &SeasonOptions::default()).unwrap()
}

#[test]
fn large_table_charts_exactly_top_25() {
    // 400 rows on the page, the last one being the league total
    let mut d = Dashboard::new(season(30, 10, 399));
    d.switch_table(Category::Fielding);
    assert_eq!(d.current_table().nrows(), 399);

    d.select_metric("PO");
    let chart = d.chart().unwrap();
    assert_eq!(chart.len(), 25);
    assert!(chart.bars.windows(2).all(|w| w[0].value >= w[1].value));
    assert_eq!(chart.bars[0].value, 96.0);
}

#[test]
fn small_table_charts_every_row() {
    let mut d = Dashboard::new(season(30, 10, 20));
    d.switch_table(Category::Pitching);
    d.select_metric("SO");
    assert_eq!(d.chart().unwrap().len(), 10);
}

#[test]
fn sixty_one_innings_qualifies_in_sixty_games() {
    let s = season(30, 10, 20);
    let names: Vec<String> = (0..s.qual_pitching.nrows())
        .map(|r| s.qual_pitching.column("Name").unwrap().text(r))
        .collect();
    assert_eq!(names, vec!["Pitcher 0"]);
}

#[test]
fn category_round_trip_keeps_button_lists() {
    let mut d = Dashboard::new(season(30, 10, 20));
    let batting_buttons = d.buttons(Category::Batting).len();
    assert_eq!(batting_buttons, 3);

    for c in [Category::Pitching, Category::Fielding, Category::QualBatting, Category::Batting, Category::Batting] {
        d.switch_table(c);
        assert_eq!(d.current(), c);
        assert_eq!(d.status(), format!("Current table: {}", c.label()));
    }
    assert_eq!(d.buttons(Category::Batting).len(), batting_buttons);
    assert_eq!(d.buttons(Category::Fielding).len(), 4);
    assert_eq!(d.visible_metrics(), vec!["PA", "HR", "OPS"]);
}

#[test]
fn qualified_chart_uses_qualified_rows_only() {
    let mut d = Dashboard::new(season(100, 10, 20));
    d.switch_table(Category::QualBatting);
    d.select_metric("HR");
    let qual = d.current_table();
    let pa = qual.column("PA").unwrap();
    assert!((0..qual.nrows()).all(|r| pa.number(r).unwrap() >= 186.0));

    let chart = d.chart().unwrap();
    assert!(chart.len() <= qual.nrows());
    assert_eq!(d.current(), Category::QualBatting);
}
