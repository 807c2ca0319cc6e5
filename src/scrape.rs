// src/scrape.rs
//
// Startup pipeline: fetch the three season pages, clean them up, and cut the
// qualified subsets. Everything here runs once, sequentially, before the UI.

use crate::{
    config::options::{
        Category, Qualifier, SeasonOptions, StatPage, BATTING_QUALIFIER, PITCHING_QUALIFIER,
    },
    data::Table,
    error::ScrapeError,
    progress::{NullProgress, Progress},
    specs::stat_table,
};

/// The five tables the dashboard switches between. Immutable once built.
#[derive(Clone, Debug)]
pub struct SeasonTables {
    pub batting: Table,
    pub pitching: Table,
    pub fielding: Table,
    pub qual_batting: Table,
    pub qual_pitching: Table,
}

impl SeasonTables {
    /// Build from freshly parsed (text-only) page tables.
    pub fn assemble(
        batting: Table,
        pitching: Table,
        fielding: Table,
        season: &SeasonOptions,
    ) -> Result<Self, ScrapeError> {
        let batting = post_process(batting);
        let pitching = post_process(pitching);
        let fielding = post_process(fielding);

        let qual_batting = qualified(&batting, BATTING_QUALIFIER, season.team_games)?;
        let qual_pitching = qualified(&pitching, PITCHING_QUALIFIER, season.team_games)?;

        logf!(
            "Season {}: batting={} (qualified {}), pitching={} (qualified {}), fielding={}",
            season.year,
            batting.nrows(),
            qual_batting.nrows(),
            pitching.nrows(),
            qual_pitching.nrows(),
            fielding.nrows()
        );

        Ok(Self { batting, pitching, fielding, qual_batting, qual_pitching })
    }

    pub fn get(&self, category: Category) -> &Table {
        match category {
            Category::Batting => &self.batting,
            Category::Pitching => &self.pitching,
            Category::Fielding => &self.fielding,
            Category::QualBatting => &self.qual_batting,
            Category::QualPitching => &self.qual_pitching,
        }
    }
}

/// Drop the trailing league-total row, then coerce numeric columns.
pub fn post_process(table: Table) -> Table {
    table.drop_last_row().coerce_numeric()
}

/// Rows with `column / team_games >= per_game`. NaN never qualifies.
pub fn qualified(table: &Table, q: Qualifier, team_games: u32) -> Result<Table, ScrapeError> {
    let col = table
        .column(q.column)
        .ok_or_else(|| ScrapeError::parse(format!("missing `{}` column", q.column)))?;
    let values = col
        .numbers()
        .ok_or_else(|| ScrapeError::parse(format!("`{}` column is not numeric", q.column)))?;

    let games = f64::from(team_games);
    Ok(table.filter_rows(|r| values[r] / games >= q.per_game))
}

/// Fetch and parse one page, cleaned up but not yet qualified.
pub fn fetch_page(season: &SeasonOptions, page: StatPage) -> Result<Table, ScrapeError> {
    let url = season.page_url(page);
    stat_table::pull_table(&url, page.table_id())
}

/// Fetch everything the dashboard needs.
pub fn collect_season(
    season: &SeasonOptions,
    progress: Option<&mut dyn Progress>,
) -> Result<SeasonTables, ScrapeError> {
    collect_season_with(season, progress, |page| fetch_page(season, page))
}

fn collect_season_with<F>(
    season: &SeasonOptions,
    progress: Option<&mut dyn Progress>,
    mut fetch: F,
) -> Result<SeasonTables, ScrapeError>
where
    F: FnMut(StatPage) -> Result<Table, ScrapeError>,
{
    let mut null = NullProgress;
    let progress: &mut dyn Progress = match progress {
        Some(p) => p,
        None => &mut null,
    };
    progress.begin(StatPage::ALL.len());

    let mut batting = None;
    let mut pitching = None;
    let mut fielding = None;

    for page in StatPage::ALL {
        progress.log(&format!("Fetching {} {}…", season.year, page.slug()));
        let table = match fetch(page) {
            Ok(t) => t,
            Err(e) => {
                progress.finish();
                return Err(e);
            }
        };
        progress.item_done(page, table.nrows());
        match page {
            StatPage::Batting => batting = Some(table),
            StatPage::Pitching => pitching = Some(table),
            StatPage::Fielding => fielding = Some(table),
        }
    }
    progress.finish();

    SeasonTables::assemble(
        batting.unwrap_or_default(),
        pitching.unwrap_or_default(),
        fielding.unwrap_or_default(),
        season,
    )
}

/// Fetch only the page behind `category` and return that category's table.
pub fn collect_category(
    season: &SeasonOptions,
    category: Category,
    progress: Option<&mut dyn Progress>,
) -> Result<Table, ScrapeError> {
    collect_category_with(season, category, progress, |page| fetch_page(season, page))
}

fn collect_category_with<F>(
    season: &SeasonOptions,
    category: Category,
    progress: Option<&mut dyn Progress>,
    fetch: F,
) -> Result<Table, ScrapeError>
where
    F: FnOnce(StatPage) -> Result<Table, ScrapeError>,
{
    let mut null = NullProgress;
    let progress: &mut dyn Progress = match progress {
        Some(p) => p,
        None => &mut null,
    };

    let page = category.page();
    progress.begin(1);
    progress.log(&format!("Fetching {} {}…", season.year, page.slug()));

    let result = fetch(page).map(post_process);
    if let Ok(t) = &result {
        progress.item_done(page, t.nrows());
    }
    progress.finish();

    let table = result?;
    match category.qualifier() {
        Some(q) => qualified(&table, q, season.team_games),
        None => Ok(table),
    }
}
