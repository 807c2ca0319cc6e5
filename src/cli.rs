// src/cli.rs
//
// Headless leaderboard: fetch one category, print the same top-N the GUI
// would chart.
//
//   cli <category> <metric> [--season YEAR] [--team-games N]

use std::env;
use std::fmt::Write as _;

use color_eyre::eyre::{bail, eyre, Result, WrapErr};

use crate::{
    chart::BarChart,
    config::options::{Category, SeasonOptions},
    progress::LogProgress,
    scrape,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Params {
    pub category: Category,
    pub metric: String,
    pub season: SeasonOptions,
}

pub fn run() -> Result<()> {
    let Some(params) = parse_args(env::args().skip(1))? else {
        eprintln!("{}", usage());
        return Ok(());
    };

    let mut progress = LogProgress::default();
    let table = scrape::collect_category(&params.season, params.category, Some(&mut progress))
        .wrap_err_with(|| format!("loading {} {}", params.season.year, params.category.slug()))?;

    let chart = BarChart::build(&table, &params.metric).wrap_err_with(|| {
        format!("available metrics: {}", table.metric_columns().join(", "))
    })?;

    print!("{}", render_leaderboard(params.category, &chart));
    Ok(())
}

/// `Ok(None)` means help was requested.
pub fn parse_args<I>(args: I) -> Result<Option<Params>>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let mut season = SeasonOptions::default();
    let mut positional: Vec<String> = Vec::new();

    while let Some(a) = args.next() {
        match a.as_str() {
            "--season" => {
                let v = args.next().ok_or_else(|| eyre!("Missing value for --season"))?;
                season.year = v.parse().wrap_err_with(|| format!("Bad season: {v}"))?;
            }
            "--team-games" => {
                let v = args.next().ok_or_else(|| eyre!("Missing value for --team-games"))?;
                season.team_games = v.parse().wrap_err_with(|| format!("Bad team games: {v}"))?;
                if season.team_games == 0 {
                    bail!("--team-games must be positive");
                }
            }
            "-h" | "--help" => return Ok(None),
            flag if flag.starts_with("--") => bail!("Unknown arg: {flag}"),
            _ => positional.push(a),
        }
    }

    let [cat, metric]: [String; 2] = positional
        .try_into()
        .map_err(|_| eyre!("Expected <category> <metric>\n{}", usage()))?;

    let category = Category::from_slug(&cat)
        .ok_or_else(|| eyre!("Unknown category: {cat}\n{}", usage()))?;

    Ok(Some(Params { category, metric, season }))
}

pub fn render_leaderboard(category: Category, chart: &BarChart) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} · {}", category.label(), chart.title);
    if chart.is_empty() {
        let _ = writeln!(out, "(no values)");
        return out;
    }
    let name_w = chart.bars.iter().map(|b| b.label.chars().count()).max().unwrap_or(0);
    for (i, bar) in chart.bars.iter().enumerate() {
        let line = format!("{:>2}. {:<name_w$}  {}", i + 1, bar.label, bar.value_text());
        let _ = writeln!(out, "{}", line.trim_end());
    }
    out
}

fn usage() -> String {
    let cats: Vec<&str> = Category::ALL.iter().map(|c| c.slug()).collect();
    format!(
        "usage: cli <category> <metric> [--season YEAR] [--team-games N]\ncategories: {}",
        cats.join(", ")
    )
}
