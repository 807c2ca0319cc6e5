// src/config/options.rs
use super::consts::*;

/// One of the three standard stats pages fetched at startup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StatPage {
    Batting,
    Pitching,
    Fielding,
}

impl StatPage {
    /// Startup fetch order.
    pub const ALL: [StatPage; 3] = [StatPage::Fielding, StatPage::Batting, StatPage::Pitching];

    pub fn slug(self) -> &'static str {
        match self {
            StatPage::Batting => "batting",
            StatPage::Pitching => "pitching",
            StatPage::Fielding => "fielding",
        }
    }

    pub fn table_id(self) -> &'static str {
        match self {
            StatPage::Batting => BATTING_TABLE_ID,
            StatPage::Pitching => PITCHING_TABLE_ID,
            StatPage::Fielding => FIELDING_TABLE_ID,
        }
    }
}

/// Rate threshold a player must meet to show up in a qualified table.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Qualifier {
    pub column: &'static str,
    pub per_game: f64,
}

pub const BATTING_QUALIFIER: Qualifier = Qualifier { column: "PA", per_game: QUAL_PA_PER_GAME };
pub const PITCHING_QUALIFIER: Qualifier = Qualifier { column: "IP", per_game: QUAL_IP_PER_GAME };

/// The five tables the dashboard can switch between.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Batting,
    Pitching,
    Fielding,
    QualBatting,
    QualPitching,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Batting,
        Category::Pitching,
        Category::Fielding,
        Category::QualBatting,
        Category::QualPitching,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Batting => "BATTING",
            Category::Pitching => "PITCHING",
            Category::Fielding => "FIELDING",
            Category::QualBatting => "QUALIFIED BATTING",
            Category::QualPitching => "QUALIFIED PITCHING",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Category::Batting => "batting",
            Category::Pitching => "pitching",
            Category::Fielding => "fielding",
            Category::QualBatting => "qual-batting",
            Category::QualPitching => "qual-pitching",
        }
    }

    pub fn from_slug(s: &str) -> Option<Category> {
        let s = s.trim().to_ascii_lowercase();
        Category::ALL.into_iter().find(|c| c.slug() == s)
    }

    /// Page the category's rows come from.
    pub fn page(self) -> StatPage {
        match self {
            Category::Batting | Category::QualBatting => StatPage::Batting,
            Category::Pitching | Category::QualPitching => StatPage::Pitching,
            Category::Fielding => StatPage::Fielding,
        }
    }

    /// Qualified subsets share the column set (and so the metric buttons)
    /// of the page they are cut from.
    pub fn button_group(self) -> StatPage {
        self.page()
    }

    pub fn qualifier(self) -> Option<Qualifier> {
        match self {
            Category::QualBatting => Some(BATTING_QUALIFIER),
            Category::QualPitching => Some(PITCHING_QUALIFIER),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeasonOptions {
    pub year: u16,
    /// Games each team played; divisor for the qualification rates.
    pub team_games: u32,
}

impl Default for SeasonOptions {
    fn default() -> Self {
        Self {
            year: DEFAULT_SEASON,
            team_games: DEFAULT_TEAM_GAMES,
        }
    }
}

impl SeasonOptions {
    pub fn page_url(&self, page: StatPage) -> String {
        format!(
            "https://{}{}{}-standard-{}.shtml",
            SITE_HOST,
            LEAGUE_PATH,
            self.year,
            page.slug()
        )
    }
}
