// src/config/consts.rs

// Net config
pub const SITE_HOST: &str = "www.baseball-reference.com";
pub const LEAGUE_PATH: &str = "/leagues/MLB/";
pub const USER_AGENT: &str = concat!("mlb_dash/", env!("CARGO_PKG_VERSION"));
pub const HTTP_TIMEOUT_SECS: u64 = 30;

// Table ids on the standard stats pages
pub const BATTING_TABLE_ID: &str = "players_standard_batting";
pub const PITCHING_TABLE_ID: &str = "players_standard_pitching";
pub const FIELDING_TABLE_ID: &str = "players_players_standard_fielding_fielding";

// Season (2020 was a 60-game season; thresholds assume it)
pub const DEFAULT_SEASON: u16 = 2020;
pub const DEFAULT_TEAM_GAMES: u32 = 60;
pub const QUAL_PA_PER_GAME: f64 = 3.1;
pub const QUAL_IP_PER_GAME: f64 = 1.0;

// Table shape
pub const NAME_COLUMN: &str = "Name";
pub const LEADING_META_COLUMNS: usize = 5; // Rk, Name, Age, Tm, Lg

// Chart
pub const TOP_N: usize = 25;

// Window
pub const WINDOW_TITLE: &str = "MLB Dashboard";
pub const WINDOW_W: f32 = 1400.0;
pub const WINDOW_H: f32 = 1000.0;
pub const STARTUP_ERROR_W: f32 = 640.0;
pub const STARTUP_ERROR_H: f32 = 260.0;

// Logging
pub const DEFAULT_LOG_FILTER: &str = "mlb_dash=info";
