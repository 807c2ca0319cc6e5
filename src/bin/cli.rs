// src/bin/cli.rs
use mlb_dash::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    mlb_dash::log::init();
    cli::run()
}
