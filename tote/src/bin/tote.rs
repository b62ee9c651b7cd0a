use std::env;
use std::error::Error;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::bail;
use clap::Parser;
use stanza::renderer::console::Console;
use stanza::renderer::Renderer;
use tracing::{debug, info};

use tote::bet::Bet;
use tote::card::{Card, ParsedResults};
use tote::display::DisplaySlice;
use tote::print::{tabulate_odds, tabulate_outcomes};

#[derive(Debug, clap::Parser, Clone)]
struct Args {
    /// file to source the bet card from
    #[clap(short = 'f', long)]
    file: PathBuf,

    /// actual result to settle on, e.g. Home+Draw; overrides the card
    #[clap(short = 'a', long)]
    actual: Option<String>,
}
impl Args {
    fn validate(&self) -> anyhow::Result<()> {
        if let Some(actual) = &self.actual {
            if actual.trim().is_empty() {
                bail!("the -a flag must name at least one result");
            }
        }
        Ok(())
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    if env::var("RUST_BACKTRACE").is_err() {
        env::set_var("RUST_BACKTRACE", "full")
    }
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info")
    }
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    args.validate()?;
    debug!("args: {args:?}");

    let card = Card::read_json_file(&args.file)?;
    let placed = card.place()?;
    info!(
        "{} possible results: {}",
        placed.bet.id(),
        DisplaySlice::from(placed.bet.possible_results())
    );

    let table = tabulate_odds(&placed.bet)?;
    info!("odds:\n{}", Console::default().render(&table));

    let actual = match &args.actual {
        Some(actual) => Some(ParsedResults::from_str(actual)?.0),
        None => card.actual_results()?,
    };
    match actual {
        Some(actual) => {
            let outcomes = placed.settle(&actual)?;
            let table = tabulate_outcomes(&placed.wagers, &outcomes);
            info!("settled on {actual}:\n{}", Console::default().render(&table));
            if let Some(odds) = placed.bet.winning_odds(&actual, &actual)? {
                debug!("odds for a wager on exactly {actual}: {odds}");
            }
        }
        None => {
            info!("no actual result given; not settling");
        }
    }
    Ok(())
}
