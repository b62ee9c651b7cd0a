use std::env;
use std::error::Error;
use std::io::{self, BufRead, Write};

use clap::Parser;
use stanza::renderer::console::Console;
use stanza::renderer::Renderer;
use strum::IntoEnumIterator;
use tracing::{debug, info, warn};

use tote::bet::Bet;
use tote::print::tabulate_outcomes;
use tote_football::domain::{offer, MatchResult};
use tote_football::input::{parse_selection, parse_stake};
use tote_football::print::tabulate_offer;

#[derive(Debug, clap::Parser, Clone)]
struct Args {
    /// skip settling the placed wagers on exit
    #[clap(long)]
    no_settle: bool,
}

/// Prompts until `parse` accepts a line. `None` once the input is exhausted.
fn prompt<T>(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    message: &str,
    parse: impl Fn(&str) -> anyhow::Result<T>,
) -> anyhow::Result<Option<T>> {
    println!("{message}");
    loop {
        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            return Ok(None);
        };
        match parse(&line?) {
            Ok(value) => return Ok(Some(value)),
            Err(err) => println!("{err}"),
        }
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
    debug!("args: {args:?}");

    let mut bet = offer()?;
    info!("{} has been created", bet.id());

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut wagers = vec![];
    loop {
        let table = tabulate_offer(&bet)?;
        println!("Odds:\n{}", Console::default().render(&table));

        let Some(expected) = prompt(&mut lines, "Select a result to place a bet:", parse_selection)?
        else {
            break;
        };
        let Some(stake) = prompt(&mut lines, "Specify stake value:", parse_stake)? else {
            break;
        };
        match bet.add_expected_results(&expected, stake) {
            Ok(wager) => {
                info!("wager {} has been created", wager.ticket());
                wagers.push(wager);
            }
            Err(err) => warn!("wager rejected: {err}"),
        }
        println!();
    }

    if !args.no_settle && !wagers.is_empty() {
        for actual in MatchResult::iter() {
            let outcomes = wagers
                .iter()
                .map(|wager| wager.outcome(&bet, &actual))
                .collect::<Result<Vec<_>, _>>()?;
            let table = tabulate_outcomes(&wagers, &outcomes);
            info!("if {actual}:\n{}", Console::default().render(&table));
        }
    }
    Ok(())
}
