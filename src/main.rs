use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::warn;

mod cli;

use cli::{Cli, Command, DutchArgs, HedgeArgs, ThreeWayArgs};
use hedgecalc::engine::dutch::{three_way_profit, two_way_profit};
use hedgecalc::parse::{parse_commission_percent, parse_money, parse_odds};
use hedgecalc::{
    compute_hedge, resolve_stakes, BackLayInput, Book, HedgeResult, Outcome, Selection,
    StakeResolutionRequest,
};

fn main() -> Result<()> {
    // Initialise tracing / logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Hedge(args) => run_hedge(&args, cli.json),
        Command::Dutch(args) => run_dutch(&args, cli.json),
        Command::Dutch3(args) => run_three_way(&args, cli.json),
    }
}

#[derive(Serialize)]
struct HedgeReport {
    #[serde(flatten)]
    result: HedgeResult,
    /// False when the lay price is too low relative to commission for any
    /// sensible hedge to exist
    feasible: bool,
}

fn run_hedge(args: &HedgeArgs, json: bool) -> Result<()> {
    let input = BackLayInput {
        back_stake: parse_money(&args.back_stake).context("invalid --back-stake")?,
        back_odds: parse_odds(&args.back_odds).context("invalid --back-odds")?,
        lay_odds: parse_odds(&args.lay_odds).context("invalid --lay-odds")?,
        commission: parse_commission_percent(&args.commission).context("invalid --commission")?,
        mode: args.mode.into(),
    };

    let result = compute_hedge(&input);
    // The engine lets a degenerate denominator flow through; labelling it
    // is the host's job
    let feasible = result.lay_stake.is_finite() && result.lay_stake >= 0.0;
    if !feasible {
        warn!(
            lay_stake = result.lay_stake,
            "lay odds too low relative to commission; no feasible hedge"
        );
    }

    let report = HedgeReport { result, feasible };
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if !feasible {
        println!("No feasible hedge at these prices.");
        return Ok(());
    }
    println!("Lay stake:            {:.2}", result.lay_stake);
    println!("Liability:            {:.2}", result.liability);
    println!("Profit if back wins:  {:.2}", result.profit_if_back_wins);
    println!("Profit if lay wins:   {:.2}", result.profit_if_lay_wins);
    println!("Worst-case return:    {:.2}%", result.percent_return);
    Ok(())
}

#[derive(Serialize)]
struct LegReport {
    selection: Selection,
    odds: Option<f64>,
    stake: f64,
    free_bet: bool,
    profit_if_wins: f64,
}

#[derive(Serialize)]
struct DutchReport {
    legs: Vec<LegReport>,
    total_stake: f64,
}

fn run_dutch(args: &DutchArgs, json: bool) -> Result<()> {
    args.validate()?;

    let mut book = Book::two_way(
        Outcome {
            odds: parse_odds(&args.home_odds).context("invalid --home-odds")?,
            stake: parse_money(&args.home_stake).context("invalid --home-stake")?,
            free_bet: false,
        },
        Outcome {
            odds: parse_odds(&args.away_odds).context("invalid --away-odds")?,
            stake: parse_money(&args.away_stake).context("invalid --away-stake")?,
            free_bet: false,
        },
    );
    if args.home_free {
        book.set_free(Selection::Home);
    }
    if args.away_free {
        book.set_free(Selection::Away);
    }

    let resolved = resolve_stakes(&StakeResolutionRequest {
        book,
        total_stake: parse_money(&args.total).context("invalid --total")?,
    });

    print_book(&resolved, json)
}

fn run_three_way(args: &ThreeWayArgs, json: bool) -> Result<()> {
    let book = Book::three_way(
        Outcome {
            odds: parse_odds(&args.home_odds).context("invalid --home-odds")?,
            stake: parse_money(&args.home_stake).context("invalid --home-stake")?,
            free_bet: false,
        },
        Outcome {
            odds: parse_odds(&args.draw_odds).context("invalid --draw-odds")?,
            stake: parse_money(&args.draw_stake).context("invalid --draw-stake")?,
            free_bet: false,
        },
        Outcome {
            odds: parse_odds(&args.away_odds).context("invalid --away-odds")?,
            stake: parse_money(&args.away_stake).context("invalid --away-stake")?,
            free_bet: false,
        },
    );

    let resolved = resolve_stakes(&StakeResolutionRequest {
        book,
        total_stake: parse_money(&args.total).context("invalid --total")?,
    });

    print_book(&resolved, json)
}

fn print_book(book: &Book, json: bool) -> Result<()> {
    let legs: Vec<LegReport> = book
        .selections()
        .iter()
        .filter_map(|&selection| {
            let leg = book.leg(selection)?;
            let profit_if_wins = if book.is_three_way() {
                three_way_profit(selection, book)
            } else {
                two_way_profit(selection, book)
            };
            Some(LegReport {
                selection,
                odds: leg.odds,
                stake: leg.stake_or_zero(),
                free_bet: leg.free_bet,
                profit_if_wins,
            })
        })
        .collect();

    let report = DutchReport {
        legs,
        total_stake: book.total_stake(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    for leg in &report.legs {
        let name = match leg.selection {
            Selection::Home => "Home",
            Selection::Draw => "Draw",
            Selection::Away => "Away",
        };
        let odds = leg
            .odds
            .map(|o| format!("{:.2}", o))
            .unwrap_or_else(|| "-".to_string());
        let free = if leg.free_bet { " (free bet)" } else { "" };
        println!(
            "{}: stake {:.2} at {}{}  profit if wins {:.2}",
            name, leg.stake, odds, free, leg.profit_if_wins
        );
    }
    println!("Total staked: {:.2}", report.total_stake);
    Ok(())
}
