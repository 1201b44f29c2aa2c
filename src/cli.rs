use anyhow::bail;
use clap::{Args, Parser, Subcommand, ValueEnum};

use hedgecalc::BonusMode;

/// Matched-betting calculator: back/lay hedging and 2/3-way dutching
#[derive(Parser, Debug)]
#[command(name = "hedgecalc", version, about)]
pub struct Cli {
    /// Emit results as JSON instead of a text summary
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Hedge a back bet with a lay bet on an exchange
    Hedge(HedgeArgs),
    /// Two-outcome dutching across Home/Away
    Dutch(DutchArgs),
    /// Three-outcome dutching across Home/Draw/Away
    Dutch3(ThreeWayArgs),
}

/// Stake and odds fields accept raw text; an empty string means the field
/// has not been filled in yet, and the calculation degrades accordingly.
#[derive(Args, Debug)]
pub struct HedgeArgs {
    /// Back stake at the bookmaker
    #[arg(long, default_value = "")]
    pub back_stake: String,

    /// Decimal back odds
    #[arg(long, default_value = "")]
    pub back_odds: String,

    /// Decimal lay odds at the exchange
    #[arg(long, default_value = "")]
    pub lay_odds: String,

    /// Exchange commission in percent (e.g. "6" or "2.5%")
    #[arg(long, env = "EXCHANGE_COMMISSION", default_value = "6")]
    pub commission: String,

    /// Bet type the back stake qualifies as
    #[arg(long, value_enum, default_value = "qualifier")]
    pub mode: Mode,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum Mode {
    /// Real-money qualifying bet; profit balanced on both sides
    Qualifier,
    /// Free bet, stake not returned on a win
    Snr,
    /// Free bet, stake returned on a win
    Sr,
}

impl From<Mode> for BonusMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Qualifier => BonusMode::Qualifier,
            Mode::Snr => BonusMode::StakeNotReturned,
            Mode::Sr => BonusMode::StakeReturned,
        }
    }
}

#[derive(Args, Debug)]
pub struct DutchArgs {
    /// Decimal odds for the home outcome
    #[arg(long, default_value = "")]
    pub home_odds: String,

    /// Stake on the home outcome (leave empty to derive it)
    #[arg(long, default_value = "")]
    pub home_stake: String,

    /// Decimal odds for the away outcome
    #[arg(long, default_value = "")]
    pub away_odds: String,

    /// Stake on the away outcome (leave empty to derive it)
    #[arg(long, default_value = "")]
    pub away_stake: String,

    /// Total budget to split across the outcomes when no single stake is set
    #[arg(long, default_value = "")]
    pub total: String,

    /// Treat the home stake as an SNR free bet
    #[arg(long)]
    pub home_free: bool,

    /// Treat the away stake as an SNR free bet
    #[arg(long)]
    pub away_free: bool,
}

impl DutchArgs {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.home_free && self.away_free {
            bail!("at most one outcome can be a free bet");
        }
        Ok(())
    }
}

#[derive(Args, Debug)]
pub struct ThreeWayArgs {
    /// Decimal odds for the home outcome
    #[arg(long, default_value = "")]
    pub home_odds: String,

    /// Stake on the home outcome (leave empty to derive it)
    #[arg(long, default_value = "")]
    pub home_stake: String,

    /// Decimal odds for the draw
    #[arg(long, default_value = "")]
    pub draw_odds: String,

    /// Stake on the draw (leave empty to derive it)
    #[arg(long, default_value = "")]
    pub draw_stake: String,

    /// Decimal odds for the away outcome
    #[arg(long, default_value = "")]
    pub away_odds: String,

    /// Stake on the away outcome (leave empty to derive it)
    #[arg(long, default_value = "")]
    pub away_stake: String,

    /// Total budget to split across the outcomes when no single stake is set
    #[arg(long, default_value = "")]
    pub total: String,
}
