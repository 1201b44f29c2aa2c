/// Back/lay hedge calculator.
///
/// A back bet at a bookmaker is offset by laying the same outcome on an
/// exchange. For a qualifying bet the lay stake is derived so the result is
/// identical whichever side wins:
///
///   layStake = (backWin + backStake) / (layOdds − commission)
///
/// where `backWin = backStake × (backOdds − 1)`. The liability
/// `layStake × (layOdds − 1)` then exactly offsets the back win, and the
/// commissioned lay proceeds exactly offset the lost back stake.
///
/// Free-bet variants change what is at risk:
///   SNR (stake not returned): layStake = backWin / (layOdds − commission)
///   SR  (stake returned):     layStake = backOdds × backStake / (layOdds − commission)
use serde::Serialize;

use super::book::positive;

/// How the back stake was funded, which changes the hedge formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BonusMode {
    /// Real money staked to qualify for a bonus; balance profit on both sides
    Qualifier,
    /// Free bet whose stake is not included in the payout (SNR)
    StakeNotReturned,
    /// Free bet whose stake would be paid out on a win (SR)
    StakeReturned,
}

/// Inputs for one back/lay pair. Unset fields mean "not entered yet".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackLayInput {
    pub back_stake: Option<f64>,
    /// Decimal odds taken at the bookmaker
    pub back_odds: Option<f64>,
    /// Decimal odds offered at the exchange
    pub lay_odds: Option<f64>,
    /// Exchange commission on net lay winnings, as a fraction (0.0–1.0)
    pub commission: f64,
    pub mode: BonusMode,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct HedgeResult {
    /// Amount to lay at the exchange
    pub lay_stake: f64,
    /// Amount owed if the lay bet loses: layStake × (layOdds − 1)
    pub liability: f64,
    pub profit_if_back_wins: f64,
    pub profit_if_lay_wins: f64,
    /// Guaranteed worst-case return on the back stake, in percent; 0 when
    /// the worst case is a loss
    pub percent_return: f64,
}

/// Compute the hedge stake and profit pair for a back/lay input.
///
/// Returns the all-zero result while any of back stake, back odds or lay
/// odds is unset or non-positive — "not enough input yet" rather than an
/// error. A lay price too close to 1.0 relative to commission makes the
/// denominator non-positive; the resulting negative or non-finite lay stake
/// is returned as-is and the caller decides how to present the infeasible
/// hedge.
pub fn compute_hedge(input: &BackLayInput) -> HedgeResult {
    debug_assert!(
        (0.0..1.0).contains(&input.commission),
        "commission out of range"
    );

    let (Some(back_stake), Some(back_odds), Some(lay_odds)) = (
        positive(input.back_stake),
        positive(input.back_odds),
        positive(input.lay_odds),
    ) else {
        return HedgeResult::default();
    };

    let commission = input.commission;
    // Net winnings if the back bet wins, excluding the returned stake
    let back_win = back_stake * (back_odds - 1.0);
    let denominator = lay_odds - commission;

    let lay_stake = match input.mode {
        BonusMode::Qualifier => (back_win + back_stake) / denominator,
        BonusMode::StakeNotReturned => back_win / denominator,
        BonusMode::StakeReturned => back_odds * back_stake / denominator,
    };
    let liability = lay_stake * (lay_odds - 1.0);

    let (profit_if_back_wins, profit_if_lay_wins) = match input.mode {
        BonusMode::Qualifier => (
            back_win - liability,
            lay_stake * (1.0 - commission) - back_stake,
        ),
        // The back stake was free, so losing it costs nothing
        BonusMode::StakeNotReturned => (back_win - liability, lay_stake * (1.0 - commission)),
        BonusMode::StakeReturned => (
            back_stake * back_odds - liability,
            lay_stake * (1.0 - commission),
        ),
    };

    let worst = profit_if_back_wins.min(profit_if_lay_wins);
    let percent_return = if worst > 0.0 {
        100.0 * worst / back_stake
    } else {
        0.0
    };

    HedgeResult {
        lay_stake,
        liability,
        profit_if_back_wins,
        profit_if_lay_wins,
        percent_return,
    }
}
