/// Stake resolution for dutching books.
///
/// Two ways to fill in missing stakes, picked by a precedence rule on which
/// stake fields currently hold a value:
///
/// 1. exactly one leg carries a positive stake and the rest are empty —
///    propagate it proportionally so every leg returns the same payout;
/// 2. otherwise, if a total-stake target is set, split it across the legs
///    by implied probability (1/odds, normalised).
///
/// Anything else, including incomplete odds, leaves the book untouched.
use tracing::debug;

use super::book::{positive, Book, Selection};

/// A book plus the optional total-stake target entered by the user.
#[derive(Debug, Clone, PartialEq)]
pub struct StakeResolutionRequest {
    pub book: Book,
    pub total_stake: Option<f64>,
}

/// Apply the stake-resolution precedence rule and return the updated book.
pub fn resolve_stakes(request: &StakeResolutionRequest) -> Book {
    let book = &request.book;

    if single_known_leg(book).is_some() {
        debug!("resolving stakes by proportional fill from the known leg");
        return fill_from_known(book);
    }

    let Some(total) = positive(request.total_stake) else {
        // Two-of-three legs populated without a total lands here: a no-op,
        // matching the optimize action's fall-through in that state.
        return book.clone();
    };
    let Some(odds) = entered_odds(book) else {
        return book.clone();
    };

    debug!(total, "resolving stakes by implied-probability allocation");
    let stakes = allocate_from_total(&odds, total);
    let mut resolved = book.clone();
    for (&selection, stake) in resolved.selections().iter().zip(stakes) {
        if let Some(leg) = resolved.leg_mut(selection) {
            leg.stake = Some(stake);
        }
    }
    // A fresh allocation redefines the book, so free-bet flags no longer
    // describe it (2-way books only carry them)
    if !resolved.is_three_way() {
        resolved.clear_free();
    }
    resolved
}

/// Derive every empty leg's stake from the single populated one, so that
/// each leg's return matches the known leg's payout.
///
/// For a free (SNR) known leg on a 2-way book the payout to match is its
/// winnings only, since no stake needs recouping on the other side. No-op
/// unless exactly one leg is populated and all odds are entered. Derived
/// stakes are rounded to the cent.
pub fn fill_from_known(book: &Book) -> Book {
    let Some(known) = single_known_leg(book) else {
        return book.clone();
    };
    if !book.odds_complete() {
        return book.clone();
    }
    let Some(known_leg) = book.leg(known) else {
        return book.clone();
    };

    let stake = known_leg.stake_or_zero();
    let odds = known_leg.odds.unwrap_or(0.0);
    let required_return = if !book.is_three_way() && known_leg.free_bet {
        stake * (odds - 1.0)
    } else {
        stake * odds
    };

    let mut filled = book.clone();
    for &selection in book.selections() {
        if selection == known {
            continue;
        }
        if let Some(leg) = filled.leg_mut(selection) {
            let leg_odds = leg.odds.unwrap_or(0.0);
            leg.stake = Some(round_to_cents(required_return / leg_odds));
        }
    }
    filled
}

/// Split `total_stake` across outcomes in proportion to implied probability
/// (1/odds), which equalises the gross return of every leg. Per-leg results
/// are rounded to the cent.
pub fn allocate_from_total(odds: &[f64], total_stake: f64) -> Vec<f64> {
    debug_assert!(odds.iter().all(|o| *o > 0.0), "odds must be positive");
    let total_prob: f64 = odds.iter().map(|o| 1.0 / o).sum();
    odds.iter()
        .map(|o| round_to_cents(total_stake * (1.0 / o) / total_prob))
        .collect()
}

/// The one leg holding a positive stake, if every other leg is empty.
fn single_known_leg(book: &Book) -> Option<Selection> {
    let mut known = None;
    for &selection in book.selections() {
        let populated = book.leg(selection).is_some_and(|leg| leg.has_stake());
        if populated {
            if known.is_some() {
                return None;
            }
            known = Some(selection);
        }
    }
    known
}

/// All legs' odds, provided every one is entered and positive.
fn entered_odds(book: &Book) -> Option<Vec<f64>> {
    book.legs()
        .iter()
        .map(|leg| positive(leg.odds))
        .collect()
}

fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
