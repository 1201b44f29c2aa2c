/// Dutching profit formulas.
///
/// Dutching spreads stakes across every outcome of an event so the return
/// is locked in regardless of result. Profit for a winning leg is its full
/// return minus everything staked — except where a leg is an SNR free bet,
/// in which case its stake is neither paid out nor at risk.
use super::book::{Book, Selection};

/// Profit of a 2-way (Home/Away) book if `selection` wins.
///
/// Returns 0 when either leg's odds are missing (incomplete book), or when
/// `selection` does not belong to a 2-way book. Missing stakes count as
/// zero.
pub fn two_way_profit(selection: Selection, book: &Book) -> f64 {
    if book.is_three_way() || !book.odds_complete() {
        return 0.0;
    }
    let (this, other) = match selection {
        Selection::Home => (&book.legs()[0], &book.legs()[1]),
        Selection::Away => (&book.legs()[1], &book.legs()[0]),
        Selection::Draw => return 0.0,
    };
    let odds = this.odds.unwrap_or(0.0);
    let stake = this.stake_or_zero();
    let other_stake = other.stake_or_zero();

    if this.free_bet {
        // Free bet pays winnings only; the other side's stake is still lost
        stake * (odds - 1.0) - other_stake
    } else if other.free_bet {
        // The other side was never really staked, so it cannot be lost
        stake * odds - stake
    } else {
        stake * odds - stake - other_stake
    }
}

/// Profit of a 3-way (Home/Draw/Away) book if `selection` wins.
///
/// `profit = stake × odds − total staked`. No free-bet treatment applies to
/// 3-way books. Returns 0 when any leg's odds are missing or the book is
/// not 3-way.
pub fn three_way_profit(selection: Selection, book: &Book) -> f64 {
    if !book.is_three_way() || !book.odds_complete() {
        return 0.0;
    }
    let Some(leg) = book.leg(selection) else {
        return 0.0;
    };
    let odds = leg.odds.unwrap_or(0.0);
    leg.stake_or_zero() * odds - book.total_stake()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::book::Outcome;
    use approx::assert_relative_eq;

    fn leg(odds: f64, stake: f64) -> Outcome {
        Outcome {
            odds: Some(odds),
            stake: Some(stake),
            free_bet: false,
        }
    }

    #[test]
    fn test_two_way_standard_dutching() {
        let book = Book::two_way(leg(2.5, 100.0), leg(1.8, 138.89));
        // Return minus both stakes, from either side
        assert_relative_eq!(
            two_way_profit(Selection::Home, &book),
            100.0 * 2.5 - 100.0 - 138.89,
            epsilon = 1e-9
        );
        assert_relative_eq!(
            two_way_profit(Selection::Away, &book),
            138.89 * 1.8 - 138.89 - 100.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_two_way_profit_matches_direct_algebra() {
        let book = Book::two_way(leg(3.2, 40.0), leg(1.5, 85.0));
        let home_stake = 40.0;
        assert_relative_eq!(
            two_way_profit(Selection::Home, &book) + home_stake,
            home_stake * 3.2 - 85.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_two_way_free_leg_pays_winnings_only() {
        let mut book = Book::two_way(leg(2.5, 100.0), leg(1.8, 83.33));
        book.set_free(Selection::Home);
        assert_relative_eq!(
            two_way_profit(Selection::Home, &book),
            100.0 * 1.5 - 83.33,
            epsilon = 1e-9
        );
        // When the away side wins, the free home stake was never at risk
        assert_relative_eq!(
            two_way_profit(Selection::Away, &book),
            83.33 * 1.8 - 83.33,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_two_way_free_away_mirrors_free_home() {
        let mut book = Book::two_way(leg(1.8, 83.33), leg(2.5, 100.0));
        book.set_free(Selection::Away);
        assert_relative_eq!(
            two_way_profit(Selection::Away, &book),
            100.0 * 1.5 - 83.33,
            epsilon = 1e-9
        );
        assert_relative_eq!(
            two_way_profit(Selection::Home, &book),
            83.33 * 1.8 - 83.33,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_two_way_incomplete_odds_returns_zero() {
        let mut book = Book::two_way(leg(2.5, 100.0), leg(1.8, 100.0));
        book.leg_mut(Selection::Away).unwrap().odds = None;
        assert_relative_eq!(two_way_profit(Selection::Home, &book), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_two_way_missing_stakes_count_as_zero() {
        let book = Book::two_way(
            Outcome {
                odds: Some(2.0),
                stake: None,
                free_bet: false,
            },
            Outcome {
                odds: Some(2.2),
                stake: None,
                free_bet: false,
            },
        );
        assert_relative_eq!(two_way_profit(Selection::Home, &book), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_three_way_total_invariant() {
        let book = Book::three_way(leg(2.5, 100.0), leg(3.4, 73.53), leg(3.1, 80.65));
        let total = 100.0 + 73.53 + 80.65;
        for (sel, stake, odds) in [
            (Selection::Home, 100.0, 2.5),
            (Selection::Draw, 73.53, 3.4),
            (Selection::Away, 80.65, 3.1),
        ] {
            assert_relative_eq!(
                three_way_profit(sel, &book),
                stake * odds - total,
                epsilon = 1e-9
            );
        }
    }

    #[test]
    fn test_three_way_ignores_free_bet_flags() {
        let mut book = Book::three_way(leg(2.5, 100.0), leg(3.4, 73.53), leg(3.1, 80.65));
        let before = three_way_profit(Selection::Home, &book);
        book.set_free(Selection::Home);
        assert_relative_eq!(three_way_profit(Selection::Home, &book), before, epsilon = 1e-9);
    }

    #[test]
    fn test_three_way_incomplete_odds_returns_zero() {
        let mut book = Book::three_way(leg(2.5, 100.0), leg(3.4, 73.53), leg(3.1, 80.65));
        book.leg_mut(Selection::Draw).unwrap().odds = None;
        for sel in [Selection::Home, Selection::Draw, Selection::Away] {
            assert_relative_eq!(three_way_profit(sel, &book), 0.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_wrong_book_size_returns_zero() {
        let two = Book::two_way(leg(2.0, 10.0), leg(2.2, 10.0));
        let three = Book::three_way(leg(2.0, 10.0), leg(3.0, 10.0), leg(4.0, 10.0));
        assert_relative_eq!(three_way_profit(Selection::Home, &two), 0.0, epsilon = 1e-9);
        assert_relative_eq!(two_way_profit(Selection::Home, &three), 0.0, epsilon = 1e-9);
        assert_relative_eq!(two_way_profit(Selection::Draw, &two), 0.0, epsilon = 1e-9);
    }
}
