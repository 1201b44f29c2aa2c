use serde::{Deserialize, Serialize};

/// A leg of a dutching book, or the leg being evaluated/filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Selection {
    Home,
    Draw,
    Away,
}

/// One outcome of a dutching book.
///
/// `odds` and `stake` are `None` while the corresponding input field is
/// empty; arithmetic on unset values degrades to zero rather than erroring.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    /// Decimal odds (total return per unit staked, > 1.0 for a real price)
    pub odds: Option<f64>,
    /// Stake committed to this outcome
    pub stake: Option<f64>,
    /// Stake-not-returned free bet. Only meaningful on 2-way books.
    pub free_bet: bool,
}

impl Outcome {
    /// Stake treated as zero when unset, matching how an empty field sums.
    pub fn stake_or_zero(&self) -> f64 {
        self.stake.unwrap_or(0.0)
    }

    /// Whether this leg carries a manually entered positive stake.
    pub fn has_stake(&self) -> bool {
        positive(self.stake).is_some()
    }
}

/// An ordered 2-way (Home/Away) or 3-way (Home/Draw/Away) book sharing one
/// total-stake target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    legs: Vec<Outcome>,
}

impl Book {
    pub fn two_way(home: Outcome, away: Outcome) -> Self {
        Book {
            legs: vec![home, away],
        }
    }

    pub fn three_way(home: Outcome, draw: Outcome, away: Outcome) -> Self {
        Book {
            legs: vec![home, draw, away],
        }
    }

    pub fn is_three_way(&self) -> bool {
        self.legs.len() == 3
    }

    pub fn legs(&self) -> &[Outcome] {
        &self.legs
    }

    /// The selections this book covers, in leg order.
    pub fn selections(&self) -> &'static [Selection] {
        if self.is_three_way() {
            &[Selection::Home, Selection::Draw, Selection::Away]
        } else {
            &[Selection::Home, Selection::Away]
        }
    }

    fn index_of(&self, selection: Selection) -> Option<usize> {
        match selection {
            Selection::Home => Some(0),
            Selection::Draw => self.is_three_way().then_some(1),
            Selection::Away => Some(self.legs.len() - 1),
        }
    }

    /// Leg for `selection`; `None` when asking for the draw of a 2-way book.
    pub fn leg(&self, selection: Selection) -> Option<&Outcome> {
        self.index_of(selection).map(|i| &self.legs[i])
    }

    pub fn leg_mut(&mut self, selection: Selection) -> Option<&mut Outcome> {
        self.index_of(selection).map(move |i| &mut self.legs[i])
    }

    /// Sum of the entered stakes. A derived display value only: it never
    /// feeds back into the per-leg stakes except through the resolver.
    pub fn total_stake(&self) -> f64 {
        self.legs.iter().map(Outcome::stake_or_zero).sum()
    }

    /// True when every leg has odds entered.
    pub fn odds_complete(&self) -> bool {
        self.legs.iter().all(|leg| leg.odds.is_some())
    }

    /// Mark `selection` as the free (SNR) leg. At most one leg may be free
    /// at a time, so the flag is cleared everywhere else.
    pub fn set_free(&mut self, selection: Selection) {
        if let Some(chosen) = self.index_of(selection) {
            for (i, leg) in self.legs.iter_mut().enumerate() {
                leg.free_bet = i == chosen;
            }
        }
    }

    pub fn clear_free(&mut self) {
        for leg in &mut self.legs {
            leg.free_bet = false;
        }
    }
}

/// Filter an optional input down to a positive value.
pub(crate) fn positive(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v > 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn leg(odds: f64, stake: f64) -> Outcome {
        Outcome {
            odds: Some(odds),
            stake: Some(stake),
            free_bet: false,
        }
    }

    #[test]
    fn test_total_stake_ignores_unset_legs() {
        let book = Book::three_way(
            leg(2.5, 100.0),
            Outcome {
                odds: Some(3.4),
                stake: None,
                free_bet: false,
            },
            leg(1.8, 40.0),
        );
        assert_relative_eq!(book.total_stake(), 140.0, epsilon = 1e-9);
    }

    #[test]
    fn test_set_free_clears_other_leg() {
        let mut book = Book::two_way(leg(2.0, 10.0), leg(2.2, 10.0));
        book.set_free(Selection::Home);
        book.set_free(Selection::Away);
        assert!(!book.leg(Selection::Home).unwrap().free_bet);
        assert!(book.leg(Selection::Away).unwrap().free_bet);
    }

    #[test]
    fn test_draw_leg_absent_on_two_way() {
        let book = Book::two_way(leg(2.0, 10.0), leg(2.2, 10.0));
        assert!(book.leg(Selection::Draw).is_none());
        assert_eq!(book.selections(), &[Selection::Home, Selection::Away]);
    }

    #[test]
    fn test_set_free_on_missing_draw_is_ignored() {
        let mut book = Book::two_way(leg(2.0, 10.0), leg(2.2, 10.0));
        book.set_free(Selection::Draw);
        assert!(book.legs().iter().all(|l| !l.free_bet));
    }

    #[test]
    fn test_odds_complete() {
        let mut book = Book::two_way(leg(2.0, 10.0), leg(2.2, 10.0));
        assert!(book.odds_complete());
        book.leg_mut(Selection::Away).unwrap().odds = None;
        assert!(!book.odds_complete());
    }
}
