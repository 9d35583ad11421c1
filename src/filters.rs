use crate::consts::{BALANCED_PARITY_LIMIT, PREDICTION_SIZE};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// User-toggleable filters, one per numeric predicate.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display, clap::ValueEnum,
)]
#[strum(serialize_all = "kebab-case")]
pub enum FilterKind {
    Prime,
    Even,
    Odd,
    Balanced,
    LargeJump,
}

/// Active predicates applied to every synthesis round.
///
/// `min_gap` doubles as the large-jump toggle: `None` is off, `Some(n)` requires
/// consecutive accepted values to be at least `n` apart. Contradictory
/// combinations (odd + even) are allowed and simply starve every round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSet {
    pub prime_only: bool,
    pub even_only: bool,
    pub odd_only: bool,
    pub balanced_parity: bool,
    pub min_gap: Option<u8>,
}

impl FilterSet {
    pub fn is_enabled(&self, kind: FilterKind) -> bool {
        match kind {
            FilterKind::Prime => self.prime_only,
            FilterKind::Even => self.even_only,
            FilterKind::Odd => self.odd_only,
            FilterKind::Balanced => self.balanced_parity,
            FilterKind::LargeJump => self.min_gap.is_some(),
        }
    }

    /// Flips one filter and returns its new state. `gap` is only used when the
    /// large-jump filter is switched on.
    pub fn toggle(&mut self, kind: FilterKind, gap: u8) -> bool {
        match kind {
            FilterKind::Prime => self.prime_only = !self.prime_only,
            FilterKind::Even => self.even_only = !self.even_only,
            FilterKind::Odd => self.odd_only = !self.odd_only,
            FilterKind::Balanced => self.balanced_parity = !self.balanced_parity,
            FilterKind::LargeJump => {
                self.min_gap = match self.min_gap {
                    Some(_) => None,
                    None => Some(gap),
                }
            }
        }
        self.is_enabled(kind)
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn active(&self) -> Vec<FilterKind> {
        use strum::IntoEnumIterator;
        FilterKind::iter().filter(|k| self.is_enabled(*k)).collect()
    }

    /// The predicates that look at a single value only.
    pub fn accepts_value(&self, n: u8) -> bool {
        if self.prime_only && !is_prime(n as u64) {
            return false;
        }
        if self.even_only && n % 2 != 0 {
            return false;
        }
        if self.odd_only && n % 2 == 0 {
            return false;
        }
        true
    }

    pub fn state(&self) -> FilterState<'_> {
        FilterState {
            filters: self,
            evens: 0,
            odds: 0,
            last: None,
        }
    }

    /// Runs `candidates` through a fresh filter state, stopping once `limit`
    /// values were accepted (`None` keeps going to the end).
    pub fn apply(&self, candidates: &[u8], limit: Option<usize>) -> Vec<u8> {
        let mut state = self.state();
        let mut out = Vec::new();
        for &n in candidates {
            if limit.is_some_and(|l| out.len() >= l) {
                break;
            }
            if state.offer(n) {
                out.push(n);
            }
        }
        out
    }
}

/// Per-round state for the stateful predicates (balanced parity, min gap).
#[derive(Debug, Clone)]
pub struct FilterState<'a> {
    filters: &'a FilterSet,
    evens: usize,
    odds: usize,
    last: Option<u8>,
}

impl FilterState<'_> {
    /// Accepts or rejects the next candidate. Only accepted values update state.
    pub fn offer(&mut self, n: u8) -> bool {
        if !self.filters.accepts_value(n) {
            return false;
        }

        let even = n % 2 == 0;
        if self.filters.balanced_parity {
            let count = if even { self.evens } else { self.odds };
            if count >= BALANCED_PARITY_LIMIT {
                return false;
            }
        }

        if let (Some(gap), Some(last)) = (self.filters.min_gap, self.last) {
            if n.abs_diff(last) < gap {
                return false;
            }
        }

        if even {
            self.evens += 1;
        } else {
            self.odds += 1;
        }
        self.last = Some(n);
        true
    }

    pub fn accepted(&self) -> usize {
        self.evens + self.odds
    }

    pub fn is_full(&self) -> bool {
        self.accepted() >= PREDICTION_SIZE
    }
}

/// Trial division up to `sqrt(n)`.
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    let mut i = 2;
    while i * i <= n {
        if n % i == 0 {
            return false;
        }
        i += 1;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_prime_small_values() {
        let primes: Vec<u64> = (0..=60).filter(|&n| is_prime(n)).collect();
        assert_eq!(primes, crate::consts::PRIMES.to_vec());
    }

    #[test]
    fn test_toggle_round_trip() {
        let mut f = FilterSet::default();
        assert!(f.toggle(FilterKind::LargeJump, 7));
        assert_eq!(f.min_gap, Some(7));
        assert!(!f.toggle(FilterKind::LargeJump, 7));
        assert_eq!(f.min_gap, None);

        assert!(f.toggle(FilterKind::Odd, 5));
        assert!(f.toggle(FilterKind::Even, 5));
        assert_eq!(f.active(), vec![FilterKind::Even, FilterKind::Odd]);
        assert!(!f.is_empty());
    }

    #[test]
    fn test_balanced_parity_caps_each_side() {
        let f = FilterSet {
            balanced_parity: true,
            ..Default::default()
        };
        let out = f.apply(&[2, 4, 6, 8, 1, 3, 10, 5, 7], None);
        assert_eq!(out, vec![2, 4, 6, 1, 3, 5]);
    }

    #[test]
    fn test_min_gap_compares_with_last_accepted() {
        let f = FilterSet {
            min_gap: Some(5),
            ..Default::default()
        };
        // 12 is rejected against 10; 14 is then compared with 10, not 12
        assert_eq!(f.apply(&[10, 12, 14, 15, 30], None), vec![10, 15, 30]);
    }

    #[test]
    fn test_apply_respects_limit() {
        let f = FilterSet::default();
        let out = f.apply(&[1, 2, 3, 4, 5, 6, 7, 8], Some(PREDICTION_SIZE));
        assert_eq!(out.len(), PREDICTION_SIZE);
    }

    #[test]
    fn test_state_tracks_accepted() {
        let f = FilterSet {
            odd_only: true,
            ..Default::default()
        };
        let mut state = f.state();
        assert!(!state.offer(2));
        for n in [1, 3, 5, 7, 9, 11] {
            assert!(state.offer(n));
        }
        assert!(state.is_full());
    }
}
