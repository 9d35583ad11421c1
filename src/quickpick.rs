use crate::consts::QUICK_PICK_MAX_ATTEMPTS;
use crate::filters::FilterSet;
use crate::game::GameRules;
use serde::Serialize;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuickPickOutcome {
    pub numbers: Vec<u8>,
    /// False when the filters could not be met and a plain pick was returned.
    pub filtered: bool,
}

/// Random bets, optionally seeded for reproducible output.
pub struct QuickPick {
    rng: fastrand::Rng,
}

impl QuickPick {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = if let Some(s) = seed {
            fastrand::Rng::with_seed(s)
        } else {
            fastrand::Rng::new()
        };
        Self { rng }
    }

    /// `pick_count` distinct numbers from the game range, ascending.
    pub fn pick(&mut self, rules: &GameRules) -> Vec<u8> {
        let mut numbers: Vec<u8> = Vec::with_capacity(rules.pick_count);
        while numbers.len() < rules.pick_count {
            let n = self.rng.u8(rules.min_value..=rules.max_value);
            if !numbers.contains(&n) {
                numbers.push(n);
            }
        }
        numbers.sort_unstable();
        numbers
    }

    /// Draws until the filters accepted a full bet or the attempt budget is
    /// spent, in which case it falls back to `pick`.
    pub fn pick_filtered(&mut self, rules: &GameRules, filters: &FilterSet) -> QuickPickOutcome {
        let mut state = filters.state();
        let mut numbers: Vec<u8> = Vec::with_capacity(rules.pick_count);

        for _ in 0..QUICK_PICK_MAX_ATTEMPTS {
            if numbers.len() >= rules.pick_count {
                break;
            }
            let n = self.rng.u8(rules.min_value..=rules.max_value);
            if numbers.contains(&n) {
                continue;
            }
            if state.offer(n) {
                numbers.push(n);
            }
        }

        if numbers.len() < rules.pick_count {
            warn!(
                "Filters {:?} left only {} of {} numbers after {} attempts, using a plain pick",
                filters.active(),
                numbers.len(),
                rules.pick_count,
                QUICK_PICK_MAX_ATTEMPTS
            );
            return QuickPickOutcome {
                numbers: self.pick(rules),
                filtered: false,
            };
        }

        numbers.sort_unstable();
        QuickPickOutcome {
            numbers,
            filtered: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::is_prime;
    use crate::game::GameKind;

    #[test]
    fn test_pick_is_sorted_unique_in_range() {
        let rules = GameKind::MegaSena.rules();
        let mut qp = QuickPick::new(Some(42));
        for _ in 0..50 {
            let n = qp.pick(&rules);
            assert_eq!(n.len(), 6);
            assert!(n.windows(2).all(|w| w[0] < w[1]));
            assert!(n.iter().all(|&x| rules.contains(x)));
        }
    }

    #[test]
    fn test_seed_is_reproducible() {
        let rules = GameKind::Milionaria.rules();
        let a = QuickPick::new(Some(7)).pick(&rules);
        let b = QuickPick::new(Some(7)).pick(&rules);
        assert_eq!(a, b);
    }

    #[test]
    fn test_prime_filter_respected() {
        let filters = FilterSet {
            prime_only: true,
            ..Default::default()
        };
        let out = QuickPick::new(Some(3)).pick_filtered(&GameKind::MegaSena.rules(), &filters);
        assert!(out.filtered);
        assert!(out.numbers.iter().all(|&n| is_prime(n as u64)));
    }

    #[test]
    fn test_impossible_filters_fall_back() {
        let filters = FilterSet {
            even_only: true,
            odd_only: true,
            ..Default::default()
        };
        let out = QuickPick::new(Some(1)).pick_filtered(&GameKind::MegaSena.rules(), &filters);
        assert!(!out.filtered);
        assert_eq!(out.numbers.len(), 6);
    }
}
