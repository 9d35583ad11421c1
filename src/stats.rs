//! Descriptive statistics for a bet and for a draw history.

use crate::consts::NUMBER_MAX;
use crate::history::HistoricalDraw;
use serde::Serialize;
use strum_macros::{Display, EnumIter, EnumString};

pub const DECADE_LABELS: [&str; 6] = ["1-10", "11-20", "21-30", "31-40", "41-50", "51-60"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ParitySplit {
    pub even: usize,
    pub odd: usize,
}

pub fn parity_split(numbers: &[u8]) -> ParitySplit {
    let even = numbers.iter().filter(|&&n| n % 2 == 0).count();
    ParitySplit {
        even,
        odd: numbers.len() - even,
    }
}

pub fn sum(numbers: &[u8]) -> u32 {
    numbers.iter().map(|&n| n as u32).sum()
}

/// Count per decade, indexed like `DECADE_LABELS`. Values outside 1..=60 are ignored.
pub fn decade_distribution(numbers: &[u8]) -> [usize; 6] {
    let mut out = [0; 6];
    for &n in numbers {
        if (1..=NUMBER_MAX).contains(&n) {
            out[((n - 1) / 10) as usize] += 1;
        }
    }
    out
}

/// Two-digit display form; `0` marks an empty slot.
pub fn format_number(n: u8) -> String {
    if n == 0 {
        "?".to_string()
    } else {
        format!("{:02}", n)
    }
}

/// True if some past contest drew exactly this set.
pub fn already_drawn(numbers: &[u8], history: &[HistoricalDraw]) -> bool {
    let mut wanted = numbers.to_vec();
    wanted.sort_unstable();
    history.iter().any(|d| {
        let mut drawn = d.numbers.clone();
        drawn.sort_unstable();
        drawn == wanted
    })
}

/// How often each number in 1..=60 was drawn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrequencyTable {
    counts: Vec<u32>,
}

impl FrequencyTable {
    pub fn from_history(history: &[HistoricalDraw]) -> Self {
        let mut counts = vec![0; NUMBER_MAX as usize];
        for draw in history {
            for &n in &draw.numbers {
                if (1..=NUMBER_MAX).contains(&n) {
                    counts[(n - 1) as usize] += 1;
                }
            }
        }
        Self { counts }
    }

    pub fn count(&self, n: u8) -> u32 {
        match n {
            1..=NUMBER_MAX => self.counts[(n - 1) as usize],
            _ => 0,
        }
    }

    /// `(number, count)`, most drawn first; ties by ascending number.
    pub fn hottest(&self) -> Vec<(u8, u32)> {
        let mut v = self.pairs();
        v.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        v
    }

    /// `(number, count)`, least drawn first; ties by ascending number.
    pub fn coldest(&self) -> Vec<(u8, u32)> {
        let mut v = self.pairs();
        v.sort_by(|a, b| a.1.cmp(&b.1).then(a.0.cmp(&b.0)));
        v
    }

    fn pairs(&self) -> Vec<(u8, u32)> {
        (1..=NUMBER_MAX).map(|n| (n, self.count(n))).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, EnumString, Display, clap::ValueEnum)]
#[strum(serialize_all = "lowercase")]
pub enum FrequencyStrategy {
    Hot,
    Cold,
    /// Three random picks from the hot half, three from the cold half.
    Balanced,
}

/// Six numbers chosen from a frequency table, ascending.
pub fn select_by_frequency(
    table: &FrequencyTable,
    strategy: FrequencyStrategy,
    rng: &mut fastrand::Rng,
) -> Vec<u8> {
    let mut out: Vec<u8> = match strategy {
        FrequencyStrategy::Hot => table.hottest().iter().take(6).map(|p| p.0).collect(),
        FrequencyStrategy::Cold => table.coldest().iter().take(6).map(|p| p.0).collect(),
        FrequencyStrategy::Balanced => {
            let half = NUMBER_MAX as usize / 2;
            let mut hot: Vec<u8> = table.hottest().iter().take(half).map(|p| p.0).collect();
            // cold half is whatever the hot half left, so the two never overlap
            let mut cold: Vec<u8> = table
                .coldest()
                .iter()
                .map(|p| p.0)
                .filter(|n| !hot.contains(n))
                .collect();

            let mut picked = Vec::with_capacity(6);
            for _ in 0..3 {
                picked.push(hot.swap_remove(rng.usize(..hot.len())));
                picked.push(cold.swap_remove(rng.usize(..cold.len())));
            }
            picked
        }
    };
    out.sort_unstable();
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draw(contest: u32, numbers: [u8; 6]) -> HistoricalDraw {
        HistoricalDraw {
            contest,
            date: String::new(),
            numbers: numbers.to_vec(),
        }
    }

    #[test]
    fn test_set_stats() {
        let set = [2, 11, 24, 37, 45, 60];
        assert_eq!(parity_split(&set), ParitySplit { even: 3, odd: 3 });
        assert_eq!(sum(&set), 179);
        assert_eq!(decade_distribution(&set), [1, 1, 1, 1, 1, 1]);
        assert_eq!(decade_distribution(&[10, 11, 0, 61]), [1, 1, 0, 0, 0, 0]);
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "?");
        assert_eq!(format_number(7), "07");
        assert_eq!(format_number(42), "42");
    }

    #[test]
    fn test_already_drawn_ignores_order() {
        let history = vec![draw(1, [4, 5, 30, 33, 41, 52])];
        assert!(already_drawn(&[52, 41, 33, 30, 5, 4], &history));
        assert!(!already_drawn(&[1, 2, 3, 4, 5, 6], &history));
    }

    #[test]
    fn test_hot_and_cold() {
        let history = vec![
            draw(1, [1, 2, 3, 4, 5, 6]),
            draw(2, [1, 2, 3, 4, 5, 7]),
            draw(3, [1, 2, 3, 4, 8, 9]),
        ];
        let table = FrequencyTable::from_history(&history);
        assert_eq!(table.count(1), 3);
        assert_eq!(table.count(0), 0);

        let mut rng = fastrand::Rng::with_seed(1);
        assert_eq!(
            select_by_frequency(&table, FrequencyStrategy::Hot, &mut rng),
            vec![1, 2, 3, 4, 5, 6]
        );
        assert_eq!(
            select_by_frequency(&table, FrequencyStrategy::Cold, &mut rng),
            vec![10, 11, 12, 13, 14, 15]
        );
    }

    #[test]
    fn test_balanced_has_six_distinct() {
        let table = FrequencyTable::from_history(&[]);
        let mut rng = fastrand::Rng::with_seed(9);
        for _ in 0..20 {
            let picked = select_by_frequency(&table, FrequencyStrategy::Balanced, &mut rng);
            assert_eq!(picked.len(), 6);
            assert!(picked.windows(2).all(|w| w[0] < w[1]));
            assert_eq!(picked.iter().filter(|&&n| n <= 30).count(), 3);
        }
    }
}
