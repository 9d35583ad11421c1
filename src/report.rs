use crate::engine::movements::Movement;
use crate::engine::weights::{PairEntry, PairTable};
use crate::tokens::PairCategory;
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DigitCount {
    pub digit: u8,
    pub count: u32,
}

/// Summary of one processing pass. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PatternReport {
    pub digit_frequency: Vec<DigitCount>,
    pub top_pairs: Vec<PairEntry>,
    pub movements: Vec<Movement>,
}

impl PatternReport {
    pub fn is_empty(&self) -> bool {
        self.digit_frequency.is_empty() && self.top_pairs.is_empty() && self.movements.is_empty()
    }
}

pub fn build_report(
    movements: &[Movement],
    table: &PairTable,
    digit_frequency: &BTreeMap<u8, u32>,
    top: usize,
) -> PatternReport {
    let digit_frequency = digit_frequency
        .iter()
        .map(|(&digit, &count)| DigitCount { digit, count })
        .collect();

    let top_pairs = table.ranked().into_iter().take(top).cloned().collect();

    let mut seen: HashSet<(PairCategory, &str)> = HashSet::new();
    let movements = movements
        .iter()
        .filter(|m| seen.insert((m.category, m.token.as_str())))
        .cloned()
        .collect();

    PatternReport {
        digit_frequency,
        top_pairs,
        movements,
    }
}
