use super::weights::PairTable;
use crate::consts::{FIBONACCI, NUMBER_MAX, PREDICTION_SIZE, PRIMES};
use crate::error::{LottoError, LtResult};
use crate::filters::FilterSet;
use crate::tokens::token_value;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};
use tracing::debug;

/// Offset term used when mapping a weighted token to a number.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    EnumIter,
    EnumString,
    Display,
    Serialize,
    Deserialize,
    clap::ValueEnum,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum OffsetScheme {
    #[default]
    Simple,
    Fibonacci,
}

/// Six distinct numbers in `1..=60`, ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct Prediction([u8; PREDICTION_SIZE]);

impl Prediction {
    pub fn new(values: &[u8]) -> LtResult<Self> {
        if values.len() != PREDICTION_SIZE {
            return Err(LottoError::Validation(format!(
                "A prediction needs {} numbers, got {}",
                PREDICTION_SIZE,
                values.len()
            )));
        }
        let mut numbers = [0u8; PREDICTION_SIZE];
        numbers.copy_from_slice(values);
        numbers.sort_unstable();

        if let Some(n) = numbers.iter().find(|&&n| n == 0 || n > NUMBER_MAX) {
            return Err(LottoError::Validation(format!(
                "Number {} is outside 1..={}",
                n, NUMBER_MAX
            )));
        }
        if numbers.windows(2).any(|w| w[0] == w[1]) {
            return Err(LottoError::Validation(
                "Prediction numbers must be distinct".into(),
            ));
        }
        Ok(Self(numbers))
    }

    pub fn numbers(&self) -> &[u8; PREDICTION_SIZE] {
        &self.0
    }

    pub fn contains(&self, n: u8) -> bool {
        self.0.binary_search(&n).is_ok()
    }
}

impl AsRef<[u8]> for Prediction {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl TryFrom<Vec<u8>> for Prediction {
    type Error = LottoError;

    fn try_from(v: Vec<u8>) -> LtResult<Self> {
        Self::new(&v)
    }
}

impl From<Prediction> for Vec<u8> {
    fn from(p: Prediction) -> Self {
        p.0.to_vec()
    }
}

/// Maps one weighted token to a number in `1..=60`.
pub fn candidate(base: u64, weight: f64, variation: u8, scheme: OffsetScheme) -> u8 {
    let product = base * PRIMES[(base % PRIMES.len() as u64) as usize];
    let v = variation as f64;
    let raw = match scheme {
        OffsetScheme::Simple => product as f64 + 13.0 + weight + v,
        OffsetScheme::Fibonacci => {
            let fib = FIBONACCI[((base + variation as u64) % FIBONACCI.len() as u64) as usize];
            (product + fib) as f64 * weight + v * 7.0
        }
    };
    (raw.rem_euclid(NUMBER_MAX as f64).floor() as u8).min(NUMBER_MAX - 1) + 1
}

/// De-duplicated candidate sequence for one variation, in ranking order.
pub fn round_candidates(table: &PairTable, variation: u8, scheme: OffsetScheme) -> Vec<u8> {
    let mut seen = [false; NUMBER_MAX as usize + 1];
    let mut out = Vec::new();
    for entry in table.ranked() {
        let n = candidate(token_value(&entry.token), entry.weight, variation, scheme);
        if !seen[n as usize] {
            seen[n as usize] = true;
            out.push(n);
        }
    }
    out
}

/// One prediction per round that collects six survivors; starved rounds are dropped.
pub fn synthesize(
    table: &PairTable,
    filters: &FilterSet,
    rounds: u8,
    scheme: OffsetScheme,
) -> Vec<Prediction> {
    let mut predictions = Vec::new();

    for variation in 1..=rounds {
        let candidates = round_candidates(table, variation, scheme);
        let survivors = filters.apply(&candidates, Some(PREDICTION_SIZE));

        if survivors.len() < PREDICTION_SIZE {
            debug!(
                "Round {} starved: {} of {} candidates survived",
                variation,
                survivors.len(),
                candidates.len()
            );
            continue;
        }

        match Prediction::new(&survivors) {
            Ok(p) => predictions.push(p),
            Err(e) => debug!("Round {} discarded: {}", variation, e),
        }
    }

    predictions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_simple() {
        // 47 * PRIMES[47 % 17 = 13] = 47 * 43 = 2021; (2021 + 13 + 3 + 1) % 60 = 58
        assert_eq!(candidate(47, 3.0, 1, OffsetScheme::Simple), 59);
        assert_eq!(candidate(12, 2.0, 1, OffsetScheme::Simple), 29);
    }

    #[test]
    fn test_candidate_fibonacci() {
        // (47 * 43 + FIB[8]) * 3 + 7 = 6172; 6172 % 60 = 52
        assert_eq!(candidate(47, 3.0, 1, OffsetScheme::Fibonacci), 53);
    }

    #[test]
    fn test_candidate_always_in_range() {
        for base in 0..100 {
            for v in 1..=4 {
                for scheme in [OffsetScheme::Simple, OffsetScheme::Fibonacci] {
                    let n = candidate(base, 2.5, v, scheme);
                    assert!((1..=NUMBER_MAX).contains(&n));
                }
            }
        }
    }

    #[test]
    fn test_prediction_validation() {
        let p = Prediction::new(&[6, 5, 4, 3, 2, 1]).unwrap();
        assert_eq!(p.numbers(), &[1, 2, 3, 4, 5, 6]);
        assert!(p.contains(4));
        assert!(Prediction::new(&[1, 2, 3]).is_err());
        assert!(Prediction::new(&[1, 1, 2, 3, 4, 5]).is_err());
        assert!(Prediction::new(&[0, 1, 2, 3, 4, 5]).is_err());
        assert!(Prediction::new(&[1, 2, 3, 4, 5, 61]).is_err());
    }

    #[test]
    fn test_prediction_serde_as_array() {
        let p = Prediction::new(&[10, 20, 30, 40, 50, 60]).unwrap();
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, "[10,20,30,40,50,60]");
        assert!(serde_json::from_str::<Prediction>("[1,2,3]").is_err());
    }

    #[test]
    fn test_empty_table_yields_nothing() {
        let table = PairTable::new();
        assert!(synthesize(&table, &FilterSet::default(), 4, OffsetScheme::Simple).is_empty());
    }
}
