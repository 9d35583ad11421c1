use crate::grid::Grid;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use strum_macros::{Display, EnumIter};

/// Geometric family of a cell pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PairCategory {
    Horizontal,
    Vertical,
    Additional,
    Diagonal,
}

impl PairCategory {
    /// Prefix used in movement position labels (`h1`, `v2`, `a3`, `d4`).
    pub fn label_prefix(&self) -> char {
        match self {
            Self::Horizontal => 'h',
            Self::Vertical => 'v',
            Self::Additional => 'a',
            Self::Diagonal => 'd',
        }
    }
}

// --- PAIR CATALOGUE (row-major cell indices) ---
//  0  1  2  3
//  4  5  6  7
//  8  9 10 11
// 12 13 14 15

pub const HORIZONTAL_PAIRS: [(usize, usize); 6] =
    [(0, 3), (4, 5), (5, 6), (8, 9), (9, 10), (12, 15)];

pub const VERTICAL_PAIRS: [(usize, usize); 6] =
    [(0, 4), (4, 8), (8, 12), (3, 6), (6, 10), (10, 15)];

pub const ADDITIONAL_PAIRS: [(usize, usize); 14] = [
    (0, 1),
    (1, 4),
    (0, 2),
    (2, 3),
    (5, 7),
    (7, 6),
    (8, 13),
    (13, 15),
    (9, 0),
    (0, 9),
    (1, 5),
    (5, 9),
    (2, 6),
    (6, 10),
];

pub const DIAGONAL_PAIRS: [(usize, usize); 10] = [
    (0, 5),
    (5, 10),
    (10, 15),
    (3, 5),
    (5, 8),
    (8, 12),
    (4, 9),
    (9, 15),
    (0, 6),
    (6, 12),
];

/// Extraction order matters: movement labels are assigned by position in the
/// resulting token list.
pub const PAIR_CATALOGUE: [(PairCategory, &[(usize, usize)]); 4] = [
    (PairCategory::Horizontal, &HORIZONTAL_PAIRS),
    (PairCategory::Vertical, &VERTICAL_PAIRS),
    (PairCategory::Additional, &ADDITIONAL_PAIRS),
    (PairCategory::Diagonal, &DIAGONAL_PAIRS),
];

/// Two digits read from a pair of cells, in both directions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    pub forward: String,
    pub reverse: String,
    /// Source cells `(first, second)`; `forward` reads first then second.
    #[serde(default)]
    pub cells: (usize, usize),
}

impl Token {
    pub fn new(first: u8, second: u8, cells: (usize, usize)) -> Self {
        Self {
            forward: format!("{}{}", first, second),
            reverse: format!("{}{}", second, first),
            cells,
        }
    }

    /// Order-independent identity: `12|21` and `21|12` are the same token.
    pub fn unordered_key(&self) -> (&str, &str) {
        if self.forward <= self.reverse {
            (&self.forward, &self.reverse)
        } else {
            (&self.reverse, &self.forward)
        }
    }

    pub fn digits(&self) -> impl Iterator<Item = u8> + '_ {
        self.forward.bytes().map(|b| b.wrapping_sub(b'0'))
    }
}

/// Integer value of a digit string such as `"07"`.
pub fn token_value(token: &str) -> u64 {
    token
        .bytes()
        .filter(u8::is_ascii_digit)
        .fold(0, |acc, b| acc * 10 + (b - b'0') as u64)
}

/// Walks the pair catalogue and returns one token per pair whose cells are
/// both visible and filled, de-duplicated on the unordered key.
pub fn extract_tokens(grid: &Grid) -> Vec<Token> {
    let mask = grid.mask();
    let mut seen: HashSet<(String, String)> = HashSet::new();
    let mut tokens = Vec::new();

    for (_, pairs) in PAIR_CATALOGUE.iter() {
        for &(a, b) in pairs.iter() {
            if !mask.is_visible(a) || !mask.is_visible(b) {
                continue;
            }
            let (Some(da), Some(db)) = (grid.digit(a), grid.digit(b)) else {
                continue;
            };

            let token = Token::new(da, db, (a, b));
            let (lo, hi) = token.unordered_key();
            if seen.insert((lo.to_string(), hi.to_string())) {
                tokens.push(token);
            }
        }
    }

    tokens
}
