use crate::tokens::{PairCategory, Token};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum_macros::{Display, EnumIter, EnumString};

/// How a movement's weight is derived from its category.
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
pub enum WeightScheme {
    /// Category base weight as-is.
    #[default]
    Flat,
    /// Base weight scaled by a per-category factor.
    Positional,
}

impl WeightScheme {
    pub fn weight(&self, category: PairCategory) -> f64 {
        let base = base_weight(category);
        match self {
            Self::Flat => base,
            Self::Positional => base * positional_factor(category),
        }
    }
}

pub fn base_weight(category: PairCategory) -> f64 {
    match category {
        PairCategory::Diagonal => 3.0,
        PairCategory::Horizontal | PairCategory::Vertical => 2.0,
        PairCategory::Additional => 1.0,
    }
}

fn positional_factor(category: PairCategory) -> f64 {
    match category {
        PairCategory::Diagonal => 1.5,
        PairCategory::Horizontal => 1.2,
        PairCategory::Vertical => 1.1,
        PairCategory::Additional => 1.0,
    }
}

// Slot buckets over the de-duplicated token list.
const HORIZONTAL_SLOTS: usize = 5;
const VERTICAL_SLOTS: usize = 4;
const ADDITIONAL_SLOTS: usize = 5;

/// Category and 1-based slot number for the token at `index`.
pub fn bucket_for(index: usize) -> (PairCategory, usize) {
    let v_start = HORIZONTAL_SLOTS;
    let a_start = v_start + VERTICAL_SLOTS;
    let d_start = a_start + ADDITIONAL_SLOTS;

    if index < v_start {
        (PairCategory::Horizontal, index + 1)
    } else if index < a_start {
        (PairCategory::Vertical, index - v_start + 1)
    } else if index < d_start {
        (PairCategory::Additional, index - a_start + 1)
    } else {
        (PairCategory::Diagonal, index - d_start + 1)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movement {
    pub category: PairCategory,
    pub token: String,
    pub reverse: String,
    pub weight: f64,
    /// `h1`, `v2`, `a3`, `d4`, ...
    pub position: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Classification {
    pub movements: Vec<Movement>,
    pub digit_frequency: BTreeMap<u8, u32>,
}

/// Assigns each token a category by its position in the list and weighs it.
/// Every digit of every token bumps the frequency counter.
pub fn classify(tokens: &[Token], scheme: WeightScheme) -> Classification {
    let mut out = Classification::default();

    for (i, token) in tokens.iter().enumerate() {
        let (category, slot) = bucket_for(i);
        out.movements.push(Movement {
            category,
            token: token.forward.clone(),
            reverse: token.reverse.clone(),
            weight: scheme.weight(category),
            position: format!("{}{}", category.label_prefix(), slot),
        });

        for d in token.digits() {
            *out.digit_frequency.entry(d).or_insert(0) += 1;
        }
    }

    out
}
