use crate::error::{LottoError, LtResult};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Lottery products served by the draw API.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    EnumIter,
    EnumString,
    Display,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    clap::ValueEnum,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum GameKind {
    #[default]
    MegaSena,
    Milionaria,
    Trevo,
}

/// Shape of a valid bet for a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameRules {
    pub pick_count: usize,
    pub min_value: u8,
    pub max_value: u8,
}

impl GameRules {
    pub fn contains(&self, n: u8) -> bool {
        n >= self.min_value && n <= self.max_value
    }

    pub fn pool_size(&self) -> usize {
        (self.max_value - self.min_value) as usize + 1
    }

    /// Checks a complete bet and returns it sorted ascending.
    pub fn check_bet(&self, numbers: &[u8]) -> LtResult<Vec<u8>> {
        if numbers.len() != self.pick_count {
            return Err(LottoError::Validation(format!(
                "A bet needs {} numbers, got {}",
                self.pick_count,
                numbers.len()
            )));
        }
        let mut sorted = numbers.to_vec();
        sorted.sort_unstable();
        if let Some(&n) = sorted.iter().find(|&&n| !self.contains(n)) {
            return Err(LottoError::Validation(format!(
                "{} is outside {}-{}",
                n, self.min_value, self.max_value
            )));
        }
        if let Some(w) = sorted.windows(2).find(|w| w[0] == w[1]) {
            return Err(LottoError::Validation(format!("{} appears twice", w[0])));
        }
        Ok(sorted)
    }
}

impl GameKind {
    pub fn rules(&self) -> GameRules {
        match self {
            Self::MegaSena => GameRules {
                pick_count: 6,
                min_value: 1,
                max_value: 60,
            },
            Self::Milionaria => GameRules {
                pick_count: 6,
                min_value: 1,
                max_value: 50,
            },
            // Trevo picks two clovers out of six
            Self::Trevo => GameRules {
                pick_count: 2,
                min_value: 1,
                max_value: 6,
            },
        }
    }

    /// Path segment used by the results API.
    pub fn api_slug(&self) -> &'static str {
        match self {
            Self::MegaSena => "megasena",
            Self::Milionaria => "milionaria",
            Self::Trevo => "trevo",
        }
    }
}
