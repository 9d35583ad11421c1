use crate::draws::DrawRecord;
use crate::error::{LottoError, LtResult};
use crate::game::{GameKind, GameRules};
use serde::Serialize;

/// Which numbers of one prediction appear in the official result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchRow {
    pub hits: Vec<bool>,
    pub count: usize,
}

/// Official numbers of one contest, entered by hand or filled from a draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OfficialResults {
    game: GameKind,
    slots: Vec<Option<u8>>,
}

impl OfficialResults {
    pub fn new(game: GameKind) -> Self {
        Self {
            game,
            slots: vec![None; game.rules().pick_count],
        }
    }

    /// Fills every slot at once; all-or-nothing.
    pub fn from_numbers(game: GameKind, numbers: &[u8]) -> LtResult<Self> {
        let mut results = Self::new(game);
        results.replace_all(numbers)?;
        Ok(results)
    }

    pub fn game(&self) -> GameKind {
        self.game
    }

    pub fn rules(&self) -> GameRules {
        self.game.rules()
    }

    pub fn slots(&self) -> &[Option<u8>] {
        &self.slots
    }

    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    pub fn set_number(&mut self, index: usize, value: u8) -> LtResult<()> {
        let rules = self.rules();
        if index >= self.slots.len() {
            return Err(LottoError::Validation(format!(
                "{} has {} official numbers, slot {} does not exist",
                self.game,
                self.slots.len(),
                index
            )));
        }
        if !rules.contains(value) {
            return Err(LottoError::Validation(format!(
                "Official numbers must be between {} and {}",
                rules.min_value, rules.max_value
            )));
        }
        let taken = self
            .slots
            .iter()
            .enumerate()
            .any(|(i, s)| i != index && *s == Some(value));
        if taken {
            return Err(LottoError::Validation(format!(
                "Number {} was already entered",
                value
            )));
        }

        self.slots[index] = Some(value);
        Ok(())
    }

    pub fn clear_number(&mut self, index: usize) {
        if let Some(slot) = self.slots.get_mut(index) {
            *slot = None;
        }
    }

    pub fn fill_from_draw(&mut self, record: &DrawRecord) -> LtResult<()> {
        let numbers = record.numbers()?;
        self.replace_all(&numbers)
    }

    fn replace_all(&mut self, numbers: &[u8]) -> LtResult<()> {
        if numbers.len() != self.slots.len() {
            return Err(LottoError::Validation(format!(
                "{} needs {} official numbers, got {}",
                self.game,
                self.slots.len(),
                numbers.len()
            )));
        }
        let mut next = Self::new(self.game);
        for (i, &n) in numbers.iter().enumerate() {
            next.set_number(i, n)?;
        }
        *self = next;
        Ok(())
    }

    /// One row per prediction, one flag per predicted number.
    pub fn verify<P: AsRef<[u8]>>(&self, predictions: &[P]) -> LtResult<Vec<MatchRow>> {
        let official: Vec<u8> = self.slots.iter().flatten().copied().collect();
        if official.len() != self.slots.len() {
            return Err(LottoError::Validation(
                "Enter every official number before verifying".into(),
            ));
        }
        let mut sorted = official.clone();
        sorted.sort_unstable();
        if sorted.windows(2).any(|w| w[0] == w[1]) {
            return Err(LottoError::Validation(
                "Official numbers must be unique".into(),
            ));
        }

        Ok(predictions
            .iter()
            .map(|p| {
                let hits: Vec<bool> = p.as_ref().iter().map(|n| official.contains(n)).collect();
                let count = hits.iter().filter(|&&h| h).count();
                MatchRow { hits, count }
            })
            .collect())
    }
}
