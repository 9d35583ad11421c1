use crate::config::EngineParams;
use crate::engine::{self, Analysis};
use crate::error::{LottoError, LtResult};
use crate::filters::{FilterKind, FilterSet};
use crate::game::GameKind;
use crate::grid::Grid;
use crate::storage::{SavedSet, Snapshot, SnapshotStore};
use crate::tokens::{extract_tokens, Token};
use tracing::{debug, info, warn};

/// Owns the grid, the filters, the derived token list and the saved bets.
///
/// Every successful mutation is written to the store. Store failures are logged
/// and swallowed: the in-memory state is always authoritative.
pub struct Session<S: SnapshotStore> {
    store: S,
    params: EngineParams,
    grid: Grid,
    filters: FilterSet,
    tokens: Vec<Token>,
    saved_sets: Vec<SavedSet>,
    analysis: Option<Analysis>,
}

impl<S: SnapshotStore> Session<S> {
    /// Restores the saved snapshot if there is one, defaults otherwise.
    pub fn open(store: S, params: EngineParams) -> Self {
        let snapshot = match store.load() {
            Ok(Some(s)) => {
                info!("Restored saved session");
                s
            }
            Ok(None) => Snapshot::default(),
            Err(e) => {
                warn!("Could not load saved session, starting fresh: {}", e);
                Snapshot::default()
            }
        };

        let grid = snapshot.grid.sanitized();
        // tokens are derived state; rebuild rather than trust the file
        let tokens = extract_tokens(&grid);
        if tokens != snapshot.tokens {
            debug!("Saved token list was stale, rebuilt from grid");
        }

        Self {
            store,
            params,
            grid,
            filters: snapshot.filters,
            tokens,
            saved_sets: snapshot.saved_sets,
            analysis: None,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn saved_sets(&self) -> &[SavedSet] {
        &self.saved_sets
    }

    pub fn params(&self) -> &EngineParams {
        &self.params
    }

    /// Result of the last `process` call, if any since the last `clear`.
    pub fn analysis(&self) -> Option<&Analysis> {
        self.analysis.as_ref()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            grid: self.grid.clone(),
            filters: self.filters,
            tokens: self.tokens.clone(),
            saved_sets: self.saved_sets.clone(),
        }
    }

    /// Validation errors leave the session untouched.
    pub fn set_cell(&mut self, index: usize, input: &str) -> LtResult<()> {
        self.grid.set_cell(index, input)?;
        self.after_grid_change();
        Ok(())
    }

    pub fn clear_cell(&mut self, index: usize) -> LtResult<()> {
        self.grid.clear_cell(index)?;
        self.after_grid_change();
        Ok(())
    }

    pub fn toggle_filter(&mut self, kind: FilterKind) -> bool {
        let enabled = self.filters.toggle(kind, self.params.min_gap);
        debug!("Filter {} -> {}", kind, enabled);
        self.persist();
        enabled
    }

    /// Keeps a complete bet for `game`, stored sorted. Returns its position.
    pub fn save_set(&mut self, game: GameKind, numbers: &[u8]) -> LtResult<usize> {
        let numbers = game.rules().check_bet(numbers)?;
        self.saved_sets.push(SavedSet { game, numbers });
        self.persist();
        Ok(self.saved_sets.len() - 1)
    }

    pub fn delete_saved_set(&mut self, index: usize) -> LtResult<SavedSet> {
        if index >= self.saved_sets.len() {
            return Err(LottoError::Validation(format!(
                "No saved set #{} ({} saved)",
                index + 1,
                self.saved_sets.len()
            )));
        }
        let removed = self.saved_sets.remove(index);
        self.persist();
        Ok(removed)
    }

    /// Empties the grid, resets filters and drops results. Saved bets survive;
    /// the slot is only removed when there are none.
    pub fn clear(&mut self) {
        self.grid.clear();
        self.filters = FilterSet::default();
        self.tokens.clear();
        self.analysis = None;
        if !self.saved_sets.is_empty() {
            self.persist();
        } else if let Err(e) = self.store.clear() {
            warn!("Failed to clear saved session: {}", e);
        }
    }

    pub fn process(&mut self) -> &Analysis {
        let analysis = engine::process(&self.tokens, &self.filters, &self.params);
        self.analysis.insert(analysis)
    }

    fn after_grid_change(&mut self) {
        self.tokens = extract_tokens(&self.grid);
        self.persist();
    }

    fn persist(&self) {
        if let Err(e) = self.store.save(&self.snapshot()) {
            warn!("Failed to save session: {}", e);
        }
    }
}
