mod common;

use common::SCENARIO_B;
use matrixlotto::config::EngineParams;
use matrixlotto::error::{LottoError, LtResult};
use matrixlotto::filters::FilterKind;
use matrixlotto::game::GameKind;
use matrixlotto::session::Session;
use matrixlotto::storage::{JsonFileStore, MemoryStore, Snapshot, SnapshotStore};
use std::fs;

fn fill_scenario_b<S: SnapshotStore>(session: &mut Session<S>) {
    for (i, c) in SCENARIO_B.chars().enumerate() {
        if c.is_ascii_digit() {
            session.set_cell(i, &c.to_string()).unwrap();
        }
    }
}

/// Store that fails every call.
struct BrokenStore;

impl SnapshotStore for BrokenStore {
    fn save(&self, _: &Snapshot) -> LtResult<()> {
        Err(LottoError::Io(std::io::Error::other("disk full")))
    }
    fn load(&self) -> LtResult<Option<Snapshot>> {
        Err(LottoError::Io(std::io::Error::other("unreadable")))
    }
    fn clear(&self) -> LtResult<()> {
        Err(LottoError::Io(std::io::Error::other("read-only")))
    }
}

#[test]
fn test_every_mutation_is_persisted() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");

    let mut session = Session::open(JsonFileStore::new(&path), EngineParams::default());
    session.set_cell(0, "1").unwrap();
    session.set_cell(3, "2").unwrap();
    session.toggle_filter(FilterKind::Prime);

    let saved: Snapshot = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(saved.grid.digit(3), Some(2));
    assert!(saved.filters.prime_only);
    assert_eq!(saved.tokens.len(), 1);
    assert_eq!(saved.tokens[0].forward, "12");
}

#[test]
fn test_reopen_restores_state() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("state.json");

    {
        let mut session = Session::open(JsonFileStore::new(&path), EngineParams::default());
        fill_scenario_b(&mut session);
        session.toggle_filter(FilterKind::LargeJump);
    }

    let session = Session::open(JsonFileStore::new(&path), EngineParams::default());
    assert_eq!(session.grid().filled_count(), 8);
    assert_eq!(session.tokens().len(), 15);
    assert_eq!(session.filters().min_gap, Some(5));
    assert!(session.analysis().is_none());
}

#[test]
fn test_rejected_input_leaves_session_untouched() {
    let store = MemoryStore::new();
    let mut session = Session::open(store, EngineParams::default());
    session.set_cell(0, "4").unwrap();
    let before = session.snapshot();

    assert!(session.set_cell(5, "4").unwrap_err().is_validation());
    assert!(session.set_cell(1, "3").unwrap_err().is_validation());
    assert!(session.set_cell(5, "x").unwrap_err().is_validation());
    assert!(session.clear_cell(20).unwrap_err().is_validation());

    assert_eq!(session.snapshot(), before);
    assert_eq!(session.store().load().unwrap(), Some(before));
}

#[test]
fn test_clear_resets_everything_and_forgets_slot() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");

    let mut session = Session::open(JsonFileStore::new(&path), EngineParams::default());
    fill_scenario_b(&mut session);
    session.toggle_filter(FilterKind::Odd);
    assert_eq!(session.process().predictions.len(), 4);
    assert!(path.exists());

    session.clear();
    assert!(session.grid().is_empty());
    assert!(session.tokens().is_empty());
    assert!(session.filters().is_empty());
    assert!(session.analysis().is_none());
    assert!(!path.exists());
}

#[test]
fn test_store_failures_are_swallowed() {
    let mut session = Session::open(BrokenStore, EngineParams::default());
    session.set_cell(0, "1").unwrap();
    session.set_cell(3, "2").unwrap();
    assert!(session.toggle_filter(FilterKind::Even));
    session.clear();
    assert!(session.grid().is_empty());
}

#[test]
fn test_corrupt_snapshot_starts_fresh() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");
    fs::write(&path, "{ not json").unwrap();

    let session = Session::open(JsonFileStore::new(&path), EngineParams::default());
    assert!(session.grid().is_empty());
}

#[test]
fn test_stale_tokens_are_rebuilt_on_open() {
    let store = MemoryStore::new();
    let mut grid = matrixlotto::grid::Grid::default();
    grid.set_cell(0, "1").unwrap();
    grid.set_cell(3, "2").unwrap();
    store
        .save(&Snapshot {
            grid,
            tokens: vec![],
            ..Default::default()
        })
        .unwrap();

    let session = Session::open(store, EngineParams::default());
    assert_eq!(session.tokens().len(), 1);
}

#[test]
fn test_process_uses_engine_params() {
    let params = EngineParams {
        rounds: 1,
        ..Default::default()
    };
    let mut session = Session::open(MemoryStore::new(), params);
    fill_scenario_b(&mut session);
    let analysis = session.process();
    assert_eq!(analysis.predictions.len(), 1);
    assert_eq!(analysis.predictions[0].numbers(), &[4, 8, 16, 25, 29, 59]);
}

#[test]
fn test_saved_sets_persist_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");

    {
        let mut session = Session::open(JsonFileStore::new(&path), EngineParams::default());
        assert_eq!(session.save_set(GameKind::MegaSena, &[58, 4, 23, 15, 42, 31]).unwrap(), 0);
        assert_eq!(session.save_set(GameKind::Trevo, &[5, 1]).unwrap(), 1);
    }

    let session = Session::open(JsonFileStore::new(&path), EngineParams::default());
    let saved = session.saved_sets();
    assert_eq!(saved.len(), 2);
    assert_eq!(saved[0].numbers, vec![4, 15, 23, 31, 42, 58]);
    assert_eq!(saved[1].game, GameKind::Trevo);
    assert_eq!(saved[1].numbers, vec![1, 5]);
}

#[test]
fn test_invalid_bets_are_not_saved() {
    let mut session = Session::open(MemoryStore::new(), EngineParams::default());
    assert!(session
        .save_set(GameKind::MegaSena, &[1, 2, 3])
        .unwrap_err()
        .is_validation());
    assert!(session
        .save_set(GameKind::MegaSena, &[1, 2, 3, 4, 5, 5])
        .unwrap_err()
        .is_validation());
    assert!(session
        .save_set(GameKind::Milionaria, &[1, 2, 3, 4, 5, 55])
        .unwrap_err()
        .is_validation());
    assert!(session.saved_sets().is_empty());
    assert!(session.store().load().unwrap().is_none());
}

#[test]
fn test_delete_saved_set() {
    let mut session = Session::open(MemoryStore::new(), EngineParams::default());
    session.save_set(GameKind::MegaSena, &[1, 2, 3, 4, 5, 6]).unwrap();
    session.save_set(GameKind::MegaSena, &[7, 8, 9, 10, 11, 12]).unwrap();

    let removed = session.delete_saved_set(0).unwrap();
    assert_eq!(removed.numbers, vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(session.saved_sets()[0].numbers, vec![7, 8, 9, 10, 11, 12]);

    let stored = session.store().load().unwrap().unwrap();
    assert_eq!(stored.saved_sets.len(), 1);
}

#[test]
fn test_delete_out_of_range_leaves_sets_alone() {
    let mut session = Session::open(MemoryStore::new(), EngineParams::default());
    session.save_set(GameKind::Trevo, &[2, 3]).unwrap();
    let before = session.snapshot();

    assert!(session.delete_saved_set(1).unwrap_err().is_validation());
    assert_eq!(session.snapshot(), before);
}

#[test]
fn test_clear_keeps_saved_sets() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");

    let mut session = Session::open(JsonFileStore::new(&path), EngineParams::default());
    fill_scenario_b(&mut session);
    session.save_set(GameKind::MegaSena, &[4, 8, 16, 25, 29, 59]).unwrap();
    session.clear();

    assert!(session.grid().is_empty());
    assert!(path.exists());
    let reopened = Session::open(JsonFileStore::new(&path), EngineParams::default());
    assert!(reopened.grid().is_empty());
    assert_eq!(reopened.saved_sets().len(), 1);
}
