use crate::error::LtResult;
use crate::filters::FilterSet;
use crate::game::GameKind;
use crate::grid::Grid;
use crate::tokens::Token;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Everything a session needs to resume.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Snapshot {
    pub grid: Grid,
    pub filters: FilterSet,
    pub tokens: Vec<Token>,
    pub saved_sets: Vec<SavedSet>,
}

/// A bet the user chose to keep.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedSet {
    #[serde(default)]
    pub game: GameKind,
    pub numbers: Vec<u8>,
}

/// Single-slot snapshot persistence.
pub trait SnapshotStore {
    fn save(&self, snapshot: &Snapshot) -> LtResult<()>;
    /// `Ok(None)` when nothing was saved yet.
    fn load(&self) -> LtResult<Option<Snapshot>>;
    fn clear(&self) -> LtResult<()>;
}

/// Stores the snapshot as pretty JSON at a fixed path.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStore for JsonFileStore {
    fn save(&self, snapshot: &Snapshot) -> LtResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_vec_pretty(snapshot)?;

        // a crash mid-write must not leave a truncated snapshot behind
        let staging = self.path.with_extension("tmp");
        let mut file = fs::File::create(&staging)?;
        file.write_all(&json)?;
        file.sync_all()?;
        drop(file);
        fs::rename(&staging, &self.path)?;

        debug!("Saved snapshot to {}", self.path.display());
        Ok(())
    }

    fn load(&self) -> LtResult<Option<Snapshot>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path)?;
        let snapshot: Snapshot = serde_json::from_str(&content)?;
        Ok(Some(snapshot))
    }

    fn clear(&self) -> LtResult<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

/// Non-persistent store for tests and one-shot runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: RefCell<Option<Snapshot>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SnapshotStore for MemoryStore {
    fn save(&self, snapshot: &Snapshot) -> LtResult<()> {
        *self.slot.borrow_mut() = Some(snapshot.clone());
        Ok(())
    }

    fn load(&self) -> LtResult<Option<Snapshot>> {
        Ok(self.slot.borrow().clone())
    }

    fn clear(&self) -> LtResult<()> {
        self.slot.borrow_mut().take();
        Ok(())
    }
}
