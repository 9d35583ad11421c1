pub mod draw;
pub mod grid;
pub mod process;
pub mod quick_pick;
pub mod saved;
pub mod stats;
pub mod verify;

use matrixlotto::config::Config;
use matrixlotto::session::Session;
use matrixlotto::storage::JsonFileStore;
use matrixlotto::{LottoError, LtResult};

pub fn open_session(config: &Config) -> Session<JsonFileStore> {
    let store = JsonFileStore::new(&config.storage.state_file);
    Session::open(store, config.engine.clone())
}

/// Parses `"4, 15,23"` into numbers.
pub fn parse_numbers(raw: &str) -> LtResult<Vec<u8>> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<u8>()
                .map_err(|_| LottoError::Validation(format!("'{}' is not a number", s)))
        })
        .collect()
}
