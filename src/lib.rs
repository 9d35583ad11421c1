pub mod config;
pub mod consts;
pub mod draws;
pub mod engine;
pub mod error;
pub mod filters;
pub mod game;
pub mod grid;
pub mod history;
pub mod official;
pub mod quickpick;
pub mod report;
pub mod session;
pub mod stats;
pub mod storage;
pub mod tokens;
// cmd and reports are binary modules (see main.rs)

pub use error::{LottoError, LtResult};
