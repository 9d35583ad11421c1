#![allow(dead_code)]

use matrixlotto::grid::{Grid, VisibilityMask};

/// Reference arrangement: the eight visible cells hold 1..=8 in reading order.
///
/// ```text
/// 1 . . 2
/// . 3 4 .
/// . 5 6 .
/// 7 . . 8
/// ```
pub const SCENARIO_B: &str = "1..2.34..56.7..8";

pub fn scenario_b_grid() -> Grid {
    Grid::from_pattern(SCENARIO_B, VisibilityMask::reference()).expect("valid pattern")
}

pub fn predictions_as_vecs(predictions: &[matrixlotto::engine::Prediction]) -> Vec<Vec<u8>> {
    predictions.iter().map(|p| p.numbers().to_vec()).collect()
}
