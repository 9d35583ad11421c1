use crate::consts::{GRID_CELLS, GRID_SIDE};
use crate::error::{LottoError, LtResult};
use serde::{Deserialize, Serialize};

/// Which of the 16 cells accept input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibilityMask {
    cells: [bool; GRID_CELLS],
}

impl VisibilityMask {
    /// Corners plus the inner 2x2 block:
    ///
    /// ```text
    /// x _ _ x
    /// _ x x _
    /// _ x x _
    /// x _ _ x
    /// ```
    pub fn reference() -> Self {
        Self::from_rows([
            [true, false, false, true],
            [false, true, true, false],
            [false, true, true, false],
            [true, false, false, true],
        ])
    }

    pub fn from_rows(rows: [[bool; GRID_SIDE]; GRID_SIDE]) -> Self {
        let mut cells = [false; GRID_CELLS];
        for (r, row) in rows.iter().enumerate() {
            for (c, &visible) in row.iter().enumerate() {
                cells[r * GRID_SIDE + c] = visible;
            }
        }
        Self { cells }
    }

    #[inline(always)]
    pub fn is_visible(&self, index: usize) -> bool {
        index < GRID_CELLS && self.cells[index]
    }

    pub fn visible_indices(&self) -> impl Iterator<Item = usize> + '_ {
        (0..GRID_CELLS).filter(move |&i| self.cells[i])
    }

    pub fn visible_count(&self) -> usize {
        self.cells.iter().filter(|&&v| v).count()
    }
}

impl Default for VisibilityMask {
    fn default() -> Self {
        Self::reference()
    }
}

/// The 4x4 digit matrix. Hidden cells are always empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    cells: [Option<u8>; GRID_CELLS],
    #[serde(default)]
    mask: VisibilityMask,
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(VisibilityMask::reference())
    }
}

impl Grid {
    pub fn new(mask: VisibilityMask) -> Self {
        Self {
            cells: [None; GRID_CELLS],
            mask,
        }
    }

    /// Builds a grid from a 16-char row-major string. Digits fill a cell,
    /// `.`, `_` or a space leave it empty. Every digit goes through the same
    /// validation as interactive input.
    pub fn from_pattern(pattern: &str, mask: VisibilityMask) -> LtResult<Self> {
        let chars: Vec<char> = pattern.chars().filter(|c| *c != '\n').collect();
        if chars.len() != GRID_CELLS {
            return Err(LottoError::Validation(format!(
                "Grid pattern needs {} cells, got {}",
                GRID_CELLS,
                chars.len()
            )));
        }

        let mut grid = Self::new(mask);
        for (i, c) in chars.into_iter().enumerate() {
            match c {
                '.' | '_' | ' ' => {}
                d => {
                    let mut buf = [0; 4];
                    grid.set_cell(i, d.encode_utf8(&mut buf))?;
                }
            }
        }
        Ok(grid)
    }

    pub fn mask(&self) -> &VisibilityMask {
        &self.mask
    }

    /// Digit held by a visible cell. Hidden cells always read as empty.
    pub fn digit(&self, index: usize) -> Option<u8> {
        if self.mask.is_visible(index) {
            self.cells[index]
        } else {
            None
        }
    }

    /// Applies raw user input to a cell. An empty string clears the cell.
    ///
    /// Rejections leave the grid untouched:
    /// * index outside the grid or hidden by the mask
    /// * anything other than one decimal digit
    /// * a digit already held by another visible cell
    pub fn set_cell(&mut self, index: usize, input: &str) -> LtResult<()> {
        self.check_index(index)?;

        let trimmed = input.trim();
        if trimmed.is_empty() {
            self.cells[index] = None;
            return Ok(());
        }

        let mut chars = trimmed.chars();
        let digit = match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_digit() => c as u8 - b'0',
            _ => {
                return Err(LottoError::InvalidDigit {
                    index,
                    input: input.to_string(),
                })
            }
        };

        self.place(index, digit)
    }

    pub fn place(&mut self, index: usize, digit: u8) -> LtResult<()> {
        self.check_index(index)?;
        if digit > 9 {
            return Err(LottoError::InvalidDigit {
                index,
                input: digit.to_string(),
            });
        }

        let taken = self
            .mask
            .visible_indices()
            .any(|i| i != index && self.cells[i] == Some(digit));
        if taken {
            return Err(LottoError::DuplicateDigit { digit });
        }

        self.cells[index] = Some(digit);
        Ok(())
    }

    pub fn clear_cell(&mut self, index: usize) -> LtResult<()> {
        self.set_cell(index, "")
    }

    pub fn clear(&mut self) {
        self.cells = [None; GRID_CELLS];
    }

    pub fn filled_count(&self) -> usize {
        self.mask
            .visible_indices()
            .filter(|&i| self.cells[i].is_some())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.filled_count() == 0
    }

    /// Row-major view for rendering; `None` for empty and hidden cells.
    pub fn rows(&self) -> [[Option<u8>; GRID_SIDE]; GRID_SIDE] {
        let mut rows = [[None; GRID_SIDE]; GRID_SIDE];
        for (i, slot) in rows.iter_mut().flatten().enumerate() {
            *slot = self.digit(i);
        }
        rows
    }

    /// Drops anything stored under hidden cells or repeated digits, which can
    /// only come from a hand-edited snapshot.
    pub fn sanitized(mut self) -> Self {
        let mut seen = [false; 10];
        for i in 0..GRID_CELLS {
            match self.cells[i] {
                Some(d) if self.mask.is_visible(i) && d <= 9 && !seen[d as usize] => {
                    seen[d as usize] = true;
                }
                Some(_) => self.cells[i] = None,
                None => {}
            }
        }
        self
    }

    fn check_index(&self, index: usize) -> LtResult<()> {
        if index >= GRID_CELLS {
            return Err(LottoError::CellOutOfRange(index));
        }
        if !self.mask.is_visible(index) {
            return Err(LottoError::HiddenCell(index));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_mask_layout() {
        let mask = VisibilityMask::reference();
        let visible: Vec<usize> = mask.visible_indices().collect();
        assert_eq!(visible, vec![0, 3, 5, 6, 9, 10, 12, 15]);
        assert_eq!(mask.visible_count(), 8);
        assert!(!mask.is_visible(16));
    }

    #[test]
    fn test_set_and_clear_cell() {
        let mut grid = Grid::default();
        grid.set_cell(5, "7").unwrap();
        assert_eq!(grid.digit(5), Some(7));
        grid.set_cell(5, "").unwrap();
        assert_eq!(grid.digit(5), None);
        assert!(grid.is_empty());
    }

    #[test]
    fn test_rejections_do_not_mutate() {
        let mut grid = Grid::default();
        grid.set_cell(0, "4").unwrap();
        let before = grid.clone();

        assert!(matches!(grid.set_cell(3, "4"), Err(LottoError::DuplicateDigit { digit: 4 })));
        assert!(matches!(grid.set_cell(3, "12"), Err(LottoError::InvalidDigit { .. })));
        assert!(matches!(grid.set_cell(3, "a"), Err(LottoError::InvalidDigit { .. })));
        assert!(matches!(grid.set_cell(1, "2"), Err(LottoError::HiddenCell(1))));
        assert!(matches!(grid.set_cell(16, "2"), Err(LottoError::CellOutOfRange(16))));
        assert_eq!(grid, before);
    }

    #[test]
    fn test_rewriting_same_cell_with_same_digit_is_allowed() {
        let mut grid = Grid::default();
        grid.set_cell(9, "3").unwrap();
        assert!(grid.set_cell(9, "3").is_ok());
        assert_eq!(grid.filled_count(), 1);
    }

    #[test]
    fn test_from_pattern() {
        let grid = Grid::from_pattern("1..2.34..56.7..8", VisibilityMask::reference()).unwrap();
        assert_eq!(grid.filled_count(), 8);
        assert_eq!(grid.digit(15), Some(8));
        assert_eq!(grid.rows()[1], [None, Some(3), Some(4), None]);

        assert!(Grid::from_pattern("1..2", VisibilityMask::reference()).is_err());
        // digit in a hidden cell
        assert!(Grid::from_pattern(".1..............", VisibilityMask::reference()).is_err());
    }

    #[test]
    fn test_sanitized_drops_hidden_and_duplicate_cells() {
        let raw = r#"{"cells":[1,2,null,1,null,3,null,null,null,null,null,null,null,null,null,null]}"#;
        let grid: Grid = serde_json::from_str(raw).unwrap();
        let clean = grid.sanitized();
        assert_eq!(clean.digit(0), Some(1));
        assert_eq!(clean.digit(3), None);
        assert_eq!(clean.digit(5), Some(3));
        assert_eq!(clean.filled_count(), 2);
    }
}
