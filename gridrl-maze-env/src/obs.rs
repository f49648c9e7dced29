use gridrl_core::Obs;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A cell on the grid, used as the observation of [`MazeEnv`](crate::MazeEnv).
///
/// `(0, 0)` is the top-left corner; `row` grows downwards and `col` grows
/// to the right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPos {
    /// Row index, `0 <= row < height`.
    pub row: usize,

    /// Column index, `0 <= col < width`.
    pub col: usize,
}

impl GridPos {
    /// Constructs a grid position.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for GridPos {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for GridPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl Obs for GridPos {
    fn dummy(_n: usize) -> Self {
        Self::new(0, 0)
    }

    fn merge(self, obs_reset: Self, is_done: &[i8]) -> Self {
        debug_assert_eq!(is_done.len(), 1);
        if is_done[0] == 1 {
            obs_reset
        } else {
            self
        }
    }

    fn len(&self) -> usize {
        1
    }
}
