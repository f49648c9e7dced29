use crate::MazeEnvError;
use gridrl_core::Act;
use serde::{Deserialize, Serialize};
use std::{convert::TryFrom, fmt};

/// Direction of a move on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Dir {
    /// Decrease the row index.
    Up,

    /// Increase the row index.
    Down,

    /// Increase the column index.
    Right,

    /// Decrease the column index.
    Left,
}

impl Dir {
    /// All directions, ordered by their integer encoding.
    pub const ALL: [Dir; 4] = [Dir::Up, Dir::Down, Dir::Right, Dir::Left];

    /// Integer encoding of the direction.
    pub fn index(&self) -> i64 {
        match self {
            Dir::Up => 0,
            Dir::Down => 1,
            Dir::Right => 2,
            Dir::Left => 3,
        }
    }
}

impl TryFrom<i64> for Dir {
    type Error = MazeEnvError;

    /// Decodes an integer action: 0 is up, 1 is down, 2 is right, 3 is left.
    ///
    /// Any other value is rejected with [`MazeEnvError::InvalidAction`].
    fn try_from(ix: i64) -> Result<Self, Self::Error> {
        match ix {
            0 => Ok(Dir::Up),
            1 => Ok(Dir::Down),
            2 => Ok(Dir::Right),
            3 => Ok(Dir::Left),
            _ => Err(MazeEnvError::InvalidAction(ix)),
        }
    }
}

/// Represents action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MazeAct {
    /// Direction of the move.
    pub dir: Dir,
}

impl MazeAct {
    /// Constructs an action from a direction.
    pub fn new(dir: Dir) -> Self {
        Self { dir }
    }

    /// Constructs an action from its integer encoding.
    ///
    /// This is the boundary where untyped action values enter the system;
    /// values outside `0..=3` are rejected.
    pub fn from_index(ix: i64) -> Result<Self, MazeEnvError> {
        Ok(Self {
            dir: Dir::try_from(ix)?,
        })
    }
}

impl From<Dir> for MazeAct {
    fn from(dir: Dir) -> Self {
        Self { dir }
    }
}

impl fmt::Display for MazeAct {
    /// Formats the action as its integer encoding.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.dir.index())
    }
}

impl Act for MazeAct {
    fn len(&self) -> usize {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::{Dir, MazeAct};

    #[test]
    fn test_decode() {
        for dir in Dir::ALL.iter() {
            assert_eq!(MazeAct::from_index(dir.index()).unwrap().dir, *dir);
        }
        assert!(MazeAct::from_index(4).is_err());
        assert!(MazeAct::from_index(-1).is_err());
    }
}
