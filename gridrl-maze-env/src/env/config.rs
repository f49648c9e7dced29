//! Configuration of the maze environment.
use crate::{GridPos, MazeEnvError};
use serde::{Deserialize, Serialize};

/// Configuration of [`MazeEnv`](super::MazeEnv).
///
/// The default configuration is a 4x4 grid with the goal at `(2, 2)` and
/// hazards at `(1, 2)` and `(2, 1)`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MazeEnvConfig {
    pub(super) height: usize,
    pub(super) width: usize,
    pub(super) goal: GridPos,
    pub(super) hazards: Vec<GridPos>,
    pub(super) max_steps: Option<usize>,
}

impl Default for MazeEnvConfig {
    fn default() -> Self {
        Self {
            height: 4,
            width: 4,
            goal: GridPos::new(2, 2),
            hazards: vec![GridPos::new(1, 2), GridPos::new(2, 1)],
            max_steps: None,
        }
    }
}

impl MazeEnvConfig {
    /// Sets the grid height.
    pub fn height(mut self, v: usize) -> Self {
        self.height = v;
        self
    }

    /// Sets the grid width.
    pub fn width(mut self, v: usize) -> Self {
        self.width = v;
        self
    }

    /// Sets the goal cell.
    pub fn goal(mut self, v: GridPos) -> Self {
        self.goal = v;
        self
    }

    /// Sets the hazard cells.
    pub fn hazards(mut self, v: Vec<GridPos>) -> Self {
        self.hazards = v;
        self
    }

    /// Sets the maximum number of steps in an episode.
    ///
    /// When set, an episode is truncated after that many steps.
    pub fn max_steps(mut self, v: Option<usize>) -> Self {
        self.max_steps = v;
        self
    }

    /// Checks that the grid is non-empty, the goal and hazards lie within
    /// grid bounds, and the goal does not overlap a hazard.
    pub(super) fn validate(&self) -> Result<(), MazeEnvError> {
        if self.height == 0 || self.width == 0 {
            return Err(MazeEnvError::InvalidConfiguration(format!(
                "grid of size {}x{} has no cells",
                self.height, self.width
            )));
        }

        let in_bounds = |p: &GridPos| p.row < self.height && p.col < self.width;

        if !in_bounds(&self.goal) {
            return Err(MazeEnvError::InvalidConfiguration(format!(
                "goal {} is outside the {}x{} grid",
                self.goal, self.height, self.width
            )));
        }

        for hazard in self.hazards.iter() {
            if !in_bounds(hazard) {
                return Err(MazeEnvError::InvalidConfiguration(format!(
                    "hazard {} is outside the {}x{} grid",
                    hazard, self.height, self.width
                )));
            }
            if *hazard == self.goal {
                return Err(MazeEnvError::InvalidConfiguration(format!(
                    "hazard {} overlaps the goal",
                    hazard
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::MazeEnvConfig;
    use crate::GridPos;

    #[test]
    fn test_default_config_is_valid() {
        assert!(MazeEnvConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_empty_grid() {
        assert!(MazeEnvConfig::default().height(0).validate().is_err());
    }

    #[test]
    fn test_rejects_goal_out_of_bounds() {
        let config = MazeEnvConfig::default().goal(GridPos::new(4, 0));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_hazard_out_of_bounds() {
        let config = MazeEnvConfig::default().hazards(vec![GridPos::new(0, 9)]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_hazard_on_goal() {
        let config = MazeEnvConfig::default().hazards(vec![GridPos::new(2, 2)]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_yaml_round_trip() {
        let config = MazeEnvConfig::default().max_steps(Some(100));
        let yaml = serde_yaml::to_string(&config).unwrap();
        let config2: MazeEnvConfig = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(config, config2);
    }
}
