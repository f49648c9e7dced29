//! Grid-world maze environment.
mod config;
use crate::{Dir, GridPos, MazeAct};
use anyhow::Result;
pub use config::MazeEnvConfig;
use gridrl_core::{
    record::{Record, RecordValue},
    Env, Info, Obs, Step,
};
use log::{info, trace};

/// The origin cell where every episode starts.
const ORIGIN: GridPos = GridPos { row: 0, col: 0 };

/// Information given at every step of the interaction with the environment.
///
/// Currently, it is empty and used to match the type signature.
pub struct MazeInfo {}

impl Info for MazeInfo {}

/// A grid-world maze environment.
///
/// The agent starts at the origin `(0, 0)`. A step moves the agent one
/// cell in the given direction unless the move would leave the grid, in
/// which case the position is unchanged. Reward and termination depend on
/// the post-transition cell only: the goal gives `+1`, a hazard gives
/// `-1`, both end the episode; every other cell gives `0`.
#[derive(Debug)]
pub struct MazeEnv {
    height: usize,

    width: usize,

    goal: GridPos,

    hazards: Vec<GridPos>,

    /// The agent's current cell, mutated only in [`MazeEnv::step`].
    pos: GridPos,

    count_steps: usize,

    max_steps: Option<usize>,
}

impl MazeEnv {
    /// Returns the agent's current position.
    ///
    /// A renderer may use this, together with the accessors of the grid
    /// layout, to draw the state after each step. This crate itself does
    /// no rendering.
    pub fn pos(&self) -> GridPos {
        self.pos
    }

    /// Returns the grid height.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the grid width.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the goal cell.
    pub fn goal(&self) -> GridPos {
        self.goal
    }

    /// Returns the hazard cells.
    pub fn hazards(&self) -> &[GridPos] {
        &self.hazards
    }

    /// Applies a move to a position, clamped at the grid boundary.
    fn apply(&self, pos: GridPos, dir: Dir) -> GridPos {
        let GridPos { mut row, mut col } = pos;
        match dir {
            Dir::Up => {
                if row > 0 {
                    row -= 1
                }
            }
            Dir::Down => {
                if row < self.height - 1 {
                    row += 1
                }
            }
            Dir::Right => {
                if col < self.width - 1 {
                    col += 1
                }
            }
            Dir::Left => {
                if col > 0 {
                    col -= 1
                }
            }
        }
        GridPos::new(row, col)
    }

    /// Reward and termination flag of entering a cell.
    fn outcome(&self, pos: &GridPos) -> (f32, i8) {
        if *pos == self.goal {
            (1.0, 1)
        } else if self.hazards.contains(pos) {
            (-1.0, 1)
        } else {
            (0.0, 0)
        }
    }
}

impl Env for MazeEnv {
    type Config = MazeEnvConfig;
    type Obs = GridPos;
    type Act = MazeAct;
    type Info = MazeInfo;

    /// Constructs [`MazeEnv`].
    ///
    /// The environment is deterministic, so `seed` is ignored; it is
    /// accepted for interface compatibility.
    fn build(config: &Self::Config, _seed: i64) -> Result<Self> {
        config.validate()?;

        info!(
            "MazeEnv: {}x{} grid, goal {}, {} hazard(s)",
            config.height,
            config.width,
            config.goal,
            config.hazards.len()
        );

        Ok(Self {
            height: config.height,
            width: config.width,
            goal: config.goal,
            hazards: config.hazards.clone(),
            pos: ORIGIN,
            count_steps: 0,
            max_steps: config.max_steps,
        })
    }

    /// Resets the environment, placing the agent at the origin.
    ///
    /// In this environment, the length of `is_done` is assumed to be 1.
    fn reset(&mut self, is_done: Option<&Vec<i8>>) -> Result<GridPos> {
        trace!("MazeEnv::reset()");

        let reset = match is_done {
            None => true,
            Some(v) => {
                debug_assert_eq!(v.len(), 1);
                v[0] != 0
            }
        };

        if reset {
            self.pos = ORIGIN;
            self.count_steps = 0;
        }

        Ok(self.pos)
    }

    /// Resets the environment with the given index.
    ///
    /// The initial state is fixed at the origin, so the index is not used.
    fn reset_with_index(&mut self, _ix: usize) -> Result<GridPos> {
        self.reset(None)
    }

    /// Runs a step of the environment's dynamics.
    ///
    /// The returned [`Record`] holds the post-transition position under the
    /// key `obs` and the action under the key `act`.
    fn step(&mut self, a: &MazeAct) -> (Step<Self>, Record) {
        trace!("MazeEnv::step()");

        let pos = self.apply(self.pos, a.dir);
        let (reward, is_terminated) = self.outcome(&pos);
        self.pos = pos;

        self.count_steps += 1;
        let mut is_truncated = 0;
        if let Some(max_steps) = self.max_steps {
            if self.count_steps >= max_steps {
                is_truncated = 1;
                self.count_steps = 0;
            }
        }

        let record = Record::from_slice(&[
            (
                "obs",
                RecordValue::Array1(vec![pos.row as f32, pos.col as f32]),
            ),
            ("act", RecordValue::Scalar(a.dir.index() as f32)),
        ]);
        let step = Step::new(
            pos,
            a.clone(),
            vec![reward],
            vec![is_terminated],
            vec![is_truncated],
            MazeInfo {},
            GridPos::dummy(1),
        );

        (step, record)
    }

    /// Currently it supports non-vectorized environment.
    fn step_with_reset(&mut self, a: &Self::Act) -> (Step<Self>, Record) {
        let (step, record) = self.step(a);
        let step = if step.is_done() {
            let init_obs = self.reset(None).unwrap();
            Step { init_obs, ..step }
        } else {
            step
        };

        (step, record)
    }
}

#[cfg(test)]
mod tests {
    use super::{MazeEnv, MazeEnvConfig};
    use crate::{Dir, GridPos};
    use gridrl_core::Env;

    fn env() -> MazeEnv {
        MazeEnv::build(&MazeEnvConfig::default(), 0).unwrap()
    }

    #[test]
    fn test_clamp_at_origin() {
        let mut env = env();
        env.reset(None).unwrap();

        for dir in [Dir::Up, Dir::Left].iter() {
            let (step, _) = env.step(&(*dir).into());
            assert_eq!(step.obs, GridPos::new(0, 0));
            assert_eq!(step.reward[0], 0.0);
            assert!(!step.is_done());
        }
    }

    #[test]
    fn test_clamp_at_far_corner() {
        let mut env = env();
        env.reset(None).unwrap();

        // Walk to (3, 3) along the boundary, avoiding the terminal cells.
        for dir in [Dir::Right, Dir::Right, Dir::Right, Dir::Down, Dir::Down, Dir::Down].iter() {
            let (step, _) = env.step(&(*dir).into());
            assert!(!step.is_done());
        }
        assert_eq!(env.pos(), GridPos::new(3, 3));

        for dir in [Dir::Down, Dir::Right].iter() {
            let (step, _) = env.step(&(*dir).into());
            assert_eq!(step.obs, GridPos::new(3, 3));
        }
    }

    #[test]
    fn test_reward_of_terminal_cells() {
        let env = env();
        assert_eq!(env.outcome(&GridPos::new(2, 2)), (1.0, 1));
        assert_eq!(env.outcome(&GridPos::new(1, 2)), (-1.0, 1));
        assert_eq!(env.outcome(&GridPos::new(2, 1)), (-1.0, 1));
        assert_eq!(env.outcome(&GridPos::new(0, 0)), (0.0, 0));
    }

    #[test]
    fn test_truncation() {
        let config = MazeEnvConfig::default().max_steps(Some(3));
        let mut env = MazeEnv::build(&config, 0).unwrap();
        env.reset(None).unwrap();

        // Stays at the origin, so the episode can only end by truncation.
        for _ in 0..2 {
            let (step, _) = env.step(&Dir::Up.into());
            assert!(!step.is_done());
        }
        let (step, _) = env.step(&Dir::Up.into());
        assert_eq!(step.is_truncated[0], 1);
        assert_eq!(step.is_terminated[0], 0);
        assert_eq!(step.reward[0], 0.0);
    }

    #[test]
    fn test_step_with_reset() {
        let mut env = env();
        env.reset(None).unwrap();

        for dir in [Dir::Down, Dir::Down, Dir::Right].iter() {
            let (step, _) = env.step_with_reset(&(*dir).into());
            if step.is_done() {
                // Hazard (2, 1) was entered; the env is back at the origin.
                assert_eq!(step.obs, GridPos::new(2, 1));
                assert_eq!(step.init_obs, GridPos::new(0, 0));
                assert_eq!(env.pos(), GridPos::new(0, 0));
            }
        }
    }
}
