#![warn(missing_docs)]
//! A grid-world maze environment for [`gridrl-core`](gridrl_core).
//!
//! The agent moves on a rectangular grid of cells. One cell is the goal
//! (reward `+1`), some cells are hazards (reward `-1`); entering either
//! ends the episode. Every other cell gives reward `0`. Moves that would
//! leave the grid are silently clamped, the position does not change.
//!
//! The environment is fully deterministic: given the current position and
//! an action, the next position, reward and termination flag follow from
//! the transition rule alone. Randomness, if any, belongs to the policy
//! driving the environment.
//!
//! Here is an example of running the default 4x4 maze with a random policy.
//!
//! ```
//! use anyhow::Result;
//! use gridrl_core::{Configurable as _, DefaultEvaluator, Evaluator as _};
//! use gridrl_maze_env::{MazeEnv, MazeEnvConfig, MazeRandomPolicy, MazeRandomPolicyConfig};
//!
//! fn main() -> Result<()> {
//!     fastrand::seed(42);
//!
//!     // The default configuration: 4x4 grid, goal at (2,2),
//!     // hazards at (1,2) and (2,1)
//!     let env_config = MazeEnvConfig::default();
//!
//!     // Creates a random policy
//!     let mut policy = MazeRandomPolicy::build(MazeRandomPolicyConfig::default());
//!
//!     // Runs evaluation
//!     let _ = DefaultEvaluator::<MazeEnv>::new(&env_config, 0, 5)?.evaluate(&mut policy)?;
//!
//!     Ok(())
//! }
//! ```
mod act;
mod env;
mod error;
mod obs;
mod policy;
pub use act::{Dir, MazeAct};
pub use env::{MazeEnv, MazeEnvConfig, MazeInfo};
pub use error::MazeEnvError;
pub use obs::GridPos;
pub use policy::{MazeRandomPolicy, MazeRandomPolicyConfig};
