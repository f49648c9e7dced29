//! Policies for driving the maze environment.
use crate::{Dir, GridPos, MazeAct, MazeEnv};
use gridrl_core::{Configurable, Policy};
use serde::{Deserialize, Serialize};

/// Configuration of [`MazeRandomPolicy`].
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MazeRandomPolicyConfig {}

/// A uniformly random policy over the four directions.
///
/// Randomness comes from the global [`fastrand`] generator; seed it with
/// [`fastrand::seed`] for reproducible runs.
pub struct MazeRandomPolicy {}

impl Policy<MazeEnv> for MazeRandomPolicy {
    fn sample(&mut self, _: &GridPos) -> MazeAct {
        Dir::ALL[fastrand::usize(..Dir::ALL.len())].into()
    }
}

impl Configurable<MazeEnv> for MazeRandomPolicy {
    type Config = MazeRandomPolicyConfig;

    fn build(_config: Self::Config) -> Self {
        Self {}
    }
}

#[cfg(test)]
mod tests {
    use super::{MazeRandomPolicy, MazeRandomPolicyConfig};
    use crate::MazeEnv;
    use gridrl_core::Configurable;
    use std::{fs::File, io::Write};
    use tempdir::TempDir;

    #[test]
    fn test_build_from_yaml() {
        let dir = TempDir::new("maze_policy").unwrap();
        let path = dir.path().join("policy.yaml");
        let yaml = serde_yaml::to_string(&MazeRandomPolicyConfig::default()).unwrap();
        File::create(&path)
            .unwrap()
            .write_all(yaml.as_bytes())
            .unwrap();

        let _ = <MazeRandomPolicy as Configurable<MazeEnv>>::build_from_path(&path).unwrap();
    }
}
