use anyhow::Result;
use gridrl_core::{
    record::{BufferedRecorder, Record},
    util, Configurable as _, Env as _,
};
use gridrl_maze_env::{MazeEnv, MazeEnvConfig, MazeRandomPolicy, MazeRandomPolicyConfig};
use serde::Serialize;
use std::{convert::TryFrom, fs::File};

#[derive(Debug, Serialize)]
struct MazeRecord {
    episode: usize,
    step: usize,
    reward: f32,
    obs: Vec<f64>,
}

impl TryFrom<&Record> for MazeRecord {
    type Error = anyhow::Error;

    fn try_from(record: &Record) -> Result<Self> {
        Ok(Self {
            episode: record.get_scalar("episode")? as _,
            step: record.get_scalar("step")? as _,
            reward: record.get_scalar("reward")?,
            obs: record
                .get_array1("obs")?
                .iter()
                .map(|v| *v as f64)
                .collect(),
        })
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    fastrand::seed(42);

    let env_config = MazeEnvConfig::default();
    let mut env = MazeEnv::build(&env_config, 0)?;
    let mut recorder = BufferedRecorder::new();
    let mut policy = MazeRandomPolicy::build(MazeRandomPolicyConfig::default());

    let _ = util::eval_with_recorder(&mut env, &mut policy, 5, &mut recorder)?;

    // Vec<_> field in a struct does not support writing a header in csv crate, so disable it.
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(File::create("gridrl-maze-env/examples/eval_maze.csv")?);
    for record in recorder.iter() {
        wtr.serialize(MazeRecord::try_from(record)?)?;
    }

    Ok(())
}
