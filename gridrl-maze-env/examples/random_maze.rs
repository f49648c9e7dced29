use anyhow::Result;
use gridrl_core::{Configurable as _, Env as _, Policy as _};
use gridrl_maze_env::{MazeEnv, MazeEnvConfig, MazeRandomPolicy, MazeRandomPolicyConfig};

const N_EPISODES: usize = 10;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    fastrand::seed(42);

    let env_config = MazeEnvConfig::default();
    let mut env = MazeEnv::build(&env_config, 0)?;
    let mut policy = MazeRandomPolicy::build(MazeRandomPolicyConfig::default());

    for episode in 0..N_EPISODES {
        let mut s = env.reset(None)?;

        loop {
            let a = policy.sample(&s);
            let (step, _) = env.step(&a);
            println!(
                "round:{} state:{} action:{} -> state':{}, reward:{}",
                episode, s, a, step.obs, step.reward[0]
            );
            s = step.obs;
            if step.is_done() {
                break;
            }
        }
    }

    Ok(())
}
