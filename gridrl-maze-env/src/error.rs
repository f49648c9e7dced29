//! Errors of the maze environment.
use thiserror::Error;

/// Errors of the maze environment.
#[derive(Error, Debug)]
pub enum MazeEnvError {
    /// Action value outside the four recognized directions.
    #[error("Invalid action value: {0}")]
    InvalidAction(i64),

    /// Goal or hazard cells inconsistent with the grid.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}
