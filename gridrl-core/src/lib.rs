#![warn(missing_docs)]
//! Core interfaces for driving reinforcement-learning environments.
//!
//! This crate defines the contract between an environment and whatever
//! drives it: the [`Env`] trait with its `reset`/`step` cycle, the
//! [`Policy`] trait supplying actions, the [`Step`] object emitted at
//! every interaction step, and a [`record`](crate::record) module for
//! collecting per-step data during evaluation runs.
//!
//! The learning algorithm itself is out of scope; an agent plugs in at
//! the [`Policy`] seam.
pub mod error;
pub mod record;
pub mod util;

mod base;
pub use base::{Act, Configurable, Env, Info, Obs, Policy, Step};

mod evaluator;
pub use evaluator::{DefaultEvaluator, Evaluator};
