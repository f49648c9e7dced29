//! Types for recording per-step data of evaluation runs.
//!
//! A [`Record`] is a key-value container emitted by an environment at every
//! interaction step and possibly extended by the driving loop (see
//! [`eval_with_recorder`](crate::util::eval_with_recorder)). A [`Recorder`]
//! decides what happens to the records: [`BufferedRecorder`] keeps them in
//! memory for later inspection, [`NullRecorder`] discards them.
mod base;
mod buffered_recorder;
mod null_recorder;
mod recorder;

pub use base::{Record, RecordValue};
pub use buffered_recorder::BufferedRecorder;
pub use null_recorder::NullRecorder;
pub use recorder::Recorder;
