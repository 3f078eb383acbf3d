//! Error taxonomy for a mapreduce run.
//!
//! Allocation failure is handled by the global allocator aborting the
//! process, and a contract violation on `get_next` is handled defensively
//! (see `reduce::GetNext`) rather than surfaced as an error, so neither
//! gets a dedicated variant here.

use thiserror::Error;

/// An error surfaced from a single `run`/`run_with_partitioner` call.
#[derive(Error, Debug)]
pub enum MRError {
    /// `mappers == 0` or `reducers == 0` was passed to `run`.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The user's map or reduce callback returned an error. Only the first
    /// error observed within a stage is kept; the rest are logged and
    /// discarded.
    #[error("user callback failed: {0}")]
    UserCallbackFailure(String),
}
