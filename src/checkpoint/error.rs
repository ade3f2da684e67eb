//! Checkpoint error types.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors that can occur while saving or loading a checkpoint
#[derive(Debug, Error)]
pub enum CheckpointError {
    /// Writing the checkpoint in `format` (json or bincode) failed
    #[error("failed to encode checkpoint as {format}: {message}")]
    Encode {
        format: &'static str,
        message: String,
    },

    /// Reading a `format` checkpoint failed
    #[error("failed to decode {format} checkpoint: {message}")]
    Decode {
        format: &'static str,
        message: String,
    },

    #[error("unsupported checkpoint version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// Stacks were edited after capture
    #[error("checkpoint holds {actual} elements but its metadata records {recorded}")]
    ElementCountMismatch { actual: usize, recorded: usize },

    /// The recorded `solved` flag disagrees with the stacks
    #[error("checkpoint records solved = {recorded} but its stacks say {actual}")]
    SolvedFlagMismatch { recorded: bool, actual: bool },

    #[error("checkpoint updated at {updated_at} before it was created at {created_at}")]
    TimestampsOutOfOrder {
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    },
}
