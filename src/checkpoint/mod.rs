//! Checkpoint and resume for push_swap machines.
//!
//! A checkpoint captures both stacks and the full move log so a long solver
//! run can be persisted and picked up again. JSON is offered for readability
//! and bincode for compactness.

use crate::core::{is_ordered, MoveLog, PushSwap, Stack};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

pub mod error;

pub use error::CheckpointError;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Metadata recorded alongside a checkpoint
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MachineMetadata {
    /// When the checkpoint was first taken
    pub created_at: DateTime<Utc>,

    /// Last update time
    pub updated_at: DateTime<Utc>,

    /// Elements across both stacks. Never changes over a machine's lifetime.
    pub element_count: usize,

    /// Whether the captured machine was solved
    pub solved: bool,
}

/// Serializable snapshot of a machine.
///
/// # Example
///
/// ```rust
/// use pushswap::checkpoint::Checkpoint;
/// use pushswap::core::PushSwap;
///
/// let mut machine = PushSwap::new(&[3, 1, 2]);
/// machine.pb();
///
/// let json = Checkpoint::capture(&machine).to_json().unwrap();
/// let restored = Checkpoint::from_json(&json).unwrap().restore();
///
/// assert_eq!(restored, machine);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: String,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    /// Stack A, top first
    pub stack_a: Vec<i32>,

    /// Stack B, top first
    pub stack_b: Vec<i32>,

    /// Complete move log
    pub log: MoveLog,

    pub metadata: MachineMetadata,
}

impl Checkpoint {
    /// Snapshot the current state of `machine`.
    pub fn capture(machine: &PushSwap) -> Self {
        let now = Utc::now();
        let checkpoint = Self {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4().to_string(),
            timestamp: now,
            stack_a: machine.stack_a(),
            stack_b: machine.stack_b(),
            log: machine.log().clone(),
            metadata: MachineMetadata {
                created_at: now,
                updated_at: now,
                element_count: machine.len(),
                solved: machine.is_solved(),
            },
        };
        debug!(
            id = %checkpoint.id,
            moves = checkpoint.log.len(),
            "captured checkpoint"
        );
        checkpoint
    }

    /// Refresh this checkpoint from a later state of the same machine.
    ///
    /// Keeps the id and creation time.
    pub fn update(&mut self, machine: &PushSwap) {
        let now = Utc::now();
        self.timestamp = now;
        self.stack_a = machine.stack_a();
        self.stack_b = machine.stack_b();
        self.log = machine.log().clone();
        self.metadata.updated_at = now;
        self.metadata.element_count = machine.len();
        self.metadata.solved = machine.is_solved();
        debug!(id = %self.id, moves = self.log.len(), "updated checkpoint");
    }

    /// Check the version and that the stacks agree with the metadata.
    pub fn validate(&self) -> Result<(), CheckpointError> {
        if self.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            });
        }

        let actual = self.stack_a.len() + self.stack_b.len();
        if actual != self.metadata.element_count {
            return Err(CheckpointError::ElementCountMismatch {
                actual,
                recorded: self.metadata.element_count,
            });
        }

        let solved = self.stack_b.is_empty() && is_ordered(&self.stack_a);
        if solved != self.metadata.solved {
            return Err(CheckpointError::SolvedFlagMismatch {
                recorded: self.metadata.solved,
                actual: solved,
            });
        }

        if self.metadata.updated_at < self.metadata.created_at {
            return Err(CheckpointError::TimestampsOutOfOrder {
                created_at: self.metadata.created_at,
                updated_at: self.metadata.updated_at,
            });
        }

        Ok(())
    }

    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string_pretty(self).map_err(|e| CheckpointError::Encode {
            format: "json",
            message: e.to_string(),
        })
    }

    /// Deserialize and validate a JSON checkpoint.
    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        let checkpoint: Self =
            serde_json::from_str(json).map_err(|e| CheckpointError::Decode {
                format: "json",
                message: e.to_string(),
            })?;
        checkpoint.validate()?;
        Ok(checkpoint)
    }

    pub fn to_binary(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::Encode {
            format: "bincode",
            message: e.to_string(),
        })
    }

    /// Deserialize and validate a bincode checkpoint.
    pub fn from_binary(bytes: &[u8]) -> Result<Self, CheckpointError> {
        let checkpoint: Self = bincode::deserialize(bytes).map_err(|e| CheckpointError::Decode {
            format: "bincode",
            message: e.to_string(),
        })?;
        checkpoint.validate()?;
        Ok(checkpoint)
    }

    /// Rebuild a machine that continues recording from the captured log.
    pub fn restore(self) -> PushSwap {
        debug!(id = %self.id, moves = self.log.len(), "restoring checkpoint");
        PushSwap::from_parts(
            Stack::from_top_first(self.stack_a),
            Stack::from_top_first(self.stack_b),
            self.log,
        )
    }
}
