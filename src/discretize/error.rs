//! Error types for the discretizer.

use thiserror::Error;

use crate::frame::FrameError;

/// Errors raised while building or applying a discretizer.
#[derive(Debug, Error)]
pub enum DiscretizeError {
    /// `build` was called with no rows; there is nothing to partition.
    #[error("cannot discretize an empty row set")]
    EmptyInput,

    /// Reading an attribute failed, typically a non-numeric value in the
    /// column being discretized.
    #[error(transparent)]
    Frame(#[from] FrameError),
}
