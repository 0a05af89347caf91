// Error types.
//
// Two channels are kept apart on purpose:
// - LayoutError: caller bugs (bad center, bad size). Fail fast, never retried.
// - PlacementFailure: the cloud has no room for a tag. Expected at runtime;
//   the caller decides whether to skip the tag, shrink it, or stop.

use thiserror::Error;

use crate::geometry::{PointI, SizeF};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    #[error("center point X is zero or less (got {0:?})")]
    CenterXNotPositive(PointI),
    #[error("center point Y is zero or less (got {0:?})")]
    CenterYNotPositive(PointI),
    #[error("tag size dimension is zero or less (got {}x{})", .0.w, .0.h)]
    InvalidSize(SizeF),
}

/// No valid position exists for a tag of this size.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("cannot be placed in layout")]
pub struct PlacementFailure {
    pub size: SizeF,
}

/// Errors from the JSON request surface.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("malformed request: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error(transparent)]
    Layout(#[from] LayoutError),
}
