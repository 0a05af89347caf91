//! Circular tag-cloud layout.
//!
//! Packs word rectangles around a center point without overlap, inside the
//! circle of radius `min(center.x, center.y)`. Candidate positions come from
//! a [`SpiralSource`]; each accepted rectangle is then pulled toward the
//! center until it touches a neighbour or would cross the center line.

mod error;
mod geometry;
mod layout;
mod output;
mod spiral;
mod wasm;

pub use error::{LayoutError, PlacementFailure, RequestError};
pub use geometry::{PointF, PointI, RectF, SizeF, CIRCLE_EPSILON};
pub use layout::{CircularCloudLayout, LayoutConfig, Placement};
pub use output::{build_cloud, CloudOutput, CloudRequest, ErrorInfo, TagOutput};
pub use spiral::{ArchimedeanSpiral, SpiralConfig, SpiralSource};
pub use wasm::layout_cloud;
