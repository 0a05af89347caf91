//! Request and output types for the JavaScript frontend.
//!
//! A request carries the cloud center and the tag sizes in display order.
//! The output lists placed tags with their bounds plus the indices of tags
//! that did not fit. Tags that cannot be placed are skipped and the run
//! continues with the next one.

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::error::RequestError;
use crate::geometry::{PointI, RectF, SizeF};
use crate::layout::{CircularCloudLayout, LayoutConfig};

#[derive(Debug, Clone, Deserialize)]
pub struct CloudRequest {
    pub center: PointI,
    pub tags: Vec<SizeF>,
    #[serde(default)]
    pub config: LayoutConfig,
}

/// A placed tag ready for the renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TagOutput {
    /// Position of the tag in the request.
    pub index: usize,
    pub bounds: RectF,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub message: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CloudOutput {
    pub radius: f64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub placed: Vec<TagOutput>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rejected: Vec<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounds: Option<RectF>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorInfo>,
}

impl CloudOutput {
    pub fn from_error(err: &RequestError) -> Self {
        Self {
            error: Some(ErrorInfo { message: err.to_string() }),
            ..Self::default()
        }
    }
}

pub fn build_cloud(request: &str) -> Result<CloudOutput, RequestError> {
    let req: CloudRequest = serde_json::from_str(request)?;
    let spiral = req.config.spiral.build();
    let mut layout = CircularCloudLayout::with_config(req.center, spiral, &req.config)?;

    let mut output = CloudOutput {
        radius: layout.radius(),
        ..CloudOutput::default()
    };
    for (index, size) in req.tags.iter().enumerate() {
        match layout.put_next_rectangle(*size)? {
            Ok(bounds) => output.placed.push(TagOutput { index, bounds }),
            Err(failure) => {
                warn!("tag #{} ({}x{}) skipped: {}", index, size.w, size.h, failure);
                output.rejected.push(index);
            }
        }
    }
    output.bounds = layout.bounds();

    info!(
        "cloud around ({}, {}): {} placed, {} rejected",
        req.center.x,
        req.center.y,
        output.placed.len(),
        output.rejected.len()
    );
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_build_cloud_places_and_rejects() {
        let req = r#"{
            "center": {"x": 5, "y": 5},
            "tags": [{"w": 2, "h": 2}, {"w": 2, "h": 2}, {"w": 100, "h": 100}]
        }"#;
        let out = build_cloud(req).unwrap();
        assert_eq!(out.radius, 5.0);
        assert_eq!(out.placed.len(), 2);
        assert_eq!(out.placed[0], TagOutput { index: 0, bounds: RectF { x: 4.0, y: 4.0, w: 2.0, h: 2.0 } });
        assert_eq!(out.placed[1].index, 1);
        assert_eq!(out.rejected, vec![2]);
        assert!(out.bounds.is_some());
    }

    #[test]
    fn test_invalid_center_is_an_error() {
        let err = build_cloud(r#"{"center": {"x": 0, "y": 5}, "tags": []}"#).unwrap_err();
        assert!(matches!(err, RequestError::Layout(_)));
    }

    #[test]
    fn test_invalid_size_is_an_error() {
        let err = build_cloud(r#"{"center": {"x": 9, "y": 9}, "tags": [{"w": 1, "h": -1}]}"#).unwrap_err();
        assert!(err.to_string().contains("zero or less"));
    }

    #[test]
    fn test_malformed_json() {
        let err = build_cloud("{\"center\": ").unwrap_err();
        assert!(matches!(err, RequestError::Malformed(_)));
    }

    #[test]
    fn test_error_output_shape() {
        let err = build_cloud("[]").unwrap_err();
        let json = serde_json::to_value(CloudOutput::from_error(&err)).unwrap();
        assert!(json["error"]["message"].as_str().unwrap().starts_with("malformed request"));
        assert_eq!(json.get("placed"), None::<&Value>);
    }

    #[test]
    fn test_config_is_honoured() {
        let req = r#"{
            "center": {"x": 40, "y": 40},
            "tags": [{"w": 4, "h": 2}, {"w": 4, "h": 2}, {"w": 4, "h": 2}],
            "config": {"grid_cell_size": 4, "spiral": {"arm_spacing": 2.0}}
        }"#;
        let out = build_cloud(req).unwrap();
        assert_eq!(out.placed.len(), 3);
        assert!(out.rejected.is_empty());
    }
}
