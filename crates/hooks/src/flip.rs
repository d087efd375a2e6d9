//! Polygon mirroring
//!
//! Point lists are flat `[x0, y0, x1, y1, ...]` pairs relative to the
//! drawing's shape box. Mirroring along an axis maps each coordinate `c` on
//! that axis to `|extent| - c`, where the extent is the shape width for
//! horizontal flips and the height for vertical ones.

use drawflags_core::{is_falsy, Payload};
use drawflags_engine::number_value;
use serde_json::{json, Value};
use tracing::debug;

/// Host shape type code for polygons
pub const POLYGON_SHAPE: &str = "p";

/// Direction of a mirror
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlipAxis {
    /// Mirror left to right: x coordinates against the shape width
    Horizontal,
    /// Mirror top to bottom: y coordinates against the shape height
    Vertical,
}

impl FlipAxis {
    /// Offset of this axis inside an `[x, y]` pair
    fn offset(self) -> usize {
        match self {
            FlipAxis::Horizontal => 0,
            FlipAxis::Vertical => 1,
        }
    }

    /// Shape key holding the extent along this axis
    fn extent_key(self) -> &'static str {
        match self {
            FlipAxis::Horizontal => "width",
            FlipAxis::Vertical => "height",
        }
    }
}

/// Mirror a polygon drawing's points
///
/// `document` is the drawing's data. Returns the update to apply,
/// `{"shape": {"points": [...]}}`, or `None` when the drawing cannot be
/// flipped:
/// - it is locked
/// - its shape is not a polygon
/// - the shape has no numeric extent on the axis, or its points are not an
///   array of numbers
pub fn flip_points(document: &Payload, axis: FlipAxis) -> Option<Payload> {
    if document.get("locked").map_or(false, |locked| !is_falsy(locked)) {
        debug!(target: "drawflags::hooks", ?axis, "drawing is locked, not flipping");
        return None;
    }

    let shape = document.get("shape")?;
    if shape.get("type").and_then(Value::as_str) != Some(POLYGON_SHAPE) {
        return None;
    }
    let extent = shape.get(axis.extent_key())?.as_f64()?.abs();
    let points = shape.get("points")?.as_array()?;

    let flipped = points
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let coord = point.as_f64()?;
            Some(if i % 2 == axis.offset() {
                number_value(extent - coord)
            } else {
                point.clone()
            })
        })
        .collect::<Option<Vec<Value>>>()?;

    Some(Payload::from_value(json!({ "shape": { "points": flipped } })))
}
