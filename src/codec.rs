//! Descriptor codec: serializable snapshots of live shapes.
//!
//! A descriptor is a pure value with no identity; many descriptors may
//! round-trip to structurally identical shapes. The persisted board state
//! is an ordered JSON array of descriptors under one fixed key. Encoding
//! reads label text from the shape's overlay; decoding runs through
//! [`crate::engine::BoardCore::restore`], which rebuilds shapes via the
//! spawn path and then applies the persisted status and position verbatim.

#[cfg(test)]
#[path = "codec_test.rs"]
mod codec_test;

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_COLOR;
use crate::label::{LabelHost, LabelTable};
use crate::scene::{Shape, ShapeKind, TaskStatus};

/// Serializable snapshot of one shape.
///
/// `color`, `label`, and `status` fall back to defaults when absent from a
/// stored record; an unknown kind is a hard deserialization failure, never
/// silently defaulted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Descriptor {
    /// Shape kind, serialized under the wire name `type`.
    #[serde(rename = "type")]
    pub kind: ShapeKind,
    /// World x.
    pub x: f64,
    /// World y, trusted verbatim on restore (no re-stacking on load).
    pub y: f64,
    /// World z.
    pub z: f64,
    /// CSS-style color string.
    #[serde(default = "default_color")]
    pub color: String,
    /// Overlay text; empty when the shape has no overlay.
    #[serde(default)]
    pub label: String,
    /// Persisted zone status, applied without re-classification.
    #[serde(default)]
    pub status: TaskStatus,
}

fn default_color() -> String {
    DEFAULT_COLOR.to_string()
}

/// Snapshot `shape` into a descriptor.
///
/// Label text is read from the shape's overlay through the host; a shape
/// with no overlay (or a host that no longer knows the overlay) encodes an
/// empty label.
#[must_use]
pub fn encode(shape: &Shape, labels: &LabelTable, host: &dyn LabelHost) -> Descriptor {
    let label = labels
        .get(shape.id)
        .and_then(|id| host.text(id))
        .unwrap_or("")
        .to_string();
    Descriptor {
        kind: shape.kind,
        x: shape.position.x,
        y: shape.position.y,
        z: shape.position.z,
        color: shape.color.clone(),
        label,
        status: shape.status,
    }
}
