//! Label overlays: host seam, ownership table, and the per-frame sync pass.
//!
//! Overlays are screen-space elements owned 1:1 by shapes. The host creates
//! and positions the real elements; the core tracks ownership in a side
//! table keyed by stable shape id and computes where each overlay belongs
//! on screen every frame.

#[cfg(test)]
#[path = "label_test.rs"]
mod label_test;

use std::collections::BTreeMap;

use crate::scene::{ShapeId, ShapeStore};
use crate::space::{CameraRig, PixelPoint, Viewport};

/// Host-side handle for one overlay element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LabelId(pub u64);

/// Screen overlay operations provided by the host.
pub trait LabelHost {
    /// Create an overlay with the given text. Returns `None` when the host
    /// has no label template available; the core then leaves the shape
    /// unlabelled rather than failing.
    fn create(&mut self, text: &str) -> Option<LabelId>;

    /// Current text of an overlay.
    fn text(&self, id: LabelId) -> Option<&str>;

    /// Move an overlay so its centre sits at `at`.
    fn set_center(&mut self, id: LabelId, at: PixelPoint);

    /// Destroy an overlay.
    fn remove(&mut self, id: LabelId);
}

/// Ownership table mapping shapes to their overlay.
#[derive(Debug, Default)]
pub struct LabelTable {
    links: BTreeMap<ShapeId, LabelId>,
}

impl LabelTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `shape` owns `label`, replacing any previous link.
    pub fn attach(&mut self, shape: ShapeId, label: LabelId) {
        self.links.insert(shape, label);
    }

    /// Overlay owned by `shape`, if any.
    #[must_use]
    pub fn get(&self, shape: ShapeId) -> Option<LabelId> {
        self.links.get(&shape).copied()
    }

    /// Drop the link for `shape`, returning the overlay to destroy.
    pub fn detach(&mut self, shape: ShapeId) -> Option<LabelId> {
        self.links.remove(&shape)
    }

    /// Drop every link, returning the overlays to destroy.
    pub fn drain(&mut self) -> Vec<LabelId> {
        std::mem::take(&mut self.links).into_values().collect()
    }

    /// Iterate (shape, overlay) pairs in shape-id order.
    pub fn iter(&self) -> impl Iterator<Item = (ShapeId, LabelId)> + '_ {
        self.links.iter().map(|(shape, label)| (*shape, *label))
    }

    /// Number of tracked overlays.
    #[must_use]
    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// Returns `true` if no overlays are tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

/// Align every overlay with its shape's projected screen position.
///
/// Must run after the camera rig has advanced for the frame;
/// [`crate::engine::BoardCore::frame`] guarantees that ordering.
pub fn sync_labels(
    table: &LabelTable,
    shapes: &ShapeStore,
    camera: &dyn CameraRig,
    viewport: Viewport,
    host: &mut dyn LabelHost,
) {
    for (shape_id, label_id) in table.iter() {
        let Some(shape) = shapes.get(shape_id) else {
            continue;
        };
        let ndc = camera.project(shape.position);
        host.set_center(label_id, viewport.pixels_from_ndc(ndc));
    }
}
