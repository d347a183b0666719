//! Picking capability seam and pointer click events.
//!
//! Ray/intersection math belongs to the host's 3D engine; the core hands it
//! pointer positions in normalized device coordinates and gets back either
//! a picked shape or a point on the floor planes. A miss from either query
//! is an expected, frequent outcome — never an error.

use crate::scene::{ShapeId, ShapeStore};
use crate::space::{Ndc, PixelPoint, Vec3};

/// Geometry/ray queries provided by the host's 3D engine.
///
/// Pointer positions are in NDC as produced by
/// [`crate::space::Viewport::ndc_from_pixels`].
pub trait RayService {
    /// Nearest draggable shape under the pointer, if any.
    fn pick(&self, pointer: Ndc, shapes: &ShapeStore) -> Option<ShapeId>;

    /// Nearest intersection of the pointer ray with the floor planes, if
    /// any.
    fn ground_point(&self, pointer: Ndc) -> Option<Vec3>;
}

/// A pointer click as reported by the host wiring.
#[derive(Debug, Clone, Copy)]
pub struct ClickEvent {
    /// Click position in CSS pixels.
    pub at: PixelPoint,
    /// True when the click originated inside the control palette; the
    /// board ignores such clicks entirely, dragging or not.
    pub over_palette: bool,
}
