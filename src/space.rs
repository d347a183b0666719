//! World/screen coordinate types and the camera capability seam.
//!
//! The renderer and orbit controls live outside this crate; the core needs
//! two things from them: the NDC convention for pointer events and a way to
//! project world positions through the current camera transform.

#[cfg(test)]
#[path = "space_test.rs"]
mod space_test;

/// A position in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    #[must_use]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// A point in normalized device coordinates: x and y in [-1, 1], y up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ndc {
    pub x: f64,
    pub y: f64,
}

impl Ndc {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A point in screen space (CSS pixels, y down).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Current viewport size in CSS pixels.
///
/// Hosts must keep this in sync with the window before forwarding pointer
/// events; conversions on a zero-sized viewport produce non-finite values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Convert a pixel position to normalized device coordinates:
    /// `(px / width * 2 - 1, -(py / height * 2 - 1))`.
    #[must_use]
    pub fn ndc_from_pixels(&self, px: PixelPoint) -> Ndc {
        Ndc {
            x: (px.x / self.width) * 2.0 - 1.0,
            y: -((px.y / self.height) * 2.0 - 1.0),
        }
    }

    /// Map an NDC point back to pixel coordinates.
    #[must_use]
    pub fn pixels_from_ndc(&self, ndc: Ndc) -> PixelPoint {
        PixelPoint {
            x: (ndc.x * 0.5 + 0.5) * self.width,
            y: (-ndc.y * 0.5 + 0.5) * self.height,
        }
    }
}

/// The camera rig owned by the host: orbit controls plus the projection
/// into NDC.
///
/// [`crate::engine::BoardCore::frame`] calls `update` once per frame before
/// any `project` call, so overlay positions never lag camera movement.
pub trait CameraRig {
    /// Advance the camera controls for this frame.
    fn update(&mut self);

    /// Project a world position through the current camera transform.
    fn project(&self, world: Vec3) -> Ndc;
}
