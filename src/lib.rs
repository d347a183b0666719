//! Placement and state-transition core for a 3D spatial task board.
//!
//! Users spawn primitive shapes representing tasks, drag them between a
//! "To Do" and a "Done" floor, and the board persists its state between
//! sessions. This crate owns the picking/drag protocol, vertical stacking,
//! zone classification, the shape↔descriptor serialization contract, and
//! screen-space label tracking. Rendering, raycasting, camera controls,
//! overlay elements, and durable storage stay in the host and are consumed
//! through capability traits, so the whole core runs headless under test.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level [`engine::BoardCore`]: drag state machine, spawn/clear, frame pass |
//! | [`scene`] | Task shapes, statuses, and the owning [`scene::ShapeStore`] |
//! | [`placement`] | Stacking-height resolution and zone classification |
//! | [`codec`] | Shape ↔ [`codec::Descriptor`] serialization |
//! | [`store`] | Key-value persistence seam and board save/load |
//! | [`label`] | Overlay ownership table and per-frame label sync |
//! | [`ray`] | Picking/ground-projection seam and pointer events |
//! | [`space`] | World/NDC/pixel coordinates and the camera rig seam |
//! | [`consts`] | Shared numeric constants (footprint, zones, storage key) |

pub mod codec;
pub mod consts;
pub mod engine;
pub mod label;
pub mod placement;
pub mod ray;
pub mod scene;
pub mod space;
pub mod store;
