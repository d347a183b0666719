//! Shared numeric constants for the board core.

// ── Placement ───────────────────────────────────────────────────

/// Edge length of the unit footprint used for overlap tests and stacking.
pub const SHAPE_SIZE: f64 = 1.0;

/// Resting height for a shape sitting directly on a floor plane.
pub const GROUND_Y: f64 = -0.999;

/// Neighbours above `y + SAME_LEVEL_EPS` never count as support, so shapes
/// at nearly the same level pass each other instead of climbing.
pub const SAME_LEVEL_EPS: f64 = SHAPE_SIZE * 0.5;

// ── Zones ───────────────────────────────────────────────────────

/// Inclusive x-range of the "To Do" floor.
pub const TODO_MIN_X: f64 = -10.0;
/// Upper bound of the "To Do" floor; x = 10 itself is still todo.
pub const TODO_MAX_X: f64 = 10.0;

/// Exclusive lower bound of the "Done" floor.
pub const DONE_MIN_X: f64 = 10.0;
/// Inclusive upper bound of the "Done" floor.
pub const DONE_MAX_X: f64 = 30.0;

// ── Persistence ─────────────────────────────────────────────────

/// Fixed key the descriptor list is stored under.
pub const STORAGE_KEY: &str = "myShapes_v1";

// ── Spawn defaults ──────────────────────────────────────────────

/// Color used when a spawn request or stored record carries none.
pub const DEFAULT_COLOR: &str = "#1475b5";

/// Label on the cube seeded onto an otherwise empty board.
pub const WELCOME_LABEL: &str = "welcome!";
