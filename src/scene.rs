//! Scene model: task shapes, their statuses, and the owning store.
//!
//! This module defines the core data types describing what is on the board
//! (`Shape`, `ShapeKind`, `TaskStatus`) and the runtime store that owns all
//! live shapes (`ShapeStore`). Shapes are addressed by `ShapeId`, a stable
//! integer handle assigned once at creation; overlay links and drag state
//! elsewhere in the crate key off that handle rather than off references.
//!
//! Data flows into this layer from the spawn surface and from persistence
//! (descriptor decoding); the drag controller mutates positions and
//! statuses in place. Shapes are only ever destroyed by the explicit clear
//! operations.

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::space::Vec3;

/// Stable handle for a shape, assigned by the store at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShapeId(u64);

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The geometric primitive a task shape is rendered as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Cube,
    Sphere,
    Cylinder,
}

/// Error for a kind name outside the supported set. Spawn surfaces reject
/// these outright rather than defaulting.
#[derive(Debug, thiserror::Error)]
#[error("unknown shape kind: {0}")]
pub struct UnknownKind(pub String);

impl FromStr for ShapeKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cube" => Ok(Self::Cube),
            "sphere" => Ok(Self::Sphere),
            "cylinder" => Ok(Self::Cylinder),
            other => Err(UnknownKind(other.to_string())),
        }
    }
}

/// Task lifecycle status, derived from which floor a shape sits on but
/// cached on the shape between drops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    #[default]
    Todo,
    Done,
}

/// A placed task shape.
#[derive(Debug, Clone)]
pub struct Shape {
    /// Stable handle assigned by the store.
    pub id: ShapeId,
    /// Rendered primitive.
    pub kind: ShapeKind,
    /// World position. `y` is the support height resolved at the last
    /// placement, except for shapes restored from storage, which keep
    /// their persisted `y` verbatim.
    pub position: Vec3,
    /// CSS-style color string the host materializes.
    pub color: String,
    /// Cached zone status; reclassified when a drag is dropped.
    pub status: TaskStatus,
}

/// Live todo/done counts for the host's counter readout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ZoneCounts {
    pub todo: usize,
    pub done: usize,
}

/// Owning store for all live shapes, iterated in spawn order.
pub struct ShapeStore {
    shapes: BTreeMap<ShapeId, Shape>,
    next_id: u64,
}

impl ShapeStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self { shapes: BTreeMap::new(), next_id: 0 }
    }

    /// Add a new shape, assigning it a fresh stable id. Status starts as
    /// todo; persistence overrides it after the fact when restoring.
    pub fn add(&mut self, kind: ShapeKind, position: Vec3, color: String) -> ShapeId {
        let id = ShapeId(self.next_id);
        self.next_id += 1;
        self.shapes.insert(id, Shape { id, kind, position, color, status: TaskStatus::Todo });
        id
    }

    /// Return a reference to a shape by id.
    #[must_use]
    pub fn get(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.get(&id)
    }

    /// Return a mutable reference to a shape by id.
    pub fn get_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        self.shapes.get_mut(&id)
    }

    /// Remove a shape by id, returning it if it was present. Ids are never
    /// reused.
    pub fn remove(&mut self, id: ShapeId) -> Option<Shape> {
        self.shapes.remove(&id)
    }

    /// Remove every shape with `status`, returning them in spawn order.
    pub fn remove_with_status(&mut self, status: TaskStatus) -> Vec<Shape> {
        let ids: Vec<ShapeId> = self
            .shapes
            .values()
            .filter(|shape| shape.status == status)
            .map(|shape| shape.id)
            .collect();
        ids.into_iter().filter_map(|id| self.shapes.remove(&id)).collect()
    }

    /// Remove every shape, returning them in spawn order.
    pub fn drain(&mut self) -> Vec<Shape> {
        std::mem::take(&mut self.shapes).into_values().collect()
    }

    /// Iterate shapes in spawn order.
    pub fn iter(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.values()
    }

    /// Number of live shapes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Returns `true` if the store contains no shapes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Count shapes per status.
    #[must_use]
    pub fn counts(&self) -> ZoneCounts {
        let mut counts = ZoneCounts::default();
        for shape in self.shapes.values() {
            match shape.status {
                TaskStatus::Todo => counts.todo += 1,
                TaskStatus::Done => counts.done += 1,
            }
        }
        counts
    }
}

impl Default for ShapeStore {
    fn default() -> Self {
        Self::new()
    }
}
