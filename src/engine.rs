//! Board engine: drag state machine, spawn/clear operations, frame pass.
//!
//! DESIGN
//! ======
//! `BoardCore` owns all mutable board state (shapes, overlay links, palette
//! and selection state, the active drag) and stays free of host types:
//! raycasting, camera controls, overlays, and durable storage arrive as
//! capability traits on each call. Mutating calls return [`Action`]s in the
//! order they occurred; the host mirrors them into its scene graph and side
//! systems (audio, counter readout) without the core ever reaching into the
//! renderer.
//!
//! The drag protocol is click-to-pick, click-to-drop. A click either starts
//! a drag (picking the nearest draggable shape under the pointer) or
//! finalizes the active one — there is never more than one drag in flight,
//! because a click while dragging is always a drop, never a second pick.
//! Intermediate frames move the dragged shape across the floor planes and
//! re-resolve its stacking height; nothing is committed until the drop.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use tracing::{info, warn};

use crate::codec::{self, Descriptor};
use crate::consts::{DEFAULT_COLOR, GROUND_Y, WELCOME_LABEL};
use crate::label::{LabelHost, LabelTable, sync_labels};
use crate::placement::{classify_zone, resolve_support_height};
use crate::ray::{ClickEvent, RayService};
use crate::scene::{ShapeId, ShapeKind, ShapeStore, TaskStatus, ZoneCounts};
use crate::space::{CameraRig, Ndc, PixelPoint, Vec3, Viewport};
use crate::store::{self, StateStore, StoreError};

/// Host-visible effects of a board mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// A new shape exists; the host should create its mesh.
    ShapeSpawned(ShapeId),
    /// A shape was destroyed; the host should drop its mesh.
    ShapeRemoved(ShapeId),
    /// A dragged shape moved this frame; the host should move its mesh.
    ShapeMoved(ShapeId),
    /// The current selection changed.
    SelectionChanged(Option<ShapeId>),
    /// A drop just took this shape from non-done to done. Emitted exactly
    /// once per such transition; completion feedback subscribes to this.
    TaskCompleted(ShapeId),
    /// Todo/done counts may have changed; refresh the counter readout from
    /// [`BoardCore::counts`].
    CountsChanged,
}

/// Palette state chosen by the user plus the current selection.
#[derive(Debug, Clone)]
pub struct UiState {
    /// Kind used for the next palette spawn.
    pub kind: ShapeKind,
    /// Color used for the next palette spawn.
    pub color: String,
    /// Label text for the next palette spawn; consumed by the spawn.
    pub label_text: String,
    /// The shape currently selected by a pick, if any.
    pub selected: Option<ShapeId>,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            kind: ShapeKind::Cube,
            color: DEFAULT_COLOR.to_string(),
            label_text: String::new(),
            selected: None,
        }
    }
}

/// Drag controller state. One drag at a time, by construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DragState {
    /// Waiting for a pick.
    #[default]
    Idle,
    /// A shape is following the pointer across the floor planes.
    Dragging(ShapeId),
}

/// A request to place a new task shape on the board.
#[derive(Debug, Clone)]
pub struct SpawnRequest {
    pub kind: ShapeKind,
    /// Requested footprint position. `y` is ignored; the placement engine
    /// resolves the support height.
    pub position: Vec3,
    pub color: String,
    /// Overlay text; empty means no overlay.
    pub label_text: String,
}

/// Owning context for the whole board.
pub struct BoardCore {
    /// All live shapes, in spawn order.
    pub shapes: ShapeStore,
    /// Shape → overlay ownership.
    pub labels: LabelTable,
    /// Palette and selection state.
    pub ui: UiState,
    /// Viewport used for NDC conversion and label layout; hosts must keep
    /// it in sync with the window.
    pub viewport: Viewport,
    drag: DragState,
    /// Latest pointer position in NDC, fed by [`BoardCore::pointer_moved`].
    pointer: Ndc,
}

impl BoardCore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            shapes: ShapeStore::new(),
            labels: LabelTable::new(),
            ui: UiState::default(),
            viewport: Viewport::new(0.0, 0.0),
            drag: DragState::Idle,
            pointer: Ndc::new(0.0, 0.0),
        }
    }

    // --- Queries ---

    /// The shape currently being dragged, if any.
    #[must_use]
    pub fn dragging(&self) -> Option<ShapeId> {
        match self.drag {
            DragState::Idle => None,
            DragState::Dragging(id) => Some(id),
        }
    }

    /// The currently selected shape, if any.
    #[must_use]
    pub fn selection(&self) -> Option<ShapeId> {
        self.ui.selected
    }

    /// Live todo/done counts.
    #[must_use]
    pub fn counts(&self) -> ZoneCounts {
        self.shapes.counts()
    }

    // --- Viewport & pointer ---

    /// Update the viewport size used for NDC conversion and label layout.
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.viewport = Viewport::new(width, height);
    }

    /// Record the latest pointer position in CSS pixels.
    pub fn pointer_moved(&mut self, at: PixelPoint) {
        self.pointer = self.viewport.ndc_from_pixels(at);
    }

    // --- Drag protocol ---

    /// Handle a pointer click: pick when idle, drop when dragging.
    ///
    /// Clicks originating inside the control palette are ignored in both
    /// states. A pick miss with no active drag is a no-op.
    pub fn on_click(
        &mut self,
        click: ClickEvent,
        ray: &dyn RayService,
        labels: &dyn LabelHost,
        state: &mut dyn StateStore,
    ) -> Vec<Action> {
        if click.over_palette {
            return Vec::new();
        }
        match self.drag {
            DragState::Dragging(id) => self.finish_drag(id, labels, state),
            DragState::Idle => {
                let pointer = self.viewport.ndc_from_pixels(click.at);
                let Some(id) = ray.pick(pointer, &self.shapes) else {
                    return Vec::new();
                };
                self.drag = DragState::Dragging(id);
                self.ui.selected = Some(id);
                vec![Action::SelectionChanged(Some(id))]
            }
        }
    }

    /// Finalize the active drag: reclassify the zone status, notify on a
    /// fresh completion, deselect, and persist the whole board.
    fn finish_drag(
        &mut self,
        id: ShapeId,
        labels: &dyn LabelHost,
        state: &mut dyn StateStore,
    ) -> Vec<Action> {
        let mut actions = Vec::new();
        if let Some(shape) = self.shapes.get_mut(id) {
            let previous = shape.status;
            if let Some(zone) = classify_zone(shape.position.x) {
                shape.status = zone;
            }
            if shape.status == TaskStatus::Done && previous != TaskStatus::Done {
                actions.push(Action::TaskCompleted(id));
            }
        }
        self.drag = DragState::Idle;
        self.ui.selected = None;
        actions.push(Action::SelectionChanged(None));
        actions.push(Action::CountsChanged);
        self.persist_logged(labels, state);
        actions
    }

    // --- Frame pass ---

    /// Run one frame: advance the camera rig, then track the active drag
    /// and realign overlays.
    ///
    /// The phases are sequential on purpose — overlays project through the
    /// camera transform, so the rig must advance before the label pass or
    /// overlays visibly lag camera movement by a frame.
    pub fn frame(
        &mut self,
        ray: &dyn RayService,
        camera: &mut dyn CameraRig,
        labels: &mut dyn LabelHost,
    ) -> Vec<Action> {
        camera.update();

        let mut actions = Vec::new();
        if let DragState::Dragging(id) = self.drag {
            if let Some(point) = ray.ground_point(self.pointer) {
                if let Some(current) = self.shapes.get(id).map(|shape| shape.position) {
                    let moved = Vec3::new(point.x, current.y, point.z);
                    let y = resolve_support_height(id, moved, &self.shapes);
                    if let Some(shape) = self.shapes.get_mut(id) {
                        shape.position = Vec3::new(point.x, y, point.z);
                        actions.push(Action::ShapeMoved(id));
                    }
                }
            }
        }

        sync_labels(&self.labels, &self.shapes, camera, self.viewport, labels);
        actions
    }

    // --- Spawning ---

    /// Place a new shape on the board.
    ///
    /// The shape starts at ground height and immediately settles on the
    /// highest qualifying neighbour under its footprint, so spawning onto
    /// an occupied spot stacks. Status starts as todo. An overlay is
    /// attached when `label_text` is non-empty and the host can create one;
    /// a host without a label template just leaves the shape unlabelled.
    pub fn spawn(
        &mut self,
        request: &SpawnRequest,
        labels: &mut dyn LabelHost,
    ) -> (ShapeId, Vec<Action>) {
        let at = Vec3::new(request.position.x, GROUND_Y, request.position.z);
        let id = self.shapes.add(request.kind, at, request.color.clone());
        let y = resolve_support_height(id, at, &self.shapes);
        if let Some(shape) = self.shapes.get_mut(id) {
            shape.position.y = y;
        }
        if !request.label_text.is_empty() {
            if let Some(label) = labels.create(&request.label_text) {
                self.labels.attach(id, label);
            }
        }
        (id, vec![Action::ShapeSpawned(id), Action::CountsChanged])
    }

    /// Spawn at `position` using the palette's current kind, color, and
    /// label text, then persist. The palette label text is consumed.
    pub fn spawn_from_palette(
        &mut self,
        position: Vec3,
        labels: &mut dyn LabelHost,
        state: &mut dyn StateStore,
    ) -> (ShapeId, Vec<Action>) {
        let request = SpawnRequest {
            kind: self.ui.kind,
            position,
            color: self.ui.color.clone(),
            label_text: std::mem::take(&mut self.ui.label_text),
        };
        let (id, actions) = self.spawn(&request, labels);
        self.persist_logged(labels, state);
        (id, actions)
    }

    // --- Restore ---

    /// Rebuild the board from persisted state.
    ///
    /// A missing key or corrupt payload yields an empty board (corruption
    /// is logged, never fatal). Restored shapes keep their persisted status
    /// and position verbatim — including `y`; stacking is not re-resolved
    /// on load. An otherwise empty board is seeded with a welcome cube.
    pub fn restore(&mut self, labels: &mut dyn LabelHost, state: &dyn StateStore) -> Vec<Action> {
        let descriptors = match store::load_board(state) {
            Ok(descriptors) => descriptors,
            Err(e) => {
                warn!(error = %e, "failed to load board state");
                Vec::new()
            }
        };

        let mut actions = Vec::new();
        for descriptor in &descriptors {
            let (_, mut spawned) = self.spawn_decoded(descriptor, labels);
            actions.append(&mut spawned);
        }
        if self.shapes.is_empty() {
            let request = SpawnRequest {
                kind: ShapeKind::Cube,
                position: Vec3::new(0.0, 0.0, 0.0),
                color: DEFAULT_COLOR.to_string(),
                label_text: WELCOME_LABEL.to_string(),
            };
            let (_, mut spawned) = self.spawn(&request, labels);
            actions.append(&mut spawned);
        }
        info!(count = self.shapes.len(), "board state restored");
        actions
    }

    /// Decode one descriptor through the spawn path, then apply the
    /// persisted status and position directly — no re-classification, no
    /// re-stacking.
    fn spawn_decoded(
        &mut self,
        descriptor: &Descriptor,
        labels: &mut dyn LabelHost,
    ) -> (ShapeId, Vec<Action>) {
        let request = SpawnRequest {
            kind: descriptor.kind,
            position: Vec3::new(descriptor.x, descriptor.y, descriptor.z),
            color: descriptor.color.clone(),
            label_text: descriptor.label.clone(),
        };
        let (id, actions) = self.spawn(&request, labels);
        if let Some(shape) = self.shapes.get_mut(id) {
            shape.position = Vec3::new(descriptor.x, descriptor.y, descriptor.z);
            shape.status = descriptor.status;
        }
        (id, actions)
    }

    // --- Clearing ---

    /// Remove every shape and overlay and delete the persisted state.
    pub fn clear_all(
        &mut self,
        labels: &mut dyn LabelHost,
        state: &mut dyn StateStore,
    ) -> Vec<Action> {
        let removed = self.shapes.drain();
        let mut actions = Vec::new();
        for shape in &removed {
            if let Some(label) = self.labels.detach(shape.id) {
                labels.remove(label);
            }
            actions.push(Action::ShapeRemoved(shape.id));
        }
        self.drag = DragState::Idle;
        if self.ui.selected.take().is_some() {
            actions.push(Action::SelectionChanged(None));
        }
        actions.push(Action::CountsChanged);
        if let Err(e) = store::delete_board(state) {
            warn!(error = %e, "failed to delete board state");
        }
        actions
    }

    /// Remove every done shape and its overlay, then persist the survivors.
    pub fn clear_done(
        &mut self,
        labels: &mut dyn LabelHost,
        state: &mut dyn StateStore,
    ) -> Vec<Action> {
        self.clear_status(TaskStatus::Done, labels, state)
    }

    /// Remove every todo shape and its overlay, then persist the survivors.
    pub fn clear_todo(
        &mut self,
        labels: &mut dyn LabelHost,
        state: &mut dyn StateStore,
    ) -> Vec<Action> {
        self.clear_status(TaskStatus::Todo, labels, state)
    }

    fn clear_status(
        &mut self,
        status: TaskStatus,
        labels: &mut dyn LabelHost,
        state: &mut dyn StateStore,
    ) -> Vec<Action> {
        let removed = self.shapes.remove_with_status(status);
        let mut actions = Vec::new();
        for shape in &removed {
            if let Some(label) = self.labels.detach(shape.id) {
                labels.remove(label);
            }
            // A cleared shape can be mid-drag or selected; drop both.
            if self.drag == DragState::Dragging(shape.id) {
                self.drag = DragState::Idle;
            }
            if self.ui.selected == Some(shape.id) {
                self.ui.selected = None;
                actions.push(Action::SelectionChanged(None));
            }
            actions.push(Action::ShapeRemoved(shape.id));
        }
        actions.push(Action::CountsChanged);
        self.persist_logged(labels, state);
        actions
    }

    // --- Persistence ---

    /// Snapshot every live shape into descriptors, in spawn order.
    #[must_use]
    pub fn descriptors(&self, labels: &dyn LabelHost) -> Vec<Descriptor> {
        self.shapes
            .iter()
            .map(|shape| codec::encode(shape, &self.labels, labels))
            .collect()
    }

    /// Persist the whole board under the fixed storage key.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the backing store fails.
    /// Interactive call sites log the failure and continue.
    pub fn persist(
        &self,
        labels: &dyn LabelHost,
        state: &mut dyn StateStore,
    ) -> Result<(), StoreError> {
        store::save_board(state, &self.descriptors(labels))
    }

    fn persist_logged(&self, labels: &dyn LabelHost, state: &mut dyn StateStore) {
        if let Err(e) = self.persist(labels, state) {
            warn!(error = %e, "failed to save board state");
        }
    }
}

impl Default for BoardCore {
    fn default() -> Self {
        Self::new()
    }
}
