//! Bounded free-drag state for a single draggable element.
//!
//! Unrelated to list reordering: this backs the "drag a box around its
//! container" interaction. The element's offset accumulates drag deltas and
//! is clamped per axis so the element never leaves the container.

use std::cell::Cell;

/// Accumulated 2D offset of a freely draggable element, clamped to its
/// container.
///
/// Bounds default to zero; call [`set_bounds`](Self::set_bounds) once the
/// container and element have been measured. Until then every drag resolves
/// to offset `(0, 0)`.
#[derive(Debug, Default)]
pub struct FreeDragState {
    offset_x: Cell<f32>,
    offset_y: Cell<f32>,
    container_width: Cell<f32>,
    container_height: Cell<f32>,
    element_width: Cell<f32>,
    element_height: Cell<f32>,
}

impl FreeDragState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the measured container and element sizes and re-clamps the
    /// current offset against them.
    pub fn set_bounds(
        &self,
        container_width: f32,
        container_height: f32,
        element_width: f32,
        element_height: f32,
    ) {
        self.container_width.set(container_width);
        self.container_height.set(container_height);
        self.element_width.set(element_width);
        self.element_height.set(element_height);
        self.offset_x.set(self.clamp_x(self.offset_x.get()));
        self.offset_y.set(self.clamp_y(self.offset_y.get()));
    }

    /// Accumulates a drag delta, keeping the element inside the container.
    pub fn on_drag(&self, dx: f32, dy: f32) {
        self.offset_x.set(self.clamp_x(self.offset_x.get() + dx));
        self.offset_y.set(self.clamp_y(self.offset_y.get() + dy));
    }

    /// Current offset of the element within its container.
    pub fn offset(&self) -> (f32, f32) {
        (self.offset_x.get(), self.offset_y.get())
    }

    /// Resets the element to the container origin.
    pub fn reset(&self) {
        self.offset_x.set(0.0);
        self.offset_y.set(0.0);
    }

    fn clamp_x(&self, x: f32) -> f32 {
        let max = (self.container_width.get() - self.element_width.get()).max(0.0);
        x.clamp(0.0, max)
    }

    fn clamp_y(&self, y: f32) -> f32 {
        let max = (self.container_height.get() - self.element_height.get()).max(0.0);
        y.clamp(0.0, max)
    }
}
