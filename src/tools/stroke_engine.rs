use egui::Pos2;

use super::{Mark, MarkSampler, SampleBounds, ToolMode, ToolState};
use crate::surface::{Surface, opaque};

/// Whether a gesture is in progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    Drawing,
}

/// Turns a live pointer gesture into pixel changes on a [`Surface`].
///
/// Marks are rasterized immediately; nothing about the stroke is kept once the
/// gesture ends. The tool state is read on every mark, so switching tools in
/// the middle of a gesture only affects the marks that follow.
#[derive(Debug, Clone)]
pub struct StrokeEngine {
    state: GestureState,
    sampler: MarkSampler,
    brush_size: u32,
    marks_in_gesture: usize,
}

impl StrokeEngine {
    pub fn new(brush_size: u32, interpolate: bool) -> Self {
        Self {
            state: GestureState::Idle,
            sampler: MarkSampler::new(interpolate),
            brush_size: brush_size.max(1),
            marks_in_gesture: 0,
        }
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    pub fn is_drawing(&self) -> bool {
        self.state == GestureState::Drawing
    }

    pub fn brush_size(&self) -> u32 {
        self.brush_size
    }

    /// Start a gesture. Only a press over the surface counts; returns whether
    /// drawing began.
    pub fn pointer_down(&mut self, pos: Pos2, surface: &Surface) -> bool {
        let over_surface = Mark::from_pos(pos).is_some_and(|mark| surface.contains(mark.x, mark.y));
        if !over_surface {
            log::warn!("Pointer down outside surface at ({}, {})", pos.x, pos.y);
            return false;
        }
        log::debug!("Pointer down at ({}, {})", pos.x, pos.y);
        self.state = GestureState::Drawing;
        self.sampler.reset();
        self.marks_in_gesture = 0;
        // The press itself leaves no mark; interpolation starts from here.
        self.sampler.sample(pos, &self.bounds(surface));
        true
    }

    /// One mark per move while drawing; moves while idle and non-finite
    /// positions are ignored. Returns the number of pixels written.
    pub fn pointer_move(&mut self, pos: Pos2, surface: &mut Surface, tools: &ToolState) -> usize {
        if !self.is_drawing() {
            return 0;
        }
        let bounds = self.bounds(surface);
        let mut written = 0;
        for mark in self.sampler.sample(pos, &bounds) {
            written += self.apply_mark(surface, mark, tools);
        }
        self.marks_in_gesture += 1;
        log::debug!("Drawing at ({}, {}): {} pixels", pos.x, pos.y, written);
        written
    }

    /// End the gesture, wherever the pointer is
    pub fn pointer_up(&mut self) {
        if self.is_drawing() {
            log::debug!("Pointer up after {} marks", self.marks_in_gesture);
        }
        self.state = GestureState::Idle;
        self.sampler.reset();
    }

    fn bounds(&self, surface: &Surface) -> SampleBounds {
        SampleBounds::around(surface.width(), surface.height(), self.brush_size)
    }

    /// Composite a single square mark onto the surface
    pub fn apply_mark(&self, surface: &mut Surface, mark: Mark, tools: &ToolState) -> usize {
        let (left, top) = mark.square_origin(self.brush_size);
        match tools.mode() {
            ToolMode::Paint => surface.fill_square(left, top, self.brush_size, opaque(tools.color())),
            ToolMode::Erase => surface.clear_square(left, top, self.brush_size),
        }
    }
}
