use egui::{Color32, Pos2};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::CodecError;
use crate::host::{DocumentRef, ResourceId};
use crate::input::{CanvasPlacement, PointerEvent};
use crate::surface::Surface;
use crate::tools::{GestureState, StrokeEngine, ToolState};
use crate::view::{Applied, DrawingView, ViewAction};

mod controller;
mod registry;

pub use controller::{SaveReport, SessionController};
pub use registry::{ResourceLease, SessionRegistry};

/// Identifies one editing session in logs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(Uuid);

impl SessionId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// An open drawing session over one image resource.
///
/// A session only exists once its surface has loaded, so drawing can never
/// happen without pixels to draw on. It is consumed by
/// [`SessionController::save`] or [`SessionController::cancel`]; dropping it
/// also releases the resource.
#[derive(Debug)]
pub struct Session {
    id: SessionId,
    document: DocumentRef,
    surface: Surface,
    tools: ToolState,
    engine: StrokeEngine,
    lease: ResourceLease,
}

impl Session {
    pub(crate) fn new(document: DocumentRef, surface: Surface, engine: StrokeEngine, lease: ResourceLease) -> Self {
        Self {
            id: SessionId::new(),
            document,
            surface,
            tools: ToolState::default(),
            engine,
            lease,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    /// The image resource a save will overwrite
    pub fn resource(&self) -> &ResourceId {
        self.lease.resource()
    }

    /// The document the image was found in
    pub fn document(&self) -> &DocumentRef {
        &self.document
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn tool_state(&self) -> &ToolState {
        &self.tools
    }

    pub fn gesture(&self) -> GestureState {
        self.engine.state()
    }

    pub fn brush_size(&self) -> u32 {
        self.engine.brush_size()
    }

    pub fn select_color(&mut self, color: Color32) {
        self.tools.select_color(color);
    }

    pub fn select_eraser(&mut self) {
        self.tools.select_eraser();
    }

    /// Press at a surface-local position
    pub fn pointer_down(&mut self, local: Pos2) -> bool {
        self.engine.pointer_down(local, &self.surface)
    }

    /// Move to a surface-local position; marks only while drawing
    pub fn pointer_move(&mut self, local: Pos2) -> usize {
        self.engine.pointer_move(local, &mut self.surface, &self.tools)
    }

    pub fn pointer_up(&mut self) {
        self.engine.pointer_up();
    }

    /// Feed a screen-space pointer event through the canvas placement
    pub fn handle_pointer(&mut self, event: PointerEvent, placement: &CanvasPlacement) -> usize {
        match event {
            PointerEvent::Down(screen) => {
                let location = placement.locate(screen);
                if location.is_in_canvas {
                    self.pointer_down(location.local);
                }
                0
            }
            PointerEvent::Move(screen) => self.pointer_move(placement.to_local(screen)),
            PointerEvent::Up => {
                self.pointer_up();
                0
            }
        }
    }

    /// Perform a control activation from the view. Saving and cancelling need
    /// the controller, so they are handed back to the host.
    pub fn apply(&mut self, action: ViewAction) -> Applied {
        match action {
            ViewAction::SelectColor(color) => {
                self.select_color(color);
                Applied::ToolChanged
            }
            ViewAction::SelectEraser => {
                self.select_eraser();
                Applied::ToolChanged
            }
            ViewAction::Save => Applied::SaveRequested,
            ViewAction::Cancel => Applied::CancelRequested,
        }
    }

    /// Declarative description of the dialog for this session
    pub fn view(&self) -> DrawingView {
        DrawingView::describe(self)
    }

    pub(crate) fn encode(&self) -> Result<Vec<u8>, CodecError> {
        crate::encoder::encode_png(&self.surface)
    }
}
