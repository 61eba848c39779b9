//! Declarative description of the drawing dialog.
//!
//! The host renders these controls however it likes and routes activations
//! back through [`Session::apply`](crate::session::Session::apply).

use egui::Color32;

use crate::session::Session;
use crate::tools::ToolMode;

pub const TITLE: &str = "Draw Over Image";

/// Something the user can trigger from the dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewAction {
    SelectColor(Color32),
    SelectEraser,
    Save,
    Cancel,
}

/// Result of [`Session::apply`](crate::session::Session::apply)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    ToolChanged,
    /// Forward the session to `SessionController::save`
    SaveRequested,
    /// Forward the session to `SessionController::cancel`
    CancelRequested,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Control {
    Heading(String),
    /// Emits [`ViewAction::SelectColor`] when changed
    ColorPicker { label: String, value: Color32 },
    Button { label: String, action: ViewAction, active: bool },
    /// The pointer-sensitive drawing area
    Canvas { width: u32, height: u32, brush_size: u32 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct DrawingView {
    pub controls: Vec<Control>,
}

impl DrawingView {
    pub fn describe(session: &Session) -> Self {
        let tools = session.tool_state();
        let surface = session.surface();
        let controls = vec![
            Control::Heading(TITLE.to_owned()),
            Control::ColorPicker {
                label: "Choose Color: ".to_owned(),
                value: tools.color(),
            },
            Control::Button {
                label: "Eraser".to_owned(),
                action: ViewAction::SelectEraser,
                active: tools.mode() == ToolMode::Erase,
            },
            Control::Canvas {
                width: surface.width(),
                height: surface.height(),
                brush_size: session.brush_size(),
            },
            Control::Button {
                label: "Save".to_owned(),
                action: ViewAction::Save,
                active: false,
            },
        ];
        Self { controls }
    }

    /// Find a button by label
    pub fn button(&self, label: &str) -> Option<ViewAction> {
        self.controls.iter().find_map(|control| match control {
            Control::Button { label: l, action, .. } if l == label => Some(*action),
            _ => None,
        })
    }

    pub fn canvas_size(&self) -> Option<(u32, u32)> {
        self.controls.iter().find_map(|control| match control {
            Control::Canvas { width, height, .. } => Some((*width, *height)),
            _ => None,
        })
    }
}
