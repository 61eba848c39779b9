use egui::{Pos2, Rect, pos2};

/// A screen position resolved against the drawing surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputLocation {
    /// Where the host saw the pointer
    pub position: Pos2,
    /// Same point in surface pixels
    pub local: Pos2,
    /// Inside `[0, W) x [0, H)`; a press only starts a gesture here
    pub is_in_canvas: bool,
}

/// Raw pointer input forwarded by the host, in screen coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Primary button pressed
    Down(Pos2),
    /// Pointer moved (with or without the button held)
    Move(Pos2),
    /// Primary button released, anywhere on screen
    Up,
}

/// Where the host shows the surface on screen.
///
/// The displayed rect may differ in size from the surface; positions are
/// scaled back to surface pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasPlacement {
    screen_rect: Rect,
    surface_size: [u32; 2],
}

impl CanvasPlacement {
    pub fn new(screen_rect: Rect, surface_width: u32, surface_height: u32) -> Self {
        Self {
            screen_rect,
            surface_size: [surface_width, surface_height],
        }
    }

    /// Surface shown at its native size with its top-left corner at `origin`
    pub fn at_origin(origin: Pos2, surface_width: u32, surface_height: u32) -> Self {
        let size = egui::vec2(surface_width as f32, surface_height as f32);
        Self::new(Rect::from_min_size(origin, size), surface_width, surface_height)
    }

    pub fn screen_rect(&self) -> Rect {
        self.screen_rect
    }

    /// Move or rescale the canvas, keeping the surface size
    pub fn set_screen_rect(&mut self, rect: Rect) {
        self.screen_rect = rect;
    }

    /// Map a screen position to surface pixel coordinates
    pub fn to_local(&self, screen: Pos2) -> Pos2 {
        let rect = self.screen_rect;
        let scale_x = if rect.width() > 0.0 {
            self.surface_size[0] as f32 / rect.width()
        } else {
            1.0
        };
        let scale_y = if rect.height() > 0.0 {
            self.surface_size[1] as f32 / rect.height()
        } else {
            1.0
        };
        pos2((screen.x - rect.min.x) * scale_x, (screen.y - rect.min.y) * scale_y)
    }

    /// Map a screen position and test it against the surface bounds
    pub fn locate(&self, screen: Pos2) -> InputLocation {
        let local = self.to_local(screen);
        InputLocation {
            position: screen,
            local,
            is_in_canvas: local.x >= 0.0
                && local.y >= 0.0
                && local.x < self.surface_size[0] as f32
                && local.y < self.surface_size[1] as f32,
        }
    }
}
