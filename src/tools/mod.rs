use egui::Color32;

mod mark;
pub mod stroke_engine;

pub use mark::{Mark, MarkSampler, SampleBounds};
pub use stroke_engine::{GestureState, StrokeEngine};

/// How a mark composites onto the surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToolMode {
    /// Source-over with an opaque color: the mark replaces what was there
    #[default]
    Paint,
    /// Destination-out: the mark removes what was there
    Erase,
}

/// Current tool and color. The last selection wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolState {
    mode: ToolMode,
    color: Color32,
}

impl Default for ToolState {
    fn default() -> Self {
        Self {
            mode: ToolMode::Paint,
            color: Color32::BLACK,
        }
    }
}

impl ToolState {
    pub fn mode(&self) -> ToolMode {
        self.mode
    }

    /// Paint color; kept while erasing so switching back restores it
    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn is_erasing(&self) -> bool {
        self.mode == ToolMode::Erase
    }

    /// Paint with `color` from now on. Always leaves erase mode.
    pub fn select_color(&mut self, color: Color32) {
        self.color = Color32::from_rgb(color.r(), color.g(), color.b());
        self.mode = ToolMode::Paint;
        log::info!(
            "Color selected: #{:02x}{:02x}{:02x}",
            self.color.r(),
            self.color.g(),
            self.color.b()
        );
    }

    pub fn select_eraser(&mut self) {
        self.mode = ToolMode::Erase;
        log::info!("Eraser selected");
    }
}

/// Parse the `#rrggbb` value produced by a color input
pub fn parse_hex_color(value: &str) -> Option<Color32> {
    let hex = value.strip_prefix('#').unwrap_or(value);
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    Some(Color32::from_rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}
