#![warn(clippy::all, rust_2018_idioms)]

pub mod config;
pub mod encoder;
pub mod error;
pub mod host;
pub mod input;
pub mod loader;
pub mod session;
pub mod surface;
pub mod tools;
pub mod view;

pub use config::EditorConfig;
pub use error::{EditorError, EditorResult};
pub use host::{DocumentRef, ImageLocator, ResolvedImage, ResourceId, Vault};
pub use input::{CanvasPlacement, InputLocation, PointerEvent};
pub use session::{SaveReport, Session, SessionController};
pub use surface::Surface;
pub use tools::{StrokeEngine, ToolMode, ToolState};
pub use view::{DrawingView, ViewAction};
