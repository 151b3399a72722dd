//! Rendering: off-screen frame buffer, clipped redraw, display surfaces.

pub mod buffer;
pub mod redraw;
pub mod surface;
pub mod terminal;

pub use buffer::{Cell, FrameBuffer};
pub use redraw::{redraw, redraw_tree};
pub use surface::{Screen, ScreenError};
pub use terminal::TerminalScreen;
