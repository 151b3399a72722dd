//! Display surface boundary.
//!
//! The core never talks to display hardware directly; it paints into a
//! [`FrameBuffer`] and hands the finished frame to a [`Screen`]. Present
//! operations are synchronous and idempotent per call.

use crate::render::buffer::FrameBuffer;

/// Error pushing a frame to a physical display.
#[derive(Debug, thiserror::Error)]
pub enum ScreenError {
    #[error("display transport: {0}")]
    Io(#[from] std::io::Error),
}

/// A physical (or simulated) display that can show a finished frame.
pub trait Screen {
    /// Push the frame to the display.
    fn present(&mut self, frame: &FrameBuffer) -> Result<(), ScreenError>;
}

// ===========================================================================
// Tests
// ===========================================================================
