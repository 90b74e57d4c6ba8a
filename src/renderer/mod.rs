//! Render projection
//!
//! The core never draws. Each frame it builds a `Frame` draw list from the
//! session and hands it to a `RenderSink` supplied by the host.

pub mod frame;

pub use frame::{DrawItem, Frame, build_frame};

/// Consumer of per-frame draw lists (canvas, GPU, terminal, test recorder)
pub trait RenderSink {
    fn draw(&mut self, frame: &Frame);
}

/// Keeps the most recent frame
#[derive(Debug, Default, Clone)]
pub struct LastFrame {
    pub frame: Option<Frame>,
    pub frames_drawn: u64,
}

impl RenderSink for LastFrame {
    fn draw(&mut self, frame: &Frame) {
        self.frame = Some(frame.clone());
        self.frames_drawn += 1;
    }
}
