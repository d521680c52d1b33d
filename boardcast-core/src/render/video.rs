//! Drives a [`FrameRenderer`] into a [`FrameSink`].

use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::FrameIndex;
use crate::foundation::error::BoardcastResult;
use crate::render::composite::FrameCanvas;
use crate::render::frame::FrameRenderer;

/// Renders every frame of a [`FrameRenderer`] in order and hands each to a
/// sink for encoding.
#[derive(Debug)]
pub struct VideoRenderer<R> {
    renderer: R,
}

impl<R: FrameRenderer> VideoRenderer<R> {
    /// Wrap a frame renderer.
    pub fn new(renderer: R) -> Self {
        Self { renderer }
    }

    /// Render frames `0..total_frames` into `sink`.
    #[tracing::instrument(skip(self, sink))]
    pub fn render(&mut self, sink: &mut dyn FrameSink) -> BoardcastResult<()> {
        let size = self.renderer.frame_size();
        sink.begin(SinkConfig {
            width: size.width,
            height: size.height,
            fps: self.renderer.fps(),
        })?;

        let mut canvas = FrameCanvas::new(size.width, size.height);
        for frame in 0..self.renderer.total_frames() {
            let frame = FrameIndex(frame);
            self.renderer.render_frame(frame, &mut canvas)?;
            sink.push_frame(frame, &canvas)?;
        }
        sink.end()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/video.rs"]
mod tests;
