//! The frame-rendering boundary between the engine and any video sink.

use crate::engine::engine::GameEngine;
use crate::engine::event_manager::EventManager;
use crate::foundation::core::{Canvas, FrameIndex};
use crate::foundation::error::BoardcastResult;
use crate::render::composite::FrameCanvas;

/// Anything that can produce frames 0..N in order.
///
/// Callers must request frames strictly sequentially from 0: the renderer is
/// stateful and each frame builds on the previous one.
pub trait FrameRenderer {
    /// Fixed number of frames this render produces, equal to the schedule's
    /// final moment.
    fn total_frames(&self) -> u64;

    /// Output frame rate.
    fn fps(&self) -> u32;

    /// Output canvas size.
    fn frame_size(&self) -> Canvas;

    /// Render one frame into `canvas` (which holds the previous frame; its
    /// contents are unspecified for frame 0).
    fn render_frame(&mut self, frame: FrameIndex, canvas: &mut FrameCanvas)
    -> BoardcastResult<()>;
}

/// Plays a prepared schedule through a [`GameEngine`], one frame at a time.
#[derive(Debug)]
pub struct GameRenderer {
    engine: GameEngine,
    events: EventManager,
    fps: u32,
    total_frames: u64,
    canvas: Canvas,
}

impl GameRenderer {
    /// Wrap a prepared engine and schedule.
    pub fn new(
        engine: GameEngine,
        events: EventManager,
        fps: u32,
        total_frames: u64,
        canvas: Canvas,
    ) -> Self {
        Self {
            engine,
            events,
            fps,
            total_frames,
            canvas,
        }
    }

    /// The live scene, mostly useful for inspection in tests.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }
}

impl FrameRenderer for GameRenderer {
    fn total_frames(&self) -> u64 {
        self.total_frames
    }

    fn fps(&self) -> u32 {
        self.fps
    }

    fn frame_size(&self) -> Canvas {
        self.canvas
    }

    fn render_frame(
        &mut self,
        frame: FrameIndex,
        canvas: &mut FrameCanvas,
    ) -> BoardcastResult<()> {
        // Fire events due this frame, then advance every object, then draw.
        self.events.step(frame, &mut self.engine)?;
        self.engine.step(frame)?;
        self.engine.render(frame, canvas)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/frame.rs"]
mod tests;
