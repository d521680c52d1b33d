//! The singleton status-text object.

use crate::foundation::core::Coord;
use crate::render::composite::{FrameCanvas, ImageRgba, draw_centered};

/// Name under which the status text registers in the engine. There is at
/// most one; the `text` command mutates it in place when it already exists.
pub const STATUS_TEXT_NAME: &str = "__text";

// Vertical distance from the bottom canvas edge to the text anchor.
const BOTTOM_MARGIN: i32 = 32;

/// Status text displayed at the bottom-center of the canvas.
///
/// The text is rasterized once, when the command that sets it executes, so
/// the object itself only stores the string and its rendered pixels.
#[derive(Clone, Debug)]
pub struct StatusText {
    text: String,
    image: ImageRgba,
}

impl StatusText {
    /// Wrap a rasterized string.
    pub fn new(text: impl Into<String>, image: ImageRgba) -> Self {
        Self {
            text: text.into(),
            image,
        }
    }

    /// The displayed string.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the string and its rendered pixels.
    pub fn set(&mut self, text: impl Into<String>, image: ImageRgba) {
        self.text = text.into();
        self.image = image;
    }

    pub(crate) fn draw(&self, canvas: &mut FrameCanvas) {
        let anchor = Coord::new(
            canvas.height() as i32 - BOTTOM_MARGIN,
            canvas.width() as i32 / 2,
        );
        draw_centered(canvas, &self.image, anchor, 1.0);
    }
}
