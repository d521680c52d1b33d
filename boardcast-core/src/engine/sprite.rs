//! Static image objects.

use crate::foundation::core::Coord;
use crate::render::composite::{FrameCanvas, ImageRgba, draw_centered};

/// A named image drawn centered at a mutable canvas position with a mutable
/// opacity. Sprites do not move on their own; controllers mutate them.
#[derive(Clone, Debug)]
pub struct Sprite {
    name: String,
    position: Coord,
    image: ImageRgba,
    alpha: f32,
}

impl Sprite {
    /// A fully opaque sprite.
    pub fn new(name: impl Into<String>, position: Coord, image: ImageRgba) -> Self {
        Self {
            name: name.into(),
            position,
            image,
            alpha: 1.0,
        }
    }

    /// A fully transparent sprite, the starting state of a fade-in.
    pub fn hidden(name: impl Into<String>, position: Coord, image: ImageRgba) -> Self {
        Self {
            alpha: 0.0,
            ..Self::new(name, position, image)
        }
    }

    /// The sprite's unique name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current center position.
    pub fn position(&self) -> Coord {
        self.position
    }

    /// Move the sprite's center.
    pub fn set_position(&mut self, position: Coord) {
        self.position = position;
    }

    /// Current opacity in `[0, 1]`.
    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    /// Set the opacity, clamped to `[0, 1]`.
    pub fn set_alpha(&mut self, alpha: f32) {
        self.alpha = alpha.clamp(0.0, 1.0);
    }

    pub(crate) fn draw(&self, canvas: &mut FrameCanvas) {
        draw_centered(canvas, &self.image, self.position, self.alpha);
    }
}
