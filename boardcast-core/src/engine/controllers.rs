//! Animation controllers: nameless, non-drawing objects that interpolate one
//! attribute of another object over a fixed frame span and remove themselves
//! on completion.
//!
//! Controllers capture only immutable data at construction (names,
//! coordinates, frame counts, decoded pixels); they read live object state
//! through the engine at step time.

use crate::engine::engine::GameEngine;
use crate::engine::event_manager::Event;
use crate::engine::object::{SceneObject, StepOutcome};
use crate::engine::sprite::Sprite;
use crate::foundation::core::{Coord, lerp, lerp_coord};
use crate::foundation::error::BoardcastResult;
use crate::render::composite::{FrameCanvas, ImageRgba, draw_centered};

/// Draw layer for the incoming background during a cross-fade; below every
/// ordinary object.
pub const BACKGROUND_Z_INDEX: i32 = -100;

/// Interpolates a target sprite from the position it holds when the
/// controller is created to a new target position.
#[derive(Clone, Debug)]
pub struct MoveObjectController {
    object_name: String,
    source: Coord,
    destination: Coord,
    total_frames: u64,
    elapsed: u64,
}

impl MoveObjectController {
    /// Build a controller for the named sprite, reading its current position
    /// from the engine as the movement source.
    pub fn new(
        engine: &GameEngine,
        object_name: impl Into<String>,
        destination: Coord,
        total_frames: u64,
    ) -> BoardcastResult<Self> {
        let object_name = object_name.into();
        let source = engine.sprite(&object_name)?.position();
        Ok(Self {
            object_name,
            source,
            destination,
            total_frames,
            elapsed: 0,
        })
    }

    /// An event which constructs this controller (capturing the target's
    /// position at fire time) and adds it to the engine.
    pub fn event(object_name: String, destination: Coord, total_frames: u64) -> Event {
        Box::new(move |engine| {
            let controller = Self::new(engine, object_name, destination, total_frames)?;
            engine.add_object(SceneObject::Move(controller))
        })
    }

    pub(crate) fn step(&mut self, engine: &mut GameEngine) -> BoardcastResult<StepOutcome> {
        self.elapsed += 1;
        let t = (self.elapsed as f64 / self.total_frames.max(1) as f64).min(1.0);
        let position = lerp_coord(self.source, self.destination, t);
        engine.sprite_mut(&self.object_name)?.set_position(position);
        if self.elapsed >= self.total_frames {
            Ok(StepOutcome::Remove)
        } else {
            Ok(StepOutcome::Keep)
        }
    }
}

/// Interpolates a target sprite's alpha value over time, optionally running
/// a completion action (such as removing the faded-out sprite) at the end.
pub struct FadeObjectController {
    object_name: String,
    from_alpha: f32,
    to_alpha: f32,
    total_frames: u64,
    elapsed: u64,
    on_complete: Option<Event>,
}

impl FadeObjectController {
    /// Build a fade of the named sprite from `from_alpha` to `to_alpha`.
    pub fn new(
        object_name: impl Into<String>,
        from_alpha: f32,
        to_alpha: f32,
        total_frames: u64,
    ) -> Self {
        Self {
            object_name: object_name.into(),
            from_alpha,
            to_alpha,
            total_frames,
            elapsed: 0,
            on_complete: None,
        }
    }

    /// Attach an action to run when the fade completes, before the
    /// controller removes itself.
    pub fn with_on_complete(mut self, event: Event) -> Self {
        self.on_complete = Some(event);
        self
    }

    /// An event which adds the given (typically hidden) sprite to the engine
    /// and fades it in to full opacity.
    pub fn fade_in_event(sprite: Sprite, total_frames: u64) -> Event {
        Box::new(move |engine| {
            let name = sprite.name().to_string();
            engine.add_object(SceneObject::Sprite(sprite))?;
            engine.add_object(SceneObject::Fade(Self::new(name, 0.0, 1.0, total_frames)))
        })
    }

    /// An event which fades the named sprite out to zero alpha and removes
    /// it from the engine once the fade has finished.
    pub fn fade_out_event(object_name: String, total_frames: u64) -> Event {
        Box::new(move |engine| {
            let remove_target = object_name.clone();
            let controller = Self::new(object_name, 1.0, 0.0, total_frames)
                .with_on_complete(Box::new(move |engine| engine.remove_object(&remove_target)));
            engine.add_object(SceneObject::Fade(controller))
        })
    }

    pub(crate) fn step(&mut self, engine: &mut GameEngine) -> BoardcastResult<StepOutcome> {
        self.elapsed += 1;
        let t = (self.elapsed as f64 / self.total_frames.max(1) as f64).min(1.0);
        let alpha = lerp(f64::from(self.from_alpha), f64::from(self.to_alpha), t);
        engine.sprite_mut(&self.object_name)?.set_alpha(alpha as f32);
        if self.elapsed >= self.total_frames {
            if let Some(on_complete) = self.on_complete.take() {
                on_complete(engine)?;
            }
            Ok(StepOutcome::Remove)
        } else {
            Ok(StepOutcome::Keep)
        }
    }
}

impl std::fmt::Debug for FadeObjectController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FadeObjectController")
            .field("object_name", &self.object_name)
            .field("from_alpha", &self.from_alpha)
            .field("to_alpha", &self.to_alpha)
            .field("total_frames", &self.total_frames)
            .field("elapsed", &self.elapsed)
            .field("has_on_complete", &self.on_complete.is_some())
            .finish()
    }
}

/// Cross-fades the engine background to a new image, committing the image as
/// the real background when the fade completes.
#[derive(Clone, Debug)]
pub struct FadeBackgroundController {
    image: ImageRgba,
    total_frames: u64,
    elapsed: u64,
    alpha: f32,
}

impl FadeBackgroundController {
    /// Build a cross-fade to `image`. The image must match the current
    /// background's size; the command layer validates that before
    /// scheduling.
    pub fn new(image: ImageRgba, total_frames: u64) -> Self {
        Self {
            image,
            total_frames,
            elapsed: 0,
            alpha: 0.0,
        }
    }

    /// An event which starts the background cross-fade.
    pub fn event(image: ImageRgba, total_frames: u64) -> Event {
        Box::new(move |engine| engine.add_object(SceneObject::FadeBackground(Self::new(image, total_frames))))
    }

    pub(crate) fn step(&mut self, engine: &mut GameEngine) -> BoardcastResult<StepOutcome> {
        self.elapsed += 1;
        let t = (self.elapsed as f64 / self.total_frames.max(1) as f64).min(1.0);
        self.alpha = t as f32;
        if self.elapsed >= self.total_frames {
            engine.set_background(self.image.clone());
            Ok(StepOutcome::Remove)
        } else {
            Ok(StepOutcome::Keep)
        }
    }

    pub(crate) fn draw(&self, canvas: &mut FrameCanvas) {
        let center = Coord::new(
            self.image.height() as i32 / 2,
            self.image.width() as i32 / 2,
        );
        draw_centered(canvas, &self.image, center, self.alpha);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/controllers.rs"]
mod tests;
