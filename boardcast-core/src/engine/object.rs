//! The polymorphic scene object: a tagged sum of everything the engine can
//! own, with a small capability surface (`name`, `z_index`, `step`, `draw`).

use crate::engine::controllers::{
    BACKGROUND_Z_INDEX, FadeBackgroundController, FadeObjectController, MoveObjectController,
};
use crate::engine::engine::GameEngine;
use crate::engine::sprite::Sprite;
use crate::engine::text::{STATUS_TEXT_NAME, StatusText};
use crate::foundation::core::FrameIndex;
use crate::foundation::error::BoardcastResult;
use crate::render::composite::FrameCanvas;

/// What an object's step asks the engine to do with it afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// Leave the object in the scene.
    Keep,
    /// Drop the object; controllers return this when their animation is
    /// done.
    Remove,
}

/// Any object the engine can own and drive.
///
/// Passive variants (`Sprite`, `Text`) draw and never act; controller
/// variants act and never draw (except the background fade, which draws the
/// incoming image underneath everything else).
pub enum SceneObject {
    /// A static named image.
    Sprite(Sprite),
    /// The singleton status text.
    Text(StatusText),
    /// In-flight position interpolation.
    Move(MoveObjectController),
    /// In-flight alpha interpolation.
    Fade(FadeObjectController),
    /// In-flight background cross-fade.
    FadeBackground(FadeBackgroundController),
}

impl SceneObject {
    /// The object's unique name, if it has one. Controllers are nameless.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Sprite(sprite) => Some(sprite.name()),
            Self::Text(_) => Some(STATUS_TEXT_NAME),
            Self::Move(_) | Self::Fade(_) | Self::FadeBackground(_) => None,
        }
    }

    /// Draw layer; lower values draw first. Ties keep insertion order.
    pub fn z_index(&self) -> i32 {
        match self {
            Self::FadeBackground(_) => BACKGROUND_Z_INDEX,
            _ => 0,
        }
    }

    pub(crate) fn step(
        &mut self,
        _frame: FrameIndex,
        engine: &mut GameEngine,
    ) -> BoardcastResult<StepOutcome> {
        match self {
            // Passive objects do not move on their own.
            Self::Sprite(_) | Self::Text(_) => Ok(StepOutcome::Keep),
            Self::Move(controller) => controller.step(engine),
            Self::Fade(controller) => controller.step(engine),
            Self::FadeBackground(controller) => controller.step(engine),
        }
    }

    pub(crate) fn draw(&self, _frame: FrameIndex, canvas: &mut FrameCanvas) {
        match self {
            Self::Sprite(sprite) => sprite.draw(canvas),
            Self::Text(text) => text.draw(canvas),
            Self::FadeBackground(controller) => controller.draw(canvas),
            // Control objects have no visual representation.
            Self::Move(_) | Self::Fade(_) => {}
        }
    }
}

impl std::fmt::Debug for SceneObject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sprite(sprite) => f.debug_tuple("Sprite").field(&sprite.name()).finish(),
            Self::Text(text) => f.debug_tuple("Text").field(&text.text()).finish(),
            Self::Move(c) => c.fmt(f),
            Self::Fade(c) => c.fmt(f),
            Self::FadeBackground(c) => c.fmt(f),
        }
    }
}
