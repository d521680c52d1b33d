use super::*;

use crate::engine::engine::GameEngine;
use crate::engine::text::STATUS_TEXT_NAME;
use crate::foundation::core::{FrameIndex, Rgba8};

fn engine_with_sprite(at: Coord) -> GameEngine {
    let mut engine = GameEngine::new(ImageRgba::solid(64, 64, Rgba8::BLACK));
    let image = ImageRgba::solid(4, 4, Rgba8::BLACK);
    engine
        .add_object(SceneObject::Sprite(Sprite::new("token", at, image)))
        .unwrap();
    engine
}

fn run_frames(engine: &mut GameEngine, frames: u64) {
    for f in 0..frames {
        engine.step(FrameIndex(f)).unwrap();
    }
}

#[test]
fn move_controller_interpolates_and_self_removes() {
    let mut engine = engine_with_sprite(Coord::new(0, 0));
    let controller =
        MoveObjectController::new(&engine, "token", Coord::new(100, 50), 10).unwrap();
    engine.add_object(SceneObject::Move(controller)).unwrap();
    assert_eq!(engine.object_count(), 2);

    engine.step(FrameIndex(0)).unwrap();
    assert_eq!(engine.sprite("token").unwrap().position(), Coord::new(10, 5));

    run_frames(&mut engine, 10);
    assert_eq!(
        engine.sprite("token").unwrap().position(),
        Coord::new(100, 50)
    );
    // The controller is gone; only the sprite remains.
    assert_eq!(engine.object_count(), 1);
}

#[test]
fn move_event_captures_position_at_fire_time() {
    let mut engine = engine_with_sprite(Coord::new(10, 10));
    engine.sprite_mut("token").unwrap().set_position(Coord::new(20, 20));

    let event = MoveObjectController::event("token".into(), Coord::new(30, 20), 10);
    event(&mut engine).unwrap();
    engine.step(FrameIndex(0)).unwrap();
    // One tenth of the way from (20,20), not from (10,10).
    assert_eq!(engine.sprite("token").unwrap().position(), Coord::new(21, 20));
}

#[test]
fn fade_out_removes_the_sprite_only_after_completion() {
    let mut engine = engine_with_sprite(Coord::new(0, 0));
    let event = FadeObjectController::fade_out_event("token".into(), 10);
    event(&mut engine).unwrap();

    for f in 0..9 {
        engine.step(FrameIndex(f)).unwrap();
        assert!(engine.has_object("token"), "sprite gone at frame {f}");
    }
    let alpha = engine.sprite("token").unwrap().alpha();
    assert!((alpha - 0.1).abs() < 1e-6);

    engine.step(FrameIndex(9)).unwrap();
    assert!(!engine.has_object("token"));
    assert_eq!(engine.object_count(), 0);
}

#[test]
fn fade_in_spawns_hidden_and_reaches_full_opacity() {
    let mut engine = GameEngine::new(ImageRgba::solid(64, 64, Rgba8::BLACK));
    let sprite = Sprite::hidden("token", Coord::new(5, 5), ImageRgba::solid(4, 4, Rgba8::BLACK));
    let event = FadeObjectController::fade_in_event(sprite, 10);
    event(&mut engine).unwrap();
    assert_eq!(engine.sprite("token").unwrap().alpha(), 0.0);

    run_frames(&mut engine, 10);
    assert_eq!(engine.sprite("token").unwrap().alpha(), 1.0);
    assert_eq!(engine.object_count(), 1);
}

#[test]
fn background_fade_commits_the_image_at_the_end() {
    let mut engine = GameEngine::new(ImageRgba::solid(8, 8, Rgba8::BLACK));
    let incoming = ImageRgba::solid(
        8,
        8,
        Rgba8 {
            r: 255,
            g: 0,
            b: 0,
            a: 255,
        },
    );
    let event = FadeBackgroundController::event(incoming.clone(), 5);
    event(&mut engine).unwrap();

    run_frames(&mut engine, 4);
    assert_ne!(*engine.background(), incoming);
    engine.step(FrameIndex(4)).unwrap();
    assert_eq!(*engine.background(), incoming);
    assert_eq!(engine.object_count(), 0);
}

#[test]
fn controllers_are_nameless_and_text_is_not() {
    let controller = FadeObjectController::new("token", 0.0, 1.0, 10);
    assert_eq!(SceneObject::Fade(controller).name(), None);

    let text = crate::engine::text::StatusText::new("hi", ImageRgba::solid(2, 2, Rgba8::BLACK));
    assert_eq!(SceneObject::Text(text).name(), Some(STATUS_TEXT_NAME));
}

#[test]
fn background_fade_draws_under_everything() {
    let controller = FadeBackgroundController::new(ImageRgba::solid(2, 2, Rgba8::BLACK), 5);
    assert_eq!(
        SceneObject::FadeBackground(controller).z_index(),
        BACKGROUND_Z_INDEX
    );
}
