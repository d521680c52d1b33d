use super::*;

use crate::encode::sink::InMemorySink;
use crate::engine::engine::GameEngine;
use crate::engine::timeline::Timeline;
use crate::foundation::core::{Canvas, Rgba8};
use crate::render::composite::ImageRgba;
use crate::render::frame::GameRenderer;

fn renderer(total: u64) -> GameRenderer {
    let engine = GameEngine::new(ImageRgba::solid(4, 4, Rgba8::BLACK));
    let mut timeline = Timeline::new();
    timeline.advance(total as i64).unwrap();
    let (events, total) = timeline.finish();
    GameRenderer::new(engine, events, 60, total, Canvas { width: 4, height: 4 })
}

#[test]
fn renders_exactly_total_frames_in_order() {
    let mut sink = InMemorySink::new();
    VideoRenderer::new(renderer(5)).render(&mut sink).unwrap();

    assert_eq!(sink.config().unwrap().fps, 60);
    assert_eq!(sink.frames().len(), 5);
    for (i, (idx, frame)) in sink.frames().iter().enumerate() {
        assert_eq!(idx.0, i as u64);
        assert_eq!(frame.width(), 4);
    }
}

#[test]
fn empty_schedule_renders_no_frames() {
    let mut sink = InMemorySink::new();
    VideoRenderer::new(renderer(0)).render(&mut sink).unwrap();
    assert!(sink.frames().is_empty());
    assert!(sink.config().is_some());
}
