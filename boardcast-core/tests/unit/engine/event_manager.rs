use super::*;

use std::cell::RefCell;
use std::rc::Rc;

use crate::foundation::core::Rgba8;
use crate::render::composite::ImageRgba;

fn engine() -> GameEngine {
    GameEngine::new(ImageRgba::solid(8, 8, Rgba8::BLACK))
}

fn recording_event(log: &Rc<RefCell<Vec<u32>>>, id: u32) -> Event {
    let log = Rc::clone(log);
    Box::new(move |_engine| {
        log.borrow_mut().push(id);
        Ok(())
    })
}

#[test]
fn same_moment_events_fire_in_scheduling_order() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut manager = EventManager::new();
    manager.append(5, recording_event(&log, 1));
    manager.append(5, recording_event(&log, 2));
    manager.append(5, recording_event(&log, 3));

    let mut engine = engine();
    manager.step(FrameIndex(5), &mut engine).unwrap();
    assert_eq!(*log.borrow(), [1, 2, 3]);
}

#[test]
fn buckets_fire_once_and_are_discarded() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut manager = EventManager::new();
    manager.append(0, recording_event(&log, 7));
    assert_eq!(manager.pending_moments(), 1);

    let mut engine = engine();
    manager.step(FrameIndex(0), &mut engine).unwrap();
    manager.step(FrameIndex(0), &mut engine).unwrap();
    assert_eq!(*log.borrow(), [7]);
    assert_eq!(manager.pending_moments(), 0);
}

#[test]
fn frames_without_buckets_are_silent() {
    let mut manager = EventManager::new();
    let mut engine = engine();
    manager.step(FrameIndex(123), &mut engine).unwrap();
}

#[test]
fn a_failing_event_surfaces_its_error() {
    let mut manager = EventManager::new();
    manager.append(
        0,
        Box::new(|engine| engine.remove_object("nobody")),
    );
    let mut engine = engine();
    let err = manager.step(FrameIndex(0), &mut engine).unwrap_err();
    assert!(matches!(
        err,
        crate::foundation::error::BoardcastError::ObjectNotFound(_)
    ));
}
