//! Time-indexed action queue.

use std::collections::HashMap;

use crate::engine::engine::GameEngine;
use crate::foundation::core::FrameIndex;
use crate::foundation::error::BoardcastResult;

/// A scheduled action, run once against the engine at its due frame.
pub type Event = Box<dyn FnOnce(&mut GameEngine) -> BoardcastResult<()>>;

/// Frame-indexed buckets of pending events.
///
/// Events scheduled for the same moment execute in first-scheduled order.
/// Each bucket is visited exactly once: playback proceeds monotonically from
/// frame 0 and [`EventManager::step`] discards the bucket it fires. An event
/// appended for a moment already in the past will never fire.
#[derive(Default)]
pub struct EventManager {
    buckets: HashMap<u64, Vec<Event>>,
}

impl EventManager {
    /// An empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `event` to fire at `moment`.
    pub fn append(&mut self, moment: u64, event: Event) {
        self.buckets.entry(moment).or_default().push(event);
    }

    /// Number of moments with at least one pending event.
    pub fn pending_moments(&self) -> usize {
        self.buckets.len()
    }

    /// Fire every event due at `frame`, in scheduling order, then discard
    /// the bucket. A failing event aborts the render.
    pub fn step(&mut self, frame: FrameIndex, engine: &mut GameEngine) -> BoardcastResult<()> {
        if let Some(batch) = self.buckets.remove(&frame.0) {
            for event in batch {
                event(engine)?;
            }
        }
        Ok(())
    }
}

impl std::fmt::Debug for EventManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut moments: Vec<(&u64, usize)> =
            self.buckets.iter().map(|(k, v)| (k, v.len())).collect();
        moments.sort();
        f.debug_struct("EventManager").field("buckets", &moments).finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/event_manager.rs"]
mod tests;
