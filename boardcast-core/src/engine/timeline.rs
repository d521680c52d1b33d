//! Write-only scheduling cursor over an [`EventManager`].

use crate::engine::event_manager::{Event, EventManager};
use crate::foundation::error::{BoardcastError, BoardcastResult};

/// Tracks the current "moment" (frame offset) while commands build the
/// schedule. The moment only moves forward; appending never executes
/// anything.
#[derive(Debug, Default)]
pub struct Timeline {
    manager: EventManager,
    moment: u64,
}

impl Timeline {
    /// A fresh timeline at moment 0 with an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// The frame offset at which newly appended events will fire.
    pub fn moment(&self) -> u64 {
        self.moment
    }

    /// Schedule `event` at the current moment.
    pub fn append(&mut self, event: Event) {
        self.manager.append(self.moment, event);
    }

    /// Move the moment forward by `frames`. Rejects negative advances with
    /// [`BoardcastError::InvalidAdvance`].
    pub fn advance(&mut self, frames: i64) -> BoardcastResult<()> {
        if frames < 0 {
            return Err(BoardcastError::InvalidAdvance(frames));
        }
        self.moment += frames as u64;
        Ok(())
    }

    /// Finish planning, yielding the built schedule and the final moment
    /// (which is also the render's total frame count).
    pub fn finish(self) -> (EventManager, u64) {
        (self.manager, self.moment)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/timeline.rs"]
mod tests;
