//! Movement planning: batching logical board moves into one coherent
//! animation step.

use crate::board::board::Board;
use crate::engine::controllers::MoveObjectController;
use crate::engine::timeline::Timeline;
use crate::foundation::core::Coord;
use crate::foundation::error::BoardcastResult;

/// Whether a movement is a simple adjustment of position (`Short`) or a
/// significant movement to another part of the board (`Long`). Kinds are
/// ordered; merging two requests keeps the greater one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum MovementKind {
    /// Cosmetic same-space adjustment.
    Short,
    /// Cross-board move.
    Long,
}

impl MovementKind {
    /// Animation length in frames for this kind of movement.
    pub fn length_frames(self) -> u64 {
        match self {
            Self::Short => 30,
            Self::Long => 60,
        }
    }
}

#[derive(Clone, Debug)]
struct PlannedMove {
    player: String,
    kind: MovementKind,
    source: Coord,
    destination: Coord,
    // Cleared when the player disappears from the board before the snapshot;
    // such entries keep their kind for the scope duration but emit nothing.
    live: bool,
}

/// Batches one or more logical board moves into a single animation step, so
/// that bystanders sharing a vacated or newly occupied space also animate to
/// their recomputed offset positions.
///
/// Usage is an explicit begin/commit pair: call [`MovementPlanner::begin`]
/// before mutating the board, register any deliberate movers with
/// [`MovementPlanner::add_player`], mutate the board, then call
/// [`MovementPlanner::commit`]. On an error path, drop the planner without
/// committing — a failed command must not schedule partial animation.
#[derive(Clone, Debug)]
pub struct MovementPlanner {
    moves: Vec<PlannedMove>,
}

impl MovementPlanner {
    /// Open a movement scope, registering every player currently on the
    /// board with a trivial short movement so that anyone repositioned by
    /// someone else's move still animates smoothly.
    pub fn begin(board: &Board) -> BoardcastResult<Self> {
        let mut planner = Self { moves: Vec::new() };
        for player in board.players() {
            planner.add_player(board, &player, MovementKind::Short)?;
        }
        Ok(planner)
    }

    /// Register a player for this movement. If the player is already
    /// registered, the entry keeps the greater of the two kinds and refreshes
    /// its source and destination to the player's current position.
    pub fn add_player(
        &mut self,
        board: &Board,
        player: &str,
        kind: MovementKind,
    ) -> BoardcastResult<()> {
        let pos = board.position(player)?;
        if let Some(entry) = self.moves.iter_mut().find(|m| m.player == player) {
            entry.kind = entry.kind.max(kind);
            entry.source = pos;
            entry.destination = pos;
            entry.live = true;
        } else {
            self.moves.push(PlannedMove {
                player: player.to_string(),
                kind,
                source: pos,
                destination: pos,
                live: true,
            });
        }
        Ok(())
    }

    /// Close the scope: take the destination snapshot and schedule the
    /// resulting movement on `timeline`.
    ///
    /// Every registered live player whose position changed gets a move
    /// animation at the timeline's current moment; the timeline then advances
    /// by the maximum kind length across all registered players, so
    /// subsequent commands serialize after the slowest concurrent animation.
    /// An empty scope is a no-op with no time advance.
    pub fn commit(mut self, board: &Board, timeline: &mut Timeline) -> BoardcastResult<()> {
        self.take_destination_snapshot(board)?;

        for planned in &self.moves {
            if !planned.live || planned.source == planned.destination {
                continue;
            }
            timeline.append(MoveObjectController::event(
                planned.player.clone(),
                planned.destination,
                planned.kind.length_frames(),
            ));
        }

        if let Some(max_length) = self
            .moves
            .iter()
            .map(|m| m.kind.length_frames())
            .max()
        {
            timeline.advance(max_length as i64)?;
        }
        Ok(())
    }

    // Re-read each registered player's current board position as its
    // destination. Players no longer on the board are marked dead: they emit
    // no animation but still count toward the scope duration.
    fn take_destination_snapshot(&mut self, board: &Board) -> BoardcastResult<()> {
        for planned in &mut self.moves {
            if !board.contains(&planned.player) {
                planned.live = false;
                continue;
            }
            planned.destination = board.position(&planned.player)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/board/movement.rs"]
mod tests;
