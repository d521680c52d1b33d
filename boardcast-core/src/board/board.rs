//! The game board: who is on which space, and where that puts them on the
//! canvas.

use std::collections::HashMap;

use crate::foundation::core::Coord;
use crate::foundation::error::{BoardcastError, BoardcastResult, MAX_OCCUPANTS};

/// Per-occupant displacements from a space's anchor point, indexed by
/// `[occupant_count - 1][occupant_index]` as `(dy, dx)`.
///
/// These exact pixel offsets are a compatibility contract: one occupant sits
/// centered, two split left/right, three form a triangle, four a 2x2 square,
/// and five through seven interpolate the extras toward the center.
const DELTAS: [&[(i32, i32)]; MAX_OCCUPANTS] = [
    &[(0, 0)],
    &[(0, -16), (0, 16)],
    &[(-16, 0), (0, -16), (0, 16)],
    &[(-16, -16), (-16, 16), (16, -16), (16, 16)],
    &[(-16, -16), (-16, 16), (0, 0), (16, -16), (16, 16)],
    &[(-16, -16), (-16, 16), (0, -8), (0, 8), (16, -16), (16, 16)],
    &[
        (-16, -16),
        (-16, 16),
        (-8, 0),
        (0, -8),
        (0, 8),
        (16, -16),
        (16, 16),
    ],
];

/// Dictionary-like representation of the game board.
///
/// The board tracks how spaces (named by strings) map to 2-dimensional
/// canvas positions, as well as who is on which space. A "player" here is
/// merely an object with a visual representation on a space: actual human
/// players, but also inanimate things such as items placed on a space.
///
/// There is a soft limit of [`MAX_OCCUPANTS`] players per space, enforced
/// where positions are computed.
#[derive(Clone, Debug, Default)]
pub struct Board {
    spaces: HashMap<String, Coord>,
    // Per-space occupants, in order of arrival.
    occupants: HashMap<String, Vec<String>>,
    player_spaces: HashMap<String, String>,
}

impl Board {
    /// Build a board from the script's space definitions. Occupant lists
    /// start empty.
    pub fn new(spaces: impl IntoIterator<Item = (String, Coord)>) -> Self {
        Self {
            spaces: spaces.into_iter().collect(),
            occupants: HashMap::new(),
            player_spaces: HashMap::new(),
        }
    }

    /// All tracked player names, sorted. Sorting keeps every schedule built
    /// from a board walk deterministic.
    pub fn players(&self) -> Vec<String> {
        let mut names: Vec<String> = self.player_spaces.keys().cloned().collect();
        names.sort();
        names
    }

    /// True if the player is on this board.
    pub fn contains(&self, player: &str) -> bool {
        self.player_spaces.contains_key(player)
    }

    /// True if the space was defined in the script.
    pub fn has_space(&self, space: &str) -> bool {
        self.spaces.contains_key(space)
    }

    /// Anchor coordinate of a space.
    pub fn space_coord(&self, space: &str) -> BoardcastResult<Coord> {
        self.spaces
            .get(space)
            .copied()
            .ok_or_else(|| BoardcastError::UnknownSpace(space.to_string()))
    }

    /// The space occupied by the given player.
    pub fn space_of(&self, player: &str) -> BoardcastResult<&str> {
        self.player_spaces
            .get(player)
            .map(String::as_str)
            .ok_or_else(|| BoardcastError::UnknownPlayer(player.to_string()))
    }

    /// Occupants of a space, in order of arrival. Empty if the space has no
    /// occupants (or does not exist).
    pub fn occupants_of(&self, space: &str) -> &[String] {
        self.occupants.get(space).map_or(&[], Vec::as_slice)
    }

    /// Add a new player at the given space, placing it last in the space's
    /// occupant list. Fails with [`BoardcastError::DuplicatePlayer`] if the
    /// name is already tracked; use [`Board::move_player`] for existing
    /// players.
    pub fn add_player(&mut self, player: &str, space: &str) -> BoardcastResult<()> {
        if self.player_spaces.contains_key(player) {
            return Err(BoardcastError::DuplicatePlayer(player.to_string()));
        }
        if !self.spaces.contains_key(space) {
            return Err(BoardcastError::UnknownSpace(space.to_string()));
        }
        self.player_spaces
            .insert(player.to_string(), space.to_string());
        self.occupants
            .entry(space.to_string())
            .or_default()
            .push(player.to_string());
        Ok(())
    }

    /// Remove the player from the board.
    pub fn remove_player(&mut self, player: &str) -> BoardcastResult<()> {
        let space = self
            .player_spaces
            .remove(player)
            .ok_or_else(|| BoardcastError::UnknownPlayer(player.to_string()))?;
        if let Some(list) = self.occupants.get_mut(&space) {
            list.retain(|name| name != player);
        }
        Ok(())
    }

    /// Move an existing player to a new space, appending it to the
    /// destination's occupant list as the newest arrival.
    pub fn move_player(&mut self, player: &str, destination: &str) -> BoardcastResult<()> {
        if !self.player_spaces.contains_key(player) {
            return Err(BoardcastError::UnknownPlayer(player.to_string()));
        }
        if !self.spaces.contains_key(destination) {
            return Err(BoardcastError::UnknownSpace(destination.to_string()));
        }
        self.remove_player(player)?;
        self.add_player(player, destination)
    }

    /// Add or move, depending on whether the player is already tracked. This
    /// is the assignment idiom most commands use.
    pub fn set_player(&mut self, player: &str, space: &str) -> BoardcastResult<()> {
        if self.contains(player) {
            self.move_player(player, space)
        } else {
            self.add_player(player, space)
        }
    }

    /// Canvas position of the player, as the space's anchor offset by the
    /// displacement table entry for `(occupant count, arrival index)`.
    ///
    /// Fails with [`BoardcastError::TooManyOccupants`] when more than
    /// [`MAX_OCCUPANTS`] players share the space.
    pub fn position(&self, player: &str) -> BoardcastResult<Coord> {
        let space = self.space_of(player)?.to_string();
        let anchor = self.space_coord(&space)?;
        let occupants = self.occupants_of(&space);
        let count = occupants.len();
        let index = occupants
            .iter()
            .position(|name| name == player)
            .ok_or_else(|| BoardcastError::UnknownPlayer(player.to_string()))?;
        let Some(row) = count.checked_sub(1).and_then(|i| DELTAS.get(i)) else {
            return Err(BoardcastError::TooManyOccupants { space, count });
        };
        let (dy, dx) = row[index];
        Ok(anchor.offset(dy, dx))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/board/board.rs"]
mod tests;
