use std::sync::atomic::{AtomicU32, Ordering};

use crate::Place;

static NEXT_PLAYER_ID: AtomicU32 = AtomicU32::new(0);

/// The value [`Player::get_move()`] reports before the player's first stone.
pub const NO_MOVE: (i32, i32) = (-1, -1);

/// Identifies a player. This is what the board stores in an occupied cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerId(u32);

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A participant in a game, with the place of their most recent stone.
///
/// Every call to [`Player::new()`] hands out a fresh [`PlayerId`], so two
/// players with the same name are still different players. A clone is the
/// same player.
#[derive(Clone, Debug)]
pub struct Player {
    id: PlayerId,
    name: String,
    last_move: Option<Place>,
}

impl Player {
    pub fn new(name: &str) -> Self {
        Self {
            id: PlayerId(NEXT_PLAYER_ID.fetch_add(1, Ordering::Relaxed)),
            name: String::from(name),
            last_move: None,
        }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Records `(x, y)` as the player's last move.
    ///
    /// Called by [`Board::place_stone()`](crate::Board::place_stone); no validation.
    pub fn set_move(&mut self, x: i32, y: i32) {
        self.last_move = Some(Place::new(x, y));
    }

    /// The last move as a coordinate pair, or [`NO_MOVE`] if there was none.
    pub fn get_move(&self) -> (i32, i32) {
        self.last_move.map_or(NO_MOVE, Into::into)
    }

    pub fn last_move(&self) -> Option<Place> {
        self.last_move
    }
}

impl PartialEq for Player {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Player {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_player_has_no_move() {
        let player = Player::new("p1");
        assert_eq!(player.name(), "p1");
        assert_eq!(player.get_move(), NO_MOVE);
        assert_eq!(player.last_move(), None);
    }

    #[test]
    fn set_move_overwrites() {
        let mut player = Player::new("p1");
        player.set_move(3, 4);
        player.set_move(7, 1);
        assert_eq!(player.get_move(), (7, 1));
        assert_eq!(player.last_move(), Some(Place::new(7, 1)));
    }

    #[test]
    fn identity_is_not_the_name() {
        let a = Player::new("same");
        let b = Player::new("same");
        assert_ne!(a, b);
        assert_ne!(a.id(), b.id());

        let mut a_clone = a.clone();
        a_clone.set_move(1, 1);
        assert_eq!(a, a_clone);
    }
}
