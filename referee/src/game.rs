use omok::{visualize_board, Board, Place, PlacementBounds, Player, WinningRow};
use tracing::{debug, trace, warn};

use crate::error::IllegalMove;
use crate::script::GameScript;

#[derive(Debug)]
pub enum GameResult {
    WonByPlayer {
        player_idx: usize,
        /// The 0-based index of the winning move.
        move_idx: usize,
        row: WinningRow,
    },
    /// The board filled up without anyone winning.
    Draw,
    /// The script ended before the game did.
    Unfinished,
}

/// A board together with the two players of a script.
pub struct Game {
    pub board: Board,
    pub players: [Player; 2],
}

impl Game {
    pub fn new(script: &GameScript, bounds: PlacementBounds) -> Self {
        let [name_1, name_2] = &script.players;
        Self {
            board: Board::with_bounds(script.board_size(), bounds),
            players: [Player::new(name_1), Player::new(name_2)],
        }
    }

    /// Plays the moves in order, starting with the first player.
    ///
    /// Unlike the board itself, this rejects stones that the board would ignore
    /// or that would replace another stone.
    pub fn play(&mut self, moves: &[Place]) -> Result<GameResult, IllegalMove> {
        for (move_idx, &place) in moves.iter().enumerate() {
            let player_idx = move_idx % 2;
            if !self.board.admits(place.x, place.y) {
                return Err(IllegalMove::OutOfBounds {
                    move_idx,
                    place,
                    source: self.board.cell(place.x, place.y).err(),
                });
            }
            if self.board.is_occupied(place.x, place.y) {
                return Err(IllegalMove::Occupied { move_idx, place });
            }

            let player = &mut self.players[player_idx];
            self.board.place_stone(place.x, place.y, player);
            trace!(player = player.name(), %place, "Stone placed");

            let remaining = moves.len() - move_idx - 1;
            if let Some(row) = self.board.find_winning_row(player) {
                debug!(winner = player.name(), move_idx, "Game won");
                if remaining > 0 {
                    warn!(remaining, "Ignoring moves after the game was won");
                }
                return Ok(GameResult::WonByPlayer {
                    player_idx,
                    move_idx,
                    row,
                });
            }
            if self.board.is_full() {
                debug!(move_idx, "Board is full");
                if remaining > 0 {
                    warn!(remaining, "Ignoring moves after the board filled up");
                }
                return Ok(GameResult::Draw);
            }
        }
        Ok(GameResult::Unfinished)
    }

    pub fn visualize(&self) -> String {
        let [p1, p2] = &self.players;
        visualize_board(&self.board, &[p1, p2])
    }
}

/// Replays a game script on a fresh board.
pub fn play_game(script: &GameScript, bounds: PlacementBounds) -> Result<GameResult, IllegalMove> {
    Game::new(script, bounds).play(&script.moves)
}
