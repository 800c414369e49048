use quickcheck::Arbitrary;

use crate::{Board, Direction, Place, Player, WIN_LENGTH};

/// A small board with stones of two players scattered over it.
#[derive(Clone, Debug)]
pub struct StonesInput {
    pub size: usize,
    /// Places and which of the two players owns them.
    pub stones: Vec<(Place, bool)>,
}

impl StonesInput {
    pub fn build(&self) -> (Board, [Player; 2]) {
        let mut board = Board::new(self.size);
        let mut players = [Player::new("p1"), Player::new("p2")];
        for &(place, second) in &self.stones {
            board.place_stone(place.x, place.y, &mut players[usize::from(second)]);
        }
        (board, players)
    }
}

impl quickcheck::Arbitrary for StonesInput {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let size = usize::from(u8::arbitrary(g) % 12) + 1;
        let num_stones = usize::arbitrary(g) % (size * size + 1);
        let stones = (0..num_stones)
            .map(|_| {
                let x = (u8::arbitrary(g) as usize % size) as i32;
                let y = (u8::arbitrary(g) as usize % size) as i32;
                // Biased towards one player, so that long runs show up
                let second = u8::arbitrary(g) % 4 == 0;
                (Place::new(x, y), second)
            })
            .collect();
        StonesInput { size, stones }
    }
}

/// A single straight line of stones that fits on the board.
#[derive(Clone, Debug)]
pub struct LineInput {
    pub size: usize,
    pub start: Place,
    pub direction: Direction,
    pub len: usize,
}

impl LineInput {
    pub fn places(&self) -> Vec<Place> {
        (0..self.len as i32)
            .map(|i| self.start.offset(self.direction.step(), i))
            .collect()
    }
}

impl quickcheck::Arbitrary for LineInput {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let direction = Direction::arbitrary(g);
        let len = WIN_LENGTH + usize::from(u8::arbitrary(g) % 3);
        let size = len + usize::from(u8::arbitrary(g) % 12);
        // The range of start coordinates that keeps the line on the board
        let room = (size - len + 1) as u8;
        let free = |g: &mut quickcheck::Gen| i32::from(u8::arbitrary(g) % room);
        let any = |g: &mut quickcheck::Gen| (u8::arbitrary(g) as usize % size) as i32;
        let (dx, dy) = direction.step();
        let x = if dx == 0 { any(g) } else { free(g) };
        let y = match dy {
            0 => any(g),
            1 => free(g),
            _ => free(g) + len as i32 - 1,
        };
        LineInput {
            size,
            start: Place::new(x, y),
            direction,
            len,
        }
    }
}

impl quickcheck::Arbitrary for Direction {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        *g.choose(&[
            Direction::Horizontal,
            Direction::Vertical,
            Direction::DiagonalDown,
            Direction::DiagonalUp,
        ])
        .unwrap()
    }
}
