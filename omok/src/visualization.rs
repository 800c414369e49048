use crate::{Board, Cell, Player};

/// The symbols for the stones of the first, second, ... player.
const PLAYER_SYMBOLS: [char; 4] = ['●', '○', '▲', '△'];
const UNKNOWN_PLAYER_SYMBOL: char = '◆';
const EMPTY_SYMBOL: char = '·';

/// Draws the board as text, with column indices on top and row indices on the left.
///
/// Stones of `players[i]` are drawn with the i-th symbol of `●○▲△`, stones of
/// anyone else as `◆`. Columns are one character wider than the largest index.
pub fn visualize_board(board: &Board, players: &[&Player]) -> String {
    let symbol = |cell: Cell| match cell {
        Cell::Empty => EMPTY_SYMBOL,
        Cell::Occupied(id) => players
            .iter()
            .position(|p| p.id() == id)
            .and_then(|idx| PLAYER_SYMBOLS.get(idx).copied())
            .unwrap_or(UNKNOWN_PLAYER_SYMBOL),
    };
    let digits = (board.size() - 1).to_string().len();
    let col_width = digits + 1;
    let label_width = digits.max(3);
    let border = "─".repeat(col_width * board.size() + 1);

    // Draw the top of the box
    let mut result = " ".repeat(label_width + 2);
    for x in 0..board.size() {
        result += &format!("{:>col_width$}", x);
    }
    result += &format!("\n{}╭{}╮\n", " ".repeat(label_width + 1), border);

    for (y, row) in board.rows().enumerate() {
        result += &format!("{:>label_width$} │", y);
        for &cell in row {
            result += &format!("{:>col_width$}", symbol(cell));
        }
        result += " │\n";
    }

    // Draw the bottom of the box
    result += &format!("{}╰{}╯", " ".repeat(label_width + 1), border);
    result
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&visualize_board(self, &[]))
    }
}
