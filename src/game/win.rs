//! Four-in-a-row detection over a whole board.
//!
//! Every cell is tried as the anchor of a four-cell window in each of the four
//! line directions. A window only counts when all of its cells are on the board
//! and held by the same player.

use super::{Board, Cell, Player};

/// Number of pieces in a winning line.
pub const LINE_LEN: usize = 4;

/// `(row, col)` coordinates of a winning window, starting at its anchor.
pub type Line = [(usize, usize); LINE_LEN];

/// Row/column steps: right, down, down-right, down-left.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// True if `player` holds four consecutive cells anywhere on the board.
pub fn has_win(board: &Board, player: Player) -> bool {
    winning_line(board, player).is_some()
}

/// First winning window for `player` in row-major anchor order.
pub fn winning_line(board: &Board, player: Player) -> Option<Line> {
    for row in 0..board.height() {
        for col in 0..board.width() {
            for &step in &DIRECTIONS {
                if let Some(line) = window(board, row, col, step, player) {
                    return Some(line);
                }
            }
        }
    }
    None
}

fn window(
    board: &Board,
    row: usize,
    col: usize,
    (d_row, d_col): (isize, isize),
    player: Player,
) -> Option<Line> {
    let mut line = [(0, 0); LINE_LEN];
    for (i, slot) in line.iter_mut().enumerate() {
        let i = i as isize;
        let r = row.checked_add_signed(d_row * i)?;
        let c = col.checked_add_signed(d_col * i)?;
        if board.get(r, c)? != Cell::Occupied(player) {
            return None;
        }
        *slot = (r, c);
    }
    Some(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build a board from text rows, top row first: `.` empty, `1`/`2` pieces.
    fn board_from(rows: &[&str]) -> Board {
        let width = rows[0].len();
        let mut board = Board::new(rows.len(), width).unwrap();
        for (r, line) in rows.iter().enumerate() {
            for (c, ch) in line.chars().enumerate() {
                match ch {
                    '1' => board.place(r, c, Player::One),
                    '2' => board.place(r, c, Player::Two),
                    _ => {}
                }
            }
        }
        board
    }

    #[test]
    fn test_empty_board_has_no_win() {
        let board = Board::new(6, 7).unwrap();
        assert!(!has_win(&board, Player::One));
        assert!(!has_win(&board, Player::Two));
    }

    #[test]
    fn test_horizontal_win() {
        let board = board_from(&[
            ".......",
            ".......",
            ".......",
            ".......",
            "...222.",
            "..1111.",
        ]);
        assert!(has_win(&board, Player::One));
        assert!(!has_win(&board, Player::Two));
        assert_eq!(
            winning_line(&board, Player::One),
            Some([(5, 2), (5, 3), (5, 4), (5, 5)])
        );
    }

    #[test]
    fn test_vertical_win() {
        let board = board_from(&[
            ".......",
            ".......",
            "......2",
            "......2",
            "1.....2",
            "1.1...2",
        ]);
        assert!(has_win(&board, Player::Two));
        assert!(!has_win(&board, Player::One));
        assert_eq!(
            winning_line(&board, Player::Two),
            Some([(2, 6), (3, 6), (4, 6), (5, 6)])
        );
    }

    #[test]
    fn test_diagonal_down_right_win() {
        let board = board_from(&[
            ".......",
            ".......",
            "1......",
            "21.....",
            "221....",
            "2221...",
        ]);
        assert!(has_win(&board, Player::One));
        assert_eq!(
            winning_line(&board, Player::One),
            Some([(2, 0), (3, 1), (4, 2), (5, 3)])
        );
    }

    #[test]
    fn test_diagonal_down_left_win() {
        let board = board_from(&[
            ".......",
            ".......",
            "......2",
            ".....21",
            "....211",
            "...2111",
        ]);
        assert!(has_win(&board, Player::Two));
        assert_eq!(
            winning_line(&board, Player::Two),
            Some([(2, 6), (3, 5), (4, 4), (5, 3)])
        );
    }

    #[test]
    fn test_three_in_a_row_is_not_a_win() {
        let boards = [
            board_from(&["....", "....", "....", "111."]),
            board_from(&["....", "1...", "1...", "1..."]),
            board_from(&["....", "..1.", ".12.", "122."]),
            board_from(&["....", ".1..", ".21.", ".221"]),
        ];
        for board in &boards {
            assert!(!has_win(board, Player::One), "false win on\n{board}");
        }
    }

    #[test]
    fn test_sparse_single_player_board() {
        let board = board_from(&[
            "1.1.1.1",
            ".......",
            "1.1.1.1",
            ".......",
            "1.1.1.1",
            ".......",
        ]);
        assert!(!has_win(&board, Player::One));
    }

    #[test]
    fn test_line_does_not_wrap_around_rows() {
        // Cells (0,5), (0,6), (1,0), (1,1) are consecutive in storage only
        let board = board_from(&[
            ".....11",
            "11.....",
        ]);
        assert!(!has_win(&board, Player::One));
    }

    #[test]
    fn test_broken_line_is_not_a_win() {
        let board = board_from(&["1121111"]);
        assert!(has_win(&board, Player::One));
        let board = board_from(&["1112111"]);
        assert!(!has_win(&board, Player::One));
    }

    #[test]
    fn test_board_smaller_than_line() {
        let board = board_from(&["111", "111", "111"]);
        assert!(!has_win(&board, Player::One));
    }
}
