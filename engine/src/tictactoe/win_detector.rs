use super::board::{Board, generate_moves};
use super::types::{BOARD_SIZE, Cell, GameResult, Position, Side, WinningLine};

const fn line(cells: [(usize, usize); BOARD_SIZE]) -> [Position; BOARD_SIZE] {
    [
        Position::new(cells[0].0, cells[0].1),
        Position::new(cells[1].0, cells[1].1),
        Position::new(cells[2].0, cells[2].1),
    ]
}

/// Rows, then columns, then the main and anti diagonals.
pub const LINES: [[Position; BOARD_SIZE]; 8] = [
    line([(0, 0), (0, 1), (0, 2)]),
    line([(1, 0), (1, 1), (1, 2)]),
    line([(2, 0), (2, 1), (2, 2)]),
    line([(0, 0), (1, 0), (2, 0)]),
    line([(0, 1), (1, 1), (2, 1)]),
    line([(0, 2), (1, 2), (2, 2)]),
    line([(0, 0), (1, 1), (2, 2)]),
    line([(0, 2), (1, 1), (2, 0)]),
];

fn is_line_of(board: &Board, cells: &[Position; BOARD_SIZE], mark: Cell) -> bool {
    cells.iter().all(|&pos| board.get(pos) == mark)
}

pub fn has_won(side: Side, board: &Board) -> bool {
    let mark = Cell::from(side);
    LINES.iter().any(|cells| is_line_of(board, cells, mark))
}

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    LINES.iter().find_map(|cells| {
        [Side::Opponent, Side::Mine]
            .into_iter()
            .find(|&side| is_line_of(board, cells, side.into()))
            .map(|side| WinningLine::new(side, *cells))
    })
}

/// `None` while moves remain. Otherwise an opponent line outranks an
/// engine line, and a full board with neither is a draw.
pub fn terminal_result(board: &Board) -> Option<GameResult> {
    if !generate_moves(board).is_empty() {
        return None;
    }

    if has_won(Side::Opponent, board) {
        Some(GameResult::OpponentWin)
    } else if has_won(Side::Mine, board) {
        Some(GameResult::AutomatedWin)
    } else {
        Some(GameResult::Draw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_won_detects_every_line() {
        for cells in LINES {
            let mut board = Board::new();
            for pos in cells {
                board.set(pos, Cell::Mine);
            }

            assert!(has_won(Side::Mine, &board));
            assert!(!has_won(Side::Opponent, &board));
        }
    }

    #[test]
    fn test_two_in_a_line_is_not_a_win() {
        let board = Board::from_rows(["OO.", "XX.", "..."]);

        assert!(!has_won(Side::Mine, &board));
        assert!(!has_won(Side::Opponent, &board));
    }

    #[test]
    fn test_check_win_with_line_reports_cells() {
        let board = Board::from_rows(["X.O", "XO.", "O.X"]);

        let winning_line = check_win_with_line(&board).unwrap();

        assert_eq!(winning_line.side, Side::Mine);
        assert_eq!(
            winning_line.cells,
            [Position::new(0, 2), Position::new(1, 1), Position::new(2, 0)]
        );
        assert_eq!(winning_line.to_string(), "A3-B2-C1");
    }

    #[test]
    fn test_terminal_result_none_while_moves_remain() {
        assert_eq!(terminal_result(&Board::new()), None);
        assert_eq!(terminal_result(&Board::from_rows(["XO.", "...", "..."])), None);
    }

    #[test]
    fn test_terminal_result_opponent_win_takes_priority() {
        let board = Board::from_rows(["XXX", "OOO", "..."]);

        assert_eq!(terminal_result(&board), Some(GameResult::OpponentWin));
    }

    #[test]
    fn test_terminal_result_automated_win_and_draw() {
        let won = Board::from_rows(["OOO", "XX.", "X.."]);
        let drawn = Board::from_rows(["XOX", "XOO", "OXX"]);

        assert_eq!(terminal_result(&won), Some(GameResult::AutomatedWin));
        assert_eq!(terminal_result(&drawn), Some(GameResult::Draw));
    }
}
