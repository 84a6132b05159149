use super::board::Board;
use super::types::Cell;
use super::win_detector::LINES;

/// Heuristic score of the whole board from the engine's point of view:
/// the sum of `evaluate_line` over all eight lines.
pub fn evaluate(board: &Board) -> i32 {
    LINES
        .iter()
        .map(|&[a, b, c]| evaluate_line(board.get(a), board.get(b), board.get(c)))
        .sum()
}

/// Scores one line scanned left to right.
///
/// +100, +10, +1 for three, two or one engine marks with the rest empty;
/// -100, -10, -1 for the opponent; 0 for an empty or mixed line.
pub fn evaluate_line(first: Cell, second: Cell, third: Cell) -> i32 {
    let mut score = match first {
        Cell::Mine => 1,
        Cell::Opponent => -1,
        Cell::Empty => 0,
    };

    match second {
        Cell::Mine => match score {
            1 => score = 10,
            -1 => return 0,
            _ => score = 1,
        },
        Cell::Opponent => match score {
            -1 => score = -10,
            1 => return 0,
            _ => score = -1,
        },
        Cell::Empty => {}
    }

    match third {
        Cell::Mine => {
            if score > 0 {
                score *= 10;
            } else if score < 0 {
                return 0;
            } else {
                score = 1;
            }
        }
        Cell::Opponent => {
            if score < 0 {
                score *= 10;
            } else if score > 0 {
                return 0;
            } else {
                score = -1;
            }
        }
        Cell::Empty => {}
    }

    score
}
