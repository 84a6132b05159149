use std::fmt;
use std::str::FromStr;

pub const BOARD_SIZE: usize = 3;

const ROW_LETTERS: [char; BOARD_SIZE] = ['A', 'B', 'C'];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Mine,
    Opponent,
}

/// The side to move. `Mine` is the engine and maximizes; `Opponent` minimizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Mine,
    Opponent,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::Mine => Side::Opponent,
            Side::Opponent => Side::Mine,
        }
    }
}

impl From<Side> for Cell {
    fn from(side: Side) -> Self {
        match side {
            Side::Mine => Cell::Mine,
            Side::Opponent => Cell::Opponent,
        }
    }
}

/// A cell coordinate. Both components are always in `0..BOARD_SIZE`.
///
/// Externally a cell is named by a row letter and a column digit, so
/// `Position::new(1, 2)` is `B3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub(super) row: usize,
    pub(super) col: usize,
}

impl Position {
    /// Panics on out-of-range coordinates; use `try_new` for unchecked input.
    pub const fn new(row: usize, col: usize) -> Self {
        assert!(row < BOARD_SIZE && col < BOARD_SIZE, "position out of bounds");
        Self { row, col }
    }

    pub fn try_new(row: usize, col: usize) -> Result<Self, String> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(format!("Position ({}, {}) out of bounds", row, col));
        }
        Ok(Self { row, col })
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", ROW_LETTERS[self.row], self.col + 1)
    }
}

impl FromStr for Position {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        let (Some(letter), Some(digit), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(format!("Invalid cell '{}': expected a letter A-C and a digit 1-3", trimmed));
        };

        let row = ROW_LETTERS
            .iter()
            .position(|&l| l == letter.to_ascii_uppercase())
            .ok_or_else(|| format!("Invalid row '{}': expected A, B or C", letter))?;
        let col = match digit.to_digit(10) {
            Some(d @ 1..=3) => d as usize - 1,
            _ => return Err(format!("Invalid column '{}': expected 1, 2 or 3", digit)),
        };

        Self::try_new(row, col)
    }
}

/// Outcome of a search: the best score and the move that reaches it.
/// `best_move` is `None` when the position had no legal moves or the depth was exhausted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub score: i32,
    pub best_move: Option<Position>,
}

impl SearchResult {
    pub fn leaf(score: i32) -> Self {
        Self {
            score,
            best_move: None,
        }
    }

    pub fn row(&self) -> isize {
        self.best_move.map_or(-1, |pos| pos.row as isize)
    }

    pub fn col(&self) -> isize {
        self.best_move.map_or(-1, |pos| pos.col as isize)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    AutomatedWin,
    OpponentWin,
    Draw,
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            GameResult::AutomatedWin => "I won",
            GameResult::OpponentWin => "You won",
            GameResult::Draw => "Draw!",
        };
        f.write_str(text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub side: Side,
    pub cells: [Position; BOARD_SIZE],
}

impl WinningLine {
    pub fn new(side: Side, cells: [Position; BOARD_SIZE]) -> Self {
        Self { side, cells }
    }
}

impl fmt::Display for WinningLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.cells;
        write!(f, "{}-{}-{}", a, b, c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_ids_map_to_zero_based_positions() {
        assert_eq!("A1".parse::<Position>(), Ok(Position::new(0, 0)));
        assert_eq!("b2".parse::<Position>(), Ok(Position::new(1, 1)));
        assert_eq!(" C3 ".parse::<Position>(), Ok(Position::new(2, 2)));
        assert_eq!("A3".parse::<Position>(), Ok(Position::new(0, 2)));
    }

    #[test]
    fn test_display_is_inverse_of_parse() {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let pos = Position::new(row, col);
                assert_eq!(pos.to_string().parse::<Position>(), Ok(pos));
            }
        }
    }

    #[test]
    fn test_invalid_cell_ids_are_rejected() {
        assert!("D1".parse::<Position>().is_err());
        assert!("A0".parse::<Position>().is_err());
        assert!("A4".parse::<Position>().is_err());
        assert!("A".parse::<Position>().is_err());
        assert!("A12".parse::<Position>().is_err());
        assert!("".parse::<Position>().is_err());
    }

    #[test]
    fn test_try_new_checks_bounds() {
        assert!(Position::try_new(2, 2).is_ok());
        assert!(Position::try_new(3, 0).is_err());
        assert!(Position::try_new(0, 3).is_err());
    }

    #[test]
    #[should_panic]
    fn test_new_panics_out_of_bounds() {
        let _ = Position::new(0, 3);
    }

    #[test]
    fn test_leaf_result_reports_minus_one_coordinates() {
        let result = SearchResult::leaf(7);

        assert_eq!(result.row(), -1);
        assert_eq!(result.col(), -1);
    }

    #[test]
    fn test_side_opponent_flips() {
        assert_eq!(Side::Mine.opponent(), Side::Opponent);
        assert_eq!(Side::Opponent.opponent(), Side::Mine);
        assert_eq!(Cell::from(Side::Opponent), Cell::Opponent);
    }
}
