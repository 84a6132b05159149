use super::types::{BOARD_SIZE, Cell, Position, Side};
use super::win_detector::has_won;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from rows written as `"X.O"`, where `O` is `Mine`,
    /// `X` is `Opponent` and `.` is empty.
    #[cfg(test)]
    pub fn from_rows(rows: [&str; BOARD_SIZE]) -> Self {
        let mut board = Self::new();
        for (row, line) in rows.iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                let cell = match ch {
                    'O' => Cell::Mine,
                    'X' => Cell::Opponent,
                    _ => Cell::Empty,
                };
                board.set(Position::new(row, col), cell);
            }
        }
        board
    }

    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.row][pos.col]
    }

    pub fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.row][pos.col] = cell;
    }

    pub fn is_empty_at(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&cell| cell != Cell::Empty))
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell; BOARD_SIZE]> {
        self.cells.iter()
    }
}

/// Legal moves in row-major order. Empty once either side has a line,
/// even if empty cells remain.
pub fn generate_moves(board: &Board) -> Vec<Position> {
    if has_won(Side::Mine, board) || has_won(Side::Opponent, board) {
        return Vec::new();
    }

    let mut moves = Vec::new();
    for (row, cells) in board.rows().enumerate() {
        for (col, &cell) in cells.iter().enumerate() {
            if cell == Cell::Empty {
                moves.push(Position::new(row, col));
            }
        }
    }
    moves
}
