use tictactoe_engine::tictactoe::{BOARD_SIZE, Board, Cell};

use crate::config::DisplayConfig;

const ROW_LETTERS: [char; BOARD_SIZE] = ['A', 'B', 'C'];

pub fn render_board(board: &Board, display: &DisplayConfig) -> String {
    let mut out = String::from("  1 2 3\n");
    for (letter, row) in ROW_LETTERS.iter().zip(board.rows()) {
        let cells: Vec<String> = row
            .iter()
            .map(|&cell| symbol(cell, display).to_string())
            .collect();
        out.push_str(&format!("{} {}\n", letter, cells.join(" ")));
    }
    out
}

fn symbol(cell: Cell, display: &DisplayConfig) -> char {
    match cell {
        Cell::Empty => '.',
        Cell::Mine => display.engine_symbol,
        Cell::Opponent => display.human_symbol,
    }
}
