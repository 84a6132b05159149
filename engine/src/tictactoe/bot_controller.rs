use serde::{Deserialize, Serialize};

use crate::SessionRng;
use super::board::{Board, generate_moves};
use super::minimax::{SEARCH_DEPTH, minimax};
use super::types::{Position, Side};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BotType {
    #[default]
    Minimax,
    Random,
}

pub fn calculate_move(
    bot_type: BotType,
    side: Side,
    board: &mut Board,
    rng: &mut SessionRng,
) -> Option<Position> {
    match bot_type {
        BotType::Minimax => calculate_minimax_move(side, board),
        BotType::Random => calculate_random_move(board, rng),
    }
}

fn calculate_random_move(board: &Board, rng: &mut SessionRng) -> Option<Position> {
    let available_moves = generate_moves(board);
    if available_moves.is_empty() {
        return None;
    }
    let idx = rng.random_range(0..available_moves.len());
    Some(available_moves[idx])
}

pub fn calculate_minimax_move(side: Side, board: &mut Board) -> Option<Position> {
    minimax(SEARCH_DEPTH, side, board).best_move
}
