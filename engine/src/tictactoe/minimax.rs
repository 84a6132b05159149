use std::ops::{Deref, DerefMut};

use super::board::{Board, generate_moves};
use super::evaluator::evaluate;
use super::types::{Cell, Position, SearchResult, Side};

/// Plies searched for the engine's reply: its own move and one answer.
pub const SEARCH_DEPTH: usize = 2;

/// A provisional move that is taken back when the guard is dropped.
struct TrialMove<'a> {
    board: &'a mut Board,
    position: Position,
}

impl<'a> TrialMove<'a> {
    fn place(board: &'a mut Board, position: Position, side: Side) -> Self {
        board.set(position, side.into());
        Self { board, position }
    }
}

impl Deref for TrialMove<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for TrialMove<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for TrialMove<'_> {
    fn drop(&mut self) {
        self.board.set(self.position, Cell::Empty);
    }
}

/// Depth-limited minimax. `Mine` maximizes and `Opponent` minimizes; among
/// equal scores the first move in row-major order is kept.
///
/// The board is mutated during the search but is identical on return.
pub fn minimax(depth: usize, side: Side, board: &mut Board) -> SearchResult {
    let moves = generate_moves(board);
    if moves.is_empty() || depth == 0 {
        return SearchResult::leaf(evaluate(board));
    }

    let mut best = SearchResult::leaf(match side {
        Side::Mine => i32::MIN,
        Side::Opponent => i32::MAX,
    });

    for position in moves {
        let score = {
            let mut trial = TrialMove::place(board, position, side);
            minimax(depth - 1, side.opponent(), &mut trial).score
        };

        let improves = match side {
            Side::Mine => score > best.score,
            Side::Opponent => score < best.score,
        };
        if improves {
            best = SearchResult {
                score,
                best_move: Some(position),
            };
        }
    }

    best
}
