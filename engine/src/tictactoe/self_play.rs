use crate::SessionRng;
use super::board::Board;
use super::bot_controller::{BotType, calculate_move};
use super::types::{GameResult, Position, Side};
use super::win_detector::terminal_result;

#[derive(Debug, Clone)]
pub struct SelfPlayReport {
    pub board: Board,
    pub moves: Vec<(Side, Position)>,
    pub result: GameResult,
    pub seed: u64,
}

/// Plays one game with the engine (`Mine`, always minimax) against
/// `opponent_bot`, starting with `first`.
pub fn run_self_play(first: Side, opponent_bot: BotType, rng: &mut SessionRng) -> SelfPlayReport {
    let mut board = Board::new();
    let mut moves = Vec::new();
    let mut side = first;

    loop {
        let bot_type = match side {
            Side::Mine => BotType::Minimax,
            Side::Opponent => opponent_bot,
        };
        let Some(position) = calculate_move(bot_type, side, &mut board, rng) else {
            break;
        };

        board.set(position, side.into());
        moves.push((side, position));
        side = side.opponent();
    }

    // both bots only run out of moves on a terminal board
    let result = terminal_result(&board).unwrap_or(GameResult::Draw);
    SelfPlayReport {
        board,
        moves,
        result,
        seed: rng.seed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::board::generate_moves;

    #[test]
    fn test_minimax_against_minimax_finishes_in_a_draw() {
        for first in [Side::Mine, Side::Opponent] {
            let report = run_self_play(first, BotType::Minimax, &mut SessionRng::new(0));

            assert_eq!(report.moves.len(), 9);
            assert_eq!(report.result, GameResult::Draw);
            assert!(generate_moves(&report.board).is_empty());
            assert_eq!(report.moves[0].0, first);
        }
    }

    #[test]
    fn test_sides_alternate_and_moves_are_distinct() {
        let report = run_self_play(Side::Opponent, BotType::Random, &mut SessionRng::new(42));

        for pair in report.moves.windows(2) {
            assert_ne!(pair[0].0, pair[1].0);
        }
        let mut cells: Vec<Position> = report.moves.iter().map(|&(_, pos)| pos).collect();
        cells.sort_by_key(|pos| (pos.row, pos.col));
        cells.dedup();
        assert_eq!(cells.len(), report.moves.len());
    }

    #[test]
    fn test_games_against_random_bot_always_terminate() {
        for seed in 0..50 {
            let report = run_self_play(Side::Opponent, BotType::Random, &mut SessionRng::new(seed));

            assert!(report.moves.len() <= 9);
            assert!(generate_moves(&report.board).is_empty());
            assert_eq!(Some(report.result), terminal_result(&report.board));
            assert_eq!(report.seed, seed);
        }
    }

    #[test]
    fn test_same_seed_replays_same_game() {
        let first = run_self_play(Side::Opponent, BotType::Random, &mut SessionRng::new(7));
        let second = run_self_play(Side::Opponent, BotType::Random, &mut SessionRng::new(7));

        assert_eq!(first.moves, second.moves);
        assert_eq!(first.board, second.board);
    }
}
