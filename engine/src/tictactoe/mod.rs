mod board;
mod bot_controller;
mod evaluator;
mod minimax;
mod self_play;
mod session;
mod types;
mod win_detector;

pub use board::{Board, generate_moves};
pub use bot_controller::{BotType, calculate_minimax_move, calculate_move};
pub use evaluator::{evaluate, evaluate_line};
pub use minimax::{SEARCH_DEPTH, minimax};
pub use self_play::{SelfPlayReport, run_self_play};
pub use session::{GameSession, SessionState, TurnOutcome};
pub use types::{BOARD_SIZE, Cell, GameResult, Position, SearchResult, Side, WinningLine};
pub use win_detector::{LINES, check_win_with_line, has_won, terminal_result};
