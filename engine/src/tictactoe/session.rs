use crate::log;
use super::board::Board;
use super::minimax::{SEARCH_DEPTH, minimax};
use super::types::{Cell, GameResult, Position, SearchResult, Side};
use super::win_detector::terminal_result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    AwaitingHumanMove,
    AiResponding,
    GameOver(GameResult),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnOutcome {
    pub human_move: Position,
    /// The engine's search result, if the engine got to move this turn.
    pub engine_reply: Option<SearchResult>,
    pub result: Option<GameResult>,
}

impl TurnOutcome {
    pub fn engine_move(&self) -> Option<Position> {
        self.engine_reply.and_then(|reply| reply.best_move)
    }
}

/// One game between a human (`Opponent`) who always moves first and the engine (`Mine`).
///
/// Each `submit_move` runs a whole turn: the human move, a terminal check,
/// the engine's reply, and a second terminal check.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    state: SessionState,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::start()
    }
}

impl GameSession {
    pub fn start() -> Self {
        Self {
            board: Board::new(),
            state: SessionState::AwaitingHumanMove,
        }
    }

    #[cfg(test)]
    fn with_board(board: Board) -> Self {
        Self {
            board,
            state: SessionState::AwaitingHumanMove,
        }
    }

    pub fn restart(&mut self) {
        log!("Session restarted");
        *self = Self::start();
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn result(&self) -> Option<GameResult> {
        match self.state {
            SessionState::GameOver(result) => Some(result),
            _ => None,
        }
    }

    pub fn is_over(&self) -> bool {
        self.result().is_some()
    }

    pub fn submit_move(&mut self, position: Position) -> Result<TurnOutcome, String> {
        if let Some(result) = self.apply_human_move(position)? {
            return Ok(TurnOutcome {
                human_move: position,
                engine_reply: None,
                result: Some(result),
            });
        }

        let reply = self.respond();
        Ok(TurnOutcome {
            human_move: position,
            engine_reply: Some(reply),
            result: self.result(),
        })
    }

    /// Places the human mark. Returns the result if this move ended the game.
    fn apply_human_move(&mut self, position: Position) -> Result<Option<GameResult>, String> {
        match self.state {
            SessionState::AwaitingHumanMove => {}
            SessionState::AiResponding => return Err("Engine is still responding".to_string()),
            SessionState::GameOver(_) => return Err("Game is already over".to_string()),
        }
        if !self.board.is_empty_at(position) {
            return Err(format!("Cell {} is already marked", position));
        }

        self.board.set(position, Cell::Opponent);
        log!("Human played {}", position);

        if self.finish_if_terminal() {
            return Ok(self.result());
        }
        self.state = SessionState::AiResponding;
        Ok(None)
    }

    fn respond(&mut self) -> SearchResult {
        let reply = minimax(SEARCH_DEPTH, Side::Mine, &mut self.board);

        match reply.best_move {
            Some(position) => {
                self.board.set(position, Cell::Mine);
                log!("Engine played {} (score {})", position, reply.score);
            }
            None => log!("Engine found no move (score {})", reply.score),
        }

        if !self.finish_if_terminal() {
            self.state = SessionState::AwaitingHumanMove;
        }
        reply
    }

    fn finish_if_terminal(&mut self) -> bool {
        match terminal_result(&self.board) {
            Some(result) => {
                self.state = SessionState::GameOver(result);
                log!("Game over: {}", result);
                true
            }
            None => false,
        }
    }
}
