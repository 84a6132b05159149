use std::io::{self, BufRead, Write};

use tictactoe_engine::log;
use tictactoe_engine::tictactoe::{GameSession, Position, check_win_with_line, evaluate};

use crate::config::DisplayConfig;
use crate::render::render_board;

const HELP: &str = "Enter a cell (A1-C3), 'new' to restart or 'quit' to exit.";

/// Interactive game loop: one cell identifier per input line.
pub fn run_interactive<R: BufRead, W: Write>(
    input: R,
    output: &mut W,
    display: &DisplayConfig,
) -> io::Result<()> {
    let mut session = GameSession::start();
    writeln!(output, "{}", HELP)?;
    write!(output, "{}", render_board(session.board(), display))?;

    for line in input.lines() {
        let line = line?;
        let command = line.trim();
        if command.is_empty() {
            continue;
        }

        match command.to_ascii_lowercase().as_str() {
            "quit" | "exit" => break,
            "new" => {
                session.restart();
                write!(output, "{}", render_board(session.board(), display))?;
                continue;
            }
            "help" => {
                writeln!(output, "{}", HELP)?;
                continue;
            }
            _ => {}
        }

        let position: Position = match command.parse() {
            Ok(position) => position,
            Err(e) => {
                writeln!(output, "{}", e)?;
                continue;
            }
        };

        let outcome = match session.submit_move(position) {
            Ok(outcome) => outcome,
            Err(e) => {
                writeln!(output, "{}", e)?;
                continue;
            }
        };

        if let Some(engine_move) = outcome.engine_move() {
            writeln!(output, "I play {}", engine_move)?;
        }
        write!(output, "{}", render_board(session.board(), display))?;
        if display.show_evaluation {
            writeln!(output, "Evaluation: {}", evaluate(session.board()))?;
        }

        if let Some(result) = outcome.result {
            match check_win_with_line(session.board()) {
                Some(line) => writeln!(output, "{} ({})", result, line)?,
                None => writeln!(output, "{}", result)?,
            }
            writeln!(output, "Type 'new' to play again or 'quit' to exit.")?;
        }
    }

    log!("Interactive session ended");
    Ok(())
}
