use std::io::{self, Write};

use tictactoe_engine::SessionRng;
use tictactoe_engine::log;
use tictactoe_engine::tictactoe::{GameResult, Side, run_self_play};

use crate::config::{DisplayConfig, SelfPlayConfig};
use crate::render::render_board;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct SelfPlayTally {
    pub engine_wins: u32,
    pub opponent_wins: u32,
    pub draws: u32,
}

impl SelfPlayTally {
    fn record(&mut self, result: GameResult) {
        match result {
            GameResult::AutomatedWin => self.engine_wins += 1,
            GameResult::OpponentWin => self.opponent_wins += 1,
            GameResult::Draw => self.draws += 1,
        }
    }
}

/// Plays `config.games` engine games; game `i` uses `seed + i` so any game can be replayed alone.
pub fn run_self_play_games<W: Write>(
    output: &mut W,
    config: &SelfPlayConfig,
    display: &DisplayConfig,
) -> io::Result<SelfPlayTally> {
    let base_seed = config.seed.unwrap_or_else(|| SessionRng::from_random().seed());
    let first = if config.engine_moves_first {
        Side::Mine
    } else {
        Side::Opponent
    };

    let mut tally = SelfPlayTally::default();
    for game in 0..config.games {
        let mut rng = SessionRng::new(base_seed.wrapping_add(game as u64));
        let report = run_self_play(first, config.opponent_bot, &mut rng);
        tally.record(report.result);

        let moves: Vec<String> = report.moves.iter().map(|(_, pos)| pos.to_string()).collect();
        log!("Game {} seed {}: {} [{}]", game + 1, report.seed, report.result, moves.join(" "));

        if config.games == 1 {
            write!(output, "{}", render_board(&report.board, display))?;
            writeln!(output, "Moves: {}", moves.join(" "))?;
        }
        writeln!(output, "Game {} (seed {}): {}", game + 1, report.seed, report.result)?;
    }

    writeln!(
        output,
        "Engine wins: {}, opponent wins: {}, draws: {}",
        tally.engine_wins, tally.opponent_wins, tally.draws
    )?;
    Ok(tally)
}
