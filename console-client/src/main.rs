mod config;
mod play;
mod render;
mod self_play;

use clap::{Parser, Subcommand};
use tictactoe_engine::config::Validate;
use tictactoe_engine::{log, logger};

use config::{CONFIG_FILE, get_config_manager};

#[derive(Parser)]
#[command(name = "tictactoe_console")]
struct Args {
    #[arg(long)]
    use_log_prefix: bool,

    #[arg(long, default_value = CONFIG_FILE)]
    config: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Play against the engine (default)
    Play,
    /// Let the engine play against a bot
    SelfPlay {
        #[arg(long)]
        games: Option<u32>,
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("TicTacToe".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config = get_config_manager(&args.config).get_config()?;
    log!("Loaded config from {}", args.config);

    let stdout = std::io::stdout();
    let mut output = stdout.lock();

    match args.command.unwrap_or(Command::Play) {
        Command::Play => {
            play::run_interactive(std::io::stdin().lock(), &mut output, &config.display)?;
        }
        Command::SelfPlay { games, seed } => {
            let mut self_play_config = config.self_play.clone();
            if let Some(games) = games {
                self_play_config.games = games;
            }
            if seed.is_some() {
                self_play_config.seed = seed;
            }
            self_play_config.validate()?;
            self_play::run_self_play_games(&mut output, &self_play_config, &config.display)?;
        }
    }

    Ok(())
}
