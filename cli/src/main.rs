mod config;
mod input;
mod memory_runner;
mod tictactoe_runner;

use clap::{Parser, Subcommand, ValueEnum};
use engine::games::SessionRng;
use engine::games::tictactoe::Difficulty;
use engine::log;
use engine::logger;

#[derive(Parser)]
#[command(name = "casual_games")]
struct Args {
    #[command(subcommand)]
    game: Game,

    #[arg(long, default_value = "casual_games_config.yaml")]
    config: String,

    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,
}

#[derive(Subcommand)]
enum Game {
    /// Play tic-tac-toe against the bot
    Tictactoe {
        #[arg(long, value_enum)]
        difficulty: Option<DifficultyArg>,
    },
    /// Play the pair-matching memory game
    Memory {
        #[arg(long)]
        pairs: Option<usize>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum DifficultyArg {
    Easy,
    Medium,
    Hard,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Easy => Difficulty::Easy,
            DifficultyArg::Medium => Difficulty::Medium,
            DifficultyArg::Hard => Difficulty::Hard,
        }
    }
}

fn main() -> Result<(), String> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Games".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let app_config = config::load_app_config(&args.config)?;

    let mut rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!("Session seed: {}", rng.seed());

    match args.game {
        Game::Tictactoe { difficulty } => {
            let difficulty = difficulty
                .map(Difficulty::from)
                .unwrap_or(app_config.difficulty);
            tictactoe_runner::run(difficulty, &mut rng)
        }
        Game::Memory { pairs } => {
            let pairs = pairs.unwrap_or(app_config.memory_pairs);
            memory_runner::run(pairs, &mut rng)
        }
    }
}
