use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;
use solitaire::{FirstLegalMove, MostTiles, RandomLegalMove, Rules, TARGET};
use solitaire_cli::{play_games, HumanPlayer, Recorder};
use tracing::info;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Strategy {
    /// Type the positions at the console
    Human,
    /// Always the smallest legal move
    First,
    /// The legal move discarding the most tiles
    MostTiles,
    /// A random legal move
    Random,
}

#[derive(Parser)]
struct Args {
    /// Who picks the tiles to discard
    #[arg(short, long, value_enum, default_value_t = Strategy::Human)]
    strategy: Strategy,

    /// How many games to play
    #[arg(short, long, default_value_t = 1)]
    num_games: usize,

    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// Score the discarded tiles have to add up to
    #[arg(short, long, default_value_t = TARGET)]
    target: u32,

    /// Record the games as JSON files into this directory
    #[arg(short, long)]
    record_games_to_directory: Option<PathBuf>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    // Get a random seed
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let mut recorder = if let Some(dir_path) = args.record_games_to_directory {
        Some(Recorder::new(dir_path)?)
    } else {
        None
    };

    let rules = Rules {
        target: args.target,
        ..Rules::default()
    };
    let num_games = args.num_games;

    let score = match args.strategy {
        Strategy::Human => {
            let mut player = HumanPlayer::new(std::io::stdin().lock(), std::io::stdout().lock());
            play_games(&mut player, num_games, rules, &mut rng, &mut recorder)?
        }
        Strategy::First => {
            play_games(&mut FirstLegalMove, num_games, rules, &mut rng, &mut recorder)?
        }
        Strategy::MostTiles => {
            play_games(&mut MostTiles, num_games, rules, &mut rng, &mut recorder)?
        }
        Strategy::Random => {
            // Separate stream, so the deals match the other strategies for the same seed
            let mut player = RandomLegalMove::new(StdRng::seed_from_u64(seed.wrapping_add(1)));
            play_games(&mut player, num_games, rules, &mut rng, &mut recorder)?
        }
    };

    eprintln!(
        "End result:\n- {} wins\n- {} losses\n- {:.1}% won",
        score.wins,
        score.losses,
        score.win_percentage()
    );

    Ok(())
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    // Stdout belongs to the game display
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
