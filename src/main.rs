use std::io::{self, BufReader};
use std::sync::Arc;

use clap::{Parser, ValueEnum};
use log::{info, warn};

use terminal_chess::agent::ai::{self, Exhaustive, FanOut, Pruning, SearchConfig};
use terminal_chess::agent::{EnginePlayer, HumanPlayer, Player};
use terminal_chess::game_repr::{Color, Position, Rules};
use terminal_chess::orchestrator::Orchestrator;
use terminal_chess::renderer::ConsoleRenderer;

/// Sibling moves with at least this many plies left are searched in parallel.
const PARALLEL_MIN_DEPTH: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Side {
    White,
    Black,
}

impl From<Side> for Color {
    fn from(side: Side) -> Color {
        match side {
            Side::White => Color::White,
            Side::Black => Color::Black,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "terminal_chess",
    about = "Play against a fixed-depth minimax engine in the terminal"
)]
struct Args {
    /// Search depth in plies
    #[arg(default_value_t = 5)]
    depth: u8,

    /// Side played by the engine
    #[arg(long, value_enum, default_value_t = Side::Black)]
    engine_color: Side,

    /// Search sibling moves on a thread pool
    #[arg(long)]
    parallel: bool,

    /// Worker threads for --parallel (default: one per logical CPU)
    #[arg(long)]
    threads: Option<usize>,

    /// Allow both sides to castle
    #[arg(long)]
    castling: bool,

    /// Disable the margin cutoff
    #[arg(long)]
    exhaustive: bool,

    /// Abort a search after this many evaluated positions
    #[arg(long)]
    max_positions: Option<u64>,

    /// Start from this FEN instead of the standard position
    #[arg(long)]
    fen: Option<String>,

    /// Side to move in the starting position
    #[arg(long, value_enum, default_value_t = Side::White)]
    to_move: Side,

    /// Print the board without ANSI colours
    #[arg(long)]
    plain: bool,
}

impl Args {
    fn rules(&self) -> Rules {
        if self.castling {
            Rules::with_castling()
        } else {
            Rules::default()
        }
    }

    fn search_config(&self) -> SearchConfig {
        let mut config = SearchConfig {
            max_depth: self.depth.max(1),
            rules: self.rules(),
            max_positions: self.max_positions,
            ..SearchConfig::default()
        };
        if self.parallel {
            config.fan_out = FanOut::Parallel {
                min_depth: PARALLEL_MIN_DEPTH,
            };
        }
        if self.exhaustive {
            config.pruning = Arc::new(Exhaustive) as Arc<dyn Pruning>;
        }
        config
    }
}

fn main() -> io::Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.parallel {
        if let Err(err) = ai::init_thread_pool(args.threads) {
            warn!("could not size the search thread pool: {}", err);
        }
    }

    let start = match &args.fen {
        Some(fen) => Position::from_fen(fen).ok_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidInput, format!("invalid FEN: {}", fen))
        })?,
        None => Position::default(),
    };

    let engine_color = Color::from(args.engine_color);
    let human_color = engine_color.opposite();
    let config = args.search_config();
    info!("engine plays {} with {:?}", engine_color.name(), config);

    let engine: Box<dyn Player> = Box::new(EnginePlayer::new(engine_color, config));
    let human: Box<dyn Player> = Box::new(HumanPlayer::new(
        BufReader::new(io::stdin()),
        human_color,
        args.rules(),
    ));
    let (white, black) = match engine_color {
        Color::White => (engine, human),
        Color::Black => (human, engine),
    };

    let renderer = if args.plain {
        ConsoleRenderer::plain(human_color)
    } else {
        ConsoleRenderer::new(human_color)
    };

    let mut game = Orchestrator::new(white, black, Box::new(renderer), io::stdout())
        .with_position(start, args.to_move.into());
    let result = game.run()?;
    info!("game finished: {:?}", result);

    Ok(())
}
