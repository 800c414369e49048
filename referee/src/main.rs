use std::path::{Path, PathBuf};

use clap::Parser;
use omok::PlacementBounds;
use referee::{Game, GameResult, GameScript};
use tracing::{debug, info};
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
struct Args {
    /// Paths to the game script JSON files to replay
    #[clap(num_args(1..), required = true)]
    scripts: Vec<PathBuf>,

    /// Only accept stones with both coordinates in 0..=14, whatever the board size
    #[arg(long, default_value_t = false)]
    legacy_bounds: bool,

    /// Print the final board of every game
    #[arg(short, long, default_value_t = false)]
    print_board: bool,

    /// Stop as soon as one script contains an illegal move
    #[arg(short, long, default_value_t = false)]
    stop_on_illegal_move: bool,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

#[derive(Default)]
struct Tally {
    wins: [usize; 2],
    draws: usize,
    unfinished: usize,
    illegal_moves: [usize; 2],
}

fn replay(script_path: &Path, args: &Args, tally: &mut Tally) -> anyhow::Result<bool> {
    let script = GameScript::load(script_path)?;
    let bounds = if args.legacy_bounds {
        PlacementBounds::Legacy
    } else {
        PlacementBounds::BoardSize
    };
    let mut game = Game::new(&script, bounds);
    debug!(script = %script_path.display(), size = script.board_size(), moves = script.moves.len());

    let mut legal = true;
    match game.play(&script.moves) {
        Ok(GameResult::WonByPlayer {
            player_idx,
            move_idx,
            row,
        }) => {
            let places = row
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" ");
            println!(
                "{}: {} wins with move {} ({:?}: {})",
                script_path.display(),
                script.players[player_idx],
                move_idx + 1,
                row.direction(),
                places
            );
            tally.wins[player_idx] += 1;
        }
        Ok(GameResult::Draw) => {
            println!("{}: draw, the board is full", script_path.display());
            tally.draws += 1;
        }
        Ok(GameResult::Unfinished) => {
            println!("{}: no winner yet", script_path.display());
            tally.unfinished += 1;
        }
        Err(err) => {
            let player_idx = err.player_idx();
            info!(
                player = script.players[player_idx],
                script = %script_path.display(),
                "Illegal move by player"
            );
            let mut err_dyn = &err as &dyn std::error::Error;
            while let Some(src_err) = err_dyn.source() {
                info!("{}", err_dyn);
                err_dyn = src_err;
            }
            info!("{}", err_dyn);
            println!(
                "{}: illegal move by {}: {}",
                script_path.display(),
                script.players[player_idx],
                err
            );
            tally.illegal_moves[player_idx] += 1;
            legal = false;
        }
    }

    if args.print_board {
        println!("{}", game.visualize());
    }
    Ok(legal)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    let mut tally = Tally::default();
    for script_path in &args.scripts {
        let legal = replay(script_path, &args, &mut tally)?;
        if !legal && args.stop_on_illegal_move {
            break;
        }
    }

    if args.scripts.len() > 1 {
        eprintln!(
            "End result:\n- {} wins by the first player ({} illegal moves)\n- {} wins by the second player ({} illegal moves)\n- {} draws\n- {} unfinished",
            tally.wins[0],
            tally.illegal_moves[0],
            tally.wins[1],
            tally.illegal_moves[1],
            tally.draws,
            tally.unfinished
        );
    }

    Ok(())
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().event_format(format))
        .with(filter)
        .init();
}
