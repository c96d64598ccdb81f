#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use fleetgrid::{
    init_logging, standard_fleet, AttemptResult, Board, Position, DEFAULT_BOARD_SIZE,
};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::{Rng, SeedableRng};
#[cfg(feature = "std")]
use serde::Serialize;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Place the standard fleet at random and show the board.
    Preview {
        #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
        size: usize,
        #[arg(long, help = "Fix RNG seed for reproducible layouts (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Place the standard fleet at random, then fire random shots at it.
    Salvo {
        #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
        size: usize,
        #[arg(long, help = "Fix RNG seed for reproducible layouts (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = 10)]
        shots: usize,
        #[arg(long, help = "Print a JSON summary instead of the board")]
        json: bool,
    },
}

#[derive(Serialize)]
#[cfg(feature = "std")]
struct Shot {
    position: Position,
    result: AttemptResult,
}

#[derive(Serialize)]
#[cfg(feature = "std")]
struct SalvoReport {
    size: usize,
    shots: Vec<Shot>,
    all_sunk: bool,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Preview { size, seed } => {
            let mut rng = make_rng(seed);
            let board = setup_board(size, &mut rng)?;
            print!("{}", board);
            print!("{}", board.fleet_report());
        }
        Commands::Salvo {
            size,
            seed,
            shots,
            json,
        } => {
            let mut rng = make_rng(seed);
            let mut board = setup_board(size, &mut rng)?;
            let fired = fire_salvo(&mut board, &mut rng, shots)?;
            if json {
                let report = SalvoReport {
                    size,
                    shots: fired,
                    all_sunk: board.all_sunk(),
                };
                println!("{}", serde_json::to_string(&report)?);
            } else {
                for shot in &fired {
                    println!("{} -> {}", shot.position, shot.result);
                }
                print!("{}", board);
                print!("{}", board.fleet_report());
            }
        }
    }
    Ok(())
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => {
            log::info!("using fixed seed {}", s);
            SmallRng::seed_from_u64(s)
        }
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

#[cfg(feature = "std")]
fn setup_board(size: usize, rng: &mut SmallRng) -> anyhow::Result<Board> {
    let mut board = Board::new(size)?;
    for ship in standard_fleet() {
        board.place_random(rng, ship)?;
    }
    Ok(board)
}

/// Fire up to `shots` times at random unused cells, stopping once every ship is sunk.
#[cfg(feature = "std")]
fn fire_salvo(board: &mut Board, rng: &mut SmallRng, shots: usize) -> anyhow::Result<Vec<Shot>> {
    let size = board.size() as i32;
    let mut fired = Vec::with_capacity(shots);
    while fired.len() < shots && !board.all_sunk() {
        let mut open = Vec::new();
        for y in 0..size {
            for x in 0..size {
                let position = Position::new(x, y);
                if !board.has_been_used(position)? {
                    open.push(position);
                }
            }
        }
        if open.is_empty() {
            break;
        }
        let position = open[rng.random_range(0..open.len())];
        let result = board.attempt_move(position)?;
        fired.push(Shot { position, result });
    }
    Ok(fired)
}
