use anyhow::Result;
use clap::Parser;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use torus_snake::app::SnakeApp;
use torus_snake::config::{DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, DEFAULT_TICKS_PER_SECOND};
use torus_snake::{ApplePlacement, GameConfig, GameState};

#[derive(Parser)]
#[command(name = "snake")]
#[command(version, about = "Snake on a wrap-around grid")]
struct Cli {
    /// Grid width in cells
    #[arg(long, default_value_t = DEFAULT_GRID_WIDTH, value_parser = clap::value_parser!(u16).range(1..=500))]
    width: u16,

    /// Grid height in cells
    #[arg(long, default_value_t = DEFAULT_GRID_HEIGHT, value_parser = clap::value_parser!(u16).range(1..=500))]
    height: u16,

    /// Simulation steps per second
    #[arg(long, default_value_t = DEFAULT_TICKS_PER_SECOND, value_parser = clap::value_parser!(u32).range(1..=240))]
    tps: u32,

    /// RNG seed, random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Let apples spawn under the snake
    #[arg(long)]
    apple_anywhere: bool,
}

fn main() -> Result<()> {
    // The game owns the terminal, so logs stay off unless RUST_LOG asks for them
    env_logger::init();

    let cli = Cli::parse();
    let seed = cli.seed.unwrap_or_else(rand::random);
    log::info!("Starting with seed {}", seed);

    let placement = if cli.apple_anywhere { ApplePlacement::Anywhere } else { ApplePlacement::AvoidSnake };
    let config = GameConfig::new(cli.width, cli.height).with_apple_placement(placement);
    let game = GameState::new(config, Pcg32::seed_from_u64(seed));

    SnakeApp::new(game, cli.tps).run()
}
