#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use battlefield::{init_logging, ConsoleView, GameController};
#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

/// Two-player hot-seat battleship on a 10x10 field.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    /// Name of the player who places and shoots first.
    #[arg(long, default_value = "Player 1")]
    first: String,
    /// Name of the second player.
    #[arg(long, default_value = "Player 2")]
    second: String,
    #[arg(long, help = "Fix RNG seed for reproducible random placement (e.g., --seed 12345)")]
    seed: Option<u64>,
    /// Print a JSON summary of the match when it ends.
    #[arg(long)]
    summary: bool,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let rng = if let Some(s) = cli.seed {
        log::info!("using fixed seed {}", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let view = ConsoleView::stdio(vec![cli.first, cli.second], rng);
    let mut controller = GameController::new(view);
    controller.run()?;

    if cli.summary {
        println!("{}", serde_json::to_string(&controller.summary())?);
    }
    Ok(())
}
