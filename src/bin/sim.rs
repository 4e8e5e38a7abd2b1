use chocolate_bar::{init_logging, AiPlayer, BarConfig, ConsolePresenter, GameEngine, Session};
use clap::Parser;
use serde_json::json;

/// Play one computer vs computer game and print a JSON summary.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seed for the player side; the computer side uses seed + 1.
    seed: u64,
    #[arg(long, default_value_t = 4)]
    rows: usize,
    #[arg(long, default_value_t = 5)]
    cols: usize,
    #[arg(long, default_value_t = 1)]
    spoiled_row: usize,
    #[arg(long, default_value_t = 1)]
    spoiled_col: usize,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Args::parse();

    let config = BarConfig::new(args.rows, args.cols, args.spoiled_row, args.spoiled_col);
    let engine = GameEngine::new(&config)?;
    let first = engine.turn();
    let player = AiPlayer::seeded(args.seed);
    let computer = AiPlayer::seeded(args.seed.wrapping_add(1));
    let presenter = ConsolePresenter::new(std::io::sink(), false);

    let mut session = Session::new(engine, player, computer, presenter);
    let status = session.run()?;

    let result = json!({
        "config": config,
        "first": first,
        "status": status,
        "winner": status.winner(),
        "moves": session.history(),
        "final_size": [session.engine().rows(), session.engine().cols()],
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
