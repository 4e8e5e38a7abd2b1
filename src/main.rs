use chocolate_bar::{
    init_logging, AiPlayer, BarConfig, CliPlayer, ConsolePresenter, GameEngine, Presenter,
    Session,
};

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the computer; missing values are asked for interactively.
    Play {
        #[arg(long, help = "Number of rows of the bar")]
        rows: Option<usize>,
        #[arg(long, help = "Number of columns of the bar")]
        cols: Option<usize>,
        #[arg(long, help = "1-indexed row of the spoiled piece")]
        spoiled_row: Option<usize>,
        #[arg(long, help = "1-indexed column of the spoiled piece")]
        spoiled_col: Option<usize>,
        #[command(flatten)]
        common: CommonArgs,
    },
    /// Watch the computer play both sides.
    Auto {
        #[arg(long, default_value_t = 4)]
        rows: usize,
        #[arg(long, default_value_t = 5)]
        cols: usize,
        #[arg(long, default_value_t = 1)]
        spoiled_row: usize,
        #[arg(long, default_value_t = 1)]
        spoiled_col: usize,
        #[command(flatten)]
        common: CommonArgs,
    },
}

#[derive(Args)]
struct CommonArgs {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, help = "Disable ANSI colors")]
    no_color: bool,
}

fn computer_player(seed: Option<u64>) -> AiPlayer {
    match seed {
        Some(s) => AiPlayer::seeded(s),
        None => AiPlayer::from_entropy(),
    }
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let status = match cli.command {
        Commands::Play {
            rows,
            cols,
            spoiled_row,
            spoiled_col,
            common,
        } => {
            let color = !common.no_color;
            let mut presenter = ConsolePresenter::stdout(color);
            presenter.show_welcome()?;
            if let Some(s) = common.seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }

            let mut human = CliPlayer::stdio(color);
            let config = human.prompt_config(rows.zip(cols), spoiled_row.zip(spoiled_col))?;
            let engine = GameEngine::new(&config)?;
            let computer = computer_player(common.seed);
            Session::new(engine, human, computer, presenter).run()?
        }
        Commands::Auto {
            rows,
            cols,
            spoiled_row,
            spoiled_col,
            common,
        } => {
            println!("Starting computer vs computer game...");
            if let Some(s) = common.seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            let config = BarConfig::new(rows, cols, spoiled_row, spoiled_col);
            let engine = GameEngine::new(&config)?;
            let human = computer_player(common.seed);
            let computer = computer_player(common.seed.map(|s| s.wrapping_add(1)));
            let presenter = ConsolePresenter::stdout(!common.no_color);
            Session::new(engine, human, computer, presenter).run()?
        }
    };
    log::info!("final status: {:?}", status);
    Ok(())
}
