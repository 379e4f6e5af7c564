#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use wordsearch::{
    autoplay, init_logging, init_logging_at, run_interactive, terminal, GameConfig, Presenter,
    TerminalPresenter, WordSearch,
};

#[cfg(feature = "std")]
use clap::{builder::TypedValueParser, Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about = "Find the hidden core values", long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    /// Log debug output to stderr (overrides WORDSEARCH_LOG).
    #[arg(long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args, Clone, Copy)]
#[cfg(feature = "std")]
struct RoundArgs {
    #[arg(long, help = "Fix RNG seed for reproducible grids (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(
        long,
        default_value_t = wordsearch::GRID_SIZE,
        value_parser = clap::value_parser!(u16).range(1..=terminal::MAX_TERMINAL_GRID as i64).map(usize::from),
        help = "Width and height of the grid"
    )]
    grid_size: usize,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play in the terminal by typing start and end cells.
    Play {
        #[command(flatten)]
        round: RoundArgs,
    },
    /// Let the computer find every word and print what happens.
    Auto {
        #[command(flatten)]
        round: RoundArgs,
    },
    /// Print a generated grid without playing.
    Show {
        #[command(flatten)]
        round: RoundArgs,
        #[arg(long, help = "Also list where every word is hidden")]
        placements: bool,
    },
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    if let Some(s) = seed {
        println!("Using fixed seed: {} (grid will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    }
}

#[cfg(feature = "std")]
fn new_game(args: RoundArgs) -> anyhow::Result<(WordSearch, SmallRng)> {
    let mut rng = make_rng(args.seed);
    let config = GameConfig::core_values().with_grid_size(args.grid_size);
    let game = WordSearch::new(config, &mut rng).map_err(|e| anyhow::anyhow!(e))?;
    Ok((game, rng))
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if cli.verbose {
        init_logging_at(log::LevelFilter::Debug);
    } else {
        init_logging();
    }

    match cli.command {
        Commands::Play { round } => {
            let (mut game, mut rng) = new_game(round)?;
            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout();
            run_interactive(&mut game, &mut rng, stdin.lock(), &mut stdout)?;
        }
        Commands::Auto { round } => {
            let (mut game, mut rng) = new_game(round)?;
            let mut presenter = TerminalPresenter::new();
            presenter.round_started(game.round());
            print!("{}", terminal::render_grid(game.round(), &[], false));
            let summary = autoplay(&mut game, &mut rng, &mut presenter);
            for line in presenter.drain() {
                println!("{}", line);
            }
            print!("{}", terminal::render_grid(game.round(), &[], false));
            print!("{}", terminal::render_buckets(&game));
            println!(
                "{} gestures, {} found, {} rejected",
                summary.gestures, summary.found, summary.rejected
            );
            if !summary.complete {
                anyhow::bail!("auto player stopped at {}", game.progress());
            }
        }
        Commands::Show { round, placements } => {
            let (game, _) = new_game(round)?;
            print!("{}", terminal::render_grid(game.round(), &[], false));
            if placements {
                for p in game.round().placements() {
                    let cells = p.cells();
                    println!(
                        "{:<16} {} -> {} {:?}{}",
                        p.word(),
                        terminal::coord_to_string(cells[0]),
                        terminal::coord_to_string(cells[cells.len() - 1]),
                        p.direction(),
                        if p.is_reversed() { " (reversed)" } else { "" }
                    );
                }
            }
        }
    }
    Ok(())
}
