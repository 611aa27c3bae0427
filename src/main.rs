#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use std::{path::PathBuf, sync::Arc};

#[cfg(feature = "std")]
use anyhow::Context;
#[cfg(feature = "std")]
use clap::{Args, Parser, Subcommand};
#[cfg(feature = "std")]
use log::LevelFilter;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use wordgrid::{
    init_logging_with, AutoPlayer, CliPlayer, EngineConfig, LevelStore, MatchEngine, MatchPolicy,
    Player, PlayerNode,
};

#[derive(Parser)]
#[command(author, version, about = "Trace words across a 4x4 letter grid", long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Clone, Debug)]
#[cfg(feature = "std")]
struct GameArgs {
    #[arg(long, help = "JSON level file (defaults to the built-in levels)")]
    levels: Option<PathBuf>,
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, help = "Count target words even when no row or column spells them")]
    lenient: bool,
    #[arg(long, default_value_t = 1, help = "Level to start on")]
    start_level: usize,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play interactively in the terminal.
    Play(GameArgs),
    /// Let the automated player work through the levels.
    Solve(GameArgs),
    /// List levels and report authoring problems.
    Levels {
        #[arg(long)]
        levels: Option<PathBuf>,
    },
    /// Print the built-in levels as a JSON level file.
    Export,
}

#[cfg(feature = "std")]
fn load_store(path: Option<&PathBuf>) -> anyhow::Result<Arc<LevelStore>> {
    let store = match path {
        Some(p) => LevelStore::from_path(p)?,
        None => LevelStore::builtin(),
    };
    Ok(Arc::new(store))
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    if let Some(s) = seed {
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    }
}

#[cfg(feature = "std")]
fn run_game(args: GameArgs, player: Box<dyn Player>) -> anyhow::Result<()> {
    let store = load_store(args.levels.as_ref())?;
    if let Some(s) = args.seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
    }
    let config = EngineConfig {
        policy: if args.lenient {
            MatchPolicy::lenient()
        } else {
            MatchPolicy::strict()
        },
        start_level: args.start_level,
    };
    let engine = MatchEngine::with_config(store, config)
        .with_context(|| format!("cannot start at level {}", args.start_level))?;
    let mut rng = make_rng(args.seed);
    let mut node = PlayerNode::new(player, engine);
    let summary = node.run(&mut rng)?;

    if summary.finished {
        println!("All levels complete ({} gestures).", summary.gestures);
    } else if let Some(level) = summary.stopped_at_level {
        println!(
            "Stopped at level {} after completing {} level(s).",
            level, summary.levels_completed
        );
    }
    Ok(())
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => {
            init_logging_with(LevelFilter::Warn);
            println!("Trace a word, enter tile numbers (e.g. 0123), :shuffle or :quit.");
            run_game(args, Box::new(CliPlayer::new()))?;
        }
        Commands::Solve(args) => {
            init_logging_with(LevelFilter::Info);
            run_game(args, Box::new(AutoPlayer::new()))?;
        }
        Commands::Levels { levels } => {
            init_logging_with(LevelFilter::Warn);
            let store = load_store(levels.as_ref())?;
            for (index, level) in store.iter() {
                let letters: String = level.letters().iter().collect();
                println!(
                    "Level {}: letters {}, {} target word(s)",
                    index,
                    letters,
                    level.target_words().len()
                );
                println!("{}", level.grid());
            }
            let issues = store.lint();
            if issues.is_empty() {
                println!("No problems found.");
            }
            for (index, issue) in issues {
                println!("level {}: {}", index, issue);
            }
        }
        Commands::Export => {
            println!("{}", LevelStore::builtin().to_json()?);
        }
    }
    Ok(())
}
