use std::sync::Arc;

use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;
use wordgrid::{AutoPlayer, EngineConfig, LevelStore, MatchEngine, MatchPolicy, PlayerNode};

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <seed> [--lenient]", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let lenient = args.get(2).map(|a| a == "--lenient").unwrap_or(false);

    let mut rng = SmallRng::seed_from_u64(seed);
    let store = Arc::new(LevelStore::builtin());
    let config = EngineConfig {
        policy: if lenient {
            MatchPolicy::lenient()
        } else {
            MatchPolicy::strict()
        },
        ..EngineConfig::default()
    };
    let engine = MatchEngine::with_config(Arc::clone(&store), config)?;

    let mut node = PlayerNode::new(Box::new(AutoPlayer::new()), engine);
    let summary = node.run(&mut rng)?;

    let result = json!({
        "levels": store.count(),
        "levels_completed": summary.levels_completed,
        "gestures": summary.gestures,
        "finished": summary.finished,
        "stuck_level": summary.stopped_at_level,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
