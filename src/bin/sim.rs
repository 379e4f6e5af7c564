use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;
use wordsearch::{autoplay, GameConfig, RoundEvent, WordSearch};

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <seed>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let mut rng = SmallRng::seed_from_u64(seed);

    let mut game =
        WordSearch::new(GameConfig::core_values(), &mut rng).map_err(|e| anyhow::anyhow!(e))?;
    let placements = game.round().placements().to_vec();

    let mut events: Vec<RoundEvent> = Vec::new();
    let summary = autoplay(&mut game, &mut rng, &mut events);

    let found: Vec<&str> = events
        .iter()
        .filter_map(|e| match e {
            RoundEvent::WordFound { word, .. } => Some(word.as_str()),
            _ => None,
        })
        .collect();

    let result = json!({
        "seed": seed,
        "grid_size": game.round().grid().size(),
        "grid": game.round().grid().to_string(),
        "placements": placements,
        "found": found,
        "progress": game.progress(),
        "summary": summary,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
