use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use wordsearch::{
    autoplay, GameConfig, RoundEvent, RoundState, RoundStatus, WordSearch,
};

fn random_round(seed: u64) -> RoundState {
    let mut rng = SmallRng::seed_from_u64(seed);
    RoundState::generate(&GameConfig::core_values(), &mut rng).unwrap()
}

fn found_word(events: &[RoundEvent]) -> Option<&str> {
    events.iter().find_map(|e| match e {
        RoundEvent::WordFound { word, .. } => Some(word.as_str()),
        _ => None,
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn placement_found_in_either_direction(seed in any::<u64>(), pick in 0usize..9) {
        let round = random_round(seed);
        let placement = round.placements()[pick].clone();
        let forward: Vec<_> = placement.cells().to_vec();
        let backward: Vec<_> = forward.iter().rev().copied().collect();

        let mut a = round.clone();
        let mut b = round.clone();
        let ea = a.select(&forward);
        let eb = b.select(&backward);
        prop_assert_eq!(found_word(&ea), Some(placement.word()));
        prop_assert_eq!(found_word(&eb), Some(placement.word()));
    }

    #[test]
    fn rejection_is_idempotent(seed in any::<u64>(), gestures in 1usize..30) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut game = WordSearch::new(GameConfig::core_values(), &mut rng).unwrap();
        let size = game.round().grid().size();
        for _ in 0..gestures {
            let from = (rng.random_range(0..size), rng.random_range(0..size));
            let to = (rng.random_range(0..size), rng.random_range(0..size));
            let first = game.select(from, to);
            if found_word(&first).is_some() {
                continue;
            }
            let found_before = game.round().found().to_vec();
            let second = game.select(from, to);
            prop_assert_eq!(&first, &second);
            prop_assert_eq!(game.round().found(), found_before.as_slice());
        }
    }

    #[test]
    fn found_set_grows_and_completes_once(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut game = WordSearch::new(GameConfig::core_values(), &mut rng).unwrap();
        let mut events: Vec<RoundEvent> = Vec::new();
        let mut last_found = 0;
        let placements = game.round().placements().to_vec();
        // every placement twice, dragged both ways
        for p in placements.iter().chain(placements.iter()) {
            let cells = p.cells();
            let (from, to) = if rng.random_bool(0.5) {
                (cells[0], cells[cells.len() - 1])
            } else {
                (cells[cells.len() - 1], cells[0])
            };
            events.extend(game.select(from, to));
            let now = game.round().found().len();
            prop_assert!(now >= last_found);
            last_found = now;
        }
        let completions = events.iter().filter(|e| **e == RoundEvent::RoundComplete).count();
        prop_assert_eq!(completions, 1);
        prop_assert_eq!(events.last(), Some(&RoundEvent::SelectionRejected {
            reason: wordsearch::RejectReason::AlreadyFound,
        }));
        prop_assert_eq!(game.status(), RoundStatus::Complete);
    }

    #[test]
    fn autoplay_always_completes(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut game = WordSearch::new(GameConfig::core_values(), &mut rng).unwrap();
        let mut events: Vec<RoundEvent> = Vec::new();
        let summary = autoplay(&mut game, &mut rng, &mut events);
        prop_assert!(summary.complete);
        prop_assert_eq!(summary.found, 9);
        prop_assert_eq!(summary.gestures, summary.found + summary.rejected);
        prop_assert_eq!(game.progress().found, game.progress().total);
        prop_assert_eq!(events.last(), Some(&RoundEvent::RoundComplete));
    }
}
