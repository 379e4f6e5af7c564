use rand::rngs::SmallRng;
use rand::SeedableRng;
use wordsearch::{
    Direction, GameConfig, Gesture, Layout, RejectReason, RoundEvent, RoundState, RoundStatus,
    Sponsor, WordEntry, WordSearch,
};

fn sponsors() -> Vec<Sponsor> {
    vec![Sponsor::new("x", "X", "#111111"), Sponsor::new("y", "Y", "#222222")]
}

/// Lay `words` out by hand at `(start, direction, reversed)` on an 18x18 grid.
fn fixed_game(words: &[(WordEntry, (usize, usize), Direction, bool)]) -> WordSearch {
    let mut layout = Layout::new(18);
    for (entry, start, direction, reversed) in words {
        layout.place(entry, *start, *direction, *reversed).unwrap();
    }
    let mut rng = SmallRng::seed_from_u64(3);
    layout.fill_random(&mut rng);
    let entries: Vec<WordEntry> = words.iter().map(|w| w.0.clone()).collect();
    let config = GameConfig::new(18, entries.clone(), sponsors());
    WordSearch::from_round(config, RoundState::from_layout(entries, layout))
}

fn cat_game() -> WordSearch {
    fixed_game(&[(WordEntry::new("CAT", ["X"]), (0, 0), Direction::East, false)])
}

fn rejected(reason: RejectReason) -> Vec<RoundEvent> {
    vec![RoundEvent::SelectionRejected { reason }]
}

#[test]
fn test_forward_drag_finds_word_and_completes() {
    let mut game = cat_game();
    let events = game.select((0, 0), (0, 2));
    assert_eq!(
        events,
        vec![
            RoundEvent::WordFound {
                word: "CAT".to_string(),
                cells: vec![(0, 0), (0, 1), (0, 2)],
                sponsors: vec!["X".to_string()],
            },
            RoundEvent::RoundComplete,
        ]
    );
    assert_eq!(game.status(), RoundStatus::Complete);
    assert_eq!(game.progress().to_string(), "1 / 1 found");
}

#[test]
fn test_reverse_drag_finds_word() {
    let mut game = cat_game();
    let events = game.select((0, 2), (0, 0));
    assert_eq!(events.len(), 2);
    match &events[0] {
        RoundEvent::WordFound { word, cells, sponsors } => {
            assert_eq!(word, "CAT");
            assert_eq!(cells, &vec![(0, 2), (0, 1), (0, 0)]);
            assert_eq!(sponsors, &vec!["X".to_string()]);
        }
        other => panic!("expected WordFound, got {:?}", other),
    }
    assert_eq!(events[1], RoundEvent::RoundComplete);
}

#[test]
fn test_unrelated_diagonal_is_rejected() {
    let mut game = cat_game();
    let events = game.select((5, 5), (7, 7));
    assert!(matches!(
        events.as_slice(),
        [RoundEvent::SelectionRejected { .. }]
    ));
    assert!(game.round().found().is_empty());
    assert_eq!(game.status(), RoundStatus::InProgress);
}

#[test]
fn test_reselecting_found_word_is_rejected() {
    let mut game = cat_game();
    game.select((0, 0), (0, 2));
    assert_eq!(
        game.select((0, 0), (0, 2)),
        rejected(RejectReason::AlreadyFound)
    );
    assert_eq!(
        game.select((0, 2), (0, 0)),
        rejected(RejectReason::AlreadyFound)
    );
    assert_eq!(game.round().found(), &["CAT".to_string()]);
}

#[test]
fn test_partial_word_is_not_a_word() {
    let mut game = cat_game();
    assert_eq!(game.select((0, 0), (0, 1)), rejected(RejectReason::NotAWord));
    // overshooting by one cell also spells something else
    let events = game.select((0, 0), (0, 3));
    assert!(matches!(
        events.as_slice(),
        [RoundEvent::SelectionRejected { .. }]
    ));
}

#[test]
fn test_letters_off_placement_are_not_placed() {
    // CAT hides inside CATS, but only the standalone CAT cells count
    let mut game = fixed_game(&[
        (WordEntry::new("CATS", ["Y"]), (0, 0), Direction::East, false),
        (WordEntry::new("CAT", ["X"]), (5, 5), Direction::South, false),
    ]);
    assert_eq!(game.select((0, 0), (0, 2)), rejected(RejectReason::NotPlaced));
    let events = game.select((7, 5), (5, 5));
    assert!(matches!(events[0], RoundEvent::WordFound { ref word, .. } if word == "CAT"));
}

#[test]
fn test_word_and_its_reversal_found_from_either_end() {
    // TAC on row 2 reads CAT right-to-left; both drags still mean TAC
    let game = fixed_game(&[
        (WordEntry::new("CAT", ["X"]), (0, 0), Direction::East, false),
        (WordEntry::new("TAC", ["Y"]), (2, 0), Direction::East, false),
    ]);
    assert_eq!(game.config().validate(), Ok(()));

    for (from, to) in [((2, 0), (2, 2)), ((2, 2), (2, 0))] {
        let mut g = WordSearch::from_round(game.config().clone(), game.round().clone());
        let events = g.select(from, to);
        assert!(
            matches!(events[0], RoundEvent::WordFound { ref word, ref sponsors, .. }
                if word == "TAC" && sponsors == &vec!["Y".to_string()]),
            "{:?} -> {:?} gave {:?}",
            from,
            to,
            events
        );
    }

    for (from, to) in [((0, 0), (0, 2)), ((0, 2), (0, 0))] {
        let mut g = WordSearch::from_round(game.config().clone(), game.round().clone());
        let events = g.select(from, to);
        assert!(matches!(events[0], RoundEvent::WordFound { ref word, .. } if word == "CAT"));
    }
}

#[test]
fn test_placement_of_unlisted_word_is_mismatch() {
    // the grid hides TAC but only CAT is on the list
    let mut layout = Layout::new(18);
    layout
        .place(&WordEntry::new("TAC", ["X"]), (2, 0), Direction::East, false)
        .unwrap();
    let mut rng = SmallRng::seed_from_u64(3);
    layout.fill_random(&mut rng);
    let words = vec![WordEntry::new("CAT", ["X"])];
    let mut game = WordSearch::from_round(
        GameConfig::new(18, words.clone(), sponsors()),
        RoundState::from_layout(words, layout),
    );
    assert_eq!(
        game.select((2, 2), (2, 0)),
        rejected(RejectReason::WordMismatch)
    );
    assert_eq!(
        game.select((2, 0), (2, 2)),
        rejected(RejectReason::WordMismatch)
    );
    assert!(game.round().found().is_empty());
}

#[test]
fn test_same_invalid_path_twice_changes_nothing() {
    let mut game = cat_game();
    let first = game.select((3, 0), (3, 4));
    let found_before = game.round().found().to_vec();
    let second = game.select((3, 0), (3, 4));
    assert_eq!(first, second);
    assert!(matches!(
        first.as_slice(),
        [RoundEvent::SelectionRejected { .. }]
    ));
    assert_eq!(game.round().found(), found_before.as_slice());
}

#[test]
fn test_round_complete_fires_once() {
    let mut game = fixed_game(&[
        (WordEntry::new("CAT", ["X"]), (0, 0), Direction::East, false),
        (WordEntry::new("DOG", ["X", "Y"]), (10, 10), Direction::NorthWest, true),
    ]);
    let first = game.select((0, 0), (0, 2));
    assert!(!first.contains(&RoundEvent::RoundComplete));
    let second = game.select((8, 8), (10, 10));
    assert_eq!(second.last(), Some(&RoundEvent::RoundComplete));
    let again = game.select((10, 10), (8, 8));
    assert_eq!(again, rejected(RejectReason::AlreadyFound));
    assert!(game.round().is_multi_sponsor("DOG"));
    assert!(!game.round().is_multi_sponsor("CAT"));
}

#[test]
fn test_pointer_off_grid_is_ignored() {
    let mut game = cat_game();
    game.pointer_down(None);
    assert!(!game.is_dragging());
    assert!(game.pointer_up().is_empty());

    game.pointer_down(Some((0, 0)));
    game.pointer_move(Some((0, 2)));
    game.pointer_move(None);
    game.pointer_move(Some((0, 40)));
    assert_eq!(game.selection(), &[(0, 0), (0, 1), (0, 2)]);
    let events = game.pointer_up();
    assert!(matches!(events[0], RoundEvent::WordFound { .. }));
    assert!(!game.is_dragging());
    assert!(game.selection().is_empty());
}

#[test]
fn test_pointer_down_outside_grid_does_not_start() {
    let mut game = cat_game();
    game.pointer_down(Some((18, 0)));
    assert!(!game.is_dragging());
}

#[test]
fn test_crooked_drag_snaps_to_ray() {
    let mut game = cat_game();
    game.pointer_down(Some((0, 0)));
    game.pointer_move(Some((1, 1)));
    game.pointer_move(Some((0, 1)));
    game.pointer_move(Some((0, 2)));
    assert_eq!(game.selection(), &[(0, 0), (0, 1), (0, 2)]);
    game.cancel_gesture();
    assert!(game.pointer_up().is_empty());
    assert!(game.round().found().is_empty());
}

#[test]
fn test_restart_invalidates_gesture_in_flight() {
    let mut game = cat_game();
    let mut rng = SmallRng::seed_from_u64(11);
    let first_id = game.round().id();
    game.pointer_down(Some((0, 0)));
    game.pointer_move(Some((0, 2)));
    game.restart(&mut rng).unwrap();
    assert_ne!(game.round().id(), first_id);
    assert!(game.pointer_up().is_empty());
    assert!(game.round().found().is_empty());
    assert_eq!(game.status(), RoundStatus::InProgress);
}

#[test]
fn test_stale_gesture_is_rejected_by_new_round() {
    let game = cat_game();
    let mut old = game.round().clone();
    let mut gesture = Gesture::begin(&old, (0, 0)).unwrap();
    gesture.extend(&old, (0, 2));

    let mut newer = old.clone().with_id(old.id() + 1);
    assert_eq!(
        gesture.clone().finish(&mut newer),
        rejected(RejectReason::StaleGesture)
    );
    assert!(newer.found().is_empty());

    let events = gesture.finish(&mut old);
    assert!(matches!(events[0], RoundEvent::WordFound { .. }));
}
