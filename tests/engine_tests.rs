use std::sync::Arc;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use wordgrid::{
    EngineConfig, EngineError, EngineState, GestureOutcome, Grid, LevelDefinition, LevelStore,
    MatchEngine, MatchPolicy,
};

// Level 1 tiles: G=0 O=1 L=2 D=3
const GOLD: [usize; 4] = [0, 1, 2, 3];
const DOG: [usize; 3] = [3, 1, 0];
const GOD: [usize; 3] = [0, 1, 3];
const LOG: [usize; 3] = [2, 1, 0];

fn builtin_engine() -> MatchEngine {
    MatchEngine::new(Arc::new(LevelStore::builtin())).unwrap()
}

fn single_level_engine(def: LevelDefinition) -> MatchEngine {
    MatchEngine::new(Arc::new(LevelStore::new(vec![def]).unwrap())).unwrap()
}

fn trace(engine: &mut MatchEngine, tiles: &[usize]) -> GestureOutcome {
    assert!(engine.begin_gesture(tiles[0]).unwrap());
    for &t in &tiles[1..] {
        engine.extend_gesture(t).unwrap();
    }
    engine.end_gesture().unwrap()
}

fn revealed(engine: &MatchEngine) -> Vec<usize> {
    engine.session().revealed().iter_cells().collect()
}

#[test]
fn test_gold_reveals_top_row() {
    let mut engine = builtin_engine();
    let outcome = trace(&mut engine, &GOLD);
    assert_eq!(
        outcome,
        GestureOutcome::Match {
            word: "gold".to_string(),
            cells: vec![0, 1, 2, 3],
            newly_found: true
        }
    );
    assert_eq!(revealed(&engine), vec![0, 1, 2, 3]);
    assert_eq!(engine.session().remaining_words(), &["dog", "god", "log"]);
    assert_eq!(engine.state(), EngineState::Idle);
    assert!(engine.session().trace().is_empty());
}

#[test]
fn test_column_match_and_direction() {
    let mut engine = builtin_engine();
    // "log" reads down column 2
    assert_eq!(trace(&mut engine, &LOG).cells(), &[2, 6, 10]);
    // "gol" is "log" backwards and spelled nowhere
    let outcome = trace(&mut engine, &[0, 1, 2]);
    assert_eq!(
        outcome,
        GestureOutcome::NoMatch {
            word: "gol".to_string()
        }
    );
    // "god" is "dog" backwards, but column 0 spells it
    assert_eq!(trace(&mut engine, &GOD).cells(), &[0, 4, 8]);
}

#[test]
fn test_no_match_leaves_session_untouched() {
    let mut engine = builtin_engine();
    trace(&mut engine, &GOLD);
    let before = engine.session().clone();
    let outcome = trace(&mut engine, &[3, 2, 1, 0]);
    assert!(matches!(outcome, GestureOutcome::NoMatch { .. }));
    assert_eq!(engine.session(), &before);
}

#[test]
fn test_retrace_is_idempotent() {
    let mut engine = builtin_engine();
    trace(&mut engine, &GOLD);
    let before = engine.session().clone();
    let again = trace(&mut engine, &GOLD);
    assert_eq!(
        again,
        GestureOutcome::Match {
            word: "gold".to_string(),
            cells: vec![0, 1, 2, 3],
            newly_found: false
        }
    );
    assert!(!again.made_progress());
    assert_eq!(engine.session(), &before);
}

#[test]
fn test_single_tile_never_matches() {
    let mut engine = builtin_engine();
    engine.begin_gesture(1).unwrap();
    let outcome = engine.end_gesture().unwrap();
    assert_eq!(
        outcome,
        GestureOutcome::NoMatch {
            word: "o".to_string()
        }
    );
    assert_eq!(engine.state(), EngineState::Idle);
}

#[test]
fn test_begin_while_tracing_is_ignored() {
    let mut engine = builtin_engine();
    assert!(engine.begin_gesture(0).unwrap());
    assert!(!engine.begin_gesture(1).unwrap());
    assert_eq!(engine.session().trace(), &[0]);
    assert_eq!(engine.state(), EngineState::Tracing);
}

#[test]
fn test_extend_skips_revisited_tiles() {
    let mut engine = builtin_engine();
    engine.begin_gesture(0).unwrap();
    assert!(engine.extend_gesture(1).unwrap());
    assert!(!engine.extend_gesture(0).unwrap());
    assert!(!engine.extend_gesture(1).unwrap());
    assert_eq!(engine.session().trace(), &[0, 1]);
    assert_eq!(engine.current_word(), "go");
}

#[test]
fn test_contract_violations() {
    let mut engine = builtin_engine();
    assert_eq!(
        engine.begin_gesture(4).unwrap_err(),
        EngineError::InvalidTile { index: 4, tiles: 4 }
    );
    assert_eq!(engine.state(), EngineState::Idle);
    assert_eq!(engine.extend_gesture(0).unwrap_err(), EngineError::NotTracing);
    assert_eq!(engine.end_gesture().unwrap_err(), EngineError::NotTracing);

    engine.begin_gesture(0).unwrap();
    assert_eq!(
        engine.extend_gesture(7).unwrap_err(),
        EngineError::InvalidTile { index: 7, tiles: 4 }
    );
    assert_eq!(engine.session().trace(), &[0]);
}

#[test]
fn test_completing_level_one_loads_level_two() {
    let mut engine = builtin_engine();
    trace(&mut engine, &GOLD);
    trace(&mut engine, &DOG);
    trace(&mut engine, &GOD);
    let outcome = trace(&mut engine, &LOG);

    match outcome {
        GestureOutcome::LevelComplete {
            word,
            cells,
            completed_level,
            next_level,
            next_level_letters,
            next_level_grid,
        } => {
            assert_eq!(word, "log");
            assert_eq!(cells, vec![2, 6, 10]);
            assert_eq!(completed_level, 1);
            assert_eq!(next_level, 2);
            assert_eq!(next_level_letters, vec!['K', 'O', 'U', 'Ş']);
            assert_eq!(next_level_grid, Grid::parse(" KOŞ O O Ş KKUŞ ").unwrap());
        }
        other => panic!("expected level completion, got {:?}", other),
    }

    assert_eq!(engine.level(), 2);
    assert_eq!(engine.state(), EngineState::Idle);
    assert!(engine.session().revealed().is_empty());
    assert_eq!(engine.session().remaining_words().len(), 4);

    // the next gesture runs against level 2's tiles: K=0 O=1 U=2 Ş=3
    engine.begin_gesture(0).unwrap();
    assert_eq!(engine.current_word(), "k");
    engine.extend_gesture(1).unwrap();
    engine.extend_gesture(3).unwrap();
    engine.extend_gesture(2).unwrap();
    let outcome = engine.end_gesture().unwrap();
    assert_eq!(outcome.word(), "koşu");
    assert_eq!(outcome.cells(), &[1, 5, 9, 13]);
}

#[test]
fn test_last_level_reports_no_more_levels() {
    let store = LevelStore::builtin();
    let mut engine = single_level_engine(store.get(1).unwrap().clone());
    trace(&mut engine, &GOLD);
    trace(&mut engine, &DOG);
    trace(&mut engine, &GOD);
    let outcome = trace(&mut engine, &LOG);

    assert_eq!(
        outcome,
        GestureOutcome::NoMoreLevels {
            word: "log".to_string(),
            cells: vec![2, 6, 10],
            completed_level: 1
        }
    );
    assert!(engine.is_finished());
    assert_eq!(engine.level(), 1);
    assert_eq!(revealed(&engine), vec![0, 1, 2, 3, 4, 6, 8, 9, 10]);
    assert!(engine.session().remaining_words().is_empty());

    let before = engine.session().clone();
    assert_eq!(engine.begin_gesture(0).unwrap_err(), EngineError::Finished);
    assert_eq!(engine.end_gesture().unwrap_err(), EngineError::Finished);
    assert_eq!(engine.session(), &before);
}

#[test]
fn test_duplicate_targets_prefer_untraced_runs() {
    let def = LevelDefinition::new(
        vec!['A', 'B'],
        vec!["ab".to_string(), "ab".to_string()],
        Grid::parse("AB      AB      ").unwrap(),
    );
    let mut engine = single_level_engine(def);

    let first = trace(&mut engine, &[0, 1]);
    assert_eq!(first.cells(), &[0, 1]);
    assert!(first.made_progress());
    assert_eq!(engine.session().remaining_words(), &["ab"]);

    let second = trace(&mut engine, &[0, 1]);
    assert!(matches!(second, GestureOutcome::NoMoreLevels { .. }));
    assert_eq!(second.cells(), &[8, 9]);
}

#[test]
fn test_duplicate_targets_on_one_run_complete_the_level() {
    let def = LevelDefinition::new(
        vec!['A', 'B'],
        vec!["ab".to_string(), "ab".to_string()],
        Grid::parse("AB              ").unwrap(),
    );
    let mut engine = single_level_engine(def);

    let first = trace(&mut engine, &[0, 1]);
    assert_eq!(
        first,
        GestureOutcome::Match {
            word: "ab".to_string(),
            cells: vec![0, 1],
            newly_found: true
        }
    );
    assert_eq!(engine.session().remaining_words(), &["ab"]);

    // the only run is already revealed, but the second listing still counts
    let second = trace(&mut engine, &[0, 1]);
    assert_eq!(
        second,
        GestureOutcome::NoMoreLevels {
            word: "ab".to_string(),
            cells: vec![0, 1],
            completed_level: 1
        }
    );
    assert!(engine.is_finished());
}

#[test]
fn test_non_target_run_reveals_without_progress() {
    // row 1 spells "cd", which is not a target
    let def = LevelDefinition::new(
        vec!['A', 'B', 'C', 'D'],
        vec!["ab".to_string()],
        Grid::parse("AB  CD          ").unwrap(),
    );
    let mut engine = single_level_engine(def);

    let outcome = trace(&mut engine, &[2, 3]);
    assert_eq!(
        outcome,
        GestureOutcome::Match {
            word: "cd".to_string(),
            cells: vec![4, 5],
            newly_found: false
        }
    );
    assert!(!outcome.made_progress());
    assert_eq!(revealed(&engine), vec![4, 5]);
    assert_eq!(engine.session().remaining_words(), &["ab"]);
}

#[test]
fn test_unplaced_targets_depend_on_policy() {
    let store = Arc::new(LevelStore::builtin());

    let strict = EngineConfig {
        start_level: 3,
        ..EngineConfig::default()
    };
    let mut engine = MatchEngine::with_config(Arc::clone(&store), strict).unwrap();
    let outcome = trace(&mut engine, &[0, 1, 2]);
    assert!(matches!(outcome, GestureOutcome::NoMatch { .. }));
    assert_eq!(engine.session().remaining_words().len(), 4);

    let lenient = EngineConfig {
        policy: MatchPolicy::lenient(),
        start_level: 3,
    };
    let mut engine = MatchEngine::with_config(store, lenient).unwrap();
    for _ in 0..3 {
        let outcome = trace(&mut engine, &[0, 1, 2]);
        assert_eq!(
            outcome,
            GestureOutcome::Acknowledged {
                word: "xxx".to_string()
            }
        );
    }
    let last = trace(&mut engine, &[3, 2, 1]);
    assert!(matches!(last, GestureOutcome::NoMoreLevels { .. }));
    assert!(last.cells().is_empty());
    assert!(engine.session().revealed().is_empty());
}

#[test]
fn test_start_level_out_of_range() {
    let config = EngineConfig {
        start_level: 9,
        ..EngineConfig::default()
    };
    assert!(MatchEngine::with_config(Arc::new(LevelStore::builtin()), config).is_err());
}

#[test]
fn test_shuffle_keeps_tiles() {
    let mut engine = builtin_engine();
    let mut rng = SmallRng::seed_from_u64(42);
    engine.shuffle_tiles(&mut rng).unwrap();
    let mut tiles = engine.session().tiles().to_vec();
    tiles.sort();
    assert_eq!(tiles, vec!['D', 'G', 'L', 'O']);

    // tile indices follow the new layout
    let tiles = engine.session().tiles().to_vec();
    let order: Vec<usize> = "gold"
        .chars()
        .map(|c| {
            tiles
                .iter()
                .position(|t| t.to_ascii_lowercase() == c)
                .unwrap()
        })
        .collect();
    assert_eq!(trace(&mut engine, &order).cells(), &[0, 1, 2, 3]);

    engine.begin_gesture(0).unwrap();
    assert_eq!(
        engine.shuffle_tiles(&mut rng).unwrap_err(),
        EngineError::Tracing
    );
}

#[test]
fn test_view_snapshot() {
    let mut engine = builtin_engine();
    trace(&mut engine, &GOLD);
    engine.begin_gesture(3).unwrap();
    let view = engine.view();
    assert_eq!(view.level, 1);
    assert_eq!(view.state, EngineState::Tracing);
    assert_eq!(view.current_word, "d");
    assert_eq!(view.trace, vec![3]);
    assert_eq!(view.cells.len(), 16);
    assert!(view.cells[0].revealed);
    assert_eq!(view.cells[0].letter, Some('G'));
    assert!(!view.cells[4].revealed);
    assert_eq!(view.cells[5].letter, None);
    assert_eq!(view.remaining_words, vec!["dog", "god", "log"]);
}
