//! End-to-end scenarios for the turn engine, mirroring the rulebook cases.

use qb_bank::{AnswerOption, Category, Question, QuestionBank};
use qb_engine::{
    Board, GameConfig, GameState, Phase, SpaceEffect, TurnEngine, TurnEvent,
};

fn sample_bank() -> QuestionBank {
    QuestionBank {
        topic: "networking".to_string(),
        categories: vec![Category {
            name: "TCP".to_string(),
            questions: vec![Question {
                text: "What does SYN start?".to_string(),
                options: vec![
                    AnswerOption {
                        text: "A handshake".to_string(),
                        correct: true,
                    },
                    AnswerOption {
                        text: "A teardown".to_string(),
                        correct: false,
                    },
                ],
                references: Vec::new(),
            }],
        }],
    }
}

fn in_turn_at(position: usize, score: u32, target: u32) -> GameState {
    GameState {
        phase: Phase::InTurn,
        position,
        score,
        target_score: target,
        topic: "networking".to_string(),
    }
}

#[test]
fn wrap_past_the_end_onto_a_bonus() {
    // Board of 24, position 22, 5 steps: wraps 23 → 0 → 1 → 2 → 3.
    let board = Board::standard();
    assert_eq!(board.advance(22, 5), 3);
    assert_eq!(board.effect_at(3), Some(&SpaceEffect::Bonus(3)));

    let mut engine = TurnEngine::new(board, sample_bank(), GameConfig::default());
    engine.restore(in_turn_at(3, 0, 50)).unwrap();
    let events = engine.apply_score(3);
    assert_eq!(events, vec![TurnEvent::Score { delta: 3, total: 3 }]);
}

#[test]
fn deep_penalty_clamps_without_winning() {
    let mut engine = TurnEngine::new(Board::standard(), sample_bank(), GameConfig::default());
    engine.restore(in_turn_at(0, 1, 50)).unwrap();

    let events = engine.apply_score(-5);
    assert_eq!(events, vec![TurnEvent::Score { delta: -5, total: 0 }]);
    assert_eq!(engine.state().phase, Phase::InTurn);
}

#[test]
fn crossing_the_target_wins() {
    let mut engine = TurnEngine::new(Board::standard(), sample_bank(), GameConfig::default());
    engine.restore(in_turn_at(0, 48, 50)).unwrap();

    let events = engine.apply_score(5);
    assert_eq!(
        events,
        vec![TurnEvent::Score { delta: 5, total: 53 }, TurnEvent::Won]
    );
    assert_eq!(engine.state().phase, Phase::Won);
}

#[test]
fn full_game_reaches_the_target_eventually() {
    // Every answer is correct (+5 each) and challenges are accepted, so the
    // score is nondecreasing and the game must end.
    let mut engine = TurnEngine::new(
        Board::standard(),
        sample_bank(),
        GameConfig::default().with_seed(2024).with_target_score(25),
    );
    engine.start().unwrap();

    let mut turns = 0;
    while engine.state().phase != Phase::Won {
        match engine.state().phase {
            Phase::InTurn => {
                engine.take_turn().unwrap();
                turns += 1;
            }
            Phase::AwaitingChallenge => {
                engine.resolve_challenge(true).unwrap();
            }
            Phase::AwaitingAnswer => {
                engine.submit_answer(0).unwrap();
            }
            _ => unreachable!("game cannot leave play phases without winning"),
        }
        assert!(turns < 1000, "game failed to terminate");
    }

    assert!(engine.state().score >= 25);
}

#[test]
fn empty_bank_game_is_playable() {
    // A bank that failed to load degrades to empty; position and space
    // effects still work and no turn crashes.
    let mut engine = TurnEngine::new(
        Board::standard(),
        QuestionBank::empty("networking"),
        GameConfig::default().with_seed(5),
    );
    engine.start().unwrap();

    for _ in 0..50 {
        match engine.state().phase {
            Phase::InTurn => {
                let events = engine.take_turn().unwrap();
                assert!(!events.iter().any(|e| matches!(e, TurnEvent::QuestionPosed { .. })));
            }
            Phase::AwaitingChallenge => {
                engine.resolve_challenge(false).unwrap();
            }
            Phase::AwaitingAnswer => unreachable!("no questions can be posed"),
            Phase::Won => break,
            Phase::NotStarted => unreachable!(),
        }
        assert!(engine.state().position < engine.board().size());
    }
}
