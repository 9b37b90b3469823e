//! The turn engine.
//!
//! One turn is: roll the die, move with wraparound, resolve the landing
//! space, then pose a question. Everything runs synchronously; the engine
//! returns the events of each step and the caller renders them. When a
//! challenge or question interrupts the turn, the engine parks in an
//! awaiting phase and the caller resumes it with [`TurnEngine::resolve_challenge`]
//! or [`TurnEngine::submit_answer`].

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use qb_bank::QuestionBank;

use crate::board::{Board, SpaceEffect};
use crate::config::GameConfig;
use crate::error::{EngineError, EngineResult};
use crate::event::TurnEvent;
use crate::question::{self, DrawnQuestion};
use crate::state::{GameState, Phase};

/// Points awarded for completing a challenge.
pub const CHALLENGE_POINTS: i32 = 3;

/// Default-space policy: draws at or above this award one point.
const DEFAULT_BONUS_AT: f64 = 0.7;

/// Default-space policy: draws at or above this (and below the bonus cut)
/// show a study tip.
const DEFAULT_TIP_AT: f64 = 0.4;

const DEFAULT_TIP: &str = "Quick tip: Regular study sessions improve retention!";

/// Drives one game: owns the state, the board, the loaded bank, and the RNG.
///
/// Every random draw (dice, default spaces, question selection) comes from
/// the single seeded [`StdRng`], so a game is reproducible from its
/// [`GameConfig`].
#[derive(Debug)]
pub struct TurnEngine {
    config: GameConfig,
    board: Board,
    bank: QuestionBank,
    state: GameState,
    rng: StdRng,
    pending_question: Option<DrawnQuestion>,
    pending_challenge: Option<String>,
    question_due: bool,
}

impl TurnEngine {
    /// Create an engine over a board and a loaded bank.
    ///
    /// The game begins in [`Phase::NotStarted`]; call [`TurnEngine::start`].
    pub fn new(board: Board, bank: QuestionBank, config: GameConfig) -> Self {
        let rng = StdRng::seed_from_u64(config.seed);
        let state = GameState::new(bank.topic.clone(), config.target_score);
        Self {
            config,
            board,
            bank,
            state,
            rng,
            pending_question: None,
            pending_challenge: None,
            question_due: false,
        }
    }

    /// The current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The board this game is played on.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The loaded question bank.
    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    /// The configuration this game was created with.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The posed question, while one awaits an answer.
    pub fn pending_question(&self) -> Option<&DrawnQuestion> {
        self.pending_question.as_ref()
    }

    /// The offered challenge, while one awaits confirmation.
    pub fn pending_challenge(&self) -> Option<&str> {
        self.pending_challenge.as_deref()
    }

    /// Begin a new game at space 0 with score 0.
    pub fn start(&mut self) -> EngineResult<()> {
        if self.state.phase != Phase::NotStarted {
            return Err(EngineError::AlreadyStarted);
        }
        self.state.position = 0;
        self.state.score = 0;
        self.state.phase = Phase::InTurn;
        Ok(())
    }

    /// Roll, move, resolve the landing space, and pose the turn's question.
    ///
    /// Returns the turn's events in order. May leave the game in
    /// [`Phase::AwaitingChallenge`], [`Phase::AwaitingAnswer`],
    /// [`Phase::InTurn`] (ready for the next roll), or [`Phase::Won`].
    pub fn take_turn(&mut self) -> EngineResult<Vec<TurnEvent>> {
        match self.state.phase {
            Phase::NotStarted => return Err(EngineError::NotStarted),
            Phase::AwaitingAnswer => return Err(EngineError::AnswerPending),
            Phase::AwaitingChallenge => return Err(EngineError::ChallengePending),
            Phase::Won => return Err(EngineError::GameOver),
            Phase::InTurn => {}
        }

        let mut events = Vec::new();

        let roll = self.config.die.roll(&mut self.rng);
        events.push(TurnEvent::Rolled(roll));

        let from = self.state.position;
        let to = self.board.advance(from, roll as usize);
        self.state.position = to;
        events.push(TurnEvent::Moved { from, to });

        // A question is posed after every completed move; a challenge delays
        // it until the confirmation comes in.
        self.question_due = true;
        self.resolve_space(&mut events);

        if self.state.phase == Phase::InTurn {
            self.pose_question(&mut events);
        }

        Ok(events)
    }

    /// Confirm (`true`) or decline (`false`) the pending challenge.
    ///
    /// Completion is worth [`CHALLENGE_POINTS`]. Either way the turn then
    /// continues with its question.
    pub fn resolve_challenge(&mut self, accepted: bool) -> EngineResult<Vec<TurnEvent>> {
        if self.state.phase != Phase::AwaitingChallenge {
            return Err(EngineError::NoPendingChallenge);
        }
        self.pending_challenge = None;
        self.state.phase = Phase::InTurn;

        let mut events = Vec::new();
        if accepted {
            self.push_score(CHALLENGE_POINTS, &mut events);
        }
        if self.state.phase == Phase::InTurn {
            self.pose_question(&mut events);
        }
        Ok(events)
    }

    /// Answer the posed question by 0-based option index.
    ///
    /// The first in-range selection wins: correct scores
    /// [`question::CORRECT_POINTS`], wrong scores
    /// [`question::INCORRECT_POINTS`]. An out-of-range index fails with
    /// [`EngineError::InvalidSelection`], changes nothing, and leaves the
    /// question open for another selection.
    pub fn submit_answer(&mut self, selected: usize) -> EngineResult<Vec<TurnEvent>> {
        if self.state.phase != Phase::AwaitingAnswer {
            return Err(EngineError::NoPendingQuestion);
        }
        let Some(drawn) = self.pending_question.as_ref() else {
            return Err(EngineError::NoPendingQuestion);
        };

        let delta = question::score_answer(&drawn.question, selected)?;

        self.pending_question = None;
        self.state.phase = Phase::InTurn;

        let mut events = Vec::new();
        self.push_score(delta, &mut events);
        Ok(events)
    }

    /// Apply a raw score delta: clamp at zero, emit `Won` once on reaching
    /// the target.
    ///
    /// This is the primitive under space effects, challenges, and answers;
    /// callers normally go through those instead.
    pub fn apply_score(&mut self, delta: i32) -> Vec<TurnEvent> {
        let mut events = Vec::new();
        self.push_score(delta, &mut events);
        events
    }

    /// Abandon the current game and return to [`Phase::NotStarted`].
    pub fn reset(&mut self) {
        self.state = GameState::new(self.bank.topic.clone(), self.config.target_score);
        self.pending_question = None;
        self.pending_challenge = None;
        self.question_due = false;
    }

    /// Restore a previously saved game state.
    ///
    /// Pending questions and challenges are not part of a save; a state
    /// saved mid-interaction resumes at the top of its turn.
    pub fn restore(&mut self, mut state: GameState) -> EngineResult<()> {
        if state.position >= self.board.size() {
            return Err(EngineError::SpaceOutOfRange {
                index: state.position,
                size: self.board.size(),
            });
        }
        if matches!(state.phase, Phase::AwaitingAnswer | Phase::AwaitingChallenge) {
            state.phase = Phase::InTurn;
        }
        self.pending_question = None;
        self.pending_challenge = None;
        self.question_due = false;
        self.state = state;
        Ok(())
    }

    fn resolve_space(&mut self, events: &mut Vec<TurnEvent>) {
        match self.board.effect_at(self.state.position).cloned() {
            Some(SpaceEffect::Bonus(value)) | Some(SpaceEffect::Penalty(value)) => {
                self.push_score(value, events);
            }
            Some(SpaceEffect::Fact(text)) => events.push(TurnEvent::Notice(text)),
            Some(SpaceEffect::Challenge(action)) => {
                self.pending_challenge = Some(action.clone());
                self.state.phase = Phase::AwaitingChallenge;
                events.push(TurnEvent::ChallengeOffered(action));
            }
            // The turn's question covers it.
            Some(SpaceEffect::Question) => {}
            None => {
                let draw: f64 = self.rng.random();
                if draw >= DEFAULT_BONUS_AT {
                    self.push_score(1, events);
                } else if draw >= DEFAULT_TIP_AT {
                    events.push(TurnEvent::Notice(DEFAULT_TIP.to_string()));
                }
            }
        }
    }

    fn pose_question(&mut self, events: &mut Vec<TurnEvent>) {
        if !self.question_due {
            return;
        }
        self.question_due = false;

        match question::draw_question(&self.bank, &mut self.rng) {
            Ok(drawn) => {
                events.push(TurnEvent::QuestionPosed {
                    category: drawn.category.clone(),
                });
                self.pending_question = Some(drawn);
                self.state.phase = Phase::AwaitingAnswer;
            }
            Err(_) => events.push(TurnEvent::NoQuestions),
        }
    }

    fn push_score(&mut self, delta: i32, events: &mut Vec<TurnEvent>) {
        let total = i64::from(self.state.score) + i64::from(delta);
        self.state.score = u32::try_from(total.max(0)).unwrap_or(u32::MAX);
        events.push(TurnEvent::Score {
            delta,
            total: self.state.score,
        });

        if self.state.phase != Phase::Won && self.state.score >= self.state.target_score {
            self.state.phase = Phase::Won;
            self.pending_question = None;
            self.pending_challenge = None;
            self.question_due = false;
            events.push(TurnEvent::Won);
        }
    }
}
