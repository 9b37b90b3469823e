//! Interactive play session.
//!
//! `Session` wraps a [`TurnEngine`] behind a line-oriented command
//! processor: the front end reads a line, calls [`Session::process`], and
//! prints whatever comes back. Errors are recoverable; print them and keep
//! reading.

use std::path::Path;

use qb_bank::{QuestionBank, QuestionSource};
use qb_engine::{Board, GameConfig, TurnEngine, TurnEvent};

use crate::error::{SessionError, SessionResult};
use crate::render;
use crate::save;

/// An interactive game session.
pub struct Session {
    engine: TurnEngine,
}

impl Session {
    /// Create a session over an already-loaded bank.
    pub fn new(board: Board, bank: QuestionBank, config: GameConfig) -> Self {
        Self {
            engine: TurnEngine::new(board, bank, config),
        }
    }

    /// Load `topic` from `source` and build a session over it.
    ///
    /// When the bank is unavailable the session starts over an empty bank
    /// instead of failing; the returned notice carries the load error for
    /// the front end to surface.
    pub fn from_source(
        source: &dyn QuestionSource,
        topic: &str,
        board: Board,
        config: GameConfig,
    ) -> (Self, Option<String>) {
        match source.load(topic) {
            Ok(bank) => (Self::new(board, bank, config), None),
            Err(err) => (
                Self::new(board, QuestionBank::empty(topic), config),
                Some(err.to_string()),
            ),
        }
    }

    /// The engine driving this session.
    pub fn engine(&self) -> &TurnEngine {
        &self.engine
    }

    /// Process one line of input and return the text to print.
    pub fn process(&mut self, input: &str) -> SessionResult<String> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(String::new());
        }

        let parts: Vec<&str> = trimmed.splitn(2, ' ').collect();
        let cmd = parts[0].to_lowercase();
        let rest = parts.get(1).map(|s| s.trim()).unwrap_or("");

        match cmd.as_str() {
            "start" => self.do_start(),
            "roll" | "r" => self.do_roll(),
            "answer" | "a" => self.do_answer(rest),
            "yes" | "y" => self.do_challenge(true),
            "no" | "n" => self.do_challenge(false),
            "status" => Ok(render::render_status(
                self.engine.state(),
                self.engine.board(),
            )),
            "board" => Ok(render::render_board(
                self.engine.board(),
                self.engine.state(),
            )),
            "save" => self.do_save(rest),
            "load" => self.do_load(rest),
            "reset" => {
                self.engine.reset();
                Ok("Game reset. Type 'start' to play again.".to_string())
            }
            "help" => Ok(help_text()),
            "quit" | "q" => Ok("Goodbye!".to_string()),
            _ => Err(SessionError::UnknownCommand(trimmed.to_string())),
        }
    }

    fn do_start(&mut self) -> SessionResult<String> {
        self.engine.start()?;
        Ok(format!(
            "Game on! First to {} points wins. Type 'roll' to begin.",
            self.engine.state().target_score
        ))
    }

    fn do_roll(&mut self) -> SessionResult<String> {
        let events = self.engine.take_turn()?;
        Ok(self.with_pending_question(render::render_events(&events)))
    }

    fn do_challenge(&mut self, accepted: bool) -> SessionResult<String> {
        let events = self.engine.resolve_challenge(accepted)?;
        let mut text = if accepted {
            String::from("Challenge completed!")
        } else {
            String::from("Challenge declined.")
        };
        let rendered = render::render_events(&events);
        if !rendered.is_empty() {
            text.push('\n');
            text.push_str(&rendered);
        }
        Ok(self.with_pending_question(text))
    }

    fn do_answer(&mut self, rest: &str) -> SessionResult<String> {
        let number: usize = rest
            .parse()
            .map_err(|_| SessionError::InvalidChoice("expected an option number".to_string()))?;
        if number == 0 {
            return Err(SessionError::InvalidChoice(
                "options are numbered from 1".to_string(),
            ));
        }

        let events = self.engine.submit_answer(number - 1)?;
        let feedback = events.iter().find_map(|e| match e {
            TurnEvent::Score { delta, .. } if *delta == qb_engine::CORRECT_POINTS => {
                Some("Correct! +5 points")
            }
            TurnEvent::Score { delta, .. } if *delta == qb_engine::INCORRECT_POINTS => {
                Some("Incorrect! -2 points")
            }
            _ => None,
        });

        let rendered = render::render_events(&events);
        Ok(match feedback {
            Some(feedback) => format!("{feedback}\n{rendered}"),
            None => rendered,
        })
    }

    fn do_save(&mut self, rest: &str) -> SessionResult<String> {
        if rest.is_empty() {
            return Err(SessionError::InvalidChoice(
                "expected a file path".to_string(),
            ));
        }
        save::save_game(Path::new(rest), self.engine.state())?;
        Ok(format!("Saved to {rest}"))
    }

    fn do_load(&mut self, rest: &str) -> SessionResult<String> {
        if rest.is_empty() {
            return Err(SessionError::InvalidChoice(
                "expected a file path".to_string(),
            ));
        }
        let state = save::load_game(Path::new(rest))?;
        if state.topic != self.engine.bank().topic {
            return Err(SessionError::InvalidChoice(format!(
                "save file is for topic \"{}\", this session plays \"{}\"",
                state.topic,
                self.engine.bank().topic
            )));
        }
        self.engine.restore(state)?;
        Ok(format!(
            "Loaded. {}",
            render::render_status(self.engine.state(), self.engine.board())
        ))
    }

    fn with_pending_question(&self, mut text: String) -> String {
        if let Some(drawn) = self.engine.pending_question() {
            if !text.is_empty() {
                text.push('\n');
            }
            text.push_str(&render::render_question(drawn));
            text.push_str("\nAnswer with 'answer <number>'.");
        }
        text
    }
}

fn help_text() -> String {
    [
        "Commands:",
        "  start            begin a new game",
        "  roll             roll the die and take a turn",
        "  answer <n>       answer the posed question (options are numbered from 1)",
        "  yes / no         confirm or decline the offered challenge",
        "  status           show score, position, and phase",
        "  board            show the board and your position",
        "  save <file>      save the game in progress",
        "  load <file>      resume a saved game",
        "  reset            abandon the game",
        "  quit             leave the session",
    ]
    .join("\n")
}
