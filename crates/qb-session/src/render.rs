//! Plain-text rendering of engine output.
//!
//! Everything here is a pure function from engine types to strings, so the
//! session stays testable without a terminal.

use qb_engine::{Board, DrawnQuestion, GameState, SpaceEffect, TurnEvent};

/// Render a batch of turn events, one line each.
pub fn render_events(events: &[TurnEvent]) -> String {
    let mut lines = Vec::new();
    for event in events {
        match event {
            TurnEvent::Rolled(value) => lines.push(format!("You rolled a {value}")),
            TurnEvent::Moved { from, to } => {
                lines.push(format!("Moved from space {from} to space {to}"));
            }
            TurnEvent::Score { delta, total } => {
                lines.push(format!("Score {total} ({delta:+})"));
            }
            TurnEvent::Notice(text) => lines.push(text.clone()),
            TurnEvent::ChallengeOffered(action) => {
                lines.push(format!("Challenge: {action}"));
                lines.push("Complete it for +3 points? (yes/no)".to_string());
            }
            TurnEvent::QuestionPosed { category } => {
                lines.push(format!("Question from {category}:"));
            }
            TurnEvent::NoQuestions => {
                lines.push("No questions available for this topic!".to_string());
            }
            TurnEvent::Won => {
                lines.push("Congratulations! You won the game!".to_string());
            }
        }
    }
    lines.join("\n")
}

/// Render a posed question with 1-based options and reference links.
pub fn render_question(drawn: &DrawnQuestion) -> String {
    let mut lines = vec![drawn.question.text.clone()];
    for (i, option) in drawn.question.options.iter().enumerate() {
        lines.push(format!("  {}) {}", i + 1, option.text));
    }
    if !drawn.question.references.is_empty() {
        lines.push("Learn more:".to_string());
        for reference in &drawn.question.references {
            let title = reference.title.as_deref().unwrap_or("Reference");
            lines.push(format!("  {title} <{}>", reference.url));
        }
    }
    lines.join("\n")
}

/// Render the board, one space per line, marking the player's position.
pub fn render_board(board: &Board, state: &GameState) -> String {
    let mut lines = Vec::new();
    for index in 0..board.size() {
        let marker = if index == state.position { ">" } else { " " };
        let label = match board.effect_at(index) {
            Some(effect) => describe_effect(effect),
            None => String::new(),
        };
        if label.is_empty() {
            lines.push(format!("{marker} {index:>2}"));
        } else {
            lines.push(format!("{marker} {index:>2}  {label}"));
        }
    }
    lines.join("\n")
}

/// One-line summary of a space effect.
pub fn describe_effect(effect: &SpaceEffect) -> String {
    match effect {
        SpaceEffect::Bonus(value) => format!("bonus {value:+}"),
        SpaceEffect::Penalty(value) => format!("penalty {value:+}"),
        SpaceEffect::Fact(text) => format!("fact: {text}"),
        SpaceEffect::Challenge(action) => format!("challenge: {action}"),
        SpaceEffect::Question => "question".to_string(),
    }
}

/// One-line game status.
pub fn render_status(state: &GameState, board: &Board) -> String {
    format!(
        "Topic: {} | Score: {}/{} | Space: {}/{} | {}",
        state.topic,
        state.score,
        state.target_score,
        state.position,
        board.size(),
        state.phase,
    )
}
