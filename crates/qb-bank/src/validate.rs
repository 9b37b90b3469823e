//! Content lints for authored question banks.
//!
//! Ingestion is permissive: a bank with no correct option on a question, or
//! several, still loads and plays — scoring simply follows whichever option
//! the player picks. [`validate`] reports those shapes so authors can fix
//! them before players hit them.

use std::fmt;

use crate::model::QuestionBank;

/// A single finding from [`validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lint {
    /// Category the finding points at.
    pub category: String,
    /// Excerpt of the offending question, if the finding is question-level.
    pub question: Option<String>,
    /// What is wrong.
    pub kind: LintKind,
}

/// The kinds of problems [`validate`] reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LintKind {
    /// A category contains no questions.
    EmptyCategory,
    /// A question has no options to pick from.
    NoOptions,
    /// No option is marked correct; every answer scores as wrong.
    NoCorrectOption,
    /// More than one option is marked correct.
    MultipleCorrect,
}

impl fmt::Display for Lint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let what = match self.kind {
            LintKind::EmptyCategory => "category has no questions",
            LintKind::NoOptions => "question has no options",
            LintKind::NoCorrectOption => "no option is marked correct",
            LintKind::MultipleCorrect => "multiple options are marked correct",
        };
        match &self.question {
            Some(q) => write!(f, "[{}] \"{}\": {}", self.category, q, what),
            None => write!(f, "[{}]: {}", self.category, what),
        }
    }
}

/// Lint a bank and return every finding, in bank order.
pub fn validate(bank: &QuestionBank) -> Vec<Lint> {
    let mut lints = Vec::new();

    for category in &bank.categories {
        if category.questions.is_empty() {
            lints.push(Lint {
                category: category.name.clone(),
                question: None,
                kind: LintKind::EmptyCategory,
            });
            continue;
        }

        for question in &category.questions {
            let kind = if question.options.is_empty() {
                Some(LintKind::NoOptions)
            } else {
                match question.correct_count() {
                    0 => Some(LintKind::NoCorrectOption),
                    1 => None,
                    _ => Some(LintKind::MultipleCorrect),
                }
            };

            if let Some(kind) = kind {
                lints.push(Lint {
                    category: category.name.clone(),
                    question: Some(excerpt(&question.text)),
                    kind,
                });
            }
        }
    }

    lints
}

fn excerpt(text: &str) -> String {
    const MAX: usize = 48;
    if text.chars().count() <= MAX {
        text.to_string()
    } else {
        let cut: String = text.chars().take(MAX - 3).collect();
        format!("{cut}...")
    }
}
