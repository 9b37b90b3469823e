//! Question bank data model.
//!
//! A bank bundles every question for a single topic, organized into named
//! categories. Banks are loaded once per topic change and are read-only
//! while a game is in progress.

use serde::{Deserialize, Serialize};

/// All questions available for one topic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionBank {
    /// The topic this bank belongs to.
    pub topic: String,
    /// Categories in first-appearance order.
    pub categories: Vec<Category>,
}

impl QuestionBank {
    /// Create a bank with no categories.
    ///
    /// This is the fallback shape when a topic fails to load: the game keeps
    /// running, question draws report that nothing is available.
    pub fn empty(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            categories: Vec::new(),
        }
    }

    /// Returns true if the bank holds no answerable questions.
    pub fn is_empty(&self) -> bool {
        self.categories.iter().all(|c| c.questions.is_empty())
    }

    /// Total number of questions across all categories.
    pub fn question_count(&self) -> usize {
        self.categories.iter().map(|c| c.questions.len()).sum()
    }
}

/// A named group of questions within a topic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    /// Category name.
    pub name: String,
    /// Questions in authored order.
    pub questions: Vec<Question>,
}

/// One multiple-choice question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    /// The question text.
    pub text: String,
    /// Answer options in authored order.
    pub options: Vec<AnswerOption>,
    /// Reference links shown alongside the question.
    #[serde(default)]
    pub references: Vec<Reference>,
}

impl Question {
    /// Number of options marked correct.
    ///
    /// Well-formed content has exactly one, but the model does not enforce
    /// that; see `validate` for the lint that reports violations.
    pub fn correct_count(&self) -> usize {
        self.options.iter().filter(|o| o.correct).count()
    }
}

/// A selectable answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerOption {
    /// Option text.
    pub text: String,
    /// Whether selecting this option counts as a correct answer.
    pub correct: bool,
}

/// A "learn more" link attached to a question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reference {
    /// Link title; the store allows untitled references.
    #[serde(default)]
    pub title: Option<String>,
    /// Link target.
    pub url: String,
}
