//! Question bank model and loading for Questboard.
//!
//! Provides the bank data model (topics, categories, multiple-choice
//! questions with reference links), the flat wire format served by the
//! question backend together with its grouping flatten, a [`QuestionSource`]
//! boundary with a file-backed implementation, and content lints for
//! authored banks.

pub mod error;
pub mod model;
pub mod source;
pub mod validate;
pub mod wire;

pub use error::{BankError, BankResult};
pub use model::{AnswerOption, Category, Question, QuestionBank, Reference};
pub use source::{FileSource, QuestionSource};
pub use validate::{Lint, LintKind, validate};
pub use wire::{QuestionRow, from_rows};
