//! Wire format for question payloads.
//!
//! The backend serves questions one row per question: each row carries its
//! category name alongside the question body. [`from_rows`] folds that flat
//! sequence into the [`QuestionBank`] shape, grouping rows by category name
//! while preserving first-appearance order of categories and authored order
//! of questions within each.

use serde::{Deserialize, Serialize};

use crate::model::{AnswerOption, Category, Question, QuestionBank, Reference};

/// A single question row as served by `GET /api/questions/{topic}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionRow {
    /// Category the question belongs to.
    pub category: String,
    /// Question text.
    pub question: String,
    /// Answer options in authored order.
    pub options: Vec<AnswerOption>,
    /// Reference links, possibly absent in older payloads.
    #[serde(default)]
    pub references: Vec<Reference>,
}

/// Fold wire rows into a bank for `topic`.
pub fn from_rows(topic: impl Into<String>, rows: Vec<QuestionRow>) -> QuestionBank {
    let mut categories: Vec<Category> = Vec::new();

    for row in rows {
        let question = Question {
            text: row.question,
            options: row.options,
            references: row.references,
        };

        match categories.iter_mut().find(|c| c.name == row.category) {
            Some(category) => category.questions.push(question),
            None => categories.push(Category {
                name: row.category,
                questions: vec![question],
            }),
        }
    }

    QuestionBank {
        topic: topic.into(),
        categories,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_rows_by_category() {
        let payload = r#"[
            {
                "category": "TCP",
                "question": "What does SYN start?",
                "options": [
                    {"text": "A handshake", "correct": true},
                    {"text": "A teardown", "correct": false}
                ],
                "references": [{"title": "RFC 793", "url": "https://example.com/rfc793"}]
            },
            {
                "category": "DNS",
                "question": "Which record maps a name to an IPv4 address?",
                "options": [
                    {"text": "A", "correct": true},
                    {"text": "MX", "correct": false}
                ],
                "references": []
            },
            {
                "category": "TCP",
                "question": "Which flag closes a connection?",
                "options": [
                    {"text": "FIN", "correct": true},
                    {"text": "URG", "correct": false}
                ]
            }
        ]"#;

        let rows: Vec<QuestionRow> = serde_json::from_str(payload).unwrap();
        let bank = from_rows("networking", rows);

        assert_eq!(bank.topic, "networking");
        assert_eq!(bank.categories.len(), 2);
        assert_eq!(bank.categories[0].name, "TCP");
        assert_eq!(bank.categories[0].questions.len(), 2);
        assert_eq!(bank.categories[1].name, "DNS");
        assert_eq!(bank.categories[1].questions.len(), 1);
        assert_eq!(
            bank.categories[0].questions[1].text,
            "Which flag closes a connection?"
        );
    }

    #[test]
    fn untitled_reference_parses() {
        let payload = r#"[{
            "category": "TCP",
            "question": "q",
            "options": [{"text": "a", "correct": true}],
            "references": [{"title": null, "url": "https://example.com"}]
        }]"#;

        let rows: Vec<QuestionRow> = serde_json::from_str(payload).unwrap();
        assert_eq!(rows[0].references[0].title, None);
        assert_eq!(rows[0].references[0].url, "https://example.com");
    }

    #[test]
    fn no_rows_means_empty_bank() {
        let bank = from_rows("networking", Vec::new());
        assert!(bank.is_empty());
    }
}
