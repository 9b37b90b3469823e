//! Loading question banks from a backing store.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{BankError, BankResult};
use crate::model::QuestionBank;
use crate::wire::{self, QuestionRow};

/// A source of question banks, keyed by topic.
///
/// Implementations report failures as [`BankError::Unavailable`]; callers
/// fall back to [`QuestionBank::empty`] and keep the game running.
pub trait QuestionSource {
    /// Load the bank for `topic`.
    fn load(&self, topic: &str) -> BankResult<QuestionBank>;

    /// List the topics this source can serve.
    fn topics(&self) -> BankResult<Vec<String>>;
}

/// File-backed source: one `<topic>.json` wire-format file per topic.
///
/// The file contents are the same JSON array the backend serves for
/// `GET /api/questions/{topic}`.
#[derive(Debug, Clone)]
pub struct FileSource {
    dir: PathBuf,
}

impl FileSource {
    /// Create a source rooted at `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The directory this source reads from.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn topic_path(&self, topic: &str) -> PathBuf {
        self.dir.join(format!("{topic}.json"))
    }
}

impl QuestionSource for FileSource {
    fn load(&self, topic: &str) -> BankResult<QuestionBank> {
        let path = self.topic_path(topic);
        let text =
            fs::read_to_string(&path).map_err(|e| BankError::unavailable(topic, e))?;
        let rows: Vec<QuestionRow> =
            serde_json::from_str(&text).map_err(|e| BankError::unavailable(topic, e))?;
        Ok(wire::from_rows(topic, rows))
    }

    fn topics(&self) -> BankResult<Vec<String>> {
        let entries = fs::read_dir(&self.dir)
            .map_err(|e| BankError::TopicsUnavailable(e.to_string()))?;

        let mut topics = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| BankError::TopicsUnavailable(e.to_string()))?;
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                topics.push(stem.to_string());
            }
        }

        topics.sort();
        Ok(topics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const NETWORKING: &str = r#"[
        {
            "category": "TCP",
            "question": "What does SYN start?",
            "options": [
                {"text": "A handshake", "correct": true},
                {"text": "A teardown", "correct": false}
            ],
            "references": []
        }
    ]"#;

    fn bank_dir() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("networking.json"), NETWORKING).unwrap();
        fs::write(dir.path().join("algorithms.json"), "[]").unwrap();
        fs::write(dir.path().join("notes.txt"), "not a bank").unwrap();
        dir
    }

    #[test]
    fn loads_topic_file() {
        let dir = bank_dir();
        let source = FileSource::new(dir.path());
        let bank = source.load("networking").unwrap();
        assert_eq!(bank.topic, "networking");
        assert_eq!(bank.question_count(), 1);
    }

    #[test]
    fn missing_topic_is_unavailable() {
        let dir = bank_dir();
        let source = FileSource::new(dir.path());
        let err = source.load("history").unwrap_err();
        assert!(matches!(err, BankError::Unavailable { ref topic, .. } if topic == "history"));
    }

    #[test]
    fn malformed_json_is_unavailable() {
        let dir = bank_dir();
        fs::write(dir.path().join("broken.json"), "{ not json").unwrap();
        let source = FileSource::new(dir.path());
        let err = source.load("broken").unwrap_err();
        assert!(matches!(err, BankError::Unavailable { .. }));
    }

    #[test]
    fn lists_topics_sorted() {
        let dir = bank_dir();
        let source = FileSource::new(dir.path());
        assert_eq!(source.topics().unwrap(), vec!["algorithms", "networking"]);
    }

    #[test]
    fn missing_dir_fails_topic_listing() {
        let source = FileSource::new("/nonexistent/questboard-banks");
        assert!(matches!(
            source.topics(),
            Err(BankError::TopicsUnavailable(_))
        ));
    }
}
