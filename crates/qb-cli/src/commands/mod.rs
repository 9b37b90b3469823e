pub mod board;
pub mod check;
pub mod play;
pub mod show;
pub mod topics;

use std::path::Path;

use qb_bank::{FileSource, QuestionBank, QuestionSource};

/// Load the bank for `topic` from `dir`, with a printable failure.
fn load_bank(dir: &Path, topic: &str) -> Result<QuestionBank, String> {
    FileSource::new(dir).load(topic).map_err(|e| e.to_string())
}
