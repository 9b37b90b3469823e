use std::path::Path;

use colored::Colorize;

use qb_bank::{FileSource, QuestionSource, validate};

pub fn run(dir: &Path, topic: Option<&str>) -> Result<(), String> {
    let source = FileSource::new(dir);
    let topics = match topic {
        Some(t) => vec![t.to_string()],
        None => source.topics().map_err(|e| e.to_string())?,
    };

    if topics.is_empty() {
        println!("  No banks found.");
        return Ok(());
    }

    let mut problems = 0;
    for topic in &topics {
        let bank = super::load_bank(dir, topic)?;
        let lints = validate(&bank);
        if lints.is_empty() {
            println!("  {topic}: ok ({} questions)", bank.question_count());
        } else {
            for lint in &lints {
                println!("  {topic}: {}", lint.to_string().yellow());
            }
            problems += lints.len();
        }
    }

    if problems > 0 {
        Err(format!("{problems} problem(s) found"))
    } else {
        println!("  All checks passed.");
        Ok(())
    }
}
