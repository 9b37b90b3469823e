use std::path::Path;

use comfy_table::{ContentArrangement, Table};

use qb_bank::{FileSource, QuestionSource};

pub fn run(dir: &Path) -> Result<(), String> {
    let source = FileSource::new(dir);
    let topics = source.topics().map_err(|e| e.to_string())?;

    if topics.is_empty() {
        println!("  No topics found.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Topic", "Categories", "Questions"]);

    for topic in &topics {
        match source.load(topic) {
            Ok(bank) => table.add_row(vec![
                topic.clone(),
                bank.categories.len().to_string(),
                bank.question_count().to_string(),
            ]),
            Err(_) => table.add_row(vec![topic.clone(), "?".to_string(), "?".to_string()]),
        };
    }

    println!("{table}");
    Ok(())
}
