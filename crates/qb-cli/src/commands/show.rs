use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use qb_bank::validate;

pub fn run(dir: &Path, topic: &str) -> Result<(), String> {
    let bank = super::load_bank(dir, topic)?;

    println!(
        "  {} [{} categories, {} questions]",
        bank.topic.bold(),
        bank.categories.len(),
        bank.question_count()
    );
    println!();

    if bank.categories.is_empty() {
        println!("  This bank is empty.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Category", "Questions", "References"]);

    for category in &bank.categories {
        let references: usize = category.questions.iter().map(|q| q.references.len()).sum();
        table.add_row(vec![
            category.name.clone(),
            category.questions.len().to_string(),
            references.to_string(),
        ]);
    }

    println!("{table}");

    let lints = validate(&bank);
    if !lints.is_empty() {
        println!();
        for lint in &lints {
            println!("  {}", lint.to_string().yellow());
        }
    }

    Ok(())
}
