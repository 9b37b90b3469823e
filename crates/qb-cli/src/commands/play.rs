use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;

use qb_bank::FileSource;
use qb_engine::{Board, GameConfig};
use qb_session::Session;

pub fn run(dir: &Path, topic: &str, target: u32, seed: u64) -> Result<(), String> {
    let source = FileSource::new(dir);
    let config = GameConfig::default()
        .with_seed(seed)
        .with_target_score(target);
    let (mut session, notice) = Session::from_source(&source, topic, Board::standard(), config);

    println!("  {} Questboard", "Starting".bold());
    println!("  Topic: {topic} | Target: {target} | Seed: {seed}");
    if let Some(notice) = notice {
        println!("  {}", notice.yellow());
    }
    println!("  Type 'start' to begin, 'help' for commands, 'quit' to exit.\n");

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match session.process(input) {
            Ok(output) => {
                if !output.is_empty() {
                    println!("{output}\n");
                }
                if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("q") {
                    break;
                }
            }
            Err(e) => {
                println!("{}\n", e.to_string().yellow());
            }
        }
    }

    Ok(())
}
