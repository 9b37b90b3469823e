use comfy_table::{ContentArrangement, Table};

use qb_engine::Board;
use qb_session::render::describe_effect;

pub fn run() -> Result<(), String> {
    let board = Board::standard();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Space", "Effect"]);

    for index in 0..board.size() {
        let effect = board
            .effect_at(index)
            .map(describe_effect)
            .unwrap_or_else(|| "—".to_string());
        table.add_row(vec![index.to_string(), effect]);
    }

    println!("{table}");
    println!(
        "\n  {} spaces in a circuit; movement wraps past the last space.",
        board.size()
    );
    Ok(())
}
