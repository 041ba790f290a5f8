use comfy_table::{ContentArrangement, Table};

use ct_core::WordList;
use ct_core::tables::ALL_TABLES;

pub fn run(name: Option<&str>) -> Result<(), String> {
    match name {
        Some(name) => show_table(WordList::builtin(name).map_err(|e| e.to_string())?),
        None => show_summary(),
    }
    Ok(())
}

/// Print every entry of one table.
fn show_table(list: WordList) {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", list.name()]);

    for (i, word) in list.words().iter().enumerate() {
        table.add_row(vec![(i + 1).to_string(), (*word).to_string()]);
    }

    println!("{table}");
    println!();
    println!("  {} entries", list.len());
}

/// Print one row per table.
fn show_summary() {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Table", "Entries", "First entry"]);

    for list in ALL_TABLES {
        table.add_row(vec![
            list.name().to_string(),
            list.len().to_string(),
            list.words()[0].to_string(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} tables", ALL_TABLES.len());
}
