pub mod all;
pub mod generate;
pub mod lists;
pub mod tui;

use colored::Colorize;

use ct_core::{ToolBoard, ToolResult, ToolsConfig};

/// Build a board, seeded if a seed was given.
fn board(seed: Option<u64>) -> ToolBoard {
    let config = match seed {
        Some(seed) => ToolsConfig::default().with_seed(seed),
        None => ToolsConfig::default(),
    };
    ToolBoard::new(&config)
}

/// Print a result either as one JSON line or as styled text.
fn print_result(result: &ToolResult, json: bool) -> Result<(), String> {
    if json {
        let line = serde_json::to_string(result).map_err(|e| e.to_string())?;
        println!("{line}");
        return Ok(());
    }

    for (label, value) in result.fields() {
        match (label, result) {
            (Some(label), _) => println!("  {} {value}", format!("{label}:").yellow().bold()),
            (None, ToolResult::Prompt(_)) => println!("  {}", value.magenta().bold()),
            (None, _) => println!("  {}", value.yellow().bold()),
        }
    }
    Ok(())
}
