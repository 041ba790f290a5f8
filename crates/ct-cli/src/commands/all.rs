use colored::Colorize;

use ct_core::ToolId;

pub fn run(seed: Option<u64>, json: bool) -> Result<(), String> {
    let mut board = super::board(seed);

    for tool in ToolId::ALL {
        board.trigger(tool);
    }

    for (i, tool) in ToolId::ALL.into_iter().enumerate() {
        let Some(result) = board.result(tool) else {
            continue;
        };
        if !json {
            if i > 0 {
                println!();
            }
            println!("{}", tool.title().bold());
        }
        super::print_result(result, json)?;
    }

    Ok(())
}
