use ct_core::ToolId;

pub fn run(tool: ToolId, count: u32, seed: Option<u64>, json: bool) -> Result<(), String> {
    tracing::debug!(tool = tool.slug(), count, seeded = seed.is_some(), "generating");
    let mut board = super::board(seed);

    for i in 0..count {
        if i > 0 && !json {
            println!();
        }
        let result = board.trigger(tool);
        super::print_result(&result, json)?;
    }

    Ok(())
}
