use ct_core::{ToolId, ToolsConfig};
use ct_tui::app::TuiApp;

pub fn run(seed: Option<u64>, tool: &str, tick_ms: u64, no_animation: bool) -> Result<(), String> {
    let focus: ToolId = tool.parse().map_err(|e: ct_core::CoreError| e.to_string())?;

    let mut config = ToolsConfig::default().with_tick_ms(tick_ms);
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    if no_animation {
        config = config.without_animation();
    }

    ct_tui::terminal::run(TuiApp::new(config, focus))
}
