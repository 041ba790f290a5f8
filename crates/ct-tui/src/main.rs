//! Standalone TUI binary for Comedy Tools.

use std::process;

use clap::Parser;

use ct_core::{ToolId, ToolsConfig};

#[derive(Parser)]
#[command(
    name = "ct-tui",
    about = "Terminal UI for the Comedy Tools generators",
    version
)]
struct Args {
    /// RNG seed for reproducible results (default: random)
    #[arg(long)]
    seed: Option<u64>,

    /// Card to focus on start (scene, name, prompt, word)
    #[arg(long, default_value = "scene")]
    tool: String,

    /// Milliseconds per animation tick
    #[arg(long, default_value = "50")]
    tick_ms: u64,

    /// Show results immediately, without entrance animations
    #[arg(long)]
    no_animation: bool,
}

fn main() {
    let args = Args::parse();

    let focus: ToolId = match args.tool.parse() {
        Ok(tool) => tool,
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    };

    let mut config = ToolsConfig::default().with_tick_ms(args.tick_ms);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    if args.no_animation {
        config = config.without_animation();
    }

    let app = ct_tui::app::TuiApp::new(config, focus);

    if let Err(e) = ct_tui::terminal::run(app) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
