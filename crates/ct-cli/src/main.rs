//! CLI frontend for the Comedy Tools generators.

mod commands;

use std::process;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use ct_core::ToolId;

#[derive(Parser)]
#[command(
    name = "ct",
    about = "Comedy Tools: random generators for improv and sketch writing",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log generator activity to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Options shared by the single-tool generators.
#[derive(Args)]
struct GenerateArgs {
    /// How many results to generate in a row
    #[arg(short = 'n', long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    count: u32,

    /// Print each result as a JSON object on its own line
    #[arg(long)]
    json: bool,

    /// RNG seed for reproducible results
    #[arg(short, long)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a location, relationship, and conflict
    Scene(GenerateArgs),

    /// Generate an absurd character name
    Name(GenerateArgs),

    /// Spin for an improv prompt
    Prompt(GenerateArgs),

    /// Draw a word-association starter
    Word(GenerateArgs),

    /// Run every generator once
    All {
        /// Print each result as a JSON object on its own line
        #[arg(long)]
        json: bool,

        /// RNG seed for reproducible results
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Show the built-in word tables
    Lists {
        /// Show only this table (location, relationship, conflict,
        /// first-name, last-name, prompt, word)
        table: Option<String>,
    },

    /// Launch the interactive terminal UI
    Tui {
        /// RNG seed for reproducible results
        #[arg(short, long)]
        seed: Option<u64>,

        /// Card to focus on start (scene, name, prompt, word)
        #[arg(short, long, default_value = "scene")]
        tool: String,

        /// Milliseconds per animation tick
        #[arg(long, default_value = "50")]
        tick_ms: u64,

        /// Show results immediately, without entrance animations
        #[arg(long)]
        no_animation: bool,
    },
}

/// Install the stderr log subscriber when asked for. `RUST_LOG` takes
/// precedence over `--verbose`.
fn init_logging(verbose: bool) {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) if verbose => EnvFilter::new("ct=debug,ct_core=debug"),
        Err(_) => return,
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();

    // Log lines on stderr would tear the alternate screen.
    if !matches!(cli.command, Commands::Tui { .. }) {
        init_logging(cli.verbose);
    }

    let result = match cli.command {
        Commands::Scene(args) => generate(ToolId::Scene, &args),
        Commands::Name(args) => generate(ToolId::Name, &args),
        Commands::Prompt(args) => generate(ToolId::Prompt, &args),
        Commands::Word(args) => generate(ToolId::Word, &args),
        Commands::All { json, seed } => commands::all::run(seed, json),
        Commands::Lists { table } => commands::lists::run(table.as_deref()),
        Commands::Tui {
            seed,
            tool,
            tick_ms,
            no_animation,
        } => commands::tui::run(seed, &tool, tick_ms, no_animation),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn generate(tool: ToolId, args: &GenerateArgs) -> Result<(), String> {
    commands::generate::run(tool, args.count, args.seed, args.json)
}
