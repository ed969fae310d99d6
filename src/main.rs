use clap::{Parser, Subcommand};
use keyalt::error::AltResult;
use keyalt::layout::LayoutMap;
use keyalt::layouts::KnownLayout;
use std::process;
use tracing::{error, info};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON layout file (takes precedence over --builtin)
    #[arg(global = true, short, long)]
    layout: Option<String>,

    #[arg(global = true, short, long, default_value = "qwerty")]
    builtin: KnownLayout,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Assign fingers to a character stream and report typing statistics
    Analyze(cmd::analyze::AnalyzeArgs),
    /// Find the best finger sequence for single words
    Optimize(cmd::optimize::OptimizeArgs),
}

fn load_layout(cli: &Cli) -> AltResult<LayoutMap> {
    match &cli.layout {
        Some(path) => {
            info!("📂 Loading Layout: {}", path);
            LayoutMap::load_from_file(path)
        }
        None => {
            info!("⌨️  Using built-in layout: {}", cli.builtin);
            cli.builtin.to_layout()
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let layout = load_layout(&cli).unwrap_or_else(|e| {
        error!("❌ Failed to load layout: {}", e);
        process::exit(1);
    });

    let result = match cli.command {
        Commands::Analyze(args) => cmd::analyze::run(args, &layout),
        Commands::Optimize(args) => cmd::optimize::run(args, &layout),
    };

    if let Err(e) = result {
        error!("❌ {}", e);
        process::exit(1);
    }
}
