use crate::reports;
use clap::Args;
use keyalt::config::EngineConfig;
use keyalt::corpus;
use keyalt::error::{AltError, AltResult};
use keyalt::layout::LayoutMap;
use keyalt::optimizer::ExhaustiveOptimizer;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct OptimizeArgs {
    #[command(flatten)]
    pub config: EngineConfig,

    /// Word to optimize
    pub word: Option<String>,

    /// Optimize every word of a file (.json word list or plain text)
    #[arg(short, long, conflicts_with = "word")]
    pub file: Option<String>,

    /// List the chosen sequence of every word in file mode
    #[arg(long, default_value_t = false)]
    pub show_words: bool,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: OptimizeArgs, layout: &LayoutMap) -> AltResult<()> {
    args.config.validate()?;
    let optimizer = ExhaustiveOptimizer::from_config(layout, &args.config);

    match (&args.word, &args.file) {
        (Some(word), _) => {
            let best = optimizer.optimize(&word.to_lowercase())?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&best)?);
            } else {
                reports::print_optimized(&best);
            }
        }
        (None, Some(path)) => {
            info!("📚 Loading words: {}", path);
            let words = corpus::load_words(path)?;
            let report = optimizer.optimize_corpus(&words);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                reports::print_corpus_report(&report, args.show_words);
            }
        }
        (None, None) => {
            return Err(AltError::Config(
                "Provide a WORD or --file <PATH>".to_string(),
            ))
        }
    }
    Ok(())
}
