use crate::reports;
use clap::Args;
use keyalt::config::EngineConfig;
use keyalt::corpus;
use keyalt::error::AltResult;
use keyalt::layout::LayoutMap;
use keyalt::resolver::FingerResolver;
use keyalt::stats::StatsAggregator;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub config: EngineConfig,

    /// Text to analyze. When omitted, the word list is used.
    pub query: Option<String>,

    #[arg(short, long, default_value = "data/wordlists/english.json")]
    pub wordlist: String,

    /// Print every assignment (character, finger, age)
    #[arg(long, default_value_t = false)]
    pub trace: bool,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: AnalyzeArgs, layout: &LayoutMap) -> AltResult<()> {
    args.config.validate()?;

    let words = match &args.query {
        Some(q) => corpus::split_words(q),
        None => {
            info!("📚 Loading word list: {}", args.wordlist);
            corpus::load_words(&args.wordlist)?
        }
    };
    let text = corpus::to_stream(&words);

    let mut resolver = FingerResolver::new(layout, args.config.max_age)?;
    let records = resolver.resolve(&text);

    let mut stats = StatsAggregator::new(layout);
    stats.extend(&records);
    let report = stats.finish();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if args.trace {
        reports::print_assignment_trace(&records);
    }
    reports::print_stats_report(&layout.name, args.config.max_age, &report);
    Ok(())
}
