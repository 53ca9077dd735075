use anyhow::{Context as AnyhowContext, Result};
use clap::Parser;
use fork_suite::classifier::{DefaultTestClassMatcher, PatternMatcher, TestClassMatcher};
use fork_suite::container::SnapshotProvider;
use fork_suite::loader::{LoaderConfig, TestSuiteLoader};
use fork_suite::output::OutputFormatter;
use fork_suite::{cli, logging};
use tracing::info;

fn main() -> Result<()> {
    let args = cli::Args::parse();
    logging::init(logging::Verbosity::from_flags(args.verbose, args.quiet));
    args.validate().context("Invalid arguments")?;

    let config = match args.config {
        Some(ref path) => LoaderConfig::load(path).context("Failed to load config")?,
        None => LoaderConfig::default(),
    };

    let matcher: Box<dyn TestClassMatcher> =
        match args.class_pattern.as_deref().or(config.class_pattern.as_deref()) {
            Some(pattern) => Box::new(PatternMatcher::new(pattern)?),
            None => Box::new(DefaultTestClassMatcher),
        };

    let provider = SnapshotProvider::new();
    let events = TestSuiteLoader::new(&provider, &*matcher)
        .with_config(&config)
        .load_test_suite(&args.package)
        .with_context(|| format!("Failed to load test suite from {}", args.package.display()))?;
    info!(tests = events.len(), "test suite loaded");

    let rendered = OutputFormatter::format(&args.package, &events, args.format)?;

    match args.output_file {
        Some(ref path) => {
            std::fs::write(path, rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(path = %path.display(), format = args.format.as_str(), "wrote test suite");
        }
        None => print!("{rendered}"),
    }

    Ok(())
}
