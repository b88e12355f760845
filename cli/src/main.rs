mod args;
mod terminal;

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use args::CommandLine;
use pinsweep_common::keyspace::Keyspace;
use pinsweep_core::probe::HttpProbe;
use pinsweep_core::progress::ProgressSink;
use pinsweep_core::search::{self, SearchResult};
use terminal::progress::ProgressReporter;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let args = CommandLine::parse_args();
    terminal::logging::init(args.quiet);

    let config = args.search_config();
    let total = Keyspace::size(config.candidate_width);

    info!(
        "Sweeping {total} PINs against {} as '{}'",
        args.target, config.username
    );

    let prober = Arc::new(HttpProbe::new(&args.target, &config)?);
    let reporter = Arc::new(ProgressReporter::new(total as usize, args.quiet));

    let sink: Arc<dyn ProgressSink> = Arc::<ProgressReporter>::clone(&reporter);
    let result = search::search(prober, sink, &config).await;
    reporter.finish_and_clear();

    match result {
        SearchResult::Found { candidate, payload } => {
            info!("PIN found: {candidate}");
            let path = args.output_path();
            std::fs::write(&path, &payload)
                .with_context(|| format!("failed to write backup to {}", path.display()))?;
            info!("Backup saved to {} ({} bytes)", path.display(), payload.len());
            Ok(ExitCode::SUCCESS)
        }
        SearchResult::Exhausted => {
            error!("No valid PIN found in {total} candidates");
            Ok(ExitCode::FAILURE)
        }
        SearchResult::Aborted { cause } => {
            error!("Network error during sweep: {cause:#}");
            Ok(ExitCode::FAILURE)
        }
    }
}
