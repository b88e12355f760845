//! The coordinator: drives the keyspace through the limiter, fans probes out
//! as independent tasks, and resolves the first terminating event.
//!
//! Control flow per run: pull candidates in ascending order, acquire a
//! limiter slot for each, spawn the probe, and wait. The first success or
//! transport failure wins the result slot and raises the cancellation
//! signal; everything still queued fast-exits at the limiter, everything in
//! flight aborts its request, and the coordinator drains every spawned task
//! before returning. Only the terminal [`SearchResult`] crosses this
//! boundary — probe-level faults never propagate as errors.

pub mod state;

use std::sync::Arc;

use pinsweep_common::config::SearchConfig;
use pinsweep_common::keyspace::Keyspace;
use tokio::task::JoinSet;
use tracing::{debug, info};

use crate::limiter::Limiter;
use crate::probe::{ProbeOutcome, Prober};
use crate::progress::ProgressSink;
pub use state::{RunState, SearchResult};

/// Searches the configured keyspace against `prober`, stopping on the first
/// success or transport failure.
///
/// Completion order across probes is unconstrained; dispatch order is
/// strictly ascending. The function never returns while a dispatched probe
/// is still running.
pub async fn search(
    prober: Arc<dyn Prober>,
    sink: Arc<dyn ProgressSink>,
    config: &SearchConfig,
) -> SearchResult {
    let keyspace = Keyspace::new(config.candidate_width);
    let total = keyspace.len();
    let run = Arc::new(RunState::new());
    let limiter = Limiter::new(config.concurrency);
    let mut probes: JoinSet<()> = JoinSet::new();

    info!(total, concurrency = config.concurrency, "starting search");

    for candidate in keyspace {
        // Stops issuing new dispatches the moment a result is in; permits
        // already queued for return None here as well.
        let Some(permit) = limiter.acquire(&run).await else {
            break;
        };

        let run = Arc::clone(&run);
        let prober = Arc::clone(&prober);
        let sink = Arc::clone(&sink);

        probes.spawn(async move {
            let _permit = permit;

            // Race the request against the cancel signal so an in-flight
            // probe aborts promptly instead of running out its timeout.
            let outcome = tokio::select! {
                outcome = prober.probe(&candidate) => Some(outcome),
                _ = run.cancelled() => None,
            };

            let completed = run.record_completion();

            // Classify into the run state before touching the sink: nothing
            // a sink does may change the outcome of the search.
            match outcome {
                Some(ProbeOutcome::Success { payload }) => {
                    debug!(candidate = %candidate, "credential accepted");
                    run.report_success(candidate.clone(), payload);
                }
                Some(ProbeOutcome::TransportError { cause }) => {
                    debug!(candidate = %candidate, %cause, "transport failure, aborting run");
                    run.report_abort(cause);
                }
                Some(ProbeOutcome::Rejected) | None => {}
            }

            sink.report(&candidate, completed, total);
        });
    }

    // Drain: every dispatched probe finishes (or observes cancellation)
    // before the result is read.
    while probes.join_next().await.is_some() {}

    match run.take_result() {
        Some(result) => result,
        None => SearchResult::Exhausted,
    }
}
