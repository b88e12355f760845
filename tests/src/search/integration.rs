#![cfg(test)]
//! End-to-end runs of the search engine against deterministic mock targets.

use std::sync::Arc;
use std::time::Duration;

use pinsweep_common::config::SearchConfig;
use pinsweep_core::progress::NullSink;
use pinsweep_core::search::{search, SearchResult};

use crate::mock::{CountingSink, FaultySink, MultiHit, RefuseAll, RejectAll, SingleHit};

fn config(width: u32, concurrency: usize) -> SearchConfig {
    SearchConfig {
        concurrency,
        candidate_width: width,
        ..SearchConfig::default()
    }
}

/// A target that accepts exactly one PIN in the full 4-digit keyspace.
#[tokio::test]
async fn finds_the_single_valid_pin() {
    let prober = Arc::new(SingleHit::new("4242", b"DATA"));
    let result = search(prober, Arc::new(NullSink), &config(4, 10)).await;

    match result {
        SearchResult::Found { candidate, payload } => {
            assert_eq!(candidate, "4242");
            assert_eq!(payload, b"DATA");
        }
        other => panic!("expected Found, got {:?}", other),
    }
}

#[tokio::test]
async fn exhausts_when_every_pin_is_rejected() {
    let prober = Arc::new(RejectAll::default());
    let sink = Arc::new(CountingSink::default());
    let result = search(prober.clone(), sink.clone(), &config(4, 100)).await;

    assert!(matches!(result, SearchResult::Exhausted));
    assert_eq!(prober.probes(), 10_000);
    assert_eq!(sink.reports(), 10_000);
    assert_eq!(sink.highest_completed(), 10_000);
}

/// One transport failure is systemic: the run aborts long before the
/// keyspace is exhausted.
#[tokio::test]
async fn aborts_promptly_on_transport_failure() {
    let prober = Arc::new(RefuseAll::default());
    let result = search(prober.clone(), Arc::new(NullSink), &config(4, 10)).await;

    match result {
        SearchResult::Aborted { cause } => {
            assert!(cause.to_string().contains("connection refused"));
        }
        other => panic!("expected Aborted, got {:?}", other),
    }
    assert!(
        prober.probes() < 1_000,
        "abort was not prompt: {} probes ran",
        prober.probes()
    );
}

#[tokio::test]
async fn empty_keyspace_is_exhausted_with_zero_probes() {
    let prober = Arc::new(RejectAll::default());
    let sink = Arc::new(CountingSink::default());
    let result = search(prober.clone(), sink.clone(), &config(0, 10)).await;

    assert!(matches!(result, SearchResult::Exhausted));
    assert_eq!(prober.probes(), 0);
    assert_eq!(sink.reports(), 0);
}

/// Several concurrently accepted PINs still produce exactly one `Found`.
#[tokio::test]
async fn multiple_successes_collapse_to_one_result() {
    let prober = Arc::new(MultiHit::new(&["10", "11", "12", "13"]));
    let result = search(prober.clone(), Arc::new(NullSink), &config(2, 50)).await;

    match result {
        SearchResult::Found { candidate, payload } => {
            assert!(prober.accepts(&candidate), "unknown winner: {candidate}");
            assert_eq!(payload, candidate.as_bytes());
        }
        other => panic!("expected Found, got {:?}", other),
    }
}

/// Once a result lands, the dispatch loop stops pulling candidates.
#[tokio::test]
async fn no_new_dispatches_after_success() {
    let prober = Arc::new(SingleHit::new("005", b"hit"));
    let result = search(prober.clone(), Arc::new(NullSink), &config(3, 2)).await;

    assert!(matches!(result, SearchResult::Found { .. }));
    assert!(
        prober.probes() < 100,
        "dispatch kept running after success: {} probes",
        prober.probes()
    );
}

#[tokio::test]
async fn sink_failures_do_not_change_the_outcome() {
    let prober = Arc::new(SingleHit::new("0042", b"payload"));
    let result = search(prober, Arc::new(FaultySink), &config(4, 10)).await;

    match result {
        SearchResult::Found { candidate, payload } => {
            assert_eq!(candidate, "0042");
            assert_eq!(payload, b"payload");
        }
        other => panic!("expected Found, got {:?}", other),
    }
}

#[tokio::test]
async fn repeated_runs_against_the_same_target_agree() {
    let cfg = config(3, 10);

    for _ in 0..2 {
        let prober = Arc::new(SingleHit::new("123", b"stable"));
        match search(prober, Arc::new(NullSink), &cfg).await {
            SearchResult::Found { candidate, payload } => {
                assert_eq!(candidate, "123");
                assert_eq!(payload, b"stable");
            }
            other => panic!("expected Found, got {:?}", other),
        }
    }
}

/// A probe that never resolves on its own still yields to cancellation once
/// another probe succeeds, so the drain completes.
#[tokio::test]
async fn hung_probes_are_cancelled_by_a_success() {
    use async_trait::async_trait;
    use pinsweep_core::probe::{ProbeOutcome, Prober};

    struct HangExceptOne;

    #[async_trait]
    impl Prober for HangExceptOne {
        async fn probe(&self, candidate: &str) -> ProbeOutcome {
            if candidate == "03" {
                ProbeOutcome::Success {
                    payload: b"ok".to_vec(),
                }
            } else {
                std::future::pending().await
            }
        }
    }

    let config = config(2, 10);
    let run = search(Arc::new(HangExceptOne), Arc::new(NullSink), &config);
    let result = tokio::time::timeout(Duration::from_secs(5), run)
        .await
        .expect("search failed to drain hung probes after success");

    assert!(matches!(result, SearchResult::Found { .. }));
}
