//! Shared coordination state for one search run.
//!
//! Everything the dispatched probes may touch lives here: a write-once slot
//! for the eventual [`SearchResult`], a one-way cancellation signal, and a
//! completed-probe counter. Probes never mutate the state directly; they go
//! through the narrow report/cancel operations below, and the slot freezes
//! the moment a terminal result lands.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use tokio::sync::Notify;
use tracing::debug;

/// Terminal state of a run. Produced exactly once.
#[derive(Debug)]
pub enum SearchResult {
    /// A candidate authenticated; `payload` is the response body it unlocked.
    Found { candidate: String, payload: Vec<u8> },
    /// Every candidate in the keyspace was rejected.
    Exhausted,
    /// A transport failure halted the search before exhaustion.
    Aborted { cause: anyhow::Error },
}

pub struct RunState {
    result: Mutex<Option<SearchResult>>,
    cancelled: AtomicBool,
    notify: Notify,
    completed: AtomicUsize,
}

impl RunState {
    pub fn new() -> Self {
        Self {
            result: Mutex::new(None),
            cancelled: AtomicBool::new(false),
            notify: Notify::new(),
            completed: AtomicUsize::new(0),
        }
    }

    /// Records a successful probe and raises the cancellation signal.
    ///
    /// First writer wins. Two probes succeeding concurrently is possible
    /// against a misbehaving target; whichever write lands first is
    /// authoritative and the other is dropped, a confirmed credential being
    /// already in hand.
    pub fn report_success(&self, candidate: String, payload: Vec<u8>) {
        self.set_result(SearchResult::Found { candidate, payload });
    }

    /// Records a fatal transport failure and raises the cancellation signal.
    ///
    /// One broken connection is treated as the target being unreachable for
    /// the whole run, not as a single untestable candidate.
    pub fn report_abort(&self, cause: anyhow::Error) {
        self.set_result(SearchResult::Aborted { cause });
    }

    fn set_result(&self, result: SearchResult) {
        {
            let mut slot = self.result.lock().unwrap_or_else(|e| e.into_inner());
            if slot.is_some() {
                debug!("result already set, discarding late terminal outcome");
            } else {
                *slot = Some(result);
            }
        }
        self.cancel();
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
        self.notify.notify_waiters();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Resolves once the cancellation signal is raised. Returns immediately
    /// if it already was.
    pub async fn cancelled(&self) {
        loop {
            // Register before re-checking the flag so a signal raised in
            // between cannot be missed.
            let notified = self.notify.notified();
            if self.is_cancelled() {
                return;
            }
            notified.await;
        }
    }

    /// Bumps the completed-probe counter, returning the new total.
    pub fn record_completion(&self) -> usize {
        self.completed.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn completed(&self) -> usize {
        self.completed.load(Ordering::Relaxed)
    }

    /// Removes the terminal result, if any probe set one.
    ///
    /// Called by the coordinator after every dispatched probe has drained;
    /// `None` means the keyspace was exhausted without a hit.
    pub fn take_result(&self) -> Option<SearchResult> {
        self.result
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .take()
    }
}

impl Default for RunState {
    fn default() -> Self {
        Self::new()
    }
}
