//! Caps the number of probes in flight at once.
//!
//! A thin gate over [`tokio::sync::Semaphore`]: `acquire` hands out owned
//! permits so a dispatched probe carries its slot into the spawned task and
//! releases it on drop, whatever path the task exits through. Acquisition
//! races the run's cancellation signal, so dispatches queued behind a full
//! gate fast-exit the moment a result is found.

use std::sync::Arc;

use tokio::sync::{OwnedSemaphorePermit, Semaphore};

use crate::search::state::RunState;

#[derive(Clone)]
pub struct Limiter {
    semaphore: Arc<Semaphore>,
}

impl Limiter {
    pub fn new(capacity: usize) -> Self {
        Self {
            semaphore: Arc::new(Semaphore::new(capacity)),
        }
    }

    /// Waits for a free slot, or returns `None` once the run is cancelled.
    ///
    /// Never more than `capacity` permits are outstanding. Waiters are woken
    /// in request order, though the search does not rely on that.
    pub async fn acquire(&self, run: &RunState) -> Option<OwnedSemaphorePermit> {
        if run.is_cancelled() {
            return None;
        }

        tokio::select! {
            permit = Arc::clone(&self.semaphore).acquire_owned() => {
                // The semaphore is never closed.
                permit.ok()
            }
            _ = run.cancelled() => None,
        }
    }
}
