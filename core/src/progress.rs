/// Receives one notification per completed probe.
///
/// Best effort from the coordinator's perspective: nothing a sink does can
/// change the outcome of a search, and no return value is consulted.
/// Rendering lives entirely outside the engine.
pub trait ProgressSink: Send + Sync {
    fn report(&self, candidate: &str, completed: usize, total: usize);
}

/// Sink that discards every report.
pub struct NullSink;

impl ProgressSink for NullSink {
    fn report(&self, _candidate: &str, _completed: usize, _total: usize) {}
}
