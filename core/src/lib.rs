pub mod limiter;
pub mod probe;
pub mod progress;
pub mod search;
