use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use pinsweep_common::config::{
    DEFAULT_CONCURRENCY, DEFAULT_TIMEOUT_SECS, DEFAULT_USERNAME, DEFAULT_WIDTH, SearchConfig,
};
use pinsweep_common::target::Target;

#[derive(Parser)]
#[command(name = "pinsweep")]
#[command(about = "Recover a device backup by sweeping the web-configurator PIN space.")]
pub struct CommandLine {
    /// Target host, as `host` or `host:port`
    pub target: Target,

    /// Maximum number of probes in flight at once
    #[arg(short, long, default_value_t = DEFAULT_CONCURRENCY)]
    pub concurrency: usize,

    /// Number of decimal digits per PIN
    #[arg(short, long, default_value_t = DEFAULT_WIDTH, value_parser = clap::value_parser!(u32).range(0..=9))]
    pub width: u32,

    /// Per-probe timeout in seconds
    #[arg(short, long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Basic-auth username presented with every PIN
    #[arg(short, long, default_value = DEFAULT_USERNAME)]
    pub username: String,

    /// Where to write the recovered backup (default: <host>.backup)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Suppress the progress bar and informational output
    #[arg(short, long)]
    pub quiet: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn search_config(&self) -> SearchConfig {
        SearchConfig {
            concurrency: self.concurrency,
            candidate_width: self.width,
            timeout: Duration::from_secs(self.timeout),
            username: self.username.clone(),
            ..SearchConfig::default()
        }
    }

    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(format!("{}.backup", self.target.host())))
    }
}
