//! The central **abstraction** for credential probing.
//!
//! This module defines the interface one authentication attempt must satisfy,
//! plus the production HTTP implementation. The coordinator depends strictly
//! on the [`Prober`] trait rather than a concrete transport, which keeps the
//! search engine testable against deterministic in-memory targets.

use async_trait::async_trait;
use pinsweep_common::config::SearchConfig;
use pinsweep_common::target::Target;
use tracing::trace;

/// Classified result of exactly one authentication attempt.
///
/// A transport failure is distinct from a rejected credential: the former
/// says nothing about the candidate and aborts the run, the latter is a
/// normal negative result.
#[derive(Debug)]
pub enum ProbeOutcome {
    /// The candidate authenticated; `payload` is the full response body.
    Success { payload: Vec<u8> },
    /// The target answered but did not accept the candidate.
    Rejected,
    /// Connection failure, timeout, or protocol error.
    TransportError { cause: anyhow::Error },
}

/// One authentication attempt against the target.
#[async_trait]
pub trait Prober: Send + Sync {
    async fn probe(&self, candidate: &str) -> ProbeOutcome;
}

/// Probes the export endpoint over HTTP Basic authentication.
///
/// One shared client per run: connection pooling across ten thousand
/// requests to the same host matters far more than per-probe isolation.
pub struct HttpProbe {
    client: reqwest::Client,
    url: String,
    username: String,
}

impl HttpProbe {
    pub fn new(target: &Target, config: &SearchConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client,
            url: format!("http://{}{}", target.authority(), config.endpoint_path),
            username: config.username.clone(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl Prober for HttpProbe {
    async fn probe(&self, candidate: &str) -> ProbeOutcome {
        let response = match self
            .client
            .get(&self.url)
            .basic_auth(&self.username, Some(candidate))
            .send()
            .await
        {
            Ok(response) => response,
            Err(cause) => return ProbeOutcome::TransportError { cause: cause.into() },
        };

        // The firmware signals a correct PIN with 200 exactly; redirects and
        // other 2xx variants have not been observed and are not trusted.
        if response.status() != reqwest::StatusCode::OK {
            trace!(candidate, status = %response.status(), "rejected");
            return ProbeOutcome::Rejected;
        }

        match response.bytes().await {
            Ok(body) => ProbeOutcome::Success {
                payload: body.to_vec(),
            },
            Err(cause) => ProbeOutcome::TransportError { cause: cause.into() },
        }
    }
}
