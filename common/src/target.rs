//! # Search Target Model
//!
//! Defines the single input for a search run: the host to probe.
//!
//! This module handles parsing and representing targets, which can be:
//! * A bare host (`192.168.1.100`, `gateway.local`).
//! * A host with an explicit port (`192.168.1.100:8080`).
//!
//! An empty or malformed target is a usage error; no search is attempted.

use std::fmt;
use std::str::FromStr;

use crate::error::UsageError;

/// The host whose export endpoint will be probed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Target {
    host: String,
    port: Option<u16>,
}

impl Target {
    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> Option<u16> {
        self.port
    }

    /// Authority part of the probe URL (`host` or `host:port`).
    pub fn authority(&self) -> String {
        match self.port {
            Some(port) => format!("{}:{}", self.host, port),
            None => self.host.clone(),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.authority())
    }
}

impl FromStr for Target {
    type Err = UsageError;

    /// Parses a string into a `Target`.
    ///
    /// Accepts `host` or `host:port`. Schemes and paths are rejected; the
    /// probe URL is built internally from a fixed endpoint path.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(UsageError::EmptyTarget);
        }
        if trimmed.contains("://") {
            return Err(UsageError::invalid(
                trimmed,
                "drop the scheme, pass the host only",
            ));
        }
        if trimmed.contains('/') {
            return Err(UsageError::invalid(trimmed, "paths are not allowed"));
        }
        if trimmed.chars().any(char::is_whitespace) {
            return Err(UsageError::invalid(
                trimmed,
                "host must not contain whitespace",
            ));
        }

        match split_port(trimmed)? {
            Some((host, port)) => Ok(Target {
                host: host.to_string(),
                port: Some(port),
            }),
            None => Ok(Target {
                host: trimmed.to_string(),
                port: None,
            }),
        }
    }
}

/// Splits a trailing `:port` suffix, if present.
///
/// A host with more than one colon (a bare IPv6 literal) is rejected rather
/// than guessed at.
fn split_port(s: &str) -> Result<Option<(&str, u16)>, UsageError> {
    if s.matches(':').count() > 1 {
        return Err(UsageError::invalid(
            s,
            "ambiguous colons, use host or host:port",
        ));
    }

    let Some((host, port_str)) = s.split_once(':') else {
        return Ok(None);
    };

    if host.is_empty() {
        return Err(UsageError::invalid(s, "missing host before ':'"));
    }

    let port = port_str
        .parse::<u16>()
        .map_err(|_| UsageError::invalid(s, format!("invalid port '{port_str}'")))?;

    Ok(Some((host, port)))
}
