use std::sync::atomic::{AtomicU8, Ordering};

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

#[repr(u8)]
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraceLevel {
    Off = 0,
    Error = 1,
    Warning = 2,
    Info = 3,
    Verbose = 4,
}

impl From<u8> for TraceLevel {
    fn from(value: u8) -> Self {
        match value {
            0 => TraceLevel::Off,
            1 => TraceLevel::Error,
            2 => TraceLevel::Warning,
            3 => TraceLevel::Info,
            _ => TraceLevel::Verbose,
        }
    }
}

/// A named trace channel with its own runtime switch, layered over `tracing`.
/// Events are emitted under the `openstack_net::trace` target with a `source` field.
#[derive(Debug)]
pub struct TraceSource {
    name: &'static str,
    level: AtomicU8,
}

impl TraceSource {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            level: AtomicU8::new(TraceLevel::Warning as u8),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn level(&self) -> TraceLevel {
        TraceLevel::from(self.level.load(Ordering::Relaxed))
    }

    pub fn set_level(&self, level: TraceLevel) {
        self.level.store(level as u8, Ordering::Relaxed)
    }

    pub fn is_enabled(&self, level: TraceLevel) -> bool {
        level != TraceLevel::Off && level <= self.level()
    }

    pub fn error(&self, message: &str) {
        if self.is_enabled(TraceLevel::Error) {
            error!(target: "openstack_net::trace", source = self.name, "{}", message);
        }
    }

    pub fn warning(&self, message: &str) {
        if self.is_enabled(TraceLevel::Warning) {
            warn!(target: "openstack_net::trace", source = self.name, "{}", message);
        }
    }

    pub fn info(&self, message: &str) {
        if self.is_enabled(TraceLevel::Info) {
            info!(target: "openstack_net::trace", source = self.name, "{}", message);
        }
    }

    pub fn verbose(&self, message: &str) {
        if self.is_enabled(TraceLevel::Verbose) {
            debug!(target: "openstack_net::trace", source = self.name, "{}", message);
        }
    }
}

/// Trace sources exposed by the SDK.
#[derive(Debug)]
pub struct Tracing {
    /// HTTP traffic and client configuration.
    pub http: TraceSource,
}

impl Default for Tracing {
    fn default() -> Self {
        Self {
            http: TraceSource::new("openstack_net::http"),
        }
    }
}
