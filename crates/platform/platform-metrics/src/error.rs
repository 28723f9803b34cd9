//! Errors raised while registering metrics or accounting for accepted artifacts.

use crate::PlatformMetrics;
use std::fmt;
use thiserror::Error;

/// Result alias for acceptance accounting.
pub type AcceptResult<T> = Result<T, AcceptanceError>;

/// An accepted block or transaction could not be classified.
///
/// Both variants mean the producer of the artifact knows a kind this node does not.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AcceptanceError {
    #[error("unknown block type: {type_id}")]
    UnknownBlockType { type_id: u32 },

    #[error("unknown transaction type: {type_id}")]
    UnknownTransactionType { type_id: u32 },
}

/// A single metric the registerer refused.
#[derive(Debug)]
pub struct RegistrationFailure {
    /// Fully qualified name of the metric.
    pub metric: String,
    /// Error returned by the registerer.
    pub source: prometheus::Error,
}

impl fmt::Display for RegistrationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.metric, self.source)
    }
}

/// Errors raised while initializing metrics.
#[derive(Debug, Error)]
pub enum RegistrationError {
    /// A metric descriptor could not be built, usually because of an invalid namespace.
    #[error("invalid metric descriptor: {0}")]
    Descriptor(#[source] prometheus::Error),

    /// Every registration was attempted and these ones failed.
    ///
    /// `partial` holds the platform metrics when they were built. The metrics that did register
    /// keep reporting through it.
    #[error("failed to register {} metric(s): {}", .failures.len(), FailureList(.failures))]
    Rejected { failures: Vec<RegistrationFailure>, partial: Option<Box<PlatformMetrics>> },
}

impl RegistrationError {
    /// Metrics that failed to register.
    pub fn failures(&self) -> &[RegistrationFailure] {
        match self {
            Self::Descriptor(_) => &[],
            Self::Rejected { failures, .. } => failures,
        }
    }

    /// The partially registered platform metrics, if they were built.
    pub fn partial(&self) -> Option<&PlatformMetrics> {
        match self {
            Self::Descriptor(_) => None,
            Self::Rejected { partial, .. } => partial.as_deref(),
        }
    }

    /// Take the partially registered platform metrics, if they were built.
    pub fn into_partial(self) -> Option<PlatformMetrics> {
        match self {
            Self::Descriptor(_) => None,
            Self::Rejected { partial, .. } => partial.map(|metrics| *metrics),
        }
    }
}

impl From<prometheus::Error> for RegistrationError {
    fn from(e: prometheus::Error) -> Self {
        Self::Descriptor(e)
    }
}

struct FailureList<'a>(&'a [RegistrationFailure]);

impl fmt::Display for FailureList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, failure) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{failure}")?;
        }
        Ok(())
    }
}
