//! Registration of metrics with the reporting backend.

use crate::RegistrationFailure;
use prometheus::{core::Collector, Registry};
use tracing::warn;

/// Attaches metrics to the backend that reports them.
pub trait Registerer {
    /// Register a collector. Returns an error if it can not be registered, e.g. because a
    /// metric with the same name already is.
    fn register(&self, collector: Box<dyn Collector>) -> prometheus::Result<()>;
}

impl Registerer for Registry {
    fn register(&self, collector: Box<dyn Collector>) -> prometheus::Result<()> {
        Registry::register(self, collector)
    }
}

/// Registers a batch of metrics, attempting every one and collecting the failures.
pub(crate) struct Registrations<'a> {
    registerer: &'a dyn Registerer,
    attempted: usize,
    failures: Vec<RegistrationFailure>,
}

impl<'a> Registrations<'a> {
    pub(crate) fn new(registerer: &'a dyn Registerer) -> Self {
        Self { registerer, attempted: 0, failures: Vec::new() }
    }

    /// Register a metric, recording the failure instead of returning it.
    pub(crate) fn register<C>(&mut self, metric: &C)
    where
        C: Collector + Clone + 'static,
    {
        self.attempted += 1;
        let metric_name = fq_name(metric);
        if let Err(source) = self.registerer.register(Box::new(metric.clone())) {
            warn!(target: "tn::platform::metrics", metric = %metric_name, ?source, "failed to register metric");
            self.failures.push(RegistrationFailure { metric: metric_name, source });
        }
    }

    /// Number of registrations attempted so far.
    pub(crate) fn attempted(&self) -> usize {
        self.attempted
    }

    /// Ok if every registration succeeded, otherwise all failures in registration order.
    pub(crate) fn finish(self) -> Result<(), Vec<RegistrationFailure>> {
        if self.failures.is_empty() {
            Ok(())
        } else {
            Err(self.failures)
        }
    }
}

fn fq_name(metric: &dyn Collector) -> String {
    metric
        .desc()
        .first()
        .map(|desc| desc.fq_name.clone())
        .unwrap_or_else(|| "<unnamed>".to_string())
}
