//! Interception of API requests served by the platform chain.
//!
//! The HTTP layer calls [ApiInterceptor::intercept_request] before handing a request to its
//! handler and [ApiInterceptor::after_request] once the handler returns.

use crate::{registry::Registrations, RegistrationError, Registerer};
use prometheus::{HistogramOpts, HistogramVec, IntCounterVec, Opts};
use std::{
    fmt,
    time::{Duration, Instant},
};

// buckets defined in milliseconds
const MILLISECOND_BUCKETS: &[f64] =
    &[10., 100., 250., 500., 1000., 1500., 2000., 3000., 5000., 10000.];

/// Hooks run around every API request.
pub trait ApiInterceptor: Send + Sync + fmt::Debug {
    /// Called before the request is handled.
    fn intercept_request(&self, method: &str) -> InterceptedRequest {
        InterceptedRequest::new(method)
    }

    /// Called after the request was handled.
    fn after_request(&self, request: InterceptedRequest, failed: bool);
}

/// A request between [ApiInterceptor::intercept_request] and [ApiInterceptor::after_request].
#[derive(Debug)]
pub struct InterceptedRequest {
    method: String,
    started: Instant,
}

impl InterceptedRequest {
    /// Start timing a request to `method`.
    pub fn new(method: impl Into<String>) -> Self {
        Self { method: method.into(), started: Instant::now() }
    }

    /// The API method being served.
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Time since the request was intercepted.
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

/// Records duration and failures of API requests per method.
#[derive(Clone, Debug)]
pub struct RequestMetrics {
    /// Duration of requests in milliseconds
    pub request_duration_ms: HistogramVec,
    /// Number of request errors
    pub request_error_count: IntCounterVec,
}

impl RequestMetrics {
    /// Create the request metrics and register them.
    pub fn try_new(
        namespace: &str,
        registerer: &dyn Registerer,
    ) -> Result<Self, RegistrationError> {
        let metrics = Self::new(namespace)?;

        let mut registrations = Registrations::new(registerer);
        metrics.register(&mut registrations);
        registrations
            .finish()
            .map_err(|failures| RegistrationError::Rejected { failures, partial: None })?;

        Ok(metrics)
    }

    pub(crate) fn new(namespace: &str) -> prometheus::Result<Self> {
        Ok(Self {
            request_duration_ms: HistogramVec::new(
                HistogramOpts::new("request_duration_ms", "Duration of requests in milliseconds")
                    .namespace(namespace)
                    .buckets(MILLISECOND_BUCKETS.to_vec()),
                &["method"],
            )?,
            request_error_count: IntCounterVec::new(
                Opts::new("request_error_count", "Number of request errors").namespace(namespace),
                &["method"],
            )?,
        })
    }

    pub(crate) fn register(&self, registrations: &mut Registrations<'_>) {
        registrations.register(&self.request_duration_ms);
        registrations.register(&self.request_error_count);
    }
}

impl ApiInterceptor for RequestMetrics {
    fn after_request(&self, request: InterceptedRequest, failed: bool) {
        let millis = request.elapsed().as_secs_f64() * 1_000.0;
        self.request_duration_ms.with_label_values(&[request.method()]).observe(millis);
        if failed {
            self.request_error_count.with_label_values(&[request.method()]).inc();
        }
    }
}

/// Interceptor that records nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopInterceptor;

impl ApiInterceptor for NoopInterceptor {
    fn after_request(&self, _request: InterceptedRequest, _failed: bool) {}
}
