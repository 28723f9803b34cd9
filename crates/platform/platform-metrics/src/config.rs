//! Configuration for platform chain metrics.

use serde::{Deserialize, Serialize};

/// Settings used when initializing [crate::PlatformMetrics].
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct PlatformMetricsConfig {
    /// Prefix for every metric name.
    #[serde(default = "PlatformMetricsConfig::default_namespace")]
    pub namespace: String,
    /// Install [crate::RequestMetrics] to time API requests.
    #[serde(default = "PlatformMetricsConfig::default_api_request_metrics")]
    pub api_request_metrics: bool,
}

impl PlatformMetricsConfig {
    fn default_namespace() -> String {
        "platformvm".to_string()
    }

    fn default_api_request_metrics() -> bool {
        true
    }
}

impl Default for PlatformMetricsConfig {
    fn default() -> Self {
        Self {
            namespace: PlatformMetricsConfig::default_namespace(),
            api_request_metrics: PlatformMetricsConfig::default_api_request_metrics(),
        }
    }
}
