//! Metrics for the platform chain.

use crate::{
    registry::Registrations, AcceptResult, ApiInterceptor, NoopInterceptor, PlatformMetricsConfig,
    RegistrationError, Registerer, RequestMetrics,
};
use prometheus::{Gauge, IntCounter, Opts};
use std::sync::Arc;
use tn_platform_types::{Block, SignedTransaction};
use tracing::debug;

fn block_counter(namespace: &str, kind: &str) -> prometheus::Result<IntCounter> {
    IntCounter::with_opts(
        Opts::new(format!("{kind}_blks_accepted"), format!("Number of {kind} blocks accepted"))
            .namespace(namespace),
    )
}

fn tx_counter(namespace: &str, kind: &str) -> prometheus::Result<IntCounter> {
    IntCounter::with_opts(
        Opts::new(
            format!("{kind}_txs_accepted"),
            format!("Number of {kind} transactions accepted"),
        )
        .namespace(namespace),
    )
}

/// Gauges maintained by the stake tracker.
#[derive(Clone, Debug)]
pub struct StakeMetrics {
    /// Percent of connected stake
    pub percent_connected: Gauge,
    /// Total amount staked
    pub total_staked: Gauge,
}

impl StakeMetrics {
    fn try_new(namespace: &str) -> prometheus::Result<Self> {
        Ok(Self {
            percent_connected: Gauge::with_opts(
                Opts::new("percent_connected", "Percent of connected stake").namespace(namespace),
            )?,
            total_staked: Gauge::with_opts(
                Opts::new("total_staked", "Total amount staked").namespace(namespace),
            )?,
        })
    }

    fn register(&self, registrations: &mut Registrations<'_>) {
        registrations.register(&self.percent_connected);
        registrations.register(&self.total_staked);
    }

    /// Set the fraction of stake currently connected, in `[0, 1]`.
    pub fn set_percent_connected(&self, percent: f64) {
        self.percent_connected.set(percent);
    }

    /// Last reported fraction of connected stake.
    pub fn percent_connected(&self) -> f64 {
        self.percent_connected.get()
    }

    /// Set the total amount currently staked.
    ///
    /// The gauge holds an `f64`, so amounts above 2^53 are rounded to the nearest representable
    /// value.
    pub fn set_total_staked(&self, amount: u64) {
        self.total_staked.set(amount as f64);
    }

    /// Last reported total amount staked.
    pub fn total_staked(&self) -> f64 {
        self.total_staked.get()
    }
}

/// One counter per block kind.
#[derive(Clone, Debug)]
pub struct BlockMetrics {
    /// Number of abort blocks accepted
    pub abort: IntCounter,
    /// Number of atomic blocks accepted
    pub atomic: IntCounter,
    /// Number of commit blocks accepted
    pub commit: IntCounter,
    /// Number of proposal blocks accepted
    pub proposal: IntCounter,
    /// Number of standard blocks accepted
    pub standard: IntCounter,
}

impl BlockMetrics {
    fn try_new(namespace: &str) -> prometheus::Result<Self> {
        Ok(Self {
            abort: block_counter(namespace, "abort")?,
            atomic: block_counter(namespace, "atomic")?,
            commit: block_counter(namespace, "commit")?,
            proposal: block_counter(namespace, "proposal")?,
            standard: block_counter(namespace, "standard")?,
        })
    }

    fn register(&self, registrations: &mut Registrations<'_>) {
        registrations.register(&self.abort);
        registrations.register(&self.atomic);
        registrations.register(&self.commit);
        registrations.register(&self.proposal);
        registrations.register(&self.standard);
    }
}

/// One counter per transaction kind.
#[derive(Clone, Debug)]
pub struct TransactionMetrics {
    pub add_delegator: IntCounter,
    pub add_subnet_validator: IntCounter,
    pub add_validator: IntCounter,
    pub advance_time: IntCounter,
    pub create_chain: IntCounter,
    pub create_subnet: IntCounter,
    pub export: IntCounter,
    pub import: IntCounter,
    pub reward_validator: IntCounter,
}

impl TransactionMetrics {
    fn try_new(namespace: &str) -> prometheus::Result<Self> {
        Ok(Self {
            add_delegator: tx_counter(namespace, "add_delegator")?,
            add_subnet_validator: tx_counter(namespace, "add_subnet_validator")?,
            add_validator: tx_counter(namespace, "add_validator")?,
            advance_time: tx_counter(namespace, "advance_time")?,
            create_chain: tx_counter(namespace, "create_chain")?,
            create_subnet: tx_counter(namespace, "create_subnet")?,
            export: tx_counter(namespace, "export")?,
            import: tx_counter(namespace, "import")?,
            reward_validator: tx_counter(namespace, "reward_validator")?,
        })
    }

    fn register(&self, registrations: &mut Registrations<'_>) {
        registrations.register(&self.add_delegator);
        registrations.register(&self.add_subnet_validator);
        registrations.register(&self.add_validator);
        registrations.register(&self.advance_time);
        registrations.register(&self.create_chain);
        registrations.register(&self.create_subnet);
        registrations.register(&self.export);
        registrations.register(&self.import);
        registrations.register(&self.reward_validator);
    }
}

/// Every metric the platform chain reports.
///
/// Constructed once at startup and shared by cloning. Counters are atomic so blocks and
/// transactions may be accepted from several threads at once.
#[derive(Clone, Debug)]
pub struct PlatformMetrics {
    pub stake: StakeMetrics,
    pub blocks: Arc<BlockMetrics>,
    pub txs: Arc<TransactionMetrics>,
    api_interceptor: Arc<dyn ApiInterceptor>,
}

impl PlatformMetrics {
    /// Create the platform metrics and register them with `registerer`.
    ///
    /// Every metric is attempted even if an earlier one fails, and the returned error lists all
    /// of the failures. Metrics that registered successfully stay registered and keep counting
    /// through [RegistrationError::into_partial].
    pub fn try_new(
        namespace: &str,
        registerer: &dyn Registerer,
        api_interceptor: Arc<dyn ApiInterceptor>,
    ) -> Result<Self, RegistrationError> {
        Self::register_with(namespace, Registrations::new(registerer), api_interceptor)
    }

    /// Create the platform metrics from configuration, installing the API interceptor it asks
    /// for.
    ///
    /// The interceptor's metrics are registered first. Failures of the interceptor and of the
    /// platform metrics are reported together.
    pub fn from_config(
        config: &PlatformMetricsConfig,
        registerer: &dyn Registerer,
    ) -> Result<Self, RegistrationError> {
        let mut registrations = Registrations::new(registerer);
        let api_interceptor: Arc<dyn ApiInterceptor> = if config.api_request_metrics {
            let request_metrics = RequestMetrics::new(&config.namespace)?;
            request_metrics.register(&mut registrations);
            Arc::new(request_metrics)
        } else {
            Arc::new(NoopInterceptor)
        };

        Self::register_with(&config.namespace, registrations, api_interceptor)
    }

    fn register_with(
        namespace: &str,
        mut registrations: Registrations<'_>,
        api_interceptor: Arc<dyn ApiInterceptor>,
    ) -> Result<Self, RegistrationError> {
        let stake = StakeMetrics::try_new(namespace)?;
        let blocks = BlockMetrics::try_new(namespace)?;
        let txs = TransactionMetrics::try_new(namespace)?;

        stake.register(&mut registrations);
        blocks.register(&mut registrations);
        txs.register(&mut registrations);
        let attempted = registrations.attempted();

        let metrics = Self { stake, blocks: Arc::new(blocks), txs: Arc::new(txs), api_interceptor };
        match registrations.finish() {
            Ok(()) => {
                debug!(target: "tn::platform::metrics", namespace, metrics = attempted, "registered platform metrics");
                Ok(metrics)
            }
            Err(failures) => {
                debug!(
                    target: "tn::platform::metrics",
                    namespace,
                    metrics = attempted,
                    failed = failures.len(),
                    "partially registered platform metrics"
                );
                Err(RegistrationError::Rejected { failures, partial: Some(Box::new(metrics)) })
            }
        }
    }

    /// The interceptor the API server should run around each request.
    pub fn api_interceptor(&self) -> &Arc<dyn ApiInterceptor> {
        &self.api_interceptor
    }

    /// Account for a block accepted by consensus and every transaction it carries.
    pub fn accept_block(&self, block: &Block) -> AcceptResult<()> {
        self.blocks.accept(block, &self.txs)
    }

    /// Account for an accepted transaction.
    pub fn accept_tx(&self, tx: &SignedTransaction) -> AcceptResult<()> {
        self.txs.accept(tx)
    }
}
