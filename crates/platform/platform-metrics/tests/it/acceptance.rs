//! Acceptance accounting as seen through the reporting registry.

use crate::util::init_test_tracing;
use assert_matches::assert_matches;
use prometheus::Registry;
use std::collections::BTreeMap;
use tn_platform_metrics::{AcceptanceError, PlatformMetrics, PlatformMetricsConfig};
use tn_platform_types::test_utils::{
    add_validator_tx, advance_time_tx, commit_block, export_tx, proposal_block, standard_block,
    unrecognized_block,
};

/// Current value of every counter and gauge in the registry, keyed by name.
fn snapshot(registry: &Registry) -> BTreeMap<String, f64> {
    registry
        .gather()
        .into_iter()
        .filter(|family| family.get_metric().len() == 1)
        .map(|family| {
            let metric = &family.get_metric()[0];
            let value = if metric.has_counter() {
                metric.get_counter().get_value()
            } else {
                metric.get_gauge().get_value()
            };
            (family.get_name().to_string(), value)
        })
        .collect()
}

fn setup() -> (Registry, PlatformMetrics) {
    init_test_tracing();
    let registry = Registry::new();
    let config = PlatformMetricsConfig { namespace: "avalanche_p".to_string(), ..Default::default() };
    let metrics = PlatformMetrics::from_config(&config, &registry).expect("fresh registry");
    (registry, metrics)
}

/// Names whose value differs between two snapshots.
fn changed(before: &BTreeMap<String, f64>, after: &BTreeMap<String, f64>) -> BTreeMap<String, f64> {
    after
        .iter()
        .filter(|(name, value)| before.get(*name) != Some(*value))
        .map(|(name, value)| (name.clone(), *value))
        .collect()
}

#[test]
fn test_standard_block_scenario() {
    let (registry, metrics) = setup();
    let before = snapshot(&registry);
    assert_eq!(before.len(), 16);

    metrics
        .accept_block(&standard_block(1, vec![add_validator_tx(), export_tx()]))
        .expect("standard block accepted");

    let expected: BTreeMap<String, f64> = [
        ("avalanche_p_standard_blks_accepted".to_string(), 1.0),
        ("avalanche_p_add_validator_txs_accepted".to_string(), 1.0),
        ("avalanche_p_export_txs_accepted".to_string(), 1.0),
    ]
    .into_iter()
    .collect();
    assert_eq!(changed(&before, &snapshot(&registry)), expected);
}

#[test]
fn test_proposal_block_scenario() {
    let (registry, metrics) = setup();
    let before = snapshot(&registry);

    metrics.accept_block(&proposal_block(2, advance_time_tx())).expect("proposal accepted");
    metrics.accept_block(&commit_block(3)).expect("commit accepted");

    let expected: BTreeMap<String, f64> = [
        ("avalanche_p_proposal_blks_accepted".to_string(), 1.0),
        ("avalanche_p_advance_time_txs_accepted".to_string(), 1.0),
        ("avalanche_p_commit_blks_accepted".to_string(), 1.0),
    ]
    .into_iter()
    .collect();
    assert_eq!(changed(&before, &snapshot(&registry)), expected);
}

#[test]
fn test_unknown_block_scenario() {
    let (registry, metrics) = setup();
    let before = snapshot(&registry);

    let res = metrics.accept_block(&unrecognized_block(4, 17));

    assert_matches!(res, Err(AcceptanceError::UnknownBlockType { type_id: 17 }));
    assert_eq!(res.unwrap_err().to_string(), "unknown block type: 17");
    assert_eq!(snapshot(&registry), before);
}

#[test]
fn test_stake_gauges_are_reported() {
    let (registry, metrics) = setup();

    metrics.stake.set_percent_connected(0.97);
    metrics.stake.set_total_staked(360_000_000);

    let after = snapshot(&registry);
    assert_eq!(after["avalanche_p_percent_connected"], 0.97);
    assert_eq!(after["avalanche_p_total_staked"], 360_000_000.0);
}
