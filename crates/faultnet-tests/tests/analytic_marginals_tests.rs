//! Analytical tests for exact marginals.
//!
//! These tests compare the enumerated marginals against the closed-form
//! expressions obtained by conditioning on the maintenance gate and on
//! battery failure.

use faultnet_core::{
    evaluate_network, Evidence, FaultKind, FaultNetwork, NetworkNode, NetworkParameters,
};

fn assert_close(actual: f64, expected: f64, tol: f64, label: &str) {
    assert!(
        (actual - expected).abs() <= tol,
        "{} mismatch: expected {:.15}, got {:.15}, diff={:.3e}",
        label,
        expected,
        actual,
        (actual - expected).abs()
    );
}

fn params() -> NetworkParameters {
    NetworkParameters {
        gate: 0.7,
        maintained: [0.10, 0.07, 0.03, 0.02, 0.05],
        base: [0.25, 0.20, 0.15, 0.13, 0.18],
        battery_overheat: 0.35,
    }
}

fn gated(p: &NetworkParameters, kind: FaultKind) -> f64 {
    let i = kind.index();
    p.gate * p.maintained[i] + (1.0 - p.gate) * p.base[i]
}

#[test]
fn gated_faults_match_mixture_of_branches() {
    let p = params();
    let network = FaultNetwork::from_parameters(true, p).expect("network");
    let result = evaluate_network(&network, &Evidence::new()).expect("marginals");

    for kind in [
        FaultKind::FlatTire,
        FaultKind::BatteryFailure,
        FaultKind::TransmissionFailure,
        FaultKind::BrakeFailure,
    ] {
        assert_close(
            result.fault(kind).expect("fault"),
            gated(&p, kind),
            1e-12,
            kind.name(),
        );
    }
}

#[test]
fn overheat_marginal_follows_battery_edge() {
    // P(oh) = P(bat) * h + (1 - P(bat)) * u_oh
    let p = params();
    let network = FaultNetwork::from_parameters(true, p).expect("network");
    let result = evaluate_network(&network, &Evidence::new()).expect("marginals");

    let p_bat = gated(&p, FaultKind::BatteryFailure);
    let expected =
        p_bat * p.battery_overheat + (1.0 - p_bat) * p.base[FaultKind::EngineOverheat.index()];
    assert_close(
        result.fault(FaultKind::EngineOverheat).expect("overheat"),
        expected,
        1e-12,
        "engine overheat",
    );
}

#[test]
fn accident_matches_complement_of_no_fault() {
    // P(no accident | G) = prod_{flat, trans, brake} (1 - q_k(G)) * (1 - q_bat(G)) * (1 - u_oh)
    let p = params();
    let network = FaultNetwork::from_parameters(true, p).expect("network");
    let result = evaluate_network(&network, &Evidence::new()).expect("marginals");

    let no_fault_given = |gate_on: bool| {
        let q = |kind: FaultKind| {
            if gate_on {
                p.maintained[kind.index()]
            } else {
                p.base[kind.index()]
            }
        };
        (1.0 - q(FaultKind::FlatTire))
            * (1.0 - q(FaultKind::TransmissionFailure))
            * (1.0 - q(FaultKind::BrakeFailure))
            * (1.0 - q(FaultKind::BatteryFailure))
            * (1.0 - p.base[FaultKind::EngineOverheat.index()])
    };
    let expected =
        1.0 - (p.gate * no_fault_given(true) + (1.0 - p.gate) * no_fault_given(false));

    assert_close(result.accident().expect("accident"), expected, 1e-12, "accident");
}

#[test]
fn gate_evidence_selects_single_branch() {
    let p = params();
    let network = FaultNetwork::from_parameters(true, p).expect("network");

    let on = evaluate_network(
        &network,
        &Evidence::new().observe(NetworkNode::MaintenanceGate, true),
    )
    .expect("gate on");
    let off = evaluate_network(
        &network,
        &Evidence::new().observe(NetworkNode::MaintenanceGate, false),
    )
    .expect("gate off");

    assert_close(on.fault(FaultKind::FlatTire).unwrap(), 0.10, 1e-12, "flat | G");
    assert_close(off.fault(FaultKind::FlatTire).unwrap(), 0.25, 1e-12, "flat | !G");
    assert_close(on.fault(FaultKind::BrakeFailure).unwrap(), 0.05, 1e-12, "brake | G");
    assert_close(off.fault(FaultKind::BrakeFailure).unwrap(), 0.18, 1e-12, "brake | !G");
}

#[test]
fn accident_evidence_raises_every_fault() {
    let p = params();
    let network = FaultNetwork::from_parameters(true, p).expect("network");
    let prior = evaluate_network(&network, &Evidence::new()).expect("prior");
    let posterior = evaluate_network(
        &network,
        &Evidence::new().observe(NetworkNode::Accident, true),
    )
    .expect("posterior");

    assert_close(posterior.accident().unwrap(), 1.0, 1e-12, "accident | accident");
    for kind in FaultKind::ALL {
        assert!(
            posterior.fault(kind).unwrap() > prior.fault(kind).unwrap(),
            "{} should rise once an accident is observed",
            kind.name()
        );
    }
}
