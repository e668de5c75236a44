//! Exact inference by enumeration of the joint distribution.
//!
//! The network has six boolean random nodes (the maintenance gate and five
//! maintenance-conditioned faults); accident is a deterministic function of
//! the faults. The full joint therefore has 64 states and is tabulated
//! directly:
//!
//! ```text
//! P(g, x) = P(G=g) * P(x_battery | g) * P(x_overheat | x_battery)
//!                  * prod_{k in flat, transmission, brake} P(x_k | g)
//! ```
//!
//! Marginals are sums over the states in which a node is true.

use crate::engine::errors::FaultNetError;
use crate::engine::network::{check_probability, FaultKind, FaultNetwork, NetworkNode};

const GATE_BIT: usize = 0;
const STATE_COUNT: usize = 1 << (FaultKind::COUNT + 1);
const FAULT_MASK: usize = ((1 << FaultKind::COUNT) - 1) << 1;

/// Hard observations on network nodes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Evidence {
    observations: Vec<(NetworkNode, bool)>,
}

impl Evidence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an observation. A later observation of the same node replaces an
    /// earlier one.
    pub fn observe(mut self, node: NetworkNode, value: bool) -> Self {
        self.observations.retain(|(n, _)| *n != node);
        self.observations.push((node, value));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(NetworkNode, bool)> {
        self.observations.iter()
    }

    fn admits(&self, state: usize) -> bool {
        self.observations
            .iter()
            .all(|&(node, value)| node_value(state, node) == value)
    }
}

/// Exact joint distribution over the 64 network states.
#[derive(Debug, Clone, PartialEq)]
pub struct JointDistribution {
    weights: Vec<f64>,
}

impl JointDistribution {
    /// Tabulates the joint distribution implied by `network`.
    pub fn enumerate(network: &FaultNetwork) -> Result<Self, FaultNetError> {
        let mut weights = Vec::with_capacity(STATE_COUNT);
        for state in 0..STATE_COUNT {
            weights.push(state_weight(network, state));
        }
        let joint = Self { weights };

        let total = joint.total_mass();
        if !total.is_finite() || (total - 1.0).abs() > 1e-9 {
            return Err(FaultNetError::invalid_probability("joint distribution mass", total));
        }
        Ok(joint)
    }

    /// Restricts the distribution to states consistent with `evidence` and
    /// renormalizes.
    pub fn condition(&self, evidence: &Evidence) -> Result<Self, FaultNetError> {
        if evidence.is_empty() {
            return Ok(self.clone());
        }
        let mut weights: Vec<f64> = self
            .weights
            .iter()
            .enumerate()
            .map(|(state, &w)| if evidence.admits(state) { w } else { 0.0 })
            .collect();

        let mass: f64 = weights.iter().sum();
        if mass <= 0.0 {
            return Err(FaultNetError::ImpossibleEvidence(format!(
                "{:?} has zero probability under the model",
                evidence.observations
            )));
        }
        for w in &mut weights {
            *w /= mass;
        }
        Ok(Self { weights })
    }

    pub fn total_mass(&self) -> f64 {
        self.weights.iter().sum()
    }

    /// P(node = true).
    pub fn marginal(&self, node: NetworkNode) -> Result<f64, FaultNetError> {
        let p: f64 = self
            .weights
            .iter()
            .enumerate()
            .filter(|&(state, _)| node_value(state, node))
            .map(|(_, &w)| w)
            .sum();
        let p = snap_rounding(p);
        check_probability(&format!("marginal of {:?}", node), p)?;
        Ok(p)
    }
}

/// Probability of one full assignment.
fn state_weight(network: &FaultNetwork, state: usize) -> f64 {
    let gate = bit(state, GATE_BIT);
    let battery = node_value(state, NetworkNode::Fault(FaultKind::BatteryFailure));

    let mut weight = bernoulli(network.gate_prior(), gate);
    for kind in FaultKind::ALL {
        let p = network.fault_conditional(kind, gate, battery);
        weight *= bernoulli(p, node_value(state, NetworkNode::Fault(kind)));
    }
    weight
}

fn node_value(state: usize, node: NetworkNode) -> bool {
    match node {
        NetworkNode::MaintenanceGate => bit(state, GATE_BIT),
        NetworkNode::Fault(kind) => bit(state, kind.index() + 1),
        NetworkNode::Accident => state & FAULT_MASK != 0,
    }
}

#[inline]
fn bit(state: usize, position: usize) -> bool {
    (state >> position) & 1 == 1
}

#[inline]
fn bernoulli(p: f64, value: bool) -> f64 {
    if value {
        p
    } else {
        1.0 - p
    }
}

/// Summation can overshoot the unit interval by a few ulps.
#[inline]
fn snap_rounding(p: f64) -> f64 {
    const EPS: f64 = 1e-12;
    if p > 1.0 && p <= 1.0 + EPS {
        1.0
    } else if p < 0.0 && p >= -EPS {
        0.0
    } else {
        p
    }
}
