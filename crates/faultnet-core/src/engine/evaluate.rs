//! Evaluation entry points.
//!
//! Each evaluation is a fresh construction-and-marginalization pass: sample
//! priors, build the network, enumerate the joint, read off the six
//! marginals. Nothing survives between runs apart from draws consumed from
//! the caller's random source.

use crate::engine::config::NetworkConfig;
use crate::engine::errors::FaultNetError;
use crate::engine::inference::{Evidence, JointDistribution};
use crate::engine::network::FaultNetwork;
use crate::engine::random::RandomSource;
use crate::report::{MarginalEntry, Outcome, ResultMapping};

/// Evaluator for the fault network under a validated configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaultNetworkEvaluator {
    config: NetworkConfig,
}

impl Default for FaultNetworkEvaluator {
    fn default() -> Self {
        Self {
            config: NetworkConfig::default(),
        }
    }
}

impl FaultNetworkEvaluator {
    pub fn new(config: NetworkConfig) -> Result<Self, FaultNetError> {
        Ok(Self {
            config: config.validate()?,
        })
    }

    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    /// Marginals of every fault and of accident given the maintenance observation.
    pub fn evaluate<R: RandomSource + ?Sized>(
        &self,
        observation: bool,
        rng: &mut R,
    ) -> Result<ResultMapping, FaultNetError> {
        self.evaluate_with_evidence(observation, &Evidence::default(), rng)
    }

    /// Posterior marginals given the observation and additional hard evidence.
    pub fn evaluate_with_evidence<R: RandomSource + ?Sized>(
        &self,
        observation: bool,
        evidence: &Evidence,
        rng: &mut R,
    ) -> Result<ResultMapping, FaultNetError> {
        let network = FaultNetwork::build(observation, &self.config, rng)?;
        evaluate_network(&network, evidence)
    }
}

/// Marginals of an already-parameterized network.
pub fn evaluate_network(
    network: &FaultNetwork,
    evidence: &Evidence,
) -> Result<ResultMapping, FaultNetError> {
    let joint = JointDistribution::enumerate(network)?.condition(evidence)?;

    let mut entries = Vec::with_capacity(Outcome::COUNT);
    for outcome in Outcome::ALL {
        entries.push(MarginalEntry {
            outcome,
            probability: joint.marginal(outcome.node())?,
        });
    }

    #[cfg(feature = "tracing")]
    {
        let marginals: Vec<(&str, f64)> = entries
            .iter()
            .map(|e| (e.outcome.name(), e.probability))
            .collect();
        tracing::debug!(
            observation = network.observation(),
            ?marginals,
            "computed marginals"
        );
    }

    Ok(ResultMapping::from_entries(entries))
}

/// Evaluates with the reference configuration.
pub fn evaluate<R: RandomSource + ?Sized>(
    observation: bool,
    rng: &mut R,
) -> Result<ResultMapping, FaultNetError> {
    FaultNetworkEvaluator::default().evaluate(observation, rng)
}
