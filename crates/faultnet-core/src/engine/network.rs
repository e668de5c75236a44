//! # Fault Network
//!
//! The fixed six-node Bayesian network over vehicle breakdown faults.
//!
//! ## Structure
//!
//! - **Maintenance gate** `G ~ Bernoulli(g)`, where `g` depends on the observed
//!   maintenance answer. The gate is a noisy re-assertion of the observation,
//!   not the observation itself.
//! - **Maintenance-conditioned faults** `X_k`. For every fault except engine
//!   overheat, `X_k` is a draw from the maintained-branch Bernoulli when `G`
//!   is on, otherwise the fallback base variable:
//!   `P(X_k | G) = G ? m_k : u_k`.
//! - **Battery → overheat override**: engine overheat ignores the gate and is
//!   conditioned on battery failure instead:
//!   `P(X_overheat | X_battery) = X_battery ? h : u_overheat`.
//! - **Accident** is the deterministic OR of the five `X_k`.
//!
//! All Bernoulli parameters are drawn once per run through the
//! [`PriorRandomizer`] and then held fixed while marginalizing.

use crate::engine::config::NetworkConfig;
use crate::engine::errors::FaultNetError;
use crate::engine::prior::PriorRandomizer;
use crate::engine::random::RandomSource;

/// The closed set of modelled breakdown faults, in presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FaultKind {
    FlatTire,
    BatteryFailure,
    EngineOverheat,
    TransmissionFailure,
    BrakeFailure,
}

impl FaultKind {
    pub const COUNT: usize = 5;

    pub const ALL: [FaultKind; FaultKind::COUNT] = [
        FaultKind::FlatTire,
        FaultKind::BatteryFailure,
        FaultKind::EngineOverheat,
        FaultKind::TransmissionFailure,
        FaultKind::BrakeFailure,
    ];

    /// Position in [`FaultKind::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Stable identifier, independent of display locale.
    pub fn name(self) -> &'static str {
        match self {
            FaultKind::FlatTire => "flat_tire",
            FaultKind::BatteryFailure => "battery_failure",
            FaultKind::EngineOverheat => "engine_overheat",
            FaultKind::TransmissionFailure => "transmission_failure",
            FaultKind::BrakeFailure => "brake_failure",
        }
    }
}

/// A node of the network that can be queried or observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NetworkNode {
    /// The stochastic maintenance gate `G`.
    MaintenanceGate,
    /// A maintenance-conditioned fault variable `X_k`.
    Fault(FaultKind),
    /// OR of all maintenance-conditioned faults.
    Accident,
}

/// Bernoulli parameters of one run, sampled once and held fixed.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NetworkParameters {
    /// P(G = true).
    pub gate: f64,
    /// Maintained-branch parameters `m_k`, in [`FaultKind::ALL`] order.
    pub maintained: [f64; FaultKind::COUNT],
    /// Fallback base-variable parameters `u_k`, in [`FaultKind::ALL`] order.
    pub base: [f64; FaultKind::COUNT],
    /// Battery-influenced overheat parameter `h`.
    pub battery_overheat: f64,
}

impl NetworkParameters {
    /// Samples one run's parameters.
    ///
    /// Draw order is fixed: five base priors (unmaintained context), five
    /// maintained-branch priors (observed context), then the battery-influenced
    /// overheat prior (observed context). Eleven draws in total.
    pub fn sample<R: RandomSource + ?Sized>(
        observation: bool,
        config: &NetworkConfig,
        rng: &mut R,
    ) -> Self {
        let randomizer = PriorRandomizer::from_config(config);

        let mut base = [0.0; FaultKind::COUNT];
        for kind in FaultKind::ALL {
            base[kind.index()] =
                randomizer.randomize(config.unmaintained_rates.get(kind), false, rng);
        }

        let mut maintained = [0.0; FaultKind::COUNT];
        for kind in FaultKind::ALL {
            maintained[kind.index()] =
                randomizer.randomize(config.maintained_rates.get(kind), observation, rng);
        }

        let battery_overheat =
            randomizer.randomize(config.battery_overheat_rate, observation, rng);

        Self {
            gate: config.gate_probability(observation),
            maintained,
            base,
            battery_overheat,
        }
    }

    fn validate(&self) -> Result<(), FaultNetError> {
        check_probability("maintenance gate", self.gate)?;
        for kind in FaultKind::ALL {
            check_probability(
                &format!("{} maintained prior", kind.name()),
                self.maintained[kind.index()],
            )?;
            check_probability(
                &format!("{} base prior", kind.name()),
                self.base[kind.index()],
            )?;
        }
        check_probability("battery-influenced overheat prior", self.battery_overheat)
    }
}

/// A fully parameterized instance of the fault network for one evaluation run.
#[derive(Debug, Clone, PartialEq)]
pub struct FaultNetwork {
    observation: bool,
    params: NetworkParameters,
}

impl FaultNetwork {
    /// Builds the network for `observation`, sampling fresh priors from `rng`.
    pub fn build<R: RandomSource + ?Sized>(
        observation: bool,
        config: &NetworkConfig,
        rng: &mut R,
    ) -> Result<Self, FaultNetError> {
        let params = NetworkParameters::sample(observation, config, rng);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            observation,
            gate = params.gate,
            maintained = ?params.maintained,
            base = ?params.base,
            battery_overheat = params.battery_overheat,
            "sampled network priors"
        );

        Self::from_parameters(observation, params)
    }

    /// Builds the network from explicit parameters.
    pub fn from_parameters(
        observation: bool,
        params: NetworkParameters,
    ) -> Result<Self, FaultNetError> {
        params.validate()?;
        Ok(Self {
            observation,
            params,
        })
    }

    pub fn observation(&self) -> bool {
        self.observation
    }

    pub fn parameters(&self) -> &NetworkParameters {
        &self.params
    }

    /// P(G = true).
    pub fn gate_prior(&self) -> f64 {
        self.params.gate
    }

    /// P(X_kind = true | parents).
    ///
    /// `gate` is the state of `G`; `battery` is the state of `X_battery` and is
    /// only consulted for engine overheat.
    pub fn fault_conditional(&self, kind: FaultKind, gate: bool, battery: bool) -> f64 {
        if kind == FaultKind::EngineOverheat {
            return if battery {
                self.params.battery_overheat
            } else {
                self.params.base[kind.index()]
            };
        }
        if gate {
            self.params.maintained[kind.index()]
        } else {
            self.params.base[kind.index()]
        }
    }
}

pub(crate) fn check_probability(context: &str, p: f64) -> Result<(), FaultNetError> {
    if p.is_finite() && (0.0..=1.0).contains(&p) {
        Ok(())
    } else {
        Err(FaultNetError::invalid_probability(context, p))
    }
}
