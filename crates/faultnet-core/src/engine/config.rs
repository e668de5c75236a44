//! Numeric parameters of the fault network.

use crate::engine::errors::FaultNetError;
use crate::engine::network::FaultKind;

/// One probability per fault kind.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FaultRates {
    pub flat_tire: f64,
    pub battery_failure: f64,
    pub engine_overheat: f64,
    pub transmission_failure: f64,
    pub brake_failure: f64,
}

impl FaultRates {
    pub fn get(&self, kind: FaultKind) -> f64 {
        match kind {
            FaultKind::FlatTire => self.flat_tire,
            FaultKind::BatteryFailure => self.battery_failure,
            FaultKind::EngineOverheat => self.engine_overheat,
            FaultKind::TransmissionFailure => self.transmission_failure,
            FaultKind::BrakeFailure => self.brake_failure,
        }
    }

    /// Rates in [`FaultKind::ALL`] order.
    pub fn to_array(&self) -> [f64; FaultKind::COUNT] {
        FaultKind::ALL.map(|kind| self.get(kind))
    }

    /// Baseline rates for a vehicle without regular maintenance.
    pub const UNMAINTAINED: FaultRates = FaultRates {
        flat_tire: 0.15,
        battery_failure: 0.10,
        engine_overheat: 0.05,
        transmission_failure: 0.03,
        brake_failure: 0.08,
    };

    /// Baseline rates for a regularly maintained vehicle.
    pub const MAINTAINED: FaultRates = FaultRates {
        flat_tire: 0.10,
        battery_failure: 0.07,
        engine_overheat: 0.03,
        transmission_failure: 0.02,
        brake_failure: 0.05,
    };
}

/// Configuration for building and evaluating the fault network.
///
/// `Default` reproduces the reference model. Deserialized configs fall back to
/// the default for any missing field.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NetworkConfig {
    /// Base rates of the fallback (unmaintained-context) fault variables.
    pub unmaintained_rates: FaultRates,
    /// Base rates of the maintained-branch fault variables.
    pub maintained_rates: FaultRates,
    /// Base rate of engine overheat once the battery has failed.
    pub battery_overheat_rate: f64,
    /// Half-width of the uniform noise added to every prior.
    pub noise_amplitude: f64,
    /// Added to a prior randomized in the unmaintained context.
    pub neglect_penalty: f64,
    /// P(maintenance gate is on) when the vehicle is reported as maintained.
    pub gate_probability_maintained: f64,
    /// P(maintenance gate is on) when the vehicle is reported as not maintained.
    pub gate_probability_neglected: f64,
    /// Accident probability above which the advisory is a high-risk warning.
    pub high_risk_threshold: f64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            unmaintained_rates: FaultRates::UNMAINTAINED,
            maintained_rates: FaultRates::MAINTAINED,
            battery_overheat_rate: 0.15,
            noise_amplitude: 0.05,
            neglect_penalty: 0.10,
            gate_probability_maintained: 0.7,
            gate_probability_neglected: 0.2,
            high_risk_threshold: 0.5,
        }
    }
}

impl NetworkConfig {
    /// Gate probability for the given maintenance observation.
    pub fn gate_probability(&self, observation: bool) -> f64 {
        if observation {
            self.gate_probability_maintained
        } else {
            self.gate_probability_neglected
        }
    }

    pub fn validate(self) -> Result<Self, FaultNetError> {
        for kind in FaultKind::ALL {
            check_unit("unmaintained_rates", kind.name(), self.unmaintained_rates.get(kind))?;
            check_unit("maintained_rates", kind.name(), self.maintained_rates.get(kind))?;
        }
        check_unit("battery_overheat_rate", "", self.battery_overheat_rate)?;
        check_unit("gate_probability_maintained", "", self.gate_probability_maintained)?;
        check_unit("gate_probability_neglected", "", self.gate_probability_neglected)?;
        check_unit("high_risk_threshold", "", self.high_risk_threshold)?;

        if !self.noise_amplitude.is_finite() || self.noise_amplitude < 0.0 {
            return Err(FaultNetError::InvalidConfig(
                "noise_amplitude must be finite and >= 0".into(),
            ));
        }
        if !self.neglect_penalty.is_finite() || self.neglect_penalty < 0.0 {
            return Err(FaultNetError::InvalidConfig(
                "neglect_penalty must be finite and >= 0".into(),
            ));
        }
        Ok(self)
    }
}

fn check_unit(field: &str, member: &str, value: f64) -> Result<(), FaultNetError> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        return Ok(());
    }
    let name = if member.is_empty() {
        field.to_string()
    } else {
        format!("{}.{}", field, member)
    };
    Err(FaultNetError::InvalidConfig(format!(
        "{} must be in [0, 1], got {}",
        name, value
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(NetworkConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_rate_above_one() {
        let mut config = NetworkConfig::default();
        config.maintained_rates.brake_failure = 1.2;
        let err = config.validate().unwrap_err();
        assert!(matches!(err, FaultNetError::InvalidConfig(msg) if msg.contains("brake_failure")));
    }

    #[test]
    fn rejects_negative_noise_and_nan_gate() {
        let mut config = NetworkConfig::default();
        config.noise_amplitude = -0.01;
        assert!(config.validate().is_err());

        let mut config = NetworkConfig::default();
        config.gate_probability_neglected = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn rates_array_follows_kind_order() {
        assert_eq!(
            FaultRates::UNMAINTAINED.to_array(),
            [0.15, 0.10, 0.05, 0.03, 0.08]
        );
    }
}
