//! Per-run randomization of prior probabilities.

use crate::engine::config::NetworkConfig;
use crate::engine::random::RandomSource;

/// Perturbs base probabilities with bounded uniform noise and a neglect penalty.
///
/// Each call consumes exactly one draw from the random source. Results are
/// never cached: every logical use of a prior must call [`randomize`](Self::randomize).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriorRandomizer {
    noise_amplitude: f64,
    neglect_penalty: f64,
}

impl Default for PriorRandomizer {
    fn default() -> Self {
        Self::from_config(&NetworkConfig::default())
    }
}

impl PriorRandomizer {
    pub fn from_config(config: &NetworkConfig) -> Self {
        Self {
            noise_amplitude: config.noise_amplitude,
            neglect_penalty: config.neglect_penalty,
        }
    }

    /// Returns `clamp(base + noise + (is_maintained ? 0 : penalty), 0, 1)`
    /// with `noise ~ U[-amplitude, amplitude]`.
    pub fn randomize<R: RandomSource + ?Sized>(
        &self,
        base: f64,
        is_maintained: bool,
        rng: &mut R,
    ) -> f64 {
        let noise = (2.0 * rng.next_unit() - 1.0) * self.noise_amplitude;
        let mut p = base + noise;
        if !is_maintained {
            p += self.neglect_penalty;
        }
        clamp_probability(p)
    }
}

/// Randomizes `base` with the reference noise amplitude and neglect penalty.
pub fn randomize<R: RandomSource + ?Sized>(base: f64, is_maintained: bool, rng: &mut R) -> f64 {
    PriorRandomizer::default().randomize(base, is_maintained, rng)
}

/// Clamps into [0, 1]; NaN maps to 0.
pub fn clamp_probability(p: f64) -> f64 {
    if p.is_nan() {
        0.0
    } else {
        p.clamp(0.0, 1.0)
    }
}
