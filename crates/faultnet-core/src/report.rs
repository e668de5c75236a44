//! Result mapping and risk advisory.

use crate::engine::network::{FaultKind, NetworkNode};
use crate::locale::Locale;

/// A reported quantity: one maintenance-conditioned fault or the accident event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    Fault(FaultKind),
    Accident,
}

impl Outcome {
    pub const COUNT: usize = FaultKind::COUNT + 1;

    /// Presentation order.
    pub const ALL: [Outcome; Outcome::COUNT] = [
        Outcome::Fault(FaultKind::FlatTire),
        Outcome::Fault(FaultKind::BatteryFailure),
        Outcome::Fault(FaultKind::EngineOverheat),
        Outcome::Fault(FaultKind::TransmissionFailure),
        Outcome::Fault(FaultKind::BrakeFailure),
        Outcome::Accident,
    ];

    pub fn node(self) -> NetworkNode {
        match self {
            Outcome::Fault(kind) => NetworkNode::Fault(kind),
            Outcome::Accident => NetworkNode::Accident,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Outcome::Fault(kind) => kind.name(),
            Outcome::Accident => "accident",
        }
    }
}

/// One (outcome, probability) pair.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarginalEntry {
    pub outcome: Outcome,
    pub probability: f64,
}

/// Marginal probabilities of one evaluation run, in presentation order.
///
/// Probabilities keep full precision; rounding happens only in
/// [`format_percentages`](Self::format_percentages).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResultMapping {
    entries: Vec<MarginalEntry>,
}

impl ResultMapping {
    /// Entries must already be in presentation order.
    pub(crate) fn from_entries(entries: Vec<MarginalEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[MarginalEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = (Outcome, f64)> + '_ {
        self.entries.iter().map(|e| (e.outcome, e.probability))
    }

    pub fn get(&self, outcome: Outcome) -> Option<f64> {
        self.entries
            .iter()
            .find(|e| e.outcome == outcome)
            .map(|e| e.probability)
    }

    pub fn fault(&self, kind: FaultKind) -> Option<f64> {
        self.get(Outcome::Fault(kind))
    }

    pub fn accident(&self) -> Option<f64> {
        self.get(Outcome::Accident)
    }

    /// Advisory for this run's accident probability.
    pub fn advisory(&self, high_risk_threshold: f64) -> RiskAdvisory {
        RiskAdvisory::from_accident(self.accident().unwrap_or(0.0), high_risk_threshold)
    }

    /// `"{label}: {percent}%"` lines with two fractional digits.
    pub fn format_percentages(&self, locale: Locale) -> Vec<String> {
        self.entries
            .iter()
            .map(|e| {
                format!(
                    "{}: {}",
                    locale.outcome_label(e.outcome),
                    locale.format_percent(e.probability)
                )
            })
            .collect()
    }
}

/// Advisory derived from the accident probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RiskAdvisory {
    HighRisk,
    LowRisk,
}

impl RiskAdvisory {
    /// High risk strictly above `threshold`.
    pub fn from_accident(accident: f64, threshold: f64) -> Self {
        if accident > threshold {
            RiskAdvisory::HighRisk
        } else {
            RiskAdvisory::LowRisk
        }
    }

    pub fn message(self, locale: Locale) -> &'static str {
        match self {
            RiskAdvisory::HighRisk => locale.high_risk_warning(),
            RiskAdvisory::LowRisk => locale.low_risk_advisory(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping(accident: f64) -> ResultMapping {
        let mut entries: Vec<MarginalEntry> = FaultKind::ALL
            .iter()
            .map(|&kind| MarginalEntry {
                outcome: Outcome::Fault(kind),
                probability: 0.1234,
            })
            .collect();
        entries.push(MarginalEntry {
            outcome: Outcome::Accident,
            probability: accident,
        });
        ResultMapping::from_entries(entries)
    }

    #[test]
    fn advisory_threshold_is_strict() {
        assert_eq!(mapping(0.5).advisory(0.5), RiskAdvisory::LowRisk);
        assert_eq!(mapping(0.5001).advisory(0.5), RiskAdvisory::HighRisk);
    }

    #[test]
    fn formats_two_fractional_digits_per_locale() {
        let lines = mapping(0.6).format_percentages(Locale::English);
        assert_eq!(lines[0], "Flat tire: 12.34%");
        assert_eq!(lines[5], "Accident risk: 60.00%");

        let lines = mapping(0.6).format_percentages(Locale::Lithuanian);
        assert_eq!(lines[0], "Kiaura padanga: 12,34%");
    }

    #[test]
    fn lookup_by_outcome() {
        let m = mapping(0.3);
        assert_eq!(m.accident(), Some(0.3));
        assert_eq!(m.fault(FaultKind::BrakeFailure), Some(0.1234));
        assert_eq!(m.iter().count(), Outcome::COUNT);
    }
}
