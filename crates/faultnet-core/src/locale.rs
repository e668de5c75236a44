//! Presentation strings.
//!
//! Labels are opaque to the engine; each [`Outcome`] maps to exactly one label
//! per locale.

use crate::engine::network::FaultKind;
use crate::report::Outcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Locale {
    #[default]
    Lithuanian,
    English,
}

impl Locale {
    /// Parses a locale code (`lt`, `en`).
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "lt" | "lt-lt" | "lithuanian" => Some(Locale::Lithuanian),
            "en" | "en-us" | "en-gb" | "english" => Some(Locale::English),
            _ => None,
        }
    }

    pub fn outcome_label(self, outcome: Outcome) -> &'static str {
        match self {
            Locale::Lithuanian => match outcome {
                Outcome::Fault(FaultKind::FlatTire) => "Kiaura padanga",
                Outcome::Fault(FaultKind::BatteryFailure) => "Akumuliatoriaus gedimas",
                Outcome::Fault(FaultKind::EngineOverheat) => "Variklio perkaitimas",
                Outcome::Fault(FaultKind::TransmissionFailure) => "Pavarų dėžės gedimas",
                Outcome::Fault(FaultKind::BrakeFailure) => "Stabdžių gedimas",
                Outcome::Accident => "Avarijos rizika",
            },
            Locale::English => match outcome {
                Outcome::Fault(FaultKind::FlatTire) => "Flat tire",
                Outcome::Fault(FaultKind::BatteryFailure) => "Battery failure",
                Outcome::Fault(FaultKind::EngineOverheat) => "Engine overheat",
                Outcome::Fault(FaultKind::TransmissionFailure) => "Transmission failure",
                Outcome::Fault(FaultKind::BrakeFailure) => "Brake failure",
                Outcome::Accident => "Accident risk",
            },
        }
    }

    pub fn greeting(self) -> &'static str {
        match self {
            Locale::Lithuanian => "Sveiki atvykę į automobilių problemų sistemą!",
            Locale::English => "Welcome to the vehicle fault system!",
        }
    }

    pub fn maintenance_prompt(self) -> &'static str {
        match self {
            Locale::Lithuanian => "Ar automobilis buvo reguliariai priežiūrėtas (taip/ne)? ",
            Locale::English => "Has the vehicle been regularly maintained (yes/no)? ",
        }
    }

    pub fn report_header(self) -> &'static str {
        match self {
            Locale::Lithuanian => "** Išvada **",
            Locale::English => "** Conclusion **",
        }
    }

    pub fn information_header(self) -> &'static str {
        match self {
            Locale::Lithuanian => "** Informacija **",
            Locale::English => "** Information **",
        }
    }

    pub fn high_risk_warning(self) -> &'static str {
        match self {
            Locale::Lithuanian => {
                "Įspėjimas! Yra labai didelė avarijos rizika. Prašome vairuoti atsargiai!"
            }
            Locale::English => {
                "Warning! The risk of an accident is very high. Please drive carefully!"
            }
        }
    }

    pub fn low_risk_advisory(self) -> &'static str {
        match self {
            Locale::Lithuanian => {
                "Avarijos rizika yra maža, tačiau būtina būti atsargiems ir tinkamai prižiūrėti savo automobilį."
            }
            Locale::English => {
                "The risk of an accident is low, but stay careful and keep your vehicle properly maintained."
            }
        }
    }

    pub fn affirmative_words(self) -> &'static [&'static str] {
        match self {
            Locale::Lithuanian => &["taip"],
            Locale::English => &["yes", "y"],
        }
    }

    pub fn negative_words(self) -> &'static [&'static str] {
        match self {
            Locale::Lithuanian => &["ne"],
            Locale::English => &["no", "n"],
        }
    }

    pub fn decimal_separator(self) -> char {
        match self {
            Locale::Lithuanian => ',',
            Locale::English => '.',
        }
    }

    /// Formats a probability as a percentage with two fractional digits.
    pub fn format_percent(self, probability: f64) -> String {
        let text = format!("{:.2}%", probability * 100.0);
        match self.decimal_separator() {
            '.' => text,
            sep => text.replace('.', &sep.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_outcome_has_distinct_label() {
        for locale in [Locale::Lithuanian, Locale::English] {
            let mut labels: Vec<&str> = Outcome::ALL
                .iter()
                .map(|&o| locale.outcome_label(o))
                .collect();
            labels.sort_unstable();
            labels.dedup();
            assert_eq!(labels.len(), Outcome::COUNT);
        }
    }

    #[test]
    fn locale_codes() {
        assert_eq!(Locale::from_code("LT"), Some(Locale::Lithuanian));
        assert_eq!(Locale::from_code(" en "), Some(Locale::English));
        assert_eq!(Locale::from_code("fr"), None);
    }

    #[test]
    fn percent_rounds_to_two_digits() {
        assert_eq!(Locale::English.format_percent(0.123456), "12.35%");
        assert_eq!(Locale::Lithuanian.format_percent(1.0), "100,00%");
    }
}
