//! # Faultnet Core
//!
//! Exact inference over a small Bayesian network of vehicle breakdown faults,
//! conditioned on whether the vehicle receives regular maintenance.

pub mod engine;
pub mod locale;
pub mod observation;
pub mod report;

// Re-export commonly used types
pub use engine::batch::{evaluate_batch, BatchSummary};
pub use engine::config::{FaultRates, NetworkConfig};
pub use engine::errors::FaultNetError;
pub use engine::evaluate::{evaluate, evaluate_network, FaultNetworkEvaluator};
pub use engine::inference::{Evidence, JointDistribution};
pub use engine::network::{FaultKind, FaultNetwork, NetworkNode, NetworkParameters};
pub use engine::prior::{randomize, PriorRandomizer};
pub use engine::random::{ConstantSource, RandomSource, SeededSource, SequenceSource};
pub use locale::Locale;
pub use observation::{normalize_observation, parse_observation};
pub use report::{MarginalEntry, Outcome, ResultMapping, RiskAdvisory};
