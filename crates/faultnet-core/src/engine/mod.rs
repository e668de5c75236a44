//! The evaluation engine for the vehicle fault network.
//!
//! This module provides:
//! - **errors**: Error types for configuration and evaluation failures
//! - **random**: Injectable uniform random sources
//! - **config**: Numeric parameters of the model
//! - **prior**: Per-run randomization of prior probabilities
//! - **network**: The fixed six-node network and its conditional tables
//! - **inference**: Exact inference by joint enumeration, with evidence
//! - **evaluate**: Single-run evaluation entry points
//! - **batch**: Independent evaluation of many vehicles

pub mod batch;
pub mod config;
pub mod errors;
pub mod evaluate;
pub mod inference;
pub mod network;
pub mod prior;
pub mod random;
