//! Core generator types: RNG, configuration, errors.
//!
//! These are shared by the sprite inventory, the rule model and the
//! generator passes.

pub mod rng;
pub mod config;
pub mod error;

pub use rng::{GenRng, GenRngState};
pub use config::{GeneratorConfig, DEFAULT_MAX_SELECT_ATTEMPTS};
pub use error::{ConfigError, Error, InventoryError, Result, RuleSetError};
