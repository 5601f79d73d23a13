//! Error types.
//!
//! Rule synthesis itself never fails: sparse inventories degrade to sparser
//! rule sets. Errors only arise at the edges of the crate, when a
//! configuration is rejected, an inventory is assembled from inconsistent
//! data, or a rule set snapshot cannot be encoded.

use thiserror::Error;

/// Rejected generator configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("probability `{name}` must be within [0, 1], got {value}")]
    ProbabilityOutOfRange { name: &'static str, value: f64 },

    #[error("harmful movable threshold {harmful} exceeds useful movable threshold {useful}")]
    MovableThresholdsInverted { harmful: f64, useful: f64 },

    #[error("critical entity selection needs at least one attempt")]
    ZeroSelectAttempts,
}

/// Inconsistent level inventory data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InventoryError {
    #[error("sprite `{0}` declared more than once")]
    DuplicateSprite(String),

    #[error("sprite `{0}` is referenced but was never declared")]
    UnknownSprite(String),

    #[error("sprite `{name}` has {border} border tiles but a population of {population}")]
    BorderExceedsPopulation {
        name: String,
        border: usize,
        population: usize,
    },

    #[error("level layout is empty")]
    EmptyLayout,

    #[error("layout row {row} has width {found}, expected {expected}")]
    RaggedLayout {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("layout character `{symbol}` at row {row}, column {column} has no legend entry")]
    UnmappedSymbol {
        symbol: char,
        row: usize,
        column: usize,
    },
}

/// Rule set snapshot encoding failure.
#[derive(Debug, Error)]
pub enum RuleSetError {
    #[error("rule set encoding error: {0}")]
    Encoding(#[from] bincode::Error),
}

/// Any error surfaced by this crate.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Inventory(#[from] InventoryError),

    #[error(transparent)]
    RuleSet(#[from] RuleSetError),
}

pub type Result<T> = std::result::Result<T, Error>;
