//! # arcade-rulegen
//!
//! Constructive rule generation for 2D arcade game descriptions.
//!
//! Given the categorized sprites of one level, produce a complete, playable
//! rule set: collision interactions between sprite types and the win/lose
//! conditions of the game. Generation is a single deterministic pass over
//! the inventory; there is no simulation and no search.
//!
//! ## Design Principles
//!
//! 1. **Always Finishable**: Every rule set has a win condition. When no
//!    goal sprite qualifies, surviving a timeout wins.
//!
//! 2. **Graceful Degradation**: Missing sprites never fail generation.
//!    Rules that would reference them are simply omitted.
//!
//! 3. **Reproducible**: One seedable RNG drives every random choice in a
//!    fixed order. Same inventory, same seed, same rules.
//!
//! ## Architecture
//!
//! - **Roles first**: Wall, score, spike and exits are detected once per
//!   inventory and reused by every run.
//!
//! - **Ordered passes**: Interaction passes run per sprite category and
//!   label sprites harmful, fleeing or collectible as they go. Later passes
//!   and the termination pass read those labels.
//!
//! - **Structured rules**: Interactions and terminations are plain values.
//!   The engine's text syntax is only a `Display` rendering.
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, errors
//! - `sprites`: Sprite descriptors and the inventory query trait
//! - `rules`: Interactions, terminations, rule sets
//! - `generator`: Role detection, interaction passes, terminations

pub mod core;
pub mod sprites;
pub mod rules;
pub mod generator;

// Re-export commonly used types
pub use crate::core::{
    GenRng, GenRngState,
    GeneratorConfig,
    ConfigError, Error, InventoryError, Result, RuleSetError,
};

pub use crate::sprites::{
    NpcFamily, Presence, SpriteCategory, SpriteDescriptor, SpriteInventory,
    LevelInventory, LevelInventoryBuilder,
};

pub use crate::rules::{CollisionTarget, Interaction, InteractionEffect, RuleSet, SpriteSets, Termination};

pub use crate::generator::{
    Classification, CriticalEntities, RoleAssignment, RuleGenerator, TimeoutWindow,
    select_with_retry,
};
