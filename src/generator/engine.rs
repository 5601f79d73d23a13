//! The rule generator.
//!
//! `RuleGenerator` owns an inventory, the roles derived from it and the RNG.
//! Each `generate` call resets the per-run state, runs the interaction
//! passes and the termination pass, and returns a fresh `RuleSet`.

use tracing::info;

use crate::core::{GenRng, GenRngState, GeneratorConfig, Result};
use crate::rules::{Interaction, RuleSet};
use crate::sprites::SpriteInventory;

use super::catalog::SpriteCatalog;
use super::classification::Classification;
use super::context::SynthesisContext;
use super::critical::CriticalEntities;
use super::passes;
use super::roles::RoleAssignment;
use super::terminations;

/// Constructive rule generator for one level.
///
/// ```
/// use arcade_rulegen::generator::RuleGenerator;
/// use arcade_rulegen::core::GeneratorConfig;
/// use arcade_rulegen::sprites::{LevelInventory, SpriteCategory, SpriteDescriptor};
///
/// let inventory = LevelInventory::builder(8, 8)
///     .sprite(SpriteDescriptor::new("avatar", SpriteCategory::Avatar), 1)
///     .build()
///     .unwrap();
///
/// let mut generator = RuleGenerator::new(inventory, GeneratorConfig::default()).unwrap();
/// let rules = generator.generate();
/// assert!(rules.has_win());
/// ```
pub struct RuleGenerator<I: SpriteInventory> {
    inventory: I,
    config: GeneratorConfig,
    catalog: SpriteCatalog,
    roles: RoleAssignment,
    rng: GenRng,
    classification: Classification,
    critical: CriticalEntities,
}

impl<I: SpriteInventory> RuleGenerator<I> {
    /// Create a generator seeded from `config.seed`.
    pub fn new(inventory: I, config: GeneratorConfig) -> Result<Self> {
        let rng = GenRng::new(config.seed);
        Self::with_rng(inventory, config, rng)
    }

    /// Create a generator drawing from an existing RNG stream.
    ///
    /// Role detection draws from `rng` before the first `generate` call.
    pub fn with_rng(inventory: I, config: GeneratorConfig, mut rng: GenRng) -> Result<Self> {
        config.validate()?;
        let catalog = SpriteCatalog::capture(&inventory);
        let roles = RoleAssignment::classify(&inventory, &config, &mut rng);

        Ok(Self {
            inventory,
            config,
            catalog,
            roles,
            rng,
            classification: Classification::default(),
            critical: CriticalEntities::default(),
        })
    }

    /// Produce one rule set.
    ///
    /// Classification and critical entities from the previous call are
    /// discarded first. Consecutive calls continue the RNG stream, so they
    /// usually differ; restore the RNG state to replay a call.
    pub fn generate(&mut self) -> RuleSet {
        self.classification.clear();
        self.critical.clear();

        let mut interactions: Vec<Interaction> = Vec::new();
        let mut ctx = SynthesisContext {
            inventory: &self.inventory,
            catalog: &self.catalog,
            roles: &self.roles,
            config: &self.config,
            rng: &mut self.rng,
            classification: &mut self.classification,
            critical: &mut self.critical,
            interactions: &mut interactions,
        };
        passes::run_all(&mut ctx);

        let terminations = terminations::synthesize(
            &self.roles,
            &self.classification,
            &self.critical,
            &self.catalog,
            &self.config,
            &mut self.rng,
        );

        let rules = RuleSet {
            interactions,
            terminations,
            sprite_sets: self.classification.sprite_sets(),
        };
        info!(
            interactions = rules.interactions.len(),
            terminations = rules.terminations.len(),
            harmful = self.classification.harmful_objects.len() + self.classification.harmful_npcs.len(),
            collectibles = self.classification.collectibles.len(),
            "generated rule set"
        );
        rules
    }

    /// Structural roles found at construction.
    pub fn roles(&self) -> &RoleAssignment {
        &self.roles
    }

    /// Labels from the most recent `generate` call.
    pub fn classification(&self) -> &Classification {
        &self.classification
    }

    /// Win anchors from the most recent `generate` call.
    pub fn critical(&self) -> &CriticalEntities {
        &self.critical
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn inventory(&self) -> &I {
        &self.inventory
    }

    /// Snapshot of the RNG stream position.
    #[must_use]
    pub fn rng_state(&self) -> GenRngState {
        self.rng.state()
    }

    /// Rewind or fast-forward the RNG stream.
    pub fn restore_rng(&mut self, state: &GenRngState) {
        self.rng = GenRng::from_state(state);
    }
}
