//! Generator configuration.
//!
//! Every random decision the generator makes is governed by one of the
//! probabilities below. The defaults are the tuning the generator ships
//! with; callers override them through the `with_*` builders or by
//! deserializing a `GeneratorConfig`.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Default cap on critical entity selection attempts.
pub const DEFAULT_MAX_SELECT_ATTEMPTS: usize = 100;

/// Rule generator configuration parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Chance a door win also requires the critical collectible.
    pub door_collectible_prob: f64,

    /// Chance a fire wall only kills avatars short of a resource.
    pub kill_if_has_less_prob: f64,

    /// Chance spawned sprites and avatar projectiles destroy resources.
    pub kill_resource_prob: f64,

    /// Chance shooting a resource scores +1 instead of -1.
    pub kill_resource_score_prob: f64,

    /// Chance avatar projectiles destroy collectibles (off by default).
    pub kill_collectible_prob: f64,

    /// Chance walls and projectiles/movables destroy each other.
    pub destroy_wall_prob: f64,

    /// Minimum share of the border tiles a wall candidate must occupy.
    pub wall_border_share: f64,

    /// Chance the spike sprite is lethal rather than a +2 collectible.
    pub spike_prob: f64,

    /// Chance a chaser's child dies on contact instead of transforming.
    pub double_npc_prob: f64,

    /// Unit draws below this make a free movable harmful.
    pub harmful_movable_prob: f64,

    /// Unit draws above this make a free movable collectible.
    pub useful_movable_prob: f64,

    /// Chance walls behave as fire.
    pub fire_wall_prob: f64,

    /// Population ceiling of score/spike candidates, as a share of the area.
    pub score_spike_area_share: f64,

    /// Chance a random NPC is harmful rather than collectible.
    pub random_npc_prob: f64,

    /// Chance spawner children are harmful rather than collectible.
    pub spawned_harmful_prob: f64,

    /// Chance a bomber's children are harmful rather than collectible.
    pub bomber_child_harmful_prob: f64,

    /// Maximum draws when selecting a live critical entity.
    pub max_select_attempts: usize,

    /// Seed for the generator's RNG.
    pub seed: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            door_collectible_prob: 0.5,
            kill_if_has_less_prob: 0.2,
            kill_resource_prob: 0.5,
            kill_resource_score_prob: 0.3,
            kill_collectible_prob: 0.0,
            destroy_wall_prob: 0.4,
            wall_border_share: 0.5,
            spike_prob: 0.5,
            double_npc_prob: 0.5,
            harmful_movable_prob: 0.3,
            useful_movable_prob: 0.7,
            fire_wall_prob: 0.05,
            score_spike_area_share: 0.1,
            random_npc_prob: 0.5,
            spawned_harmful_prob: 0.5,
            bomber_child_harmful_prob: 0.5,
            max_select_attempts: DEFAULT_MAX_SELECT_ATTEMPTS,
            seed: 42,
        }
    }
}

impl GeneratorConfig {
    /// Create a config with custom seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_fire_wall_prob(mut self, prob: f64) -> Self {
        self.fire_wall_prob = prob;
        self
    }

    #[must_use]
    pub fn with_destroy_wall_prob(mut self, prob: f64) -> Self {
        self.destroy_wall_prob = prob;
        self
    }

    #[must_use]
    pub fn with_spike_prob(mut self, prob: f64) -> Self {
        self.spike_prob = prob;
        self
    }

    #[must_use]
    pub fn with_kill_resource_prob(mut self, prob: f64) -> Self {
        self.kill_resource_prob = prob;
        self
    }

    #[must_use]
    pub fn with_kill_collectible_prob(mut self, prob: f64) -> Self {
        self.kill_collectible_prob = prob;
        self
    }

    #[must_use]
    pub fn with_random_npc_prob(mut self, prob: f64) -> Self {
        self.random_npc_prob = prob;
        self
    }

    #[must_use]
    pub fn with_spawned_harmful_prob(mut self, prob: f64) -> Self {
        self.spawned_harmful_prob = prob;
        self
    }

    #[must_use]
    pub fn with_bomber_child_harmful_prob(mut self, prob: f64) -> Self {
        self.bomber_child_harmful_prob = prob;
        self
    }

    #[must_use]
    pub fn with_door_collectible_prob(mut self, prob: f64) -> Self {
        self.door_collectible_prob = prob;
        self
    }

    /// Set both movable thresholds at once.
    #[must_use]
    pub fn with_movable_thresholds(mut self, harmful: f64, useful: f64) -> Self {
        self.harmful_movable_prob = harmful;
        self.useful_movable_prob = useful;
        self
    }

    #[must_use]
    pub fn with_max_select_attempts(mut self, attempts: usize) -> Self {
        self.max_select_attempts = attempts;
        self
    }

    /// Check every probability and limit.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let probabilities = [
            ("door_collectible_prob", self.door_collectible_prob),
            ("kill_if_has_less_prob", self.kill_if_has_less_prob),
            ("kill_resource_prob", self.kill_resource_prob),
            ("kill_resource_score_prob", self.kill_resource_score_prob),
            ("kill_collectible_prob", self.kill_collectible_prob),
            ("destroy_wall_prob", self.destroy_wall_prob),
            ("wall_border_share", self.wall_border_share),
            ("spike_prob", self.spike_prob),
            ("double_npc_prob", self.double_npc_prob),
            ("harmful_movable_prob", self.harmful_movable_prob),
            ("useful_movable_prob", self.useful_movable_prob),
            ("fire_wall_prob", self.fire_wall_prob),
            ("score_spike_area_share", self.score_spike_area_share),
            ("random_npc_prob", self.random_npc_prob),
            ("spawned_harmful_prob", self.spawned_harmful_prob),
            ("bomber_child_harmful_prob", self.bomber_child_harmful_prob),
        ];

        for (name, value) in probabilities {
            // NaN fails the range check as well
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::ProbabilityOutOfRange { name, value });
            }
        }

        if self.harmful_movable_prob > self.useful_movable_prob {
            return Err(ConfigError::MovableThresholdsInverted {
                harmful: self.harmful_movable_prob,
                useful: self.useful_movable_prob,
            });
        }

        if self.max_select_attempts == 0 {
            return Err(ConfigError::ZeroSelectAttempts);
        }

        Ok(())
    }
}
