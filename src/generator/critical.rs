//! Critical entity selection.
//!
//! Win conditions are anchored on a single representative sprite per role.
//! A classified sprite may have no instance in the level (it was declared
//! but never placed), so picks are checked for liveness and the role is
//! dropped after a bounded number of misses.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::GenRng;
use crate::sprites::SpriteInventory;

use super::catalog::SpriteCatalog;
use super::classification::Classification;

/// Draw uniformly from `candidates` until one satisfies `is_live`.
///
/// Gives up after `max_attempts` draws and returns `None`; never loops
/// indefinitely, even when no candidate is live. An empty candidate list
/// returns `None` without touching the RNG.
pub fn select_with_retry<F>(
    candidates: &[String],
    rng: &mut GenRng,
    is_live: F,
    max_attempts: usize,
) -> Option<String>
where
    F: Fn(&str) -> bool,
{
    for attempt in 1..=max_attempts {
        let candidate = rng.choose(candidates)?;
        trace!(candidate = %candidate, attempt, "checking critical entity");
        if is_live(candidate) {
            return Some(candidate.clone());
        }
    }
    None
}

/// Win-condition anchors chosen for one run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriticalEntities {
    /// Harmful NPC whose destruction wins the game.
    pub enemy_npc: Option<String>,
    /// Fleeing NPC the avatar must catch.
    pub npc_to_catch: Option<String>,
    /// Collectible the avatar must gather.
    pub collectible: Option<String>,
}

impl CriticalEntities {
    /// Pick one live representative per role.
    ///
    /// A sprite is live when it has an instance in the level or a spawner
    /// present in the level produces it.
    pub fn select(
        classification: &Classification,
        catalog: &SpriteCatalog,
        inventory: &dyn SpriteInventory,
        rng: &mut GenRng,
        max_attempts: usize,
    ) -> Self {
        let is_live =
            |name: &str| inventory.population(name) > 0 || catalog.spawned_by_live_spawner(name);

        let mut pick = |role: &'static str, candidates: &[String]| {
            let chosen = select_with_retry(candidates, rng, is_live, max_attempts);
            if chosen.is_none() && !candidates.is_empty() {
                debug!(role, candidates = candidates.len(), max_attempts, "no live critical entity found");
            }
            chosen
        };

        Self {
            enemy_npc: pick("enemy_npc", classification.harmful_npcs.as_slice()),
            npc_to_catch: pick("npc_to_catch", classification.fleeing_npcs.as_slice()),
            collectible: pick("collectible", classification.collectibles.as_slice()),
        }
    }

    /// Forget every pick.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
