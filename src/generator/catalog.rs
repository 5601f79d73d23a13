//! Sprite listings and ownership index captured once per generator.

use rustc_hash::FxHashSet;

use crate::sprites::{Presence, SpriteDescriptor, SpriteInventory};

/// Snapshot of the inventory listings the passes iterate over.
///
/// Ownership relations (which names are avatars, which names an avatar or a
/// spawner produces) are indexed here so passes answer them with a set
/// lookup instead of re-querying the inventory.
#[derive(Clone, Debug, Default)]
pub struct SpriteCatalog {
    /// Every declared avatar.
    pub avatars: Vec<SpriteDescriptor>,
    /// Avatars with an instance in the level.
    pub live_avatars: Vec<SpriteDescriptor>,
    /// Resources with an instance in the level.
    pub resources: Vec<SpriteDescriptor>,
    pub movables: Vec<SpriteDescriptor>,
    pub npcs: Vec<SpriteDescriptor>,
    pub spawners: Vec<SpriteDescriptor>,
    avatar_names: FxHashSet<String>,
    avatar_owned: FxHashSet<String>,
    spawner_owned: FxHashSet<String>,
    live_spawned: FxHashSet<String>,
}

impl SpriteCatalog {
    /// Query the inventory once and build the ownership index.
    pub fn capture(inventory: &dyn SpriteInventory) -> Self {
        let avatars = inventory.avatars(Presence::Any);
        let spawners = inventory.spawners(Presence::Any);

        let avatar_names = avatars.iter().map(|a| a.name.clone()).collect();
        let avatar_owned = avatars.iter().flat_map(|a| a.children.iter().cloned()).collect();
        let spawner_owned = spawners.iter().flat_map(|s| s.children.iter().cloned()).collect();
        let live_spawned = inventory
            .spawners(Presence::Live)
            .into_iter()
            .flat_map(|s| s.children.into_iter())
            .collect();

        Self {
            live_avatars: inventory.avatars(Presence::Live),
            resources: inventory.resources(Presence::Live),
            movables: inventory.movables(Presence::Any),
            npcs: inventory.npcs(Presence::Any),
            avatars,
            spawners,
            avatar_names,
            avatar_owned,
            spawner_owned,
            live_spawned,
        }
    }

    /// Is `name` an avatar sprite?
    #[must_use]
    pub fn is_avatar(&self, name: &str) -> bool {
        self.avatar_names.contains(name)
    }

    /// Is `name` a projectile (or other child) of some avatar?
    #[must_use]
    pub fn owned_by_avatar(&self, name: &str) -> bool {
        self.avatar_owned.contains(name)
    }

    /// Is `name` produced by some spawner?
    #[must_use]
    pub fn owned_by_spawner(&self, name: &str) -> bool {
        self.spawner_owned.contains(name)
    }

    /// Is `name` produced by a spawner that is present in the level?
    #[must_use]
    pub fn spawned_by_live_spawner(&self, name: &str) -> bool {
        self.live_spawned.contains(name)
    }

    /// Does some present avatar own at least one projectile type?
    #[must_use]
    pub fn live_avatar_can_shoot(&self) -> bool {
        self.live_avatars.iter().any(|a| !a.children.is_empty())
    }
}
