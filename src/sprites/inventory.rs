//! Sprite inventory queries.
//!
//! The generator never looks at a level directly. Everything it knows comes
//! through `SpriteInventory`, the read-only query surface of a level
//! analyzer. Implementations must be pure: the same query always returns the
//! same answer, in the same order.

use super::descriptor::SpriteDescriptor;

/// Whether a listing includes sprites with no instance in the level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Presence {
    /// Only sprites with at least one instance in the level.
    Live,
    /// Every declared sprite, present or not.
    Any,
}

/// Read-only query surface of a level analyzer.
///
/// Listings return descriptors in declaration order. Ordering matters:
/// random picks index into these lists, so a reordered listing changes the
/// generated rules for the same seed.
pub trait SpriteInventory {
    /// Avatar sprites.
    fn avatars(&self, presence: Presence) -> Vec<SpriteDescriptor>;

    /// Resource sprites.
    fn resources(&self, presence: Presence) -> Vec<SpriteDescriptor>;

    /// Autonomously moving sprites.
    fn movables(&self, presence: Presence) -> Vec<SpriteDescriptor>;

    /// Non-player characters.
    fn npcs(&self, presence: Presence) -> Vec<SpriteDescriptor>;

    /// Spawner sprites.
    fn spawners(&self, presence: Presence) -> Vec<SpriteDescriptor>;

    /// Portal-category sprites (doors, exits, teleports).
    fn portals(&self, presence: Presence) -> Vec<SpriteDescriptor>;

    /// Immovable sprites whose population lies in `[min_population, max_population]`.
    fn immovables(&self, min_population: usize, max_population: usize) -> Vec<SpriteDescriptor>;

    /// Number of live instances of `name` (0 for unknown names).
    fn population(&self, name: &str) -> usize;

    /// Immovable sprites that look like a level border.
    ///
    /// A sprite qualifies when its population covers at least `area_share`
    /// of the level area and its border instances cover at least
    /// `border_share` of the perimeter tiles.
    fn border_objects(&self, area_share: f64, border_share: f64) -> Vec<SpriteDescriptor>;

    /// Sprites that share at least one tile with `name`, excluding `name` itself.
    fn sprites_on_same_tile(&self, name: &str) -> Vec<SpriteDescriptor>;

    /// Number of tiles on the outer ring of the level.
    fn perimeter(&self) -> usize;

    /// Number of tiles in the level.
    fn area(&self) -> usize;
}

impl<T: SpriteInventory + ?Sized> SpriteInventory for &T {
    fn avatars(&self, presence: Presence) -> Vec<SpriteDescriptor> {
        (**self).avatars(presence)
    }

    fn resources(&self, presence: Presence) -> Vec<SpriteDescriptor> {
        (**self).resources(presence)
    }

    fn movables(&self, presence: Presence) -> Vec<SpriteDescriptor> {
        (**self).movables(presence)
    }

    fn npcs(&self, presence: Presence) -> Vec<SpriteDescriptor> {
        (**self).npcs(presence)
    }

    fn spawners(&self, presence: Presence) -> Vec<SpriteDescriptor> {
        (**self).spawners(presence)
    }

    fn portals(&self, presence: Presence) -> Vec<SpriteDescriptor> {
        (**self).portals(presence)
    }

    fn immovables(&self, min_population: usize, max_population: usize) -> Vec<SpriteDescriptor> {
        (**self).immovables(min_population, max_population)
    }

    fn population(&self, name: &str) -> usize {
        (**self).population(name)
    }

    fn border_objects(&self, area_share: f64, border_share: f64) -> Vec<SpriteDescriptor> {
        (**self).border_objects(area_share, border_share)
    }

    fn sprites_on_same_tile(&self, name: &str) -> Vec<SpriteDescriptor> {
        (**self).sprites_on_same_tile(name)
    }

    fn perimeter(&self) -> usize {
        (**self).perimeter()
    }

    fn area(&self) -> usize {
        (**self).area()
    }
}
