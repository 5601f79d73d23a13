//! Per-run sprite classification.
//!
//! Passes label sprites as they go; later passes read the labels earlier
//! ones wrote. Everything here is cleared at the start of each run.

use rustc_hash::FxHashSet;

use crate::rules::SpriteSets;

/// Insertion-ordered set of sprite names.
///
/// Order matters: critical entity selection indexes into it, so the same
/// insertions must always yield the same sequence.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NameSet {
    order: Vec<String>,
    members: FxHashSet<String>,
}

impl NameSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a name. Returns false if it was already present.
    pub fn insert(&mut self, name: &str) -> bool {
        if self.members.contains(name) {
            return false;
        }
        self.members.insert(name.to_string());
        self.order.push(name.to_string());
        true
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.members.contains(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Names in insertion order.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.order
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.order.clear();
        self.members.clear();
    }
}

/// Labels assigned to sprites during one run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Classification {
    /// Sprites that kill the avatar on contact.
    pub harmful_objects: NameSet,
    /// NPCs that kill the avatar on contact.
    pub harmful_npcs: NameSet,
    /// NPCs that run from the avatar and score when caught.
    pub fleeing_npcs: NameSet,
    /// Sprites that score when the avatar touches them.
    pub collectibles: NameSet,
}

impl Classification {
    pub fn clear(&mut self) {
        self.harmful_objects.clear();
        self.harmful_npcs.clear();
        self.fleeing_npcs.clear();
        self.collectibles.clear();
    }

    /// Was anything labeled as a threat to the avatar?
    #[must_use]
    pub fn any_harmful(&self) -> bool {
        !self.harmful_objects.is_empty() || !self.harmful_npcs.is_empty()
    }

    /// Sprite groups for the game description.
    pub fn sprite_sets(&self) -> SpriteSets {
        SpriteSets::build(
            self.fleeing_npcs.iter(),
            self.harmful_objects.iter().chain(self.harmful_npcs.iter()),
            self.collectibles.iter(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_set_keeps_first_insertion_order() {
        let mut set = NameSet::new();
        assert!(set.insert("bat"));
        assert!(set.insert("apple"));
        assert!(!set.insert("bat"));

        assert_eq!(set.as_slice(), ["bat".to_string(), "apple".to_string()]);
        assert_eq!(set.len(), 2);
        assert!(set.contains("apple"));
        assert!(!set.contains("cherry"));
    }

    #[test]
    fn test_clear() {
        let mut classification = Classification::default();
        classification.harmful_npcs.insert("ghost");
        classification.collectibles.insert("pellet");
        assert!(classification.any_harmful());

        classification.clear();
        assert!(!classification.any_harmful());
        assert!(classification.collectibles.is_empty());
        assert_eq!(classification, Classification::default());
    }

    #[test]
    fn test_sprite_sets_merge_harmful_groups() {
        let mut classification = Classification::default();
        classification.fleeing_npcs.insert("rabbit");
        classification.harmful_objects.insert("bomb");
        classification.harmful_npcs.insert("ufo");
        classification.collectibles.insert("bomb");
        classification.collectibles.insert("coin");

        let sets = classification.sprite_sets();
        assert_eq!(sets.fleeing, vec!["rabbit"]);
        assert_eq!(sets.harmful, vec!["bomb", "ufo"]);
        assert_eq!(sets.collectible, vec!["coin"]);
    }
}
