//! Generated rule sets.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::RuleSetError;

use super::interaction::Interaction;
use super::termination::Termination;

/// Named sprite groups for the game description's SpriteSet block.
///
/// A name belongs to at most one group: the first of fleeing, harmful,
/// collectible that claims it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpriteSets {
    pub fleeing: Vec<String>,
    pub harmful: Vec<String>,
    pub collectible: Vec<String>,
}

impl SpriteSets {
    /// Group names, dropping any name an earlier group already holds.
    pub fn build<'a>(
        fleeing: impl IntoIterator<Item = &'a str>,
        harmful: impl IntoIterator<Item = &'a str>,
        collectible: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        let mut seen: FxHashSet<&str> = FxHashSet::default();
        let mut claim = |names: &mut dyn Iterator<Item = &'a str>| -> Vec<String> {
            names
                .filter(|name| seen.insert(*name))
                .map(str::to_string)
                .collect()
        };

        let fleeing = claim(&mut fleeing.into_iter());
        let harmful = claim(&mut harmful.into_iter());
        let collectible = claim(&mut collectible.into_iter());

        Self {
            fleeing,
            harmful,
            collectible,
        }
    }

    /// Non-empty groups with their set names.
    pub fn groups(&self) -> Vec<(&'static str, &[String])> {
        [
            ("fleeing", self.fleeing.as_slice()),
            ("harmful", self.harmful.as_slice()),
            ("collectible", self.collectible.as_slice()),
        ]
        .into_iter()
        .filter(|(_, names)| !names.is_empty())
        .collect()
    }
}

/// Output of one generation: interactions, terminations and sprite groups.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    pub interactions: Vec<Interaction>,
    pub terminations: Vec<Termination>,
    pub sprite_sets: SpriteSets,
}

impl RuleSet {
    /// Render both rule lists in the engine's text syntax.
    pub fn to_lines(&self) -> (Vec<String>, Vec<String>) {
        (
            self.interactions.iter().map(ToString::to_string).collect(),
            self.terminations.iter().map(ToString::to_string).collect(),
        )
    }

    /// Does any termination end the game in a win?
    #[must_use]
    pub fn has_win(&self) -> bool {
        self.terminations.iter().any(Termination::is_win)
    }

    /// Interactions mentioning `name` on either side.
    pub fn interactions_involving<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Interaction> {
        self.interactions.iter().filter(move |rule| rule.involves(name))
    }

    /// Encode a binary snapshot.
    pub fn to_bytes(&self) -> Result<Vec<u8>, RuleSetError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a snapshot written by `to_bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, RuleSetError> {
        Ok(bincode::deserialize(bytes)?)
    }
}
