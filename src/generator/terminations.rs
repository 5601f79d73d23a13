//! Termination synthesis.
//!
//! Exactly one win condition is chosen by walking a fixed priority list
//! (door, collectible, fleeing NPC, enemy, survival). Survival always
//! applies, so every generated game can be won. Goal-based wins carry a
//! timeout loss so a game cannot run forever.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{GenRng, GeneratorConfig};
use crate::rules::Termination;

use super::catalog::SpriteCatalog;
use super::classification::Classification;
use super::critical::CriticalEntities;
use super::roles::RoleAssignment;

/// A timeout limit drawn as `base + step * k` for `k` in `0..choices`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeoutWindow {
    pub base: u32,
    pub step: u32,
    pub choices: usize,
}

impl TimeoutWindow {
    /// Loss fallback for collection goals: 2000..=2500.
    pub const LONG: Self = Self::new(2000, 100, 6);
    /// Loss fallback for hunting goals: 1000..=1500.
    pub const MEDIUM: Self = Self::new(1000, 100, 6);
    /// Survival win: 500..=1100.
    pub const SURVIVAL: Self = Self::new(500, 100, 7);

    pub const fn new(base: u32, step: u32, choices: usize) -> Self {
        Self { base, step, choices }
    }

    /// Smallest limit the window can produce.
    #[must_use]
    pub fn min(&self) -> u32 {
        self.base
    }

    /// Largest limit the window can produce.
    #[must_use]
    pub fn max(&self) -> u32 {
        self.base + self.step * self.choices.saturating_sub(1) as u32
    }

    /// Draw one limit.
    pub fn draw(&self, rng: &mut GenRng) -> u32 {
        let k = rng.gen_range_usize(0..self.choices.max(1));
        self.base + self.step * k as u32
    }
}

/// Build the termination list for one run.
///
/// The win condition comes first, then its timeout fallback if any, then
/// one avatar-death loss per live avatar when anything harmful exists.
pub fn synthesize(
    roles: &RoleAssignment,
    classification: &Classification,
    critical: &CriticalEntities,
    catalog: &SpriteCatalog,
    config: &GeneratorConfig,
    rng: &mut GenRng,
) -> Vec<Termination> {
    let mut terminations = Vec::new();

    if let Some(door) = roles.door.as_deref() {
        match critical.collectible.as_deref() {
            Some(collectible) if rng.gen_bool(config.door_collectible_prob) => {
                terminations.push(Termination::multi_sprite_counter(collectible, door, true));
                terminations.push(Termination::timeout(TimeoutWindow::LONG.draw(rng), false));
            }
            _ => terminations.push(Termination::sprite_counter(door, true)),
        }
    } else if let Some(collectible) = critical.collectible.as_deref() {
        terminations.push(Termination::sprite_counter(collectible, true));
        terminations.push(Termination::timeout(TimeoutWindow::LONG.draw(rng), false));
    } else if let Some(prey) = critical.npc_to_catch.as_deref() {
        terminations.push(Termination::sprite_counter(prey, true));
        terminations.push(Termination::timeout(TimeoutWindow::MEDIUM.draw(rng), false));
    } else if let Some(enemy) = critical
        .enemy_npc
        .as_deref()
        .filter(|_| catalog.live_avatar_can_shoot())
    {
        terminations.push(Termination::sprite_counter(enemy, true));
        terminations.push(Termination::timeout(TimeoutWindow::MEDIUM.draw(rng), false));
    } else {
        terminations.push(Termination::timeout(TimeoutWindow::SURVIVAL.draw(rng), true));
    }

    if classification.any_harmful() {
        for avatar in &catalog.live_avatars {
            terminations.push(Termination::sprite_counter(avatar.name.as_str(), false));
        }
    }

    debug!(terminations = terminations.len(), "termination pass");
    terminations
}
