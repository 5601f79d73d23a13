//! Structural role detection.
//!
//! Before any rule is generated, a few sprites are singled out for special
//! treatment: the wall that frames the level, a score pickup, a spike, and
//! the exits. Roles depend only on the inventory (and the RNG for the
//! score/spike picks), so they are computed once per generator.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{GenRng, GeneratorConfig};
use crate::sprites::{Presence, SpriteInventory, DOOR_SUBTYPE};

/// Sprites with a structural role in the level.
///
/// Invariant: `spike` never equals `score`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleAssignment {
    /// Sprite framing the level.
    pub wall: Option<String>,
    /// Immovable worth +1 when touched.
    pub score: Option<String>,
    /// Immovable that is either lethal or worth +2.
    pub spike: Option<String>,
    /// Live portal-category sprites that are not teleports.
    pub exits: Vec<String>,
    /// First exit with the door subtype.
    pub door: Option<String>,
    /// Live teleport sources.
    pub teleports: Vec<String>,
}

impl RoleAssignment {
    /// Derive roles from the inventory.
    pub fn classify(inventory: &dyn SpriteInventory, config: &GeneratorConfig, rng: &mut GenRng) -> Self {
        let wall = find_wall(inventory, config);

        let mut exits = Vec::new();
        let mut door = None;
        let mut teleports = Vec::new();
        for portal in inventory.portals(Presence::Live) {
            if portal.is_teleport() {
                teleports.push(portal.name);
            } else {
                if door.is_none() && portal.subtype_is(DOOR_SUBTYPE) {
                    door = Some(portal.name.clone());
                }
                exits.push(portal.name);
            }
        }

        let (score, spike) = pick_score_and_spike(inventory, config, wall.as_deref(), rng);

        let roles = Self {
            wall,
            score,
            spike,
            exits,
            door,
            teleports,
        };
        debug!(
            wall = ?roles.wall,
            score = ?roles.score,
            spike = ?roles.spike,
            door = ?roles.door,
            exits = roles.exits.len(),
            teleports = roles.teleports.len(),
            "assigned sprite roles"
        );
        roles
    }
}

/// Least populous border candidate; first seen wins ties.
fn find_wall(inventory: &dyn SpriteInventory, config: &GeneratorConfig) -> Option<String> {
    let area = inventory.area();
    if area == 0 {
        return None;
    }
    let area_share = inventory.perimeter() as f64 / area as f64;

    let mut wall: Option<(String, usize)> = None;
    for candidate in inventory.border_objects(area_share, config.wall_border_share) {
        let population = inventory.population(&candidate.name);
        if wall.as_ref().map_or(true, |(_, best)| population < *best) {
            wall = Some((candidate.name, population));
        }
    }
    wall.map(|(name, _)| name)
}

/// Score is a uniform pick; spike is a uniform pick among the rest.
fn pick_score_and_spike(
    inventory: &dyn SpriteInventory,
    config: &GeneratorConfig,
    wall: Option<&str>,
    rng: &mut GenRng,
) -> (Option<String>, Option<String>) {
    let ceiling = (config.score_spike_area_share * inventory.area() as f64) as usize;
    let mut candidates: Vec<String> = inventory
        .immovables(1, ceiling)
        .into_iter()
        .map(|d| d.name)
        .filter(|name| Some(name.as_str()) != wall)
        .collect();

    if let Some(wall) = wall {
        let mates: FxHashSet<String> = inventory
            .sprites_on_same_tile(wall)
            .into_iter()
            .map(|d| d.name)
            .collect();
        let apart: Vec<String> = candidates
            .iter()
            .filter(|name| !mates.contains(*name))
            .cloned()
            .collect();
        // Co-located sprites are allowed back when nothing else qualifies
        if !apart.is_empty() {
            candidates = apart;
        }
    }

    let Some(score) = rng.choose(&candidates).cloned() else {
        return (None, None);
    };
    let others: Vec<&String> = candidates.iter().filter(|name| **name != score).collect();
    let spike = rng.choose(&others).map(|name| (*name).clone());

    (Some(score), spike)
}
