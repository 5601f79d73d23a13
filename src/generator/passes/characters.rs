//! NPC and spawner passes.

use tracing::debug;

use crate::rules::{Interaction, InteractionEffect};
use crate::sprites::{NpcFamily, SpriteDescriptor};

use super::super::context::SynthesisContext;

/// Classify each NPC by behavior family.
///
/// NPCs without a recognized subtype get no rules here; the wall pass still
/// gives them movement rules.
pub(crate) fn npcs(ctx: &mut SynthesisContext<'_>) {
    let before = ctx.interactions.len();
    let catalog = ctx.catalog;
    for npc in &catalog.npcs {
        match npc.npc_family() {
            Some(NpcFamily::Fleeing) => fleeing(ctx, npc),
            Some(NpcFamily::Bomber) => bomber(ctx, npc),
            Some(NpcFamily::Chaser) => chaser(ctx, npc),
            Some(NpcFamily::Random) => random_npc(ctx, npc),
            None => {}
        }
    }
    debug!(
        rules = ctx.interactions.len() - before,
        harmful_npcs = ctx.classification.harmful_npcs.len(),
        fleeing_npcs = ctx.classification.fleeing_npcs.len(),
        "npc pass"
    );
}

/// Caught by whatever it flees from, for a point.
///
/// With nothing listed to flee from, the avatars are the pursuers.
fn fleeing(ctx: &mut SynthesisContext<'_>, npc: &SpriteDescriptor) {
    ctx.classification.fleeing_npcs.insert(&npc.name);
    ctx.classification.collectibles.insert(&npc.name);
    let pursuers: Vec<&str> = if npc.children.is_empty() {
        ctx.catalog.avatars.iter().map(|a| a.name.as_str()).collect()
    } else {
        npc.children.iter().map(String::as_str).collect()
    };
    for pursuer in pursuers {
        ctx.interactions
            .push(Interaction::new(npc.name.as_str(), pursuer, InteractionEffect::destroy_scoring(1)));
    }
}

/// Lethal to the avatar; its bombs are either lethal too or worth a point.
fn bomber(ctx: &mut SynthesisContext<'_>, npc: &SpriteDescriptor) {
    let avatars = &ctx.catalog.avatars;

    ctx.classification.harmful_npcs.insert(&npc.name);
    for avatar in avatars {
        ctx.interactions
            .push(Interaction::new(avatar.name.as_str(), npc.name.as_str(), InteractionEffect::destroy()));
    }

    let harmful_children = ctx.rng.gen_bool(ctx.config.bomber_child_harmful_prob);
    for child in &npc.children {
        if harmful_children {
            ctx.classification.harmful_objects.insert(child);
        } else {
            ctx.classification.collectibles.insert(child);
        }
        for avatar in avatars {
            let rule = if harmful_children {
                Interaction::new(avatar.name.as_str(), child.as_str(), InteractionEffect::destroy())
            } else {
                Interaction::new(child.as_str(), avatar.name.as_str(), InteractionEffect::destroy_scoring(1))
            };
            ctx.interactions.push(rule);
        }
    }
}

/// Lethal when it hunts an avatar; otherwise its prey dies or converts on contact.
fn chaser(ctx: &mut SynthesisContext<'_>, npc: &SpriteDescriptor) {
    let mut hunts_avatar = false;
    for child in &npc.children {
        if ctx.catalog.is_avatar(child) {
            if !hunts_avatar {
                hunts_avatar = true;
                ctx.classification.harmful_npcs.insert(&npc.name);
                for avatar in &ctx.catalog.avatars {
                    ctx.interactions.push(Interaction::new(
                        avatar.name.as_str(),
                        npc.name.as_str(),
                        InteractionEffect::destroy(),
                    ));
                }
            }
        } else if ctx.rng.gen_bool(ctx.config.double_npc_prob) {
            ctx.interactions
                .push(Interaction::new(child.as_str(), npc.name.as_str(), InteractionEffect::destroy()));
        } else {
            ctx.interactions.push(Interaction::new(
                child.as_str(),
                npc.name.as_str(),
                InteractionEffect::TransformTo {
                    stype: npc.name.clone(),
                },
            ));
        }
    }
}

fn random_npc(ctx: &mut SynthesisContext<'_>, npc: &SpriteDescriptor) {
    let avatars = &ctx.catalog.avatars;
    if ctx.rng.gen_bool(ctx.config.random_npc_prob) {
        ctx.classification.harmful_npcs.insert(&npc.name);
        for avatar in avatars {
            ctx.interactions
                .push(Interaction::new(avatar.name.as_str(), npc.name.as_str(), InteractionEffect::destroy()));
        }
    } else {
        ctx.classification.collectibles.insert(&npc.name);
        for avatar in avatars {
            ctx.interactions.push(Interaction::new(
                npc.name.as_str(),
                avatar.name.as_str(),
                InteractionEffect::destroy_scoring(1),
            ));
        }
    }
}

/// Spawned sprites are all lethal or all worth a point; spawners inherit the label.
pub(crate) fn spawners(ctx: &mut SynthesisContext<'_>) {
    let before = ctx.interactions.len();
    let catalog = ctx.catalog;

    if ctx.rng.gen_bool(ctx.config.spawned_harmful_prob) {
        for avatar in &catalog.avatars {
            for spawner in &catalog.spawners {
                for child in &spawner.children {
                    ctx.classification.harmful_objects.insert(child);
                    ctx.interactions
                        .push(Interaction::new(avatar.name.as_str(), child.as_str(), InteractionEffect::destroy()));
                }
            }
        }
    } else {
        for avatar in &catalog.avatars {
            for spawner in &catalog.spawners {
                for child in &spawner.children {
                    if ctx.classification.harmful_objects.contains(child) {
                        continue;
                    }
                    ctx.classification.collectibles.insert(child);
                    ctx.interactions.push(Interaction::new(
                        child.as_str(),
                        avatar.name.as_str(),
                        InteractionEffect::destroy_scoring(1),
                    ));
                }
            }
        }
    }

    if ctx.rng.gen_bool(ctx.config.kill_resource_prob) {
        for resource in &catalog.resources {
            for spawner in &catalog.spawners {
                for child in &spawner.children {
                    ctx.interactions
                        .push(Interaction::new(resource.name.as_str(), child.as_str(), InteractionEffect::destroy()));
                }
            }
        }
    }

    let classification = &mut *ctx.classification;
    for spawner in &catalog.spawners {
        if spawner.children.iter().any(|c| classification.harmful_objects.contains(c)) {
            classification.harmful_objects.insert(&spawner.name);
        }
    }
    for spawner in &catalog.spawners {
        if spawner.children.iter().any(|c| classification.collectibles.contains(c)) {
            classification.collectibles.insert(&spawner.name);
        }
    }

    debug!(rules = ctx.interactions.len() - before, spawners = catalog.spawners.len(), "spawner pass");
}
