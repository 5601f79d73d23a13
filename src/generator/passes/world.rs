//! Portal, movable and wall passes.

use tracing::debug;

use crate::rules::{Interaction, InteractionEffect};

use super::super::context::SynthesisContext;

/// Movement responses shared by movables and NPCs hitting a wall or the edge.
const WALL_PALETTE: [InteractionEffect; 5] = [
    InteractionEffect::StepBack,
    InteractionEffect::FlipDirection,
    InteractionEffect::ReverseDirection,
    InteractionEffect::TurnAround,
    InteractionEffect::WrapAround,
];

/// Exits vanish when the avatar walks into them; teleports move the avatar.
pub(crate) fn portals(ctx: &mut SynthesisContext<'_>) {
    let before = ctx.interactions.len();
    let avatars = &ctx.catalog.avatars;

    for avatar in avatars {
        for exit in &ctx.roles.exits {
            // Leaving through an exit consumes it
            ctx.interactions
                .push(Interaction::new(exit.as_str(), avatar.name.as_str(), InteractionEffect::destroy()));
        }
    }
    for teleport in &ctx.roles.teleports {
        for avatar in avatars {
            ctx.interactions.push(Interaction::new(
                avatar.name.as_str(),
                teleport.as_str(),
                InteractionEffect::TeleportToExit,
            ));
        }
    }

    debug!(rules = ctx.interactions.len() - before, "portal pass");
}

/// Free movables are lethal, collectible or pushable, from one draw each.
pub(crate) fn movables(ctx: &mut SynthesisContext<'_>) {
    let before = ctx.interactions.len();
    let catalog = ctx.catalog;

    for movable in &catalog.movables {
        if catalog.owned_by_avatar(&movable.name) || catalog.owned_by_spawner(&movable.name) {
            continue;
        }

        let roll = ctx.rng.gen_unit();
        if roll < ctx.config.harmful_movable_prob {
            ctx.classification.harmful_objects.insert(&movable.name);
            for avatar in &catalog.avatars {
                ctx.interactions
                    .push(Interaction::new(avatar.name.as_str(), movable.name.as_str(), InteractionEffect::destroy()));
            }
        } else if roll > ctx.config.useful_movable_prob {
            ctx.classification.collectibles.insert(&movable.name);
            for avatar in &catalog.avatars {
                ctx.interactions.push(Interaction::new(
                    movable.name.as_str(),
                    avatar.name.as_str(),
                    InteractionEffect::destroy_scoring(1),
                ));
            }
        } else {
            for avatar in &catalog.avatars {
                ctx.interactions
                    .push(Interaction::new(avatar.name.as_str(), movable.name.as_str(), InteractionEffect::PullAlong));
            }
        }
    }

    debug!(rules = ctx.interactions.len() - before, "movable pass");
}

/// Boundary behavior for avatars, movables and NPCs.
pub(crate) fn walls(ctx: &mut SynthesisContext<'_>) {
    let before = ctx.interactions.len();
    let catalog = ctx.catalog;
    let roles = ctx.roles;
    let wall = roles.wall.as_deref();

    // The draw happens even without a wall so the stream stays aligned
    let avatar_fire_wall = ctx.rng.gen_bool(ctx.config.fire_wall_prob) && wall.is_some();
    let avatar_action = if avatar_fire_wall {
        fire_wall_effect(ctx)
    } else {
        InteractionEffect::StepBack
    };

    for avatar in &catalog.avatars {
        ctx.interactions
            .push(Interaction::edge(avatar.name.as_str(), InteractionEffect::StepBack));

        let Some(wall) = wall else { continue };
        ctx.interactions
            .push(Interaction::new(avatar.name.as_str(), wall, avatar_action.clone()));

        if !avatar_fire_wall && ctx.rng.gen_bool(ctx.config.destroy_wall_prob) {
            for projectile in &avatar.children {
                ctx.interactions
                    .push(Interaction::new(projectile.as_str(), wall, InteractionEffect::destroy()));
                ctx.interactions
                    .push(Interaction::new(wall, projectile.as_str(), InteractionEffect::destroy()));
            }
        }
    }

    let npc_fire_wall = ctx.rng.gen_bool(ctx.config.fire_wall_prob)
        && wall.is_some()
        && ctx.classification.fleeing_npcs.is_empty();

    let movable_action = palette_pick(ctx, npc_fire_wall);
    for movable in &catalog.movables {
        ctx.interactions
            .push(Interaction::edge(movable.name.as_str(), movable_action.clone()));

        let Some(wall) = wall else { continue };
        if ctx.rng.gen_bool(ctx.config.destroy_wall_prob) {
            ctx.interactions
                .push(Interaction::new(wall, movable.name.as_str(), InteractionEffect::destroy()));
            ctx.interactions
                .push(Interaction::new(movable.name.as_str(), wall, InteractionEffect::destroy()));
        } else {
            ctx.interactions
                .push(Interaction::new(movable.name.as_str(), wall, movable_action.clone()));
        }
    }

    let npc_action = palette_pick(ctx, npc_fire_wall);
    for npc in &catalog.npcs {
        ctx.interactions
            .push(Interaction::edge(npc.name.as_str(), npc_action.clone()));
        if let Some(wall) = wall {
            ctx.interactions
                .push(Interaction::new(npc.name.as_str(), wall, npc_action.clone()));
        }
    }

    debug!(
        rules = ctx.interactions.len() - before,
        wall = ?wall,
        avatar_fire_wall,
        npc_fire_wall,
        "wall pass"
    );
}

/// Lethal wall, optionally gated on holding enough of one resource.
///
/// The gate needs at least one live resource; without one the wall kills
/// outright.
fn fire_wall_effect(ctx: &mut SynthesisContext<'_>) -> InteractionEffect {
    let gated = ctx.rng.gen_bool(ctx.config.kill_if_has_less_prob);
    if !gated {
        return InteractionEffect::destroy();
    }
    match ctx.rng.choose(&ctx.catalog.resources) {
        Some(resource) => InteractionEffect::DestroyIfHasLess {
            resource: resource.name.clone(),
            limit: ctx.inventory.population(&resource.name) / 2 + 1,
        },
        None => InteractionEffect::destroy(),
    }
}

/// One palette entry, drawn even when fire overrides it.
fn palette_pick(ctx: &mut SynthesisContext<'_>, fire: bool) -> InteractionEffect {
    let index = ctx.rng.gen_range_usize(0..WALL_PALETTE.len());
    if fire {
        InteractionEffect::destroy()
    } else {
        WALL_PALETTE[index].clone()
    }
}
