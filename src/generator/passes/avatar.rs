//! Avatar projectile pass.

use tracing::debug;

use crate::core::GenRng;
use crate::rules::{Interaction, InteractionEffect};

use super::super::context::SynthesisContext;
use super::super::critical::CriticalEntities;

/// Pick the win anchors, then let avatar projectiles fight everything harmful.
///
/// Killing the critical enemy is worth 2 points, any other harmful sprite 1.
pub(crate) fn avatar(ctx: &mut SynthesisContext<'_>) {
    *ctx.critical = CriticalEntities::select(
        ctx.classification,
        ctx.catalog,
        ctx.inventory,
        ctx.rng,
        ctx.config.max_select_attempts,
    );

    let before = ctx.interactions.len();
    let catalog = ctx.catalog;
    let classification = &*ctx.classification;
    let enemy = ctx.critical.enemy_npc.as_deref();

    for avatar in &catalog.avatars {
        for projectile in &avatar.children {
            let projectile = projectile.as_str();

            for harmful in classification.harmful_objects.iter() {
                ctx.interactions
                    .push(Interaction::new(harmful, projectile, InteractionEffect::destroy_scoring(1)));
                ctx.interactions
                    .push(Interaction::new(projectile, harmful, InteractionEffect::destroy()));
            }

            for npc in classification.harmful_npcs.iter() {
                let reward = if Some(npc) == enemy { 2 } else { 1 };
                ctx.interactions
                    .push(Interaction::new(npc, projectile, InteractionEffect::destroy_scoring(reward)));
                ctx.interactions
                    .push(Interaction::new(projectile, npc, InteractionEffect::destroy()));
            }

            if ctx.rng.gen_bool(ctx.config.kill_resource_prob) {
                for resource in &catalog.resources {
                    ctx.interactions.push(Interaction::new(
                        projectile,
                        resource.name.as_str(),
                        InteractionEffect::destroy(),
                    ));
                    let reward = shot_reward(ctx.rng, ctx.config.kill_resource_score_prob);
                    ctx.interactions.push(Interaction::new(
                        resource.name.as_str(),
                        projectile,
                        InteractionEffect::destroy_scoring(reward),
                    ));
                }
            }

            if ctx.rng.gen_bool(ctx.config.kill_collectible_prob) {
                for collectible in classification.collectibles.iter() {
                    ctx.interactions
                        .push(Interaction::new(projectile, collectible, InteractionEffect::destroy()));
                    let reward = shot_reward(ctx.rng, ctx.config.kill_resource_score_prob);
                    ctx.interactions
                        .push(Interaction::new(collectible, projectile, InteractionEffect::destroy_scoring(reward)));
                }
            }
        }
    }

    debug!(
        rules = ctx.interactions.len() - before,
        enemy_npc = ?ctx.critical.enemy_npc,
        npc_to_catch = ?ctx.critical.npc_to_catch,
        collectible = ?ctx.critical.collectible,
        "avatar pass"
    );
}

/// +1 or -1 for shooting a pickup.
fn shot_reward(rng: &mut GenRng, score_prob: f64) -> i32 {
    if rng.gen_bool(score_prob) {
        1
    } else {
        -1
    }
}
