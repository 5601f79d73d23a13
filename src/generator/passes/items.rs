//! Resource and immovable passes.

use tracing::debug;

use crate::rules::{Interaction, InteractionEffect};

use super::super::context::SynthesisContext;

/// Every avatar collects every live resource.
pub(crate) fn resources(ctx: &mut SynthesisContext<'_>) {
    let before = ctx.interactions.len();
    for avatar in &ctx.catalog.avatars {
        for resource in &ctx.catalog.resources {
            ctx.interactions.push(Interaction::new(
                resource.name.as_str(),
                avatar.name.as_str(),
                InteractionEffect::CollectResource,
            ));
        }
    }
    debug!(rules = ctx.interactions.len() - before, "resource pass");
}

/// Score pickups are collectible; the spike is either lethal or a bigger prize.
pub(crate) fn immovables(ctx: &mut SynthesisContext<'_>) {
    let before = ctx.interactions.len();
    let avatars = &ctx.catalog.avatars;

    if let Some(score) = ctx.roles.score.as_deref() {
        ctx.classification.collectibles.insert(score);
        for avatar in avatars {
            ctx.interactions
                .push(Interaction::new(score, avatar.name.as_str(), InteractionEffect::destroy_scoring(1)));
        }
    }

    let spike = ctx
        .roles
        .spike
        .as_deref()
        .filter(|spike| ctx.roles.score.as_deref() != Some(*spike));
    if let Some(spike) = spike {
        if ctx.rng.gen_bool(ctx.config.spike_prob) {
            ctx.classification.harmful_objects.insert(spike);
            for avatar in avatars {
                ctx.interactions
                    .push(Interaction::new(avatar.name.as_str(), spike, InteractionEffect::destroy()));
            }
        } else {
            ctx.classification.collectibles.insert(spike);
            for avatar in avatars {
                ctx.interactions
                    .push(Interaction::new(spike, avatar.name.as_str(), InteractionEffect::destroy_scoring(2)));
            }
        }
    }

    debug!(rules = ctx.interactions.len() - before, "immovable pass");
}
