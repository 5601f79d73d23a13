//! Interaction passes.
//!
//! Each pass handles one sprite category and appends its rules to the
//! context. Later passes read labels earlier ones wrote (the spawner pass
//! skips children the NPC pass made harmful, the wall pass checks for
//! fleeing NPCs, the avatar pass targets everything harmful), so the order
//! below is part of the output contract: it also fixes the RNG draw order.

mod avatar;
mod characters;
mod items;
mod world;

use super::context::SynthesisContext;

/// Run every pass in order.
pub(crate) fn run_all(ctx: &mut SynthesisContext<'_>) {
    items::resources(ctx);
    items::immovables(ctx);
    characters::npcs(ctx);
    characters::spawners(ctx);
    world::portals(ctx);
    world::movables(ctx);
    world::walls(ctx);
    avatar::avatar(ctx);
}
