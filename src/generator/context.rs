//! State threaded through the interaction passes.

use crate::core::{GenRng, GeneratorConfig};
use crate::rules::Interaction;
use crate::sprites::SpriteInventory;

use super::catalog::SpriteCatalog;
use super::classification::Classification;
use super::critical::CriticalEntities;
use super::roles::RoleAssignment;

/// Everything a pass reads or writes during one run.
///
/// Immutable inputs are shared borrows; the RNG and the accumulators are
/// exclusive borrows owned by the generator for the duration of the call.
pub(crate) struct SynthesisContext<'a> {
    pub inventory: &'a dyn SpriteInventory,
    pub catalog: &'a SpriteCatalog,
    pub roles: &'a RoleAssignment,
    pub config: &'a GeneratorConfig,
    pub rng: &'a mut GenRng,
    pub classification: &'a mut Classification,
    pub critical: &'a mut CriticalEntities,
    pub interactions: &'a mut Vec<Interaction>,
}
